use griddom::{NodeKind, Scene, SceneError};

// ============================================================================
// Hierarchy
// ============================================================================

#[test]
fn test_add_and_index_children() {
    let mut scene = Scene::new();
    let root = scene.element();
    let a = scene.element();
    let b = scene.label("b");

    scene.add_child(root, a).unwrap();
    scene.add_child(root, b).unwrap();

    assert_eq!(scene.children(root), &[a, b]);
    assert_eq!(scene.index_of(root, b), Some(1));
    assert_eq!(scene.parent(a), Some(root));
    assert_eq!(scene.text(b), Some("b"));
}

#[test]
fn test_insert_child_moves_between_parents() {
    let mut scene = Scene::new();
    let first = scene.element();
    let second = scene.element();
    let child = scene.element();
    let other = scene.element();

    scene.add_child(first, child).unwrap();
    scene.add_child(second, other).unwrap();
    scene.insert_child(second, 0, child).unwrap();

    assert!(scene.children(first).is_empty());
    assert_eq!(scene.children(second), &[child, other]);
    assert_eq!(scene.parent(child), Some(second));
}

#[test]
fn test_insert_into_own_subtree_fails() {
    let mut scene = Scene::new();
    let root = scene.element();
    let child = scene.element();
    scene.add_child(root, child).unwrap();

    let err = scene.add_child(child, root).unwrap_err();
    assert_eq!(err, SceneError::CyclicInsert { parent: child, child: root });
}

#[test]
fn test_remove_child_detaches_without_destroying() {
    let mut scene = Scene::new();
    let root = scene.element();
    let child = scene.element();
    scene.add_child(root, child).unwrap();

    assert!(scene.remove_child(root, child).unwrap());
    assert!(!scene.remove_child(root, child).unwrap());
    assert!(scene.contains(child));
    assert_eq!(scene.parent(child), None);
}

#[test]
fn test_clear_despawns_subtree() {
    let mut scene = Scene::new();
    let root = scene.element();
    let child = scene.element();
    let grandchild = scene.element();
    scene.add_child(root, child).unwrap();
    scene.add_child(child, grandchild).unwrap();

    scene.clear(root).unwrap();

    assert!(scene.children(root).is_empty());
    assert!(!scene.contains(child));
    assert!(!scene.contains(grandchild));
    assert_eq!(scene.len(), 1);
}

#[test]
fn test_stale_handle_does_not_resolve_after_reuse() {
    let mut scene = Scene::new();
    let old = scene.element();
    scene.despawn(old).unwrap();
    let new = scene.label("reused");

    assert!(!scene.contains(old));
    assert!(scene.contains(new));
    assert_eq!(scene.node(old).unwrap_err(), SceneError::NodeNotFound(old));
}

// ============================================================================
// Classes and style
// ============================================================================

#[test]
fn test_class_list_is_duplicate_free() {
    let mut scene = Scene::new();
    let node = scene.element();

    scene.add_class(node, "a");
    scene.add_class(node, "a");
    scene.add_class(node, "b");
    assert_eq!(scene.classes(node), &["a".to_string(), "b".to_string()]);

    scene.toggle_class(node, "a", false);
    assert!(!scene.has_class(node, "a"));
    scene.toggle_class(node, "c", true);
    assert!(scene.has_class(node, "c"));
}

#[test]
fn test_inline_style_and_labels() {
    let mut scene = Scene::new();
    let node = scene.label("old");

    scene.style_mut(node).unwrap().width = Some(42.0);
    scene.set_text(node, "new").unwrap();
    scene.add_style_sheet(node, "sheet").unwrap();
    scene.add_style_sheet(node, "sheet").unwrap();

    assert_eq!(scene.style(node).unwrap().width, Some(42.0));
    assert_eq!(scene.text(node), Some("new"));
    assert_eq!(scene.node(node).unwrap().style_sheets(), &["sheet".to_string()]);
    assert!(matches!(scene.node(node).unwrap().kind, NodeKind::Label(_)));
}
