use std::sync::{Arc, Mutex};

use griddom::{Axis, ScrollMode, ScrollerVisibility, Scene, SignalKind, Vec2};

fn value_log(scene: &mut Scene, scroller: griddom::NodeId) -> Arc<Mutex<Vec<f32>>> {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = log.clone();
    scene
        .on(scroller, SignalKind::ValueChanged, move |_, event| {
            if let griddom::Signal::ValueChanged { value } = event.signal() {
                sink.lock().unwrap().push(value);
            }
        })
        .unwrap();
    log
}

#[test]
fn test_scroll_view_structure() {
    let mut scene = Scene::new();
    let view = scene.scroll_view(ScrollMode::Both);

    let content = scene.content_container(view).unwrap();
    let horizontal = scene.horizontal_scroller(view).unwrap();
    let vertical = scene.vertical_scroller(view).unwrap();

    assert_eq!(scene.children(view), &[content, horizontal, vertical]);
    assert_eq!(scene.scroller_of(horizontal).unwrap().axis, Axis::Horizontal);
    assert_eq!(scene.scroller_of(vertical).unwrap().axis, Axis::Vertical);
    assert_eq!(
        scene.scroller_visibility(view, Axis::Vertical).unwrap(),
        ScrollerVisibility::Auto
    );
}

#[test]
fn test_set_offset_fires_only_changed_axes() {
    let mut scene = Scene::new();
    let view = scene.scroll_view(ScrollMode::Both);
    let horizontal = scene.horizontal_scroller(view).unwrap();
    let vertical = scene.vertical_scroller(view).unwrap();
    let h_log = value_log(&mut scene, horizontal);
    let v_log = value_log(&mut scene, vertical);

    scene.set_scroll_offset(view, Vec2::new(15.0, 0.0)).unwrap();
    scene.set_scroll_offset(view, Vec2::new(15.0, 7.0)).unwrap();

    assert_eq!(*h_log.lock().unwrap(), vec![15.0]);
    assert_eq!(*v_log.lock().unwrap(), vec![7.0]);
    assert_eq!(scene.scroll_offset(view).unwrap(), Vec2::new(15.0, 7.0));
}

#[test]
fn test_scroller_value_moves_view() {
    let mut scene = Scene::new();
    let view = scene.scroll_view(ScrollMode::Vertical);
    let vertical = scene.vertical_scroller(view).unwrap();

    scene.set_scroller_value(vertical, 40.0).unwrap();

    assert_eq!(scene.scroll_offset(view).unwrap(), Vec2::new(0.0, 40.0));
    assert_eq!(scene.scroller_value(vertical).unwrap(), 40.0);
}

#[test]
fn test_negative_offsets_clamp_to_zero() {
    let mut scene = Scene::new();
    let view = scene.scroll_view(ScrollMode::Both);

    scene.set_scroll_offset(view, Vec2::new(-5.0, -1.0)).unwrap();

    assert_eq!(scene.scroll_offset(view).unwrap(), Vec2::ZERO);
}

#[test]
fn test_drag_rejected_when_disabled() {
    let mut scene = Scene::new();
    let view = scene.scroll_view(ScrollMode::Horizontal);
    let horizontal = scene.horizontal_scroller(view).unwrap();

    scene.set_enabled(horizontal, false).unwrap();
    assert!(!scene.drag_scroller(horizontal, 30.0).unwrap());
    assert_eq!(scene.scroll_offset(view).unwrap(), Vec2::ZERO);

    scene.set_enabled(horizontal, true).unwrap();
    assert!(scene.drag_scroller(horizontal, 30.0).unwrap());
    assert_eq!(scene.scroll_offset(view).unwrap(), Vec2::new(30.0, 0.0));
}

#[test]
fn test_wheel_scrolls_allowed_axes() {
    let mut scene = Scene::new();
    let view = scene.scroll_view(ScrollMode::Vertical);
    let content = scene.content_container(view).unwrap();
    let item = scene.element();
    scene.add_child(content, item).unwrap();

    scene.wheel(item, 10.0, 25.0).unwrap();

    assert_eq!(scene.scroll_offset(view).unwrap(), Vec2::new(0.0, 25.0));
}

#[test]
fn test_inner_view_consumes_wheel() {
    let mut scene = Scene::new();
    let outer = scene.scroll_view(ScrollMode::Vertical);
    let inner = scene.scroll_view(ScrollMode::Vertical);
    let outer_content = scene.content_container(outer).unwrap();
    scene.add_child(outer_content, inner).unwrap();
    let inner_content = scene.content_container(inner).unwrap();

    scene.wheel(inner_content, 0.0, 5.0).unwrap();

    assert_eq!(scene.scroll_offset(inner).unwrap().y, 5.0);
    assert_eq!(scene.scroll_offset(outer).unwrap().y, 0.0);
}

#[test]
fn test_scroll_view_accessors_reject_other_nodes() {
    let mut scene = Scene::new();
    let plain = scene.element();

    assert_eq!(
        scene.scroll_offset(plain).unwrap_err(),
        griddom::SceneError::NotAScrollView(plain)
    );
    assert_eq!(
        scene.scroller_value(plain).unwrap_err(),
        griddom::SceneError::NotAScroller(plain)
    );
}
