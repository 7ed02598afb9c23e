use std::sync::{Arc, Mutex};

use griddom::{MouseButton, NodeId, PickingMode, Phase, Scene, Signal, SignalKind, Size};

type Log = Arc<Mutex<Vec<String>>>;

fn recorder(scene: &mut Scene, node: NodeId, kind: SignalKind, name: &str, log: &Log) {
    let (bubble_log, trickle_log) = (log.clone(), log.clone());
    let (bubble_name, trickle_name) = (name.to_string(), name.to_string());
    scene
        .on(node, kind, move |_, event| {
            bubble_log
                .lock()
                .unwrap()
                .push(format!("{bubble_name}:{:?}", event.phase()));
        })
        .unwrap();
    scene
        .on_trickle_down(node, kind, move |_, _| {
            trickle_log
                .lock()
                .unwrap()
                .push(format!("{trickle_name}:trickle"));
        })
        .unwrap();
}

fn tree(scene: &mut Scene) -> (NodeId, NodeId, NodeId) {
    let root = scene.element();
    let middle = scene.element();
    let leaf = scene.element();
    scene.add_child(root, middle).unwrap();
    scene.add_child(middle, leaf).unwrap();
    (root, middle, leaf)
}

// ============================================================================
// Dispatch phases
// ============================================================================

#[test]
fn test_bubbling_signal_order() {
    let mut scene = Scene::new();
    let (root, middle, leaf) = tree(&mut scene);
    let log = Log::default();
    recorder(&mut scene, root, SignalKind::PointerDown, "root", &log);
    recorder(&mut scene, middle, SignalKind::PointerDown, "middle", &log);
    recorder(&mut scene, leaf, SignalKind::PointerDown, "leaf", &log);

    scene.pointer_down(leaf, MouseButton::Left).unwrap();

    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "root:trickle",
            "middle:trickle",
            "leaf:trickle",
            "leaf:AtTarget",
            "middle:BubbleUp",
            "root:BubbleUp",
        ]
    );
}

#[test]
fn test_trickle_down_stop_prevents_target() {
    let mut scene = Scene::new();
    let (_root, middle, leaf) = tree(&mut scene);
    let log = Log::default();
    recorder(&mut scene, leaf, SignalKind::Wheel, "leaf", &log);
    scene
        .on_trickle_down(middle, SignalKind::Wheel, |_, event| {
            event.stop_immediate_propagation()
        })
        .unwrap();

    scene.wheel(leaf, 0.0, 10.0).unwrap();

    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn test_stop_immediate_skips_sibling_handlers() {
    let mut scene = Scene::new();
    let node = scene.element();
    let log = Log::default();
    scene
        .on(node, SignalKind::Click, |_, event| event.stop_immediate_propagation())
        .unwrap();
    recorder(&mut scene, node, SignalKind::Click, "second", &log);

    scene.dispatch(node, Signal::Click { button: MouseButton::Left }).unwrap();

    // The trickle handler runs before the target phase; the second bubble
    // handler is skipped.
    assert_eq!(*log.lock().unwrap(), vec!["second:trickle"]);
}

#[test]
fn test_non_bubbling_signal_reaches_only_target() {
    let mut scene = Scene::new();
    let (root, _middle, leaf) = tree(&mut scene);
    let log = Log::default();
    recorder(&mut scene, root, SignalKind::ValueChanged, "root", &log);
    recorder(&mut scene, leaf, SignalKind::ValueChanged, "leaf", &log);

    let event = scene.dispatch(leaf, Signal::ValueChanged { value: 1.0 }).unwrap();

    assert_eq!(event.phase(), Phase::AtTarget);
    assert_eq!(*log.lock().unwrap(), vec!["leaf:trickle", "leaf:AtTarget"]);
}

#[test]
fn test_handler_removal() {
    let mut scene = Scene::new();
    let node = scene.element();
    let count = Arc::new(Mutex::new(0));
    let counter = count.clone();
    let id = scene
        .on(node, SignalKind::PointerMove, move |_, _| *counter.lock().unwrap() += 1)
        .unwrap();

    scene.dispatch(node, Signal::PointerMove).unwrap();
    assert!(scene.off(node, id));
    scene.dispatch(node, Signal::PointerMove).unwrap();

    assert_eq!(*count.lock().unwrap(), 1);
}

// ============================================================================
// Pointer routing
// ============================================================================

#[test]
fn test_enter_leave_along_chains() {
    let mut scene = Scene::new();
    let root = scene.element();
    let a = scene.element();
    let b = scene.element();
    scene.add_child(root, a).unwrap();
    scene.add_child(root, b).unwrap();
    let log = Log::default();
    for (node, name) in [(root, "root"), (a, "a"), (b, "b")] {
        let enter_log = log.clone();
        let leave_log = log.clone();
        scene
            .on(node, SignalKind::PointerEnter, move |_, _| {
                enter_log.lock().unwrap().push(format!("enter {name}"))
            })
            .unwrap();
        scene
            .on(node, SignalKind::PointerLeave, move |_, _| {
                leave_log.lock().unwrap().push(format!("leave {name}"))
            })
            .unwrap();
    }

    scene.pointer_move(Some(a)).unwrap();
    scene.pointer_move(Some(b)).unwrap();
    scene.pointer_move(None).unwrap();

    assert_eq!(
        *log.lock().unwrap(),
        vec!["enter root", "enter a", "leave a", "enter b", "leave b", "leave root"]
    );
    assert_eq!(scene.hovered(), None);
}

#[test]
fn test_click_requires_same_target() {
    let mut scene = Scene::new();
    let root = scene.element();
    let a = scene.element();
    let b = scene.element();
    scene.add_child(root, a).unwrap();
    scene.add_child(root, b).unwrap();
    let clicks = Log::default();
    let sink = clicks.clone();
    scene
        .on(root, SignalKind::Click, move |_, event| {
            sink.lock().unwrap().push(event.target().to_string())
        })
        .unwrap();

    scene.pointer_down(a, MouseButton::Left).unwrap();
    scene.pointer_up(b, MouseButton::Left).unwrap();
    assert!(clicks.lock().unwrap().is_empty());

    scene.click(b, MouseButton::Left).unwrap();
    assert_eq!(*clicks.lock().unwrap(), vec![b.to_string()]);
}

#[test]
fn test_ignored_picking_forwards_to_ancestor() {
    let mut scene = Scene::new();
    let (root, middle, leaf) = tree(&mut scene);
    scene.set_picking(leaf, PickingMode::Ignore).unwrap();

    assert_eq!(scene.pick(leaf), Some(middle));

    scene.set_enabled(root, false).unwrap();
    assert_eq!(scene.pick(leaf), None);
}

// ============================================================================
// Layout flush
// ============================================================================

#[test]
fn test_flush_layout_reports_changed_nodes_once() {
    let mut scene = Scene::new();
    let node = scene.element();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    scene
        .on(node, SignalKind::GeometryChanged, move |_, event| {
            if let Signal::GeometryChanged { old, new } = event.signal() {
                sink.lock().unwrap().push((old, new));
            }
        })
        .unwrap();

    scene.set_resolved_size(node, Size::new(10.0, 5.0)).unwrap();
    scene.set_resolved_size(node, Size::new(20.0, 5.0)).unwrap();
    assert_eq!(scene.flush_layout().unwrap(), 1);
    assert_eq!(scene.flush_layout().unwrap(), 0);

    assert_eq!(
        *seen.lock().unwrap(),
        vec![(Size::ZERO, Size::new(20.0, 5.0))]
    );
}

#[test]
fn test_flush_layout_runs_follow_up_rounds() {
    let mut scene = Scene::new();
    let first = scene.element();
    let second = scene.element();
    scene
        .on(first, SignalKind::GeometryChanged, move |scene, _| {
            scene.set_resolved_size(second, Size::new(1.0, 1.0)).unwrap();
        })
        .unwrap();

    scene.set_resolved_size(first, Size::new(3.0, 3.0)).unwrap();

    assert_eq!(scene.flush_layout().unwrap(), 2);
    assert_eq!(scene.resolved_size(second), Size::new(1.0, 1.0));
}
