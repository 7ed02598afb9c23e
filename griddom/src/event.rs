use std::fmt;
use std::sync::Arc;

use crate::node::NodeId;
use crate::scene::Scene;
use crate::types::{MouseButton, Size};

/// A signal handler. Receives the scene so it can mutate other nodes in
/// response, and the event so it can stop propagation.
pub type Handler = Arc<dyn Fn(&mut Scene, &mut SignalEvent) + Send + Sync>;

/// Identifies a registered handler so it can be removed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(pub(crate) u64);

/// Signals delivered to nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signal {
    /// Pointer entered the node or one of its descendants.
    PointerEnter,
    /// Pointer left the node and all of its descendants.
    PointerLeave,
    PointerMove,
    PointerDown { button: MouseButton },
    PointerUp { button: MouseButton },
    /// Pointer was pressed and released on the same node.
    Click { button: MouseButton },
    Wheel { delta_x: f32, delta_y: f32 },
    /// Resolved size changed during the last layout pass.
    GeometryChanged { old: Size, new: Size },
    /// A scroller's value changed.
    ValueChanged { value: f32 },
}

/// Signal discriminant, used as the registration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    PointerEnter,
    PointerLeave,
    PointerMove,
    PointerDown,
    PointerUp,
    Click,
    Wheel,
    GeometryChanged,
    ValueChanged,
}

impl SignalKind {
    /// Whether signals of this kind travel up through ancestors after the
    /// target has handled them.
    pub fn bubbles(self) -> bool {
        matches!(
            self,
            SignalKind::PointerMove
                | SignalKind::PointerDown
                | SignalKind::PointerUp
                | SignalKind::Click
                | SignalKind::Wheel
        )
    }
}

impl Signal {
    pub fn kind(&self) -> SignalKind {
        match self {
            Signal::PointerEnter => SignalKind::PointerEnter,
            Signal::PointerLeave => SignalKind::PointerLeave,
            Signal::PointerMove => SignalKind::PointerMove,
            Signal::PointerDown { .. } => SignalKind::PointerDown,
            Signal::PointerUp { .. } => SignalKind::PointerUp,
            Signal::Click { .. } => SignalKind::Click,
            Signal::Wheel { .. } => SignalKind::Wheel,
            Signal::GeometryChanged { .. } => SignalKind::GeometryChanged,
            Signal::ValueChanged { .. } => SignalKind::ValueChanged,
        }
    }
}

/// The phase a handler was registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Root to target, before the target sees the signal.
    TrickleDown,
    AtTarget,
    /// Target's parent back up to the root.
    BubbleUp,
}

/// A signal in flight.
#[derive(Debug, Clone)]
pub struct SignalEvent {
    signal: Signal,
    target: NodeId,
    current_target: NodeId,
    phase: Phase,
    propagation_stopped: bool,
    immediate_propagation_stopped: bool,
}

impl SignalEvent {
    pub(crate) fn new(target: NodeId, signal: Signal) -> Self {
        Self {
            signal,
            target,
            current_target: target,
            phase: Phase::AtTarget,
            propagation_stopped: false,
            immediate_propagation_stopped: false,
        }
    }

    pub fn signal(&self) -> Signal {
        self.signal
    }

    pub fn kind(&self) -> SignalKind {
        self.signal.kind()
    }

    /// The node the signal was dispatched to.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// The node whose handler is currently running.
    pub fn current_target(&self) -> NodeId {
        self.current_target
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Stop after the handlers of the current node have run.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Stop immediately, skipping the remaining handlers of the current node.
    pub fn stop_immediate_propagation(&mut self) {
        self.propagation_stopped = true;
        self.immediate_propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    pub fn is_immediate_propagation_stopped(&self) -> bool {
        self.immediate_propagation_stopped
    }

    pub(crate) fn enter(&mut self, node: NodeId, phase: Phase) {
        self.current_target = node;
        self.phase = phase;
    }
}

/// A handler attached to a node.
#[derive(Clone)]
pub(crate) struct Registration {
    pub id: HandlerId,
    pub kind: SignalKind,
    pub trickle_down: bool,
    pub handler: Handler,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("trickle_down", &self.trickle_down)
            .finish_non_exhaustive()
    }
}
