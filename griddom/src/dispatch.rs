//! Signal dispatch and pointer routing.

use log::trace;

use crate::error::SceneError;
use crate::event::{Phase, Signal, SignalEvent};
use crate::node::{NodeId, NodeKind};
use crate::scene::Scene;
use crate::types::{MouseButton, PickingMode};

impl Scene {
    /// Deliver a signal to `target`.
    ///
    /// Bubbling signals run trickle-down handlers from the root to the
    /// target, then the target's own handlers, then bubble handlers back up
    /// to the root. Non-bubbling signals only reach the target.
    pub fn dispatch(&mut self, target: NodeId, signal: Signal) -> Result<SignalEvent, SceneError> {
        self.node(target)?;
        let mut event = SignalEvent::new(target, signal);
        let kind = signal.kind();
        trace!("dispatch {signal:?} to {target}");

        if !kind.bubbles() {
            event.enter(target, Phase::AtTarget);
            self.invoke(target, true, &mut event);
            if !event.is_propagation_stopped() {
                self.invoke(target, false, &mut event);
            }
            return Ok(event);
        }

        let path = self.path_to(target);

        for &node in &path {
            let phase = if node == target {
                Phase::AtTarget
            } else {
                Phase::TrickleDown
            };
            event.enter(node, phase);
            self.invoke(node, true, &mut event);
            if event.is_propagation_stopped() {
                return Ok(event);
            }
        }

        for &node in path.iter().rev() {
            if !self.contains(node) {
                continue;
            }
            let phase = if node == target {
                Phase::AtTarget
            } else {
                Phase::BubbleUp
            };
            event.enter(node, phase);
            self.invoke(node, false, &mut event);
            if event.is_propagation_stopped() {
                break;
            }
            self.default_action(node, &mut event);
            if event.is_propagation_stopped() {
                break;
            }
        }

        Ok(event)
    }

    fn invoke(&mut self, node: NodeId, trickle_down: bool, event: &mut SignalEvent) {
        for registration in self.handlers_for(node, event.kind(), trickle_down) {
            if event.is_immediate_propagation_stopped() {
                break;
            }
            (registration.handler)(self, event);
        }
    }

    /// Built-in behavior that runs when a signal bubbles through a node
    /// without being stopped.
    fn default_action(&mut self, node: NodeId, event: &mut SignalEvent) {
        if let Signal::Wheel { delta_x, delta_y } = event.signal() {
            let is_scroll_view = self
                .get(node)
                .is_some_and(|n| matches!(n.kind, NodeKind::ScrollView(_)));
            if is_scroll_view && self.wheel_scroll(node, delta_x, delta_y) {
                event.stop_propagation();
            }
        }
    }

    // -------------------------------------------------------------------------
    // Pointer routing
    // -------------------------------------------------------------------------

    /// Resolve the node that actually receives pointer input aimed at `id`.
    ///
    /// Nodes with [`PickingMode::Ignore`] forward to their nearest pickable
    /// ancestor. Disabled subtrees receive nothing.
    pub fn pick(&self, id: NodeId) -> Option<NodeId> {
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.get(node_id)?;
            if node.picking == PickingMode::Position {
                return self.is_enabled_in_hierarchy(node_id).then_some(node_id);
            }
            current = node.parent;
        }
        None
    }

    /// The node currently under the pointer.
    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered.filter(|&id| self.contains(id))
    }

    /// Move the pointer over `target` (or off the scene with `None`).
    ///
    /// Sends `PointerLeave` to every node that is no longer under the
    /// pointer (innermost first) and `PointerEnter` to every node that now
    /// is (outermost first), then a bubbling `PointerMove` to the target.
    pub fn pointer_move(&mut self, target: Option<NodeId>) -> Result<(), SceneError> {
        let picked = target.and_then(|t| self.pick(t));
        let old_path = self.hovered().map(|h| self.path_to(h)).unwrap_or_default();
        let new_path = picked.map(|p| self.path_to(p)).unwrap_or_default();

        for &node in old_path.iter().rev() {
            if !new_path.contains(&node) && self.contains(node) {
                self.dispatch(node, Signal::PointerLeave)?;
            }
        }

        self.hovered = picked;

        for &node in &new_path {
            if !old_path.contains(&node) && self.contains(node) {
                self.dispatch(node, Signal::PointerEnter)?;
            }
        }

        if let Some(picked) = picked.filter(|&p| self.contains(p)) {
            self.dispatch(picked, Signal::PointerMove)?;
        }
        Ok(())
    }

    /// Press a pointer button over `target`.
    pub fn pointer_down(&mut self, target: NodeId, button: MouseButton) -> Result<(), SceneError> {
        let Some(picked) = self.pick(target) else {
            return Ok(());
        };
        self.pressed = Some(picked);
        self.dispatch(picked, Signal::PointerDown { button })?;
        Ok(())
    }

    /// Release a pointer button over `target`. A `Click` follows when the
    /// release lands on the node that received the press.
    pub fn pointer_up(&mut self, target: NodeId, button: MouseButton) -> Result<(), SceneError> {
        let pressed = self.pressed.take();
        let Some(picked) = self.pick(target) else {
            return Ok(());
        };
        self.dispatch(picked, Signal::PointerUp { button })?;
        if pressed == Some(picked) && self.contains(picked) {
            self.dispatch(picked, Signal::Click { button })?;
        }
        Ok(())
    }

    /// Press and release over the same node.
    pub fn click(&mut self, target: NodeId, button: MouseButton) -> Result<(), SceneError> {
        self.pointer_down(target, button)?;
        self.pointer_up(target, button)
    }

    /// Turn the mouse wheel over `target`.
    pub fn wheel(&mut self, target: NodeId, delta_x: f32, delta_y: f32) -> Result<(), SceneError> {
        let Some(picked) = self.pick(target) else {
            return Ok(());
        };
        self.dispatch(picked, Signal::Wheel { delta_x, delta_y })?;
        Ok(())
    }
}
