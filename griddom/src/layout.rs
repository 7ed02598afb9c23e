//! Resolved geometry written back by the host layout pass.

use log::warn;

use crate::error::SceneError;
use crate::event::Signal;
use crate::node::NodeId;
use crate::scene::Scene;
use crate::types::Size;

/// Upper bound on flush rounds. Handlers may resize nodes in response to
/// `GeometryChanged`, which schedules another round.
const MAX_FLUSH_ROUNDS: usize = 16;

impl Scene {
    pub fn resolved_size(&self, id: NodeId) -> Size {
        self.get(id).map(|n| n.resolved).unwrap_or_default()
    }

    /// Record the size the layout engine resolved for a node. Signals are
    /// not sent until [`Scene::flush_layout`].
    pub fn set_resolved_size(&mut self, id: NodeId, size: Size) -> Result<(), SceneError> {
        let node = self.node_mut(id)?;
        let old = node.resolved;
        if old == size {
            return Ok(());
        }
        node.resolved = size;
        if !self.pending_geometry.iter().any(|(pending, _)| *pending == id) {
            self.pending_geometry.push((id, old));
        }
        Ok(())
    }

    /// End of a layout pass: send `GeometryChanged` to every node whose
    /// resolved size differs from the previous flush.
    ///
    /// Returns the number of signals delivered.
    pub fn flush_layout(&mut self) -> Result<usize, SceneError> {
        let mut delivered = 0;
        for _ in 0..MAX_FLUSH_ROUNDS {
            let pending = std::mem::take(&mut self.pending_geometry);
            if pending.is_empty() {
                return Ok(delivered);
            }
            for (id, old) in pending {
                let Some(new) = self.get(id).map(|n| n.resolved) else {
                    continue;
                };
                if new != old {
                    self.dispatch(id, Signal::GeometryChanged { old, new })?;
                    delivered += 1;
                }
            }
        }
        warn!(
            "layout did not settle after {MAX_FLUSH_ROUNDS} rounds; {} nodes still pending",
            self.pending_geometry.len()
        );
        Ok(delivered)
    }
}
