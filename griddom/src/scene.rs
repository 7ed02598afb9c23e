use std::sync::Arc;

use log::{trace, warn};

use crate::error::SceneError;
use crate::event::{HandlerId, Registration, SignalEvent, SignalKind};
use crate::node::{InlineStyle, Node, NodeId, NodeKind};
use crate::types::{PickingMode, Size};

#[derive(Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// The node arena and everything that operates on it.
#[derive(Debug, Default)]
pub struct Scene {
    slots: Vec<Slot>,
    free: Vec<u32>,
    next_handler: u64,
    /// Node currently under the pointer.
    pub(crate) hovered: Option<NodeId>,
    /// Node that received the last pointer down.
    pub(crate) pressed: Option<NodeId>,
    /// Nodes whose resolved size changed since the last flush, with the
    /// size they had at that flush.
    pub(crate) pending_geometry: Vec<(NodeId, Size)>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Arena
    // -------------------------------------------------------------------------

    /// Create a detached node.
    pub fn spawn(&mut self, kind: NodeKind) -> NodeId {
        let node = Node::new(kind);
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(node);
            NodeId {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                node: Some(node),
            });
            NodeId {
                index,
                generation: 0,
            }
        }
    }

    /// Create a detached plain element.
    pub fn element(&mut self) -> NodeId {
        self.spawn(NodeKind::Element)
    }

    /// Create a detached text label.
    pub fn label(&mut self, text: impl Into<String>) -> NodeId {
        self.spawn(NodeKind::Label(text.into()))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, SceneError> {
        self.get(id).ok_or(SceneError::NodeNotFound(id))
    }

    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, SceneError> {
        self.get_mut(id).ok_or(SceneError::NodeNotFound(id))
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.node.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Destroy a node and its whole subtree, detaching it from its parent.
    pub fn despawn(&mut self, id: NodeId) -> Result<(), SceneError> {
        if let Some(parent) = self.node(id)?.parent {
            if let Some(parent) = self.get_mut(parent) {
                parent.children.retain(|&c| c != id);
            }
        }
        self.despawn_subtree(id);
        Ok(())
    }

    fn despawn_subtree(&mut self, id: NodeId) {
        let Some(slot) = self.slots.get_mut(id.index as usize) else {
            return;
        };
        if slot.generation != id.generation {
            return;
        }
        let Some(node) = slot.node.take() else {
            return;
        };
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        if self.hovered == Some(id) {
            self.hovered = None;
        }
        if self.pressed == Some(id) {
            self.pressed = None;
        }
        for child in node.children {
            self.despawn_subtree(child);
        }
    }

    // -------------------------------------------------------------------------
    // Hierarchy
    // -------------------------------------------------------------------------

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Children of a node. Empty for unknown handles.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn child_at(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.children(id).get(index).copied()
    }

    pub fn index_of(&self, parent: NodeId, child: NodeId) -> Option<usize> {
        self.children(parent).iter().position(|&c| c == child)
    }

    pub fn child_count(&self, id: NodeId) -> usize {
        self.children(id).len()
    }

    /// Append `child` to `parent`, detaching it from any previous parent.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), SceneError> {
        let len = self.node(parent)?.children.len();
        self.insert_child(parent, len, child)
    }

    /// Insert `child` at `index` (clamped to the child count).
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        index: usize,
        child: NodeId,
    ) -> Result<(), SceneError> {
        self.node(parent)?;
        self.node(child)?;
        if self.is_ancestor_or_self(child, parent) {
            return Err(SceneError::CyclicInsert { parent, child });
        }

        self.detach(child);
        let parent_node = self.node_mut(parent)?;
        let index = index.min(parent_node.children.len());
        parent_node.children.insert(index, child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Detach `child` from `parent` without destroying it.
    ///
    /// Returns false when `child` was not a child of `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<bool, SceneError> {
        let parent_node = self.node_mut(parent)?;
        let before = parent_node.children.len();
        parent_node.children.retain(|&c| c != child);
        let removed = parent_node.children.len() != before;
        if removed {
            if let Some(node) = self.get_mut(child) {
                node.parent = None;
            }
        }
        Ok(removed)
    }

    /// Detach and return the child at `index`.
    pub fn remove_child_at(
        &mut self,
        parent: NodeId,
        index: usize,
    ) -> Result<Option<NodeId>, SceneError> {
        let Some(child) = self.child_at(parent, index) else {
            self.node(parent)?;
            return Ok(None);
        };
        self.remove_child(parent, child)?;
        Ok(Some(child))
    }

    /// Destroy every child of a node.
    pub fn clear(&mut self, id: NodeId) -> Result<(), SceneError> {
        let children = std::mem::take(&mut self.node_mut(id)?.children);
        for child in children {
            self.despawn_subtree(child);
        }
        Ok(())
    }

    fn detach(&mut self, child: NodeId) {
        let Some(parent) = self.parent(child) else {
            return;
        };
        if let Some(parent) = self.get_mut(parent) {
            parent.children.retain(|&c| c != child);
        }
        if let Some(node) = self.get_mut(child) {
            node.parent = None;
        }
    }

    /// Whether `ancestor` is `node` or one of its ancestors.
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Path from the root down to `id`, inclusive. Empty for unknown handles.
    pub fn path_to(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = self.get(id).map(|_| id);
        while let Some(node) = current {
            path.push(node);
            current = self.parent(node);
        }
        path.reverse();
        path
    }

    // -------------------------------------------------------------------------
    // Classes, style sheets, inline style
    // -------------------------------------------------------------------------

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        match self.get_mut(id) {
            Some(node) => {
                if !node.has_class(class) {
                    node.classes.push(class.to_string());
                }
            }
            None => warn!("add_class({class}) on missing node {id}"),
        }
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(node) = self.get_mut(id) {
            node.classes.retain(|c| c != class);
        }
    }

    /// Add the class when `enabled`, remove it otherwise.
    pub fn toggle_class(&mut self, id: NodeId, class: &str, enabled: bool) {
        if enabled {
            self.add_class(id, class);
        } else {
            self.remove_class(id, class);
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.get(id).is_some_and(|n| n.has_class(class))
    }

    pub fn classes(&self, id: NodeId) -> &[String] {
        self.get(id).map(|n| n.classes.as_slice()).unwrap_or(&[])
    }

    /// Attach a style sheet by name. The scene never interprets it.
    pub fn add_style_sheet(&mut self, id: NodeId, sheet: &str) -> Result<(), SceneError> {
        let node = self.node_mut(id)?;
        if !node.style_sheets.iter().any(|s| s == sheet) {
            node.style_sheets.push(sheet.to_string());
        }
        Ok(())
    }

    pub fn style(&self, id: NodeId) -> Option<&InlineStyle> {
        self.get(id).map(|n| &n.style)
    }

    pub fn style_mut(&mut self, id: NodeId) -> Result<&mut InlineStyle, SceneError> {
        Ok(&mut self.node_mut(id)?.style)
    }

    pub fn set_name(&mut self, id: NodeId, name: impl Into<String>) -> Result<(), SceneError> {
        self.node_mut(id)?.name = Some(name.into());
        Ok(())
    }

    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| n.name.as_deref())
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| n.text())
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) -> Result<(), SceneError> {
        match &mut self.node_mut(id)?.kind {
            NodeKind::Label(current) => *current = text.into(),
            _ => warn!("set_text on non-label node {id}"),
        }
        Ok(())
    }

    pub fn set_picking(&mut self, id: NodeId, picking: PickingMode) -> Result<(), SceneError> {
        self.node_mut(id)?.picking = picking;
        Ok(())
    }

    pub fn set_enabled(&mut self, id: NodeId, enabled: bool) -> Result<(), SceneError> {
        self.node_mut(id)?.enabled = enabled;
        Ok(())
    }

    /// Whether the node and all of its ancestors are enabled.
    pub fn is_enabled_in_hierarchy(&self, id: NodeId) -> bool {
        let path = self.path_to(id);
        !path.is_empty() && path.iter().all(|&n| self.get(n).is_some_and(|n| n.enabled))
    }

    // -------------------------------------------------------------------------
    // Handler registration
    // -------------------------------------------------------------------------

    /// Register a handler for the target and bubble phases.
    pub fn on<F>(&mut self, id: NodeId, kind: SignalKind, handler: F) -> Result<HandlerId, SceneError>
    where
        F: Fn(&mut Scene, &mut SignalEvent) + Send + Sync + 'static,
    {
        self.register(id, kind, false, handler)
    }

    /// Register a handler for the trickle-down phase, which runs on the way
    /// from the root to the target before the target sees the signal.
    pub fn on_trickle_down<F>(
        &mut self,
        id: NodeId,
        kind: SignalKind,
        handler: F,
    ) -> Result<HandlerId, SceneError>
    where
        F: Fn(&mut Scene, &mut SignalEvent) + Send + Sync + 'static,
    {
        self.register(id, kind, true, handler)
    }

    fn register<F>(
        &mut self,
        id: NodeId,
        kind: SignalKind,
        trickle_down: bool,
        handler: F,
    ) -> Result<HandlerId, SceneError>
    where
        F: Fn(&mut Scene, &mut SignalEvent) + Send + Sync + 'static,
    {
        let handler_id = HandlerId(self.next_handler);
        self.node_mut(id)?.handlers.push(Registration {
            id: handler_id,
            kind,
            trickle_down,
            handler: Arc::new(handler),
        });
        self.next_handler += 1;
        trace!("registered {kind:?} handler {handler_id:?} on {id}");
        Ok(handler_id)
    }

    /// Number of handlers registered on a node, across all signal kinds.
    pub fn handler_count(&self, id: NodeId) -> usize {
        self.get(id).map_or(0, |n| n.handlers.len())
    }

    /// Remove a previously registered handler. Returns false if it was not found.
    pub fn off(&mut self, id: NodeId, handler: HandlerId) -> bool {
        let Some(node) = self.get_mut(id) else {
            return false;
        };
        let before = node.handlers.len();
        node.handlers.retain(|r| r.id != handler);
        node.handlers.len() != before
    }

    pub(crate) fn handlers_for(
        &self,
        id: NodeId,
        kind: SignalKind,
        trickle_down: bool,
    ) -> Vec<Registration> {
        self.get(id)
            .map(|n| {
                n.handlers
                    .iter()
                    .filter(|r| r.kind == kind && r.trickle_down == trickle_down)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}
