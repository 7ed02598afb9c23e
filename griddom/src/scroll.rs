//! Scroll views and their scrollers.

use log::trace;

use crate::error::SceneError;
use crate::event::Signal;
use crate::node::{NodeId, NodeKind, ScrollView, Scroller};
use crate::scene::Scene;
use crate::types::{Axis, ScrollMode, ScrollerVisibility, Vec2};

impl Scene {
    /// Create a detached scroll view with its content container and both
    /// scrollers.
    pub fn scroll_view(&mut self, mode: ScrollMode) -> NodeId {
        let content = self.element();
        let placeholder = Scroller {
            axis: Axis::Horizontal,
            value: 0.0,
            visibility: ScrollerVisibility::Auto,
            owner: content,
        };
        let horizontal = self.spawn(NodeKind::Scroller(placeholder.clone()));
        let vertical = self.spawn(NodeKind::Scroller(Scroller {
            axis: Axis::Vertical,
            ..placeholder
        }));

        let view = self.spawn(NodeKind::ScrollView(ScrollView {
            mode,
            content,
            horizontal,
            vertical,
            offset: Vec2::ZERO,
        }));

        for scroller in [horizontal, vertical] {
            if let Some(NodeKind::Scroller(s)) = self.get_mut(scroller).map(|n| &mut n.kind) {
                s.owner = view;
            }
        }
        for child in [content, horizontal, vertical] {
            // All four nodes were just spawned, so neither call can fail.
            let _ = self.add_child(view, child);
        }
        view
    }

    pub fn scroll_view_of(&self, id: NodeId) -> Result<&ScrollView, SceneError> {
        self.node(id)?
            .as_scroll_view()
            .ok_or(SceneError::NotAScrollView(id))
    }

    fn scroll_view_mut(&mut self, id: NodeId) -> Result<&mut ScrollView, SceneError> {
        match &mut self.node_mut(id)?.kind {
            NodeKind::ScrollView(view) => Ok(view),
            _ => Err(SceneError::NotAScrollView(id)),
        }
    }

    pub fn scroller_of(&self, id: NodeId) -> Result<&Scroller, SceneError> {
        self.node(id)?
            .as_scroller()
            .ok_or(SceneError::NotAScroller(id))
    }

    fn scroller_mut(&mut self, id: NodeId) -> Result<&mut Scroller, SceneError> {
        match &mut self.node_mut(id)?.kind {
            NodeKind::Scroller(scroller) => Ok(scroller),
            _ => Err(SceneError::NotAScroller(id)),
        }
    }

    /// The node scrolled content is added to.
    pub fn content_container(&self, view: NodeId) -> Result<NodeId, SceneError> {
        Ok(self.scroll_view_of(view)?.content)
    }

    pub fn horizontal_scroller(&self, view: NodeId) -> Result<NodeId, SceneError> {
        Ok(self.scroll_view_of(view)?.horizontal)
    }

    pub fn vertical_scroller(&self, view: NodeId) -> Result<NodeId, SceneError> {
        Ok(self.scroll_view_of(view)?.vertical)
    }

    pub fn scroll_offset(&self, view: NodeId) -> Result<Vec2, SceneError> {
        Ok(self.scroll_view_of(view)?.offset)
    }

    /// Set a scroll view's offset programmatically.
    ///
    /// Each scroller whose value changes fires `ValueChanged`. Offsets are
    /// clamped at zero.
    pub fn set_scroll_offset(&mut self, view: NodeId, offset: Vec2) -> Result<(), SceneError> {
        let offset = Vec2::new(offset.x.max(0.0), offset.y.max(0.0));
        let (horizontal, vertical) = {
            let sv = self.scroll_view_mut(view)?;
            sv.offset = offset;
            (sv.horizontal, sv.vertical)
        };
        trace!("scroll offset of {view} -> ({}, {})", offset.x, offset.y);
        self.update_scroller(horizontal, offset.x)?;
        self.update_scroller(vertical, offset.y)?;
        Ok(())
    }

    /// Store a scroller value and fire `ValueChanged` if it changed.
    fn update_scroller(&mut self, scroller: NodeId, value: f32) -> Result<(), SceneError> {
        let s = self.scroller_mut(scroller)?;
        if s.value == value {
            return Ok(());
        }
        s.value = value;
        self.dispatch(scroller, Signal::ValueChanged { value })?;
        Ok(())
    }

    pub fn scroller_value(&self, scroller: NodeId) -> Result<f32, SceneError> {
        Ok(self.scroller_of(scroller)?.value)
    }

    /// Set a scroller's value programmatically, moving its scroll view.
    pub fn set_scroller_value(&mut self, scroller: NodeId, value: f32) -> Result<(), SceneError> {
        let (owner, axis) = {
            let s = self.scroller_of(scroller)?;
            (s.owner, s.axis)
        };
        let mut offset = self.scroll_offset(owner)?;
        match axis {
            Axis::Horizontal => offset.x = value,
            Axis::Vertical => offset.y = value,
        }
        self.set_scroll_offset(owner, offset)
    }

    /// User drag of a scroller. Returns false when the input was rejected
    /// because the scroller or its scroll view is disabled.
    pub fn drag_scroller(&mut self, scroller: NodeId, value: f32) -> Result<bool, SceneError> {
        self.scroller_of(scroller)?;
        if !self.is_enabled_in_hierarchy(scroller) {
            trace!("drag on disabled scroller {scroller} rejected");
            return Ok(false);
        }
        self.set_scroller_value(scroller, value)?;
        Ok(true)
    }

    pub fn scroller_visibility(
        &self,
        view: NodeId,
        axis: Axis,
    ) -> Result<ScrollerVisibility, SceneError> {
        let scroller = self.scroll_view_of(view)?.scroller(axis);
        Ok(self.scroller_of(scroller)?.visibility)
    }

    pub fn set_scroller_visibility(
        &mut self,
        view: NodeId,
        axis: Axis,
        visibility: ScrollerVisibility,
    ) -> Result<(), SceneError> {
        let scroller = self.scroll_view_of(view)?.scroller(axis);
        self.scroller_mut(scroller)?.visibility = visibility;
        Ok(())
    }

    /// Wheel default action. Returns true if the view moved.
    pub(crate) fn wheel_scroll(&mut self, view: NodeId, delta_x: f32, delta_y: f32) -> bool {
        let Ok(sv) = self.scroll_view_of(view) else {
            return false;
        };
        let (mode, horizontal, vertical, current) = (sv.mode, sv.horizontal, sv.vertical, sv.offset);

        let mut next = current;
        if delta_x != 0.0 && mode.allows(Axis::Horizontal) && self.is_enabled_in_hierarchy(horizontal)
        {
            next.x = (current.x + delta_x).max(0.0);
        }
        if delta_y != 0.0 && mode.allows(Axis::Vertical) && self.is_enabled_in_hierarchy(vertical) {
            next.y = (current.y + delta_y).max(0.0);
        }

        if next == current {
            return false;
        }
        self.set_scroll_offset(view, next).is_ok()
    }
}
