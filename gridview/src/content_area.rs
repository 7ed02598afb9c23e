//! The area below the header: row numbers on the left, body on the right.

use griddom::{FlexDirection, NodeId, Scene, SignalKind, Vec2};
use log::{trace, warn};

use crate::classes;
use crate::error::Result;
use crate::scroll_region::{Interaction, ScrollRegion};

/// Row-number region and body region side by side.
///
/// The row-number column ends in a spacer that matches the body's
/// horizontal scroller, so the last row number lines up with the last body
/// row when the body shows a scrollbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentArea {
    node: NodeId,
    row_numbers: NodeId,
    row_number_region: NodeId,
    spacer: NodeId,
    body_region: NodeId,
}

impl ContentArea {
    pub(crate) fn new(scene: &mut Scene) -> Result<Self> {
        let node = scene.element();
        scene.add_class(node, classes::CONTENT_AREA);
        let style = scene.style_mut(node)?;
        style.flex_direction = Some(FlexDirection::Row);
        style.flex_grow = Some(1.0);

        let row_numbers = scene.element();
        scene.add_class(row_numbers, classes::ROW_NUMBERS);
        scene.style_mut(row_numbers)?.flex_direction = Some(FlexDirection::Column);

        let row_number_region = ScrollRegion::vertical(scene, Interaction::Passive, true)?;
        scene.style_mut(row_number_region)?.flex_grow = Some(1.0);
        let spacer = scene.element();
        scene.style_mut(spacer)?.flex_shrink = Some(0.0);
        scene.add_child(row_numbers, row_number_region)?;
        scene.add_child(row_numbers, spacer)?;

        let body_region = ScrollRegion::both(scene, Interaction::Interactive)?;
        scene.style_mut(body_region)?.flex_grow = Some(1.0);

        scene.add_child(node, row_numbers)?;
        scene.add_child(node, body_region)?;

        let area = Self {
            node,
            row_numbers,
            row_number_region,
            spacer,
            body_region,
        };
        let horizontal = scene.horizontal_scroller(body_region)?;
        for observed in [node, horizontal] {
            scene.on(observed, SignalKind::GeometryChanged, move |scene, _| {
                if let Err(e) = area.layout(scene) {
                    warn!("row number spacer layout failed: {e}");
                }
            })?;
        }
        Ok(area)
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    /// The container that holds the row-number region and its spacer.
    pub fn row_number_container(&self) -> NodeId {
        self.row_numbers
    }

    pub fn row_number_region(&self) -> NodeId {
        self.row_number_region
    }

    pub fn body_region(&self) -> NodeId {
        self.body_region
    }

    pub fn spacer(&self) -> NodeId {
        self.spacer
    }

    /// Content container of the row-number region; row headers go here.
    pub fn row_number_content(&self, scene: &Scene) -> Result<NodeId> {
        Ok(scene.content_container(self.row_number_region)?)
    }

    /// Content container of the body region; rows go here.
    pub fn body_content(&self, scene: &Scene) -> Result<NodeId> {
        Ok(scene.content_container(self.body_region)?)
    }

    /// Resolved width of the body's vertical scroller.
    pub fn vertical_scroller_width(&self, scene: &Scene) -> Result<f32> {
        let scroller = scene.vertical_scroller(self.body_region)?;
        Ok(scene.resolved_size(scroller).width)
    }

    /// Resolved height of the body's horizontal scroller.
    pub fn horizontal_scroller_height(&self, scene: &Scene) -> Result<f32> {
        let scroller = scene.horizontal_scroller(self.body_region)?;
        Ok(scene.resolved_size(scroller).height)
    }

    pub fn show_row_numbers(&self, scene: &mut Scene) {
        scene.remove_class(self.row_numbers, classes::ROW_NUMBERS_HIDDEN);
    }

    pub fn hide_row_numbers(&self, scene: &mut Scene) {
        scene.add_class(self.row_numbers, classes::ROW_NUMBERS_HIDDEN);
    }

    pub fn row_numbers_visible(&self, scene: &Scene) -> bool {
        !scene.has_class(self.row_numbers, classes::ROW_NUMBERS_HIDDEN)
    }

    /// Move the row-number region vertically, keeping its horizontal offset.
    pub fn set_row_number_scroll_offset(&self, scene: &mut Scene, offset: f32) -> Result<()> {
        let current = scene.scroll_offset(self.row_number_region)?;
        scene.set_scroll_offset(self.row_number_region, Vec2::new(current.x, offset))?;
        Ok(())
    }

    /// Size the spacer to the body's horizontal scroller.
    pub fn layout(&self, scene: &mut Scene) -> Result<()> {
        let height = self.horizontal_scroller_height(scene)?;
        trace!("row-number spacer height {height}");
        scene.style_mut(self.spacer)?.height = Some(height);
        Ok(())
    }
}
