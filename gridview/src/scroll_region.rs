//! Scroll region factory.
//!
//! The body region is the only one the user scrolls. The header and
//! row-number regions are passive mirrors: they reject wheel, drag and
//! press input, their scrollers are disabled, and their content is not
//! pickable. They still move when the table writes their offset.

use griddom::{Axis, FlexDirection, NodeId, Overflow, PickingMode, Scene, ScrollMode, ScrollerVisibility, SignalKind};
use log::trace;

use crate::classes;
use crate::error::Result;

/// Whether a region accepts user scroll input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Interactive,
    Passive,
}

/// Builds the three scroll view configurations the table uses.
pub struct ScrollRegion;

impl ScrollRegion {
    /// Horizontal region (the header). The vertical scroller is always hidden.
    pub fn horizontal(scene: &mut Scene, interaction: Interaction, hide_scroller: bool) -> Result<NodeId> {
        let view = Self::create(
            scene,
            ScrollMode::Horizontal,
            interaction,
            visibility(hide_scroller),
            ScrollerVisibility::Hidden,
        )?;
        scene.add_class(view, classes::SCROLL_HORIZONTAL);
        let content = scene.content_container(view)?;
        scene.add_class(content, classes::SCROLL_CONTENT_ROW);
        scene.style_mut(content)?.flex_direction = Some(FlexDirection::Row);
        Ok(view)
    }

    /// Vertical region (the row numbers). The horizontal scroller is always
    /// hidden.
    pub fn vertical(scene: &mut Scene, interaction: Interaction, hide_scroller: bool) -> Result<NodeId> {
        let view = Self::create(
            scene,
            ScrollMode::Vertical,
            interaction,
            ScrollerVisibility::Hidden,
            visibility(hide_scroller),
        )?;
        scene.add_class(view, classes::SCROLL_VERTICAL);
        let content = scene.content_container(view)?;
        scene.add_class(content, classes::SCROLL_CONTENT_COLUMN);
        scene.style_mut(content)?.flex_direction = Some(FlexDirection::Column);
        Ok(view)
    }

    /// Bidirectional region (the body) with both scrollers visible as needed.
    pub fn both(scene: &mut Scene, interaction: Interaction) -> Result<NodeId> {
        let view = Self::create(
            scene,
            ScrollMode::Both,
            interaction,
            ScrollerVisibility::Auto,
            ScrollerVisibility::Auto,
        )?;
        let content = scene.content_container(view)?;
        scene.add_class(content, classes::SCROLL_CONTENT_COLUMN);
        scene.style_mut(content)?.flex_direction = Some(FlexDirection::Column);
        Ok(view)
    }

    fn create(
        scene: &mut Scene,
        mode: ScrollMode,
        interaction: Interaction,
        horizontal: ScrollerVisibility,
        vertical: ScrollerVisibility,
    ) -> Result<NodeId> {
        let view = scene.scroll_view(mode);
        scene.set_scroller_visibility(view, Axis::Horizontal, horizontal)?;
        scene.set_scroller_visibility(view, Axis::Vertical, vertical)?;

        match interaction {
            Interaction::Interactive => {
                scene.style_mut(view)?.overflow = Some(Overflow::Visible);
            }
            Interaction::Passive => Self::make_passive(scene, view)?,
        }
        Ok(view)
    }

    fn make_passive(scene: &mut Scene, view: NodeId) -> Result<()> {
        scene.add_class(view, classes::SCROLL_PASSIVE);

        scene.on_trickle_down(view, SignalKind::Wheel, |_, event| {
            trace!("passive region swallowed wheel on {}", event.target());
            event.stop_immediate_propagation();
        })?;
        for kind in [SignalKind::PointerMove, SignalKind::PointerDown] {
            scene.on(view, kind, |_, event| event.stop_immediate_propagation())?;
        }

        let horizontal = scene.horizontal_scroller(view)?;
        let vertical = scene.vertical_scroller(view)?;
        scene.set_enabled(horizontal, false)?;
        scene.set_enabled(vertical, false)?;

        let content = scene.content_container(view)?;
        scene.set_picking(content, PickingMode::Ignore)?;
        Ok(())
    }
}

fn visibility(hidden: bool) -> ScrollerVisibility {
    if hidden {
        ScrollerVisibility::Hidden
    } else {
        ScrollerVisibility::Auto
    }
}
