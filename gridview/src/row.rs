//! Row containers and the row height policy.

use griddom::{FlexDirection, NodeId, Overflow, Scene};

use crate::classes;
use crate::error::Result;

/// How a row height is applied to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeightPolicy {
    /// Explicit height, overflow clipped.
    #[default]
    Fixed,
    /// Minimum height only; content may grow the row.
    Flexible,
}

impl HeightPolicy {
    pub fn from_flexible(flexible: bool) -> Self {
        if flexible { Self::Flexible } else { Self::Fixed }
    }
}

pub(crate) fn apply_row_height(
    scene: &mut Scene,
    node: NodeId,
    height: f32,
    policy: HeightPolicy,
) -> Result<()> {
    let style = scene.style_mut(node)?;
    match policy {
        HeightPolicy::Fixed => {
            style.height = Some(height);
            style.min_height = None;
            style.overflow = Some(Overflow::Hidden);
        }
        HeightPolicy::Flexible => {
            style.height = None;
            style.min_height = Some(height);
            style.overflow = None;
        }
    }
    Ok(())
}

/// Parity of a 0-based position: the first row is odd.
pub(crate) fn is_even(position: usize) -> bool {
    (position + 1) % 2 == 0
}

/// Horizontal container holding one row's body cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    node: NodeId,
}

impl Row {
    pub(crate) fn new(scene: &mut Scene, position: usize) -> Result<Self> {
        let node = scene.element();
        scene.add_class(node, classes::ROW);
        let style = scene.style_mut(node)?;
        style.flex_direction = Some(FlexDirection::Row);
        style.flex_shrink = Some(0.0);

        let row = Self { node };
        row.set_parity(scene, position);
        Ok(row)
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn set_row_height(&self, scene: &mut Scene, height: f32, policy: HeightPolicy) -> Result<()> {
        apply_row_height(scene, self.node, height, policy)
    }

    /// Total width of the row: the sum of its column widths.
    pub fn set_row_width(&self, scene: &mut Scene, width: f32) -> Result<()> {
        scene.style_mut(self.node)?.width = Some(width);
        Ok(())
    }

    pub(crate) fn set_parity(&self, scene: &mut Scene, position: usize) {
        let even = is_even(position);
        scene.toggle_class(self.node, classes::ROW_EVEN, even);
        scene.toggle_class(self.node, classes::ROW_ODD, !even);
    }

    pub fn is_even(&self, scene: &Scene) -> bool {
        scene.has_class(self.node, classes::ROW_EVEN)
    }

    pub(crate) fn highlight(&self, scene: &mut Scene, enabled: bool) {
        scene.toggle_class(self.node, classes::ROW_HIGHLIGHTED, enabled);
    }

    pub fn is_highlighted(&self, scene: &Scene) -> bool {
        scene.has_class(self.node, classes::ROW_HIGHLIGHTED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity_counts_from_one() {
        assert!(!is_even(0));
        assert!(is_even(1));
        assert!(!is_even(2));
    }

    #[test]
    fn test_height_policies_swap_properties() {
        let mut scene = Scene::new();
        let node = scene.element();

        apply_row_height(&mut scene, node, 40.0, HeightPolicy::Fixed).unwrap();
        let style = scene.style(node).unwrap();
        assert_eq!(style.height, Some(40.0));
        assert_eq!(style.min_height, None);
        assert_eq!(style.overflow, Some(Overflow::Hidden));

        apply_row_height(&mut scene, node, 25.0, HeightPolicy::Flexible).unwrap();
        let style = scene.style(node).unwrap();
        assert_eq!(style.height, None);
        assert_eq!(style.min_height, Some(25.0));
        assert_eq!(style.overflow, None);
    }
}
