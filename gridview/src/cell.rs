//! Cell primitives: body cells, header cells and their pointer feedback.
//!
//! Each cell owns a tiny state machine driven by the pointer signals the
//! scene delivers to its node. Visual state is kept apart from the classes
//! it maps to: [`visual_classes`] is the single place that decides how a
//! state looks, and the scene only ever sees the result.

use std::sync::{Arc, PoisonError, RwLock};

use griddom::{NodeId, Overflow, Scene, SignalKind};
use log::trace;

use crate::classes;
use crate::error::Result;
use crate::key::{ColumnKey, RowKey};
use crate::row::{HeightPolicy, apply_row_height};

// =============================================================================
// Pointer state machine
// =============================================================================

/// Pointer-driven state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerState {
    #[default]
    Idle,
    Hovered,
    Pressed,
}

/// Pointer input that drives [`PointerState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerInput {
    Enter,
    Leave,
    Down,
    Up,
}

impl PointerState {
    /// The state after `input`.
    pub fn next(self, input: PointerInput) -> Self {
        match (self, input) {
            (_, PointerInput::Leave) => Self::Idle,
            (_, PointerInput::Down) => Self::Pressed,
            (Self::Idle, PointerInput::Enter) => Self::Hovered,
            (Self::Pressed, PointerInput::Up) => Self::Hovered,
            (state, _) => state,
        }
    }
}

/// What kind of cell a node is. Decides which classes its states map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Body,
    ColumnHeader,
    RowHeader,
    Corner,
}

impl CellKind {
    fn highlight_class(self) -> &'static str {
        match self {
            Self::Body => classes::CELL_HIGHLIGHTED,
            Self::ColumnHeader => classes::COLUMN_HIGHLIGHTED,
            Self::RowHeader => classes::ROW_HIGHLIGHTED,
            Self::Corner => classes::CORNER_HIGHLIGHTED,
        }
    }

    /// Class added by the table when the cell's whole row or column is lit.
    fn marked_class(self) -> &'static str {
        match self {
            Self::Body => classes::COLUMN_HIGHLIGHTED,
            other => other.highlight_class(),
        }
    }

    fn down_class(self) -> &'static str {
        match self {
            Self::Body => classes::CELL_DOWN,
            Self::ColumnHeader => classes::COLUMN_DOWN,
            Self::RowHeader => classes::ROW_DOWN,
            Self::Corner => classes::CORNER_DOWN,
        }
    }

    fn static_classes(self) -> &'static [&'static str] {
        match self {
            Self::Body => &[classes::CELL],
            Self::ColumnHeader | Self::RowHeader => &[classes::CELL, classes::HEADER_CELL],
            Self::Corner => &[classes::CELL, classes::HEADER_CELL, classes::CORNER_CELL],
        }
    }
}

/// Classes that should be present for a cell of `kind` in `state`, with
/// `marked` set when the table has highlighted the cell's row or column.
pub fn visual_classes(kind: CellKind, state: PointerState, marked: bool) -> Vec<&'static str> {
    let mut active = Vec::with_capacity(3);
    match state {
        PointerState::Idle => {}
        PointerState::Hovered => active.push(kind.highlight_class()),
        PointerState::Pressed => active.push(kind.down_class()),
    }
    if marked && !active.contains(&kind.marked_class()) {
        active.push(kind.marked_class());
    }
    active
}

fn managed_classes(kind: CellKind) -> [&'static str; 3] {
    [kind.highlight_class(), kind.marked_class(), kind.down_class()]
}

#[derive(Debug, Clone, Copy, Default)]
struct Visual {
    pointer: PointerState,
    marked: bool,
}

// =============================================================================
// Shared cell core
// =============================================================================

/// Node plus visual state shared with the node's signal handlers.
#[derive(Debug, Clone)]
struct CellCore {
    node: NodeId,
    kind: CellKind,
    visual: Arc<RwLock<Visual>>,
}

impl CellCore {
    fn spawn(scene: &mut Scene, kind: CellKind) -> Result<Self> {
        let node = scene.element();
        for class in kind.static_classes() {
            scene.add_class(node, class);
        }
        let core = Self {
            node,
            kind,
            visual: Arc::new(RwLock::new(Visual::default())),
        };

        for (signal, input) in [
            (SignalKind::PointerEnter, PointerInput::Enter),
            (SignalKind::PointerLeave, PointerInput::Leave),
            (SignalKind::PointerDown, PointerInput::Down),
            (SignalKind::PointerUp, PointerInput::Up),
        ] {
            let handle = core.clone();
            scene.on(node, signal, move |scene, _| handle.feed(scene, input))?;
        }
        Ok(core)
    }

    fn feed(&self, scene: &mut Scene, input: PointerInput) {
        let mut visual = self.visual.write().unwrap_or_else(PoisonError::into_inner);
        let next = visual.pointer.next(input);
        if next != visual.pointer {
            trace!("{} {:?}: {:?} -> {next:?}", self.node, self.kind, visual.pointer);
            visual.pointer = next;
        }
        self.apply(scene, *visual);
    }

    fn apply(&self, scene: &mut Scene, visual: Visual) {
        let active = visual_classes(self.kind, visual.pointer, visual.marked);
        for class in managed_classes(self.kind) {
            scene.toggle_class(self.node, class, active.contains(&class));
        }
    }

    fn visual(&self) -> Visual {
        *self.visual.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn highlight(&self, scene: &mut Scene, enabled: bool) {
        let mut visual = self.visual.write().unwrap_or_else(PoisonError::into_inner);
        visual.marked = enabled;
        self.apply(scene, *visual);
    }

    fn set_width(&self, scene: &mut Scene, width: f32) -> Result<()> {
        scene.style_mut(self.node)?.width = Some(width);
        Ok(())
    }
}

// =============================================================================
// Body cells
// =============================================================================

/// A body cell: the container for one (row, column) slot's content.
///
/// The handle is cheap to clone; clones share the same visual state.
#[derive(Debug, Clone)]
pub struct TableCell {
    core: CellCore,
    row: RowKey,
    column: ColumnKey,
}

impl TableCell {
    pub(crate) fn new(scene: &mut Scene, row: RowKey, column: ColumnKey) -> Result<Self> {
        Ok(Self {
            core: CellCore::spawn(scene, CellKind::Body)?,
            row,
            column,
        })
    }

    /// The cell's container node. Content goes in here.
    pub fn node(&self) -> NodeId {
        self.core.node
    }

    pub fn row_key(&self) -> RowKey {
        self.row
    }

    pub fn column_key(&self) -> ColumnKey {
        self.column
    }

    /// Content nodes currently in the cell.
    pub fn content<'a>(&self, scene: &'a Scene) -> &'a [NodeId] {
        scene.children(self.core.node)
    }

    pub fn set_width(&self, scene: &mut Scene, width: f32) -> Result<()> {
        self.core.set_width(scene, width)
    }

    pub fn set_row_height(&self, scene: &mut Scene, height: f32, policy: HeightPolicy) -> Result<()> {
        apply_row_height(scene, self.core.node, height, policy)
    }

    /// Mark or unmark the cell as part of a highlighted column.
    pub fn highlight(&self, scene: &mut Scene, enabled: bool) {
        self.core.highlight(scene, enabled);
    }

    pub fn is_highlighted(&self) -> bool {
        self.core.visual().marked
    }

    pub fn pointer_state(&self) -> PointerState {
        self.core.visual().pointer
    }
}

// =============================================================================
// Header cells
// =============================================================================

/// A labelled header cell. Used for the corner cell and wrapped by the
/// column and row header cells.
#[derive(Debug, Clone)]
pub struct HeaderCell {
    core: CellCore,
    label: NodeId,
}

impl HeaderCell {
    pub(crate) fn new(
        scene: &mut Scene,
        kind: CellKind,
        text: &str,
        width: f32,
        height: f32,
    ) -> Result<Self> {
        let core = CellCore::spawn(scene, kind)?;
        let label = scene.label(text);
        scene.add_class(label, classes::CELL_LABEL);
        scene.add_child(core.node, label)?;

        let cell = Self { core, label };
        cell.set_width(scene, width)?;
        let style = scene.style_mut(cell.core.node)?;
        style.height = Some(height);
        style.overflow = Some(Overflow::Hidden);
        Ok(cell)
    }

    pub fn node(&self) -> NodeId {
        self.core.node
    }

    pub fn kind(&self) -> CellKind {
        self.core.kind
    }

    /// The label's text.
    pub fn label<'a>(&self, scene: &'a Scene) -> Option<&'a str> {
        scene.text(self.label)
    }

    pub fn label_node(&self) -> NodeId {
        self.label
    }

    pub fn set_label(&self, scene: &mut Scene, text: impl Into<String>) -> Result<()> {
        scene.set_text(self.label, text)?;
        Ok(())
    }

    pub fn set_width(&self, scene: &mut Scene, width: f32) -> Result<()> {
        self.core.set_width(scene, width)
    }

    pub fn set_row_height(&self, scene: &mut Scene, height: f32, policy: HeightPolicy) -> Result<()> {
        apply_row_height(scene, self.core.node, height, policy)
    }

    pub fn highlight(&self, scene: &mut Scene, enabled: bool) {
        self.core.highlight(scene, enabled);
    }

    pub fn is_highlighted(&self) -> bool {
        self.core.visual().marked
    }

    pub fn pointer_state(&self) -> PointerState {
        self.core.visual().pointer
    }
}

/// Header cell above a data column.
#[derive(Debug, Clone)]
pub struct ColumnHeaderCell {
    header: HeaderCell,
    column: ColumnKey,
}

impl ColumnHeaderCell {
    pub(crate) fn new(
        scene: &mut Scene,
        column: ColumnKey,
        text: &str,
        width: f32,
        height: f32,
    ) -> Result<Self> {
        Ok(Self {
            header: HeaderCell::new(scene, CellKind::ColumnHeader, text, width, height)?,
            column,
        })
    }

    pub fn header(&self) -> &HeaderCell {
        &self.header
    }

    pub fn node(&self) -> NodeId {
        self.header.node()
    }

    pub fn column_key(&self) -> ColumnKey {
        self.column
    }

    pub fn label<'a>(&self, scene: &'a Scene) -> Option<&'a str> {
        self.header.label(scene)
    }

    pub fn is_highlighted(&self) -> bool {
        self.header.is_highlighted()
    }
}

/// Row-number cell at the left of a body row.
#[derive(Debug, Clone)]
pub struct RowHeaderCell {
    header: HeaderCell,
    row: RowKey,
}

impl RowHeaderCell {
    pub(crate) fn new(
        scene: &mut Scene,
        row: RowKey,
        position: usize,
        width: f32,
        height: f32,
    ) -> Result<Self> {
        let cell = Self {
            header: HeaderCell::new(
                scene,
                CellKind::RowHeader,
                &(position + 1).to_string(),
                width,
                height,
            )?,
            row,
        };
        cell.set_position(scene, position)?;
        Ok(cell)
    }

    pub fn header(&self) -> &HeaderCell {
        &self.header
    }

    pub fn node(&self) -> NodeId {
        self.header.node()
    }

    pub fn row_key(&self) -> RowKey {
        self.row
    }

    pub fn label<'a>(&self, scene: &'a Scene) -> Option<&'a str> {
        self.header.label(scene)
    }

    pub fn is_highlighted(&self) -> bool {
        self.header.is_highlighted()
    }

    /// Relabel with the 1-based `position` and refresh the parity class.
    pub(crate) fn set_position(&self, scene: &mut Scene, position: usize) -> Result<()> {
        self.header.set_label(scene, (position + 1).to_string())?;
        let even = crate::row::is_even(position);
        scene.toggle_class(self.node(), classes::ROW_HEADER_EVEN, even);
        scene.toggle_class(self.node(), classes::ROW_HEADER_ODD, !even);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_pointer_cycle() {
        let mut state = PointerState::Idle;
        let mut seen = Vec::new();
        for input in [
            PointerInput::Enter,
            PointerInput::Down,
            PointerInput::Up,
            PointerInput::Leave,
        ] {
            state = state.next(input);
            seen.push(state);
        }
        assert_eq!(
            seen,
            vec![
                PointerState::Hovered,
                PointerState::Pressed,
                PointerState::Hovered,
                PointerState::Idle
            ]
        );
    }

    #[test]
    fn test_leave_while_pressed_clears_everything() {
        let state = PointerState::Hovered.next(PointerInput::Down);
        assert_eq!(state.next(PointerInput::Leave), PointerState::Idle);
        assert!(visual_classes(CellKind::Body, PointerState::Idle, false).is_empty());
    }

    #[test]
    fn test_stray_up_stays_idle() {
        assert_eq!(PointerState::Idle.next(PointerInput::Up), PointerState::Idle);
    }

    #[test]
    fn test_state_to_classes() {
        assert_eq!(
            visual_classes(CellKind::ColumnHeader, PointerState::Hovered, false),
            vec![classes::COLUMN_HIGHLIGHTED]
        );
        assert_eq!(
            visual_classes(CellKind::RowHeader, PointerState::Pressed, false),
            vec![classes::ROW_DOWN]
        );
        // The header's own hover and the column mark share one class.
        assert_eq!(
            visual_classes(CellKind::ColumnHeader, PointerState::Hovered, true),
            vec![classes::COLUMN_HIGHLIGHTED]
        );
        assert_eq!(
            visual_classes(CellKind::Body, PointerState::Hovered, true),
            vec![classes::CELL_HIGHLIGHTED, classes::COLUMN_HIGHLIGHTED]
        );
    }
}
