//! Signal wiring: hover highlights, click notifications, scroll mirroring
//! and the geometry-driven layout pass.

use std::sync::Arc;

use griddom::{NodeId, Scene, Signal, SignalKind, Vec2};
use log::{trace, warn};

use super::Table;
use crate::cell::{ColumnHeaderCell, RowHeaderCell, TableCell};
use crate::classes;
use crate::error::Result;
use crate::events::{CellClick, ColumnHeaderClick, RowHeaderClick};
use crate::key::{ColumnKey, RowKey};

impl Table {
    // -------------------------------------------------------------------------
    // Listeners
    // -------------------------------------------------------------------------

    pub fn on_column_header_click<F>(&self, listener: F)
    where
        F: Fn(&ColumnHeaderClick) + Send + Sync + 'static,
    {
        self.listeners.column_header.add(Arc::new(listener));
    }

    pub fn on_row_header_click<F>(&self, listener: F)
    where
        F: Fn(&RowHeaderClick) + Send + Sync + 'static,
    {
        self.listeners.row_header.add(Arc::new(listener));
    }

    pub fn on_cell_click<F>(&self, listener: F)
    where
        F: Fn(&CellClick) + Send + Sync + 'static,
    {
        self.listeners.cell.add(Arc::new(listener));
    }

    fn emit_column_header_click(&self, key: ColumnKey) {
        let Some(column) = self.read().column_position(key) else {
            warn!("table {}: click on a removed column header", self.id);
            return;
        };
        self.listeners.column_header.emit(&ColumnHeaderClick { column });
    }

    fn emit_row_header_click(&self, key: RowKey) {
        let Some(row) = self.read().row_position(key) else {
            warn!("table {}: click on a removed row header", self.id);
            return;
        };
        self.listeners.row_header.emit(&RowHeaderClick { row });
    }

    fn emit_cell_click(&self, row: RowKey, column: ColumnKey) {
        let position = {
            let state = self.read();
            state.row_position(row).zip(state.column_position(column))
        };
        let Some((row, column)) = position else {
            warn!("table {}: click on a removed cell", self.id);
            return;
        };
        self.listeners.cell.emit(&CellClick { column, row });
    }

    // -------------------------------------------------------------------------
    // Cell wiring
    // -------------------------------------------------------------------------

    pub(super) fn wire_column_header(&self, scene: &mut Scene, header: &ColumnHeaderCell) -> Result<()> {
        let key = header.column_key();
        for (kind, enabled) in [(SignalKind::PointerEnter, true), (SignalKind::PointerLeave, false)] {
            let table = self.clone();
            scene.on(header.node(), kind, move |scene, _| {
                table.mark_column(scene, key, enabled);
            })?;
        }
        let table = self.clone();
        scene.on(header.node(), SignalKind::Click, move |_, _| {
            table.emit_column_header_click(key);
        })?;
        Ok(())
    }

    pub(super) fn wire_row_header(&self, scene: &mut Scene, header: &RowHeaderCell) -> Result<()> {
        let key = header.row_key();
        for (kind, enabled) in [(SignalKind::PointerEnter, true), (SignalKind::PointerLeave, false)] {
            let table = self.clone();
            scene.on(header.node(), kind, move |scene, _| {
                table.mark_row(scene, key, enabled);
            })?;
        }
        let table = self.clone();
        scene.on(header.node(), SignalKind::Click, move |_, _| {
            table.emit_row_header_click(key);
        })?;
        Ok(())
    }

    pub(super) fn wire_cell(&self, scene: &mut Scene, cell: &TableCell) -> Result<()> {
        let (row, column) = (cell.row_key(), cell.column_key());
        let table = self.clone();
        scene.on(cell.node(), SignalKind::Click, move |_, _| {
            table.emit_cell_click(row, column);
        })?;
        Ok(())
    }

    pub(super) fn wire_corner(&self, scene: &mut Scene) -> Result<()> {
        let root = self.parts.root;
        for (kind, enabled) in [(SignalKind::PointerEnter, true), (SignalKind::PointerLeave, false)] {
            scene.on(self.parts.corner.node(), kind, move |scene, _| {
                scene.toggle_class(root, classes::TABLE_HIGHLIGHTED, enabled);
            })?;
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Highlighting
    // -------------------------------------------------------------------------

    /// Highlight every body cell of a column plus its header.
    pub fn highlight_column(&self, scene: &mut Scene, index: usize, enabled: bool) -> Result<()> {
        let key = self.read().column_key(index)?;
        self.mark_column(scene, key, enabled);
        Ok(())
    }

    /// Highlight a body row plus its row-number cell.
    pub fn highlight_row(&self, scene: &mut Scene, index: usize, enabled: bool) -> Result<()> {
        let key = self.read().row_key(index)?;
        self.mark_row(scene, key, enabled);
        Ok(())
    }

    fn mark_column(&self, scene: &mut Scene, key: ColumnKey, enabled: bool) {
        let (header, cells) = {
            let state = self.read();
            let Some(entry) = state.columns.get(&key) else {
                warn!("table {}: highlight on a removed column", self.id);
                return;
            };
            (entry.header.clone(), state.column_cells(key))
        };
        header.header().highlight(scene, enabled);
        for cell in cells {
            cell.highlight(scene, enabled);
        }
    }

    fn mark_row(&self, scene: &mut Scene, key: RowKey, enabled: bool) {
        let state = self.read();
        let Some(entry) = state.rows.get(&key) else {
            warn!("table {}: highlight on a removed row", self.id);
            return;
        };
        entry.row.highlight(scene, enabled);
        entry.header.header().highlight(scene, enabled);
    }

    // -------------------------------------------------------------------------
    // Scrolling and layout
    // -------------------------------------------------------------------------

    /// Mirror the body's scrollers onto the passive regions and re-run the
    /// layout pass whenever the relevant geometry changes.
    pub(super) fn synchronize_scrolling(&self, scene: &mut Scene) -> Result<()> {
        let area = self.parts.content_area;
        let body = area.body_region();
        let header = self.parts.header_region;
        let horizontal = scene.horizontal_scroller(body)?;
        let vertical = scene.vertical_scroller(body)?;

        scene.on(horizontal, SignalKind::ValueChanged, move |scene, event| {
            let Signal::ValueChanged { value } = event.signal() else {
                return;
            };
            let Ok(current) = scene.scroll_offset(header) else {
                return;
            };
            trace!("mirroring horizontal offset {value} onto the header");
            if let Err(e) = scene.set_scroll_offset(header, Vec2::new(value, current.y)) {
                warn!("header scroll mirroring failed: {e}");
            }
        })?;

        scene.on(vertical, SignalKind::ValueChanged, move |scene, event| {
            let Signal::ValueChanged { value } = event.signal() else {
                return;
            };
            trace!("mirroring vertical offset {value} onto the row numbers");
            if let Err(e) = area.set_row_number_scroll_offset(scene, value) {
                warn!("row number scroll mirroring failed: {e}");
            }
        })?;

        for observed in [self.parts.root, horizontal, vertical] {
            let table = self.clone();
            scene.on(observed, SignalKind::GeometryChanged, move |scene, _| {
                if let Err(e) = table.layout(scene) {
                    warn!("table {}: layout failed: {e}", table.id);
                }
            })?;
        }
        Ok(())
    }

    /// Push resolved scroller sizes into the spacers. Runs on every
    /// relevant geometry change; call it directly after a layout pass that
    /// didn't flush signals.
    pub fn layout(&self, scene: &mut Scene) -> Result<()> {
        let width = self.parts.content_area.vertical_scroller_width(scene)?;
        scene.style_mut(self.parts.header_spacer)?.width = Some(width);
        self.parts.content_area.layout(scene)
    }

    // -------------------------------------------------------------------------
    // Flexible row heights
    // -------------------------------------------------------------------------

    /// Track the geometry of a content node for its row. A node observed
    /// before is unhooked first so it only ever reports to one row.
    pub(super) fn observe_content(&self, scene: &mut Scene, content: NodeId, row: RowKey) -> Result<()> {
        let mut state = self.write();
        state.content_observers.retain(|node, _| scene.contains(*node));
        if let Some(previous) = state.content_observers.remove(&content) {
            scene.off(content, previous);
        }
        let table = self.clone();
        let handler = scene.on(content, SignalKind::GeometryChanged, move |scene, _| {
            if let Err(e) = table.update_row_height(scene, row) {
                warn!("table {}: row height update failed: {e}", table.id);
            }
        })?;
        state.content_observers.insert(content, handler);
        Ok(())
    }

    /// Resize every row to its tallest cell. Does nothing unless the table
    /// uses flexible row heights.
    pub fn synchronize_row_heights(&self, scene: &mut Scene) -> Result<()> {
        let keys = {
            let state = self.read();
            if !state.flexible_row_heights {
                return Ok(());
            }
            state.row_order.clone()
        };
        for key in keys {
            self.update_row_height(scene, key)?;
        }
        Ok(())
    }

    fn update_row_height(&self, scene: &mut Scene, key: RowKey) -> Result<()> {
        let mut state = self.write();
        if !state.flexible_row_heights {
            return Ok(());
        }
        let policy = state.height_policy();
        let Some(entry) = state.rows.get_mut(&key) else {
            trace!("table {}: height update for a removed row", self.id);
            return Ok(());
        };

        let height = entry
            .cells
            .values()
            .map(|cell| scene.resolved_size(cell.node()).height)
            .chain(std::iter::once(scene.resolved_size(entry.header.node()).height))
            .fold(0.0_f32, f32::max);

        scene.style_mut(entry.row.node())?.height = Some(height);
        entry.header.header().set_row_height(scene, height, policy)?;
        entry.height = height;
        trace!("table {}: row height {height}", self.id);
        Ok(())
    }
}
