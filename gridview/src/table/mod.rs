//! The table: a frozen header row, a frozen row-number column and a
//! scrollable body kept in lockstep.
//!
//! ```text
//! root
//! ├── top row:      [corner] [header region →] [spacer]
//! └── content area: [row-number region ↓ + spacer] [body region ↔]
//! ```
//!
//! Structural state lives behind `Arc<RwLock<..>>` so that scene signal
//! handlers can hold their own handle to the table.

mod interaction;
mod options;
mod state;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use griddom::{FlexDirection, NodeId, Scene, SceneError};
use log::debug;

use crate::cell::{CellKind, ColumnHeaderCell, HeaderCell, RowHeaderCell, TableCell};
use crate::classes;
use crate::column::ColumnDefinition;
use crate::config::TableConfig;
use crate::content_area::ContentArea;
use crate::error::{Result, TableError};
use crate::events::Listeners;
use crate::key::{ColumnKey, RowKey};
use crate::row::Row;
use crate::scroll_region::{Interaction, ScrollRegion};

pub use options::TableOptions;
use state::{ColumnEntry, RowEntry, TableState};

/// Initial content for a new row, keyed by data column index.
pub type CellContents = HashMap<usize, NodeId>;

/// Unique identifier for a Table instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__grid_table_{}", self.0)
    }
}

/// Nodes that exist for the table's whole life.
#[derive(Debug, Clone)]
struct Parts {
    root: NodeId,
    top_row: NodeId,
    corner: HeaderCell,
    header_region: NodeId,
    header_spacer: NodeId,
    content_area: ContentArea,
}

/// Spreadsheet-style grid.
///
/// Cloning is cheap and yields another handle to the same table. All
/// operations take the [`Scene`] the table was built in.
#[derive(Debug, Clone)]
pub struct Table {
    id: TableId,
    parts: Parts,
    state: Arc<RwLock<TableState>>,
    listeners: Arc<Listeners>,
}

impl Table {
    /// Build a table into `scene`. The result is detached; attach
    /// [`root`](Self::root) wherever it belongs.
    pub fn new(scene: &mut Scene, options: TableOptions) -> Result<Self> {
        let TableOptions {
            row_count,
            column_count,
            columns,
            row_heights,
            flexible_row_heights,
            include_row_numbers,
            row_number_column,
            config,
        } = options;

        let columns = match columns {
            Some(columns) => columns,
            None if column_count < 1 => {
                return Err(TableError::InvalidArgument(format!(
                    "column count must be at least 1 without explicit columns, got {column_count}"
                )));
            }
            None => (1..=column_count)
                .map(|i| ColumnDefinition::new(format!("Column {i}")))
                .collect(),
        };
        let row_number_column = row_number_column
            .unwrap_or_else(|| ColumnDefinition::new(config.row_number_label.clone()));

        let parts = Self::build_frame(scene, &config, &row_number_column)?;
        let table = Self {
            id: TableId::new(),
            parts,
            state: Arc::new(RwLock::new(TableState::new(
                config,
                row_number_column,
                include_row_numbers,
                flexible_row_heights,
            ))),
            listeners: Arc::new(Listeners::default()),
        };

        for definition in columns {
            table.push_column(scene, definition)?;
        }
        for position in 0..row_count {
            table.push_row(scene, row_heights.get(&position).copied(), CellContents::new())?;
        }

        table.synchronize_scrolling(scene)?;
        table.wire_corner(scene)?;
        if include_row_numbers {
            table.show_row_numbers(scene, None)?;
        } else {
            table.hide_row_numbers(scene);
        }

        debug!(
            "built table {} with {} rows and {} columns",
            table.id,
            table.row_count(),
            table.column_count()
        );
        Ok(table)
    }

    /// A table with the configured default column count, no rows and the
    /// row numbers hidden.
    pub fn with_defaults(scene: &mut Scene) -> Result<Self> {
        let config = TableConfig::default();
        let options = TableOptions::new(0, config.default_column_count)
            .row_numbers(false)
            .config(config);
        Self::new(scene, options)
    }

    fn build_frame(
        scene: &mut Scene,
        config: &TableConfig,
        row_number_column: &ColumnDefinition,
    ) -> Result<Parts> {
        let root = scene.element();
        scene.add_class(root, classes::TABLE);
        scene.add_style_sheet(root, &config.style_sheet)?;
        scene.style_mut(root)?.flex_direction = Some(FlexDirection::Column);

        let top_row = scene.element();
        scene.add_class(top_row, classes::TOP_ROW);
        let style = scene.style_mut(top_row)?;
        style.flex_direction = Some(FlexDirection::Row);
        style.flex_shrink = Some(0.0);

        let corner = HeaderCell::new(
            scene,
            CellKind::Corner,
            &row_number_column.label,
            row_number_column.resolved_width(config.default_column_width),
            config.default_row_height,
        )?;
        let header_region = ScrollRegion::horizontal(scene, Interaction::Passive, true)?;
        scene.style_mut(header_region)?.flex_grow = Some(1.0);
        let header_spacer = scene.element();
        scene.style_mut(header_spacer)?.flex_shrink = Some(0.0);

        scene.add_child(top_row, corner.node())?;
        scene.add_child(top_row, header_region)?;
        scene.add_child(top_row, header_spacer)?;

        let content_area = ContentArea::new(scene)?;
        scene.add_child(root, top_row)?;
        scene.add_child(root, content_area.node())?;

        Ok(Parts {
            root,
            top_row,
            corner,
            header_region,
            header_spacer,
            content_area,
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, TableState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, TableState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    // -------------------------------------------------------------------------
    // Parts
    // -------------------------------------------------------------------------

    pub fn id(&self) -> TableId {
        self.id
    }

    /// The table's root node.
    pub fn root(&self) -> NodeId {
        self.parts.root
    }

    pub fn top_row(&self) -> NodeId {
        self.parts.top_row
    }

    /// Top-left cell above the row numbers.
    pub fn corner_cell(&self) -> &HeaderCell {
        &self.parts.corner
    }

    /// The header scroll region holding the column header cells.
    pub fn header_region(&self) -> NodeId {
        self.parts.header_region
    }

    pub fn header_spacer(&self) -> NodeId {
        self.parts.header_spacer
    }

    pub fn content_area(&self) -> &ContentArea {
        &self.parts.content_area
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    pub fn row_count(&self) -> usize {
        self.read().row_count()
    }

    /// Number of data columns. The row-number column is not counted.
    pub fn column_count(&self) -> usize {
        self.read().column_count()
    }

    pub fn includes_row_numbers(&self) -> bool {
        self.read().include_row_numbers
    }

    pub fn flexible_row_heights(&self) -> bool {
        self.read().flexible_row_heights
    }

    pub fn config(&self) -> TableConfig {
        self.read().config.clone()
    }

    pub fn row_number_column(&self) -> ColumnDefinition {
        self.read().row_number_column.clone()
    }

    pub fn column(&self, index: usize) -> Result<ColumnDefinition> {
        Ok(self.read().column_entry(index)?.definition.clone())
    }

    /// Data column definitions in order.
    pub fn columns(&self) -> Vec<ColumnDefinition> {
        let state = self.read();
        state
            .column_order
            .iter()
            .filter_map(|key| state.columns.get(key))
            .map(|entry| entry.definition.clone())
            .collect()
    }

    pub fn cell(&self, row: usize, column: usize) -> Result<TableCell> {
        Ok(self.read().cell(row, column)?.clone())
    }

    /// The row container at `index`.
    pub fn row(&self, index: usize) -> Result<Row> {
        let state = self.read();
        if state.row_count() == 0 {
            return Err(TableError::NoRows);
        }
        Ok(state.row_entry(index)?.row)
    }

    /// The body cells of a row, in column order.
    pub fn row_cells(&self, index: usize) -> Result<Vec<TableCell>> {
        let state = self.read();
        if state.row_count() == 0 {
            return Err(TableError::NoRows);
        }
        let entry = state.row_entry(index)?;
        Ok(state.row_cells(entry))
    }

    /// The body cells of a column, in row order.
    pub fn column_cells(&self, index: usize) -> Result<Vec<TableCell>> {
        let state = self.read();
        if state.row_count() == 0 {
            return Err(TableError::NoRows);
        }
        let key = state.column_key(index)?;
        Ok(state.column_cells(key))
    }

    pub fn row_header(&self, index: usize) -> Result<RowHeaderCell> {
        Ok(self.read().row_entry(index)?.header.clone())
    }

    pub fn column_header(&self, index: usize) -> Result<ColumnHeaderCell> {
        Ok(self.read().column_entry(index)?.header.clone())
    }

    /// Current `(row, column)` of a cell, or `None` once it was removed.
    pub fn locate_cell(&self, cell: &TableCell) -> Option<(usize, usize)> {
        let state = self.read();
        Some((
            state.row_position(cell.row_key())?,
            state.column_position(cell.column_key())?,
        ))
    }

    // -------------------------------------------------------------------------
    // Cell content
    // -------------------------------------------------------------------------

    /// Replace the content of a cell. Previous content is despawned.
    pub fn set_cell_content(
        &self,
        scene: &mut Scene,
        row: usize,
        column: usize,
        content: NodeId,
    ) -> Result<()> {
        let (cell, flexible) = {
            let state = self.read();
            (state.cell(row, column)?.clone(), state.flexible_row_heights)
        };
        scene.node(content)?;
        if scene.is_ancestor_or_self(content, cell.node()) {
            return Err(SceneError::CyclicInsert {
                parent: cell.node(),
                child: content,
            }
            .into());
        }

        scene.remove_child(cell.node(), content)?;
        scene.clear(cell.node())?;
        scene.add_child(cell.node(), content)?;
        if flexible {
            self.observe_content(scene, content, cell.row_key())?;
        }
        debug!("table {}: set content of cell ({row}, {column})", self.id);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Append a row. `contents` maps data column indices to initial
    /// content. Returns the new row's index.
    pub fn add_row(&self, scene: &mut Scene, contents: CellContents) -> Result<usize> {
        {
            let state = self.read();
            for &column in contents.keys() {
                state.column_key(column)?;
            }
        }
        let body = self.parts.content_area.body_content(scene)?;
        for &content in contents.values() {
            scene.node(content)?;
            if scene.is_ancestor_or_self(content, body) {
                return Err(SceneError::CyclicInsert {
                    parent: body,
                    child: content,
                }
                .into());
            }
        }
        self.push_row(scene, None, contents)
    }

    fn push_row(
        &self,
        scene: &mut Scene,
        height: Option<f32>,
        contents: CellContents,
    ) -> Result<usize> {
        let mut state = self.write();
        let position = state.row_count();
        let height = height.unwrap_or(state.config.default_row_height);
        let policy = state.height_policy();
        let key = RowKey::next();

        let row = Row::new(scene, position)?;
        row.set_row_height(scene, height, policy)?;

        let mut cells = HashMap::with_capacity(state.column_count());
        let mut observed = Vec::new();
        for (index, column_key) in state.column_order.iter().enumerate() {
            let Some(column) = state.columns.get(column_key) else {
                continue;
            };
            let cell = TableCell::new(scene, key, *column_key)?;
            cell.set_width(scene, state.column_width(&column.definition))?;
            cell.set_row_height(scene, height, policy)?;
            if let Some(&content) = contents.get(&index) {
                scene.add_child(cell.node(), content)?;
                observed.push(content);
            }
            scene.add_child(row.node(), cell.node())?;
            self.wire_cell(scene, &cell)?;
            cells.insert(*column_key, cell);
        }
        row.set_row_width(scene, state.total_width())?;
        let body = self.parts.content_area.body_content(scene)?;
        scene.add_child(body, row.node())?;

        let header = RowHeaderCell::new(scene, key, position, state.row_number_width(), height)?;
        header.header().set_row_height(scene, height, policy)?;
        let numbers = self.parts.content_area.row_number_content(scene)?;
        scene.add_child(numbers, header.node())?;
        self.wire_row_header(scene, &header)?;

        state.rows.insert(
            key,
            RowEntry {
                row,
                header,
                cells,
                height,
            },
        );
        state.row_order.push(key);
        let flexible = state.flexible_row_heights;
        drop(state);

        if flexible {
            for content in observed {
                self.observe_content(scene, content, key)?;
            }
        }
        debug!("table {}: added row {position}", self.id);
        Ok(position)
    }

    /// Remove a row from the body and the row numbers. Rows below it move
    /// up and get their parity and number refreshed.
    pub fn remove_row(&self, scene: &mut Scene, index: usize) -> Result<()> {
        let mut state = self.write();
        let key = state.row_key(index)?;
        state.row_order.remove(index);
        if let Some(entry) = state.rows.remove(&key) {
            scene.despawn(entry.row.node())?;
            scene.despawn(entry.header.node())?;
        }

        for (position, entry) in state.ordered_rows().skip(index) {
            entry.row.set_parity(scene, position);
            entry.header.set_position(scene, position)?;
        }
        debug!("table {}: removed row {index}", self.id);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Columns
    // -------------------------------------------------------------------------

    /// Append a data column with one new cell per existing row. Returns the
    /// new column's index.
    pub fn add_column(&self, scene: &mut Scene, definition: ColumnDefinition) -> Result<usize> {
        let index = self.push_column(scene, definition)?;
        self.refresh_row_widths(scene)?;
        Ok(index)
    }

    fn push_column(&self, scene: &mut Scene, definition: ColumnDefinition) -> Result<usize> {
        let mut state = self.write();
        let key = ColumnKey::next();
        let width = state.column_width(&definition);
        let policy = state.height_policy();

        let header = ColumnHeaderCell::new(
            scene,
            key,
            &definition.label,
            width,
            state.config.default_row_height,
        )?;
        let header_content = scene.content_container(self.parts.header_region)?;
        scene.add_child(header_content, header.node())?;
        self.wire_column_header(scene, &header)?;

        let row_keys = state.row_order.clone();
        for row_key in row_keys {
            let Some(entry) = state.rows.get_mut(&row_key) else {
                continue;
            };
            let cell = TableCell::new(scene, row_key, key)?;
            cell.set_width(scene, width)?;
            cell.set_row_height(scene, entry.height, policy)?;
            scene.add_child(entry.row.node(), cell.node())?;
            self.wire_cell(scene, &cell)?;
            entry.cells.insert(key, cell);
        }

        state.columns.insert(key, ColumnEntry { definition, header });
        state.column_order.push(key);
        let index = state.column_count() - 1;
        debug!("table {}: added column {index}", self.id);
        Ok(index)
    }

    /// Remove a data column: its header and every row's cell.
    pub fn remove_column(&self, scene: &mut Scene, index: usize) -> Result<()> {
        {
            let mut state = self.write();
            let key = state.column_key(index)?;
            state.column_order.remove(index);
            if let Some(entry) = state.columns.remove(&key) {
                scene.despawn(entry.header.node())?;
            }
            for entry in state.rows.values_mut() {
                if let Some(cell) = entry.cells.remove(&key) {
                    scene.despawn(cell.node())?;
                }
            }
        }
        self.refresh_row_widths(scene)?;
        debug!("table {}: removed column {index}", self.id);
        Ok(())
    }

    /// Replace a column's label and width. An index past the end appends
    /// a new column instead. Returns the index the definition ended up at.
    pub fn set_column(
        &self,
        scene: &mut Scene,
        index: usize,
        definition: ColumnDefinition,
    ) -> Result<usize> {
        {
            let mut state = self.write();
            if let Ok(key) = state.column_key(index) {
                let width = state.column_width(&definition);
                let cells = state.column_cells(key);
                if let Some(entry) = state.columns.get_mut(&key) {
                    entry.header.header().set_label(scene, definition.label.clone())?;
                    entry.header.header().set_width(scene, width)?;
                    entry.definition = definition;
                }
                for cell in cells {
                    cell.set_width(scene, width)?;
                }
                drop(state);
                self.refresh_row_widths(scene)?;
                debug!("table {}: replaced column {index}", self.id);
                return Ok(index);
            }
        }
        self.add_column(scene, definition)
    }

    fn refresh_row_widths(&self, scene: &mut Scene) -> Result<()> {
        let state = self.read();
        let width = state.total_width();
        for (_, entry) in state.ordered_rows() {
            entry.row.set_row_width(scene, width)?;
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Row numbers
    // -------------------------------------------------------------------------

    /// Show the row-number column, optionally replacing its definition.
    pub fn show_row_numbers(
        &self,
        scene: &mut Scene,
        definition: Option<ColumnDefinition>,
    ) -> Result<()> {
        let mut state = self.write();
        state.include_row_numbers = true;

        if let Some(definition) = definition {
            state.row_number_column = definition;
            let width = state.row_number_width();
            let corner = &self.parts.corner;
            corner.set_label(scene, state.row_number_column.label.clone())?;
            corner.set_width(scene, width)?;
            for (_, entry) in state.ordered_rows() {
                entry.header.header().set_width(scene, width)?;
            }
        }

        scene.remove_class(self.parts.corner.node(), classes::CORNER_HIDDEN);
        self.parts.content_area.show_row_numbers(scene);
        Ok(())
    }

    /// Hide the row-number column. Its cells are kept.
    pub fn hide_row_numbers(&self, scene: &mut Scene) {
        self.write().include_row_numbers = false;
        scene.add_class(self.parts.corner.node(), classes::CORNER_HIDDEN);
        self.parts.content_area.hide_row_numbers(scene);
    }
}
