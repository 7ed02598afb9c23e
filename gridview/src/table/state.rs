//! Table bookkeeping: rows and columns keyed by stable identity, with
//! logical order kept separately.

use std::collections::HashMap;

use griddom::{HandlerId, NodeId};

use crate::cell::{ColumnHeaderCell, RowHeaderCell, TableCell};
use crate::column::ColumnDefinition;
use crate::config::TableConfig;
use crate::error::{Result, TableError};
use crate::key::{ColumnKey, RowKey};
use crate::row::{HeightPolicy, Row};

#[derive(Debug, Clone)]
pub(super) struct ColumnEntry {
    pub definition: ColumnDefinition,
    pub header: ColumnHeaderCell,
}

#[derive(Debug, Clone)]
pub(super) struct RowEntry {
    pub row: Row,
    pub header: RowHeaderCell,
    /// Body cells by column key. Every current column has exactly one.
    pub cells: HashMap<ColumnKey, TableCell>,
    /// Height last applied to the row.
    pub height: f32,
}

#[derive(Debug)]
pub(super) struct TableState {
    /// Sizing defaults and the style sheet name.
    pub config: TableConfig,
    /// Definition used for the row-number column header and width.
    pub row_number_column: ColumnDefinition,
    /// Whether the row-number pane is currently shown.
    pub include_row_numbers: bool,
    /// Rows follow their tallest cell instead of a fixed height.
    pub flexible_row_heights: bool,

    /// Data columns by key.
    pub columns: HashMap<ColumnKey, ColumnEntry>,
    /// Column keys in display order.
    pub column_order: Vec<ColumnKey>,
    /// Rows by key.
    pub rows: HashMap<RowKey, RowEntry>,
    /// Row keys in display order.
    pub row_order: Vec<RowKey>,
    /// Geometry handler registered on each observed cell content node.
    pub content_observers: HashMap<NodeId, HandlerId>,
}

impl TableState {
    pub fn new(
        config: TableConfig,
        row_number_column: ColumnDefinition,
        include_row_numbers: bool,
        flexible_row_heights: bool,
    ) -> Self {
        Self {
            config,
            row_number_column,
            include_row_numbers,
            flexible_row_heights,
            columns: HashMap::new(),
            column_order: Vec::new(),
            rows: HashMap::new(),
            row_order: Vec::new(),
            content_observers: HashMap::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.row_order.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_order.len()
    }

    pub fn height_policy(&self) -> HeightPolicy {
        HeightPolicy::from_flexible(self.flexible_row_heights)
    }

    pub fn column_width(&self, definition: &ColumnDefinition) -> f32 {
        definition.resolved_width(self.config.default_column_width)
    }

    pub fn row_number_width(&self) -> f32 {
        self.column_width(&self.row_number_column)
    }

    /// Sum of all data column widths.
    pub fn total_width(&self) -> f32 {
        self.column_order
            .iter()
            .filter_map(|key| self.columns.get(key))
            .map(|entry| self.column_width(&entry.definition))
            .sum()
    }

    // -------------------------------------------------------------------------
    // Index validation
    // -------------------------------------------------------------------------

    pub fn row_key(&self, index: usize) -> Result<RowKey> {
        self.row_order
            .get(index)
            .copied()
            .ok_or(TableError::RowOutOfRange {
                index,
                len: self.row_count(),
            })
    }

    pub fn column_key(&self, index: usize) -> Result<ColumnKey> {
        self.column_order
            .get(index)
            .copied()
            .ok_or(TableError::ColumnOutOfRange {
                index,
                len: self.column_count(),
            })
    }

    pub fn row_entry(&self, index: usize) -> Result<&RowEntry> {
        let key = self.row_key(index)?;
        self.rows.get(&key).ok_or(TableError::RowOutOfRange {
            index,
            len: self.row_count(),
        })
    }

    pub fn column_entry(&self, index: usize) -> Result<&ColumnEntry> {
        let key = self.column_key(index)?;
        self.columns.get(&key).ok_or(TableError::ColumnOutOfRange {
            index,
            len: self.column_count(),
        })
    }

    pub fn cell(&self, row: usize, column: usize) -> Result<&TableCell> {
        let column_key = self.column_key(column)?;
        let entry = self.row_entry(row)?;
        entry.cells.get(&column_key).ok_or(TableError::ColumnOutOfRange {
            index: column,
            len: self.column_count(),
        })
    }

    // -------------------------------------------------------------------------
    // Derived positions
    // -------------------------------------------------------------------------

    pub fn row_position(&self, key: RowKey) -> Option<usize> {
        self.row_order.iter().position(|k| *k == key)
    }

    pub fn column_position(&self, key: ColumnKey) -> Option<usize> {
        self.column_order.iter().position(|k| *k == key)
    }

    /// Every body cell of a column, in row order.
    pub fn column_cells(&self, key: ColumnKey) -> Vec<TableCell> {
        self.row_order
            .iter()
            .filter_map(|row| self.rows.get(row))
            .filter_map(|entry| entry.cells.get(&key).cloned())
            .collect()
    }

    /// Every body cell of a row, in column order.
    pub fn row_cells(&self, entry: &RowEntry) -> Vec<TableCell> {
        self.column_order
            .iter()
            .filter_map(|key| entry.cells.get(key).cloned())
            .collect()
    }

    /// Rows in display order.
    pub fn ordered_rows(&self) -> impl Iterator<Item = (usize, &RowEntry)> {
        self.row_order
            .iter()
            .filter_map(|key| self.rows.get(key))
            .enumerate()
    }
}
