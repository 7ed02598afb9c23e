//! Constructor parameters for [`Table`](super::Table).

use std::collections::HashMap;

use crate::column::ColumnDefinition;
use crate::config::TableConfig;

/// Everything [`Table::new`](super::Table::new) needs.
///
/// ```ignore
/// let options = TableOptions::new(3, 2)
///     .row_height(0, 48.0)
///     .flexible_row_heights(true);
/// ```
#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Rows created up front.
    pub row_count: usize,
    /// Generated data columns, used when `columns` is `None`. Must be at
    /// least 1 in that case.
    pub column_count: usize,
    /// Explicit data columns.
    pub columns: Option<Vec<ColumnDefinition>>,
    /// Heights for specific initial rows, by position.
    pub row_heights: HashMap<usize, f32>,
    pub flexible_row_heights: bool,
    pub include_row_numbers: bool,
    /// Definition of the row-number column. Defaults to the configured
    /// label and width.
    pub row_number_column: Option<ColumnDefinition>,
    pub config: TableConfig,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            row_count: 0,
            column_count: 0,
            columns: None,
            row_heights: HashMap::new(),
            flexible_row_heights: false,
            include_row_numbers: true,
            row_number_column: None,
            config: TableConfig::default(),
        }
    }
}

impl TableOptions {
    pub fn new(row_count: usize, column_count: usize) -> Self {
        Self {
            row_count,
            column_count,
            ..Self::default()
        }
    }

    /// Use explicit column definitions instead of generated ones.
    pub fn columns(mut self, columns: Vec<ColumnDefinition>) -> Self {
        self.columns = Some(columns);
        self
    }

    pub fn row_height(mut self, row: usize, height: f32) -> Self {
        self.row_heights.insert(row, height);
        self
    }

    pub fn flexible_row_heights(mut self, flexible: bool) -> Self {
        self.flexible_row_heights = flexible;
        self
    }

    pub fn row_numbers(mut self, include: bool) -> Self {
        self.include_row_numbers = include;
        self
    }

    pub fn row_number_column(mut self, definition: ColumnDefinition) -> Self {
        self.row_number_column = Some(definition);
        self
    }

    pub fn config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }
}
