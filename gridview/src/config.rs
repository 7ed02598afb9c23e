//! Table configuration.

use serde::{Deserialize, Serialize};

/// Width used for columns that don't specify one.
pub const DEFAULT_COLUMN_WIDTH: f32 = 100.0;
/// Height of header rows and of body rows without an explicit height.
pub const DEFAULT_ROW_HEIGHT: f32 = 30.0;
/// Data columns created by [`Table::with_defaults`](crate::Table::with_defaults).
pub const DEFAULT_COLUMN_COUNT: usize = 2;

/// Ambient defaults shared by every table instance.
///
/// Deserializable so hosts can keep it next to the rest of their settings;
/// missing fields take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Width applied when a column definition has none.
    pub default_column_width: f32,

    /// Row height applied when no per-row height was given.
    pub default_row_height: f32,

    /// Number of generated data columns for the parameterless constructor.
    pub default_column_count: usize,

    /// Label of the row-number column's corner cell.
    pub row_number_label: String,

    /// Style sheet attached to the table root.
    pub style_sheet: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_column_width: DEFAULT_COLUMN_WIDTH,
            default_row_height: DEFAULT_ROW_HEIGHT,
            default_column_count: DEFAULT_COLUMN_COUNT,
            row_number_label: "#".to_string(),
            style_sheet: "grid-table".to_string(),
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback column width.
    pub fn default_column_width(mut self, width: f32) -> Self {
        self.default_column_width = width;
        self
    }

    /// Set the fallback row height.
    pub fn default_row_height(mut self, height: f32) -> Self {
        self.default_row_height = height;
        self
    }

    pub fn default_column_count(mut self, count: usize) -> Self {
        self.default_column_count = count;
        self
    }

    pub fn row_number_label(mut self, label: impl Into<String>) -> Self {
        self.row_number_label = label.into();
        self
    }

    pub fn style_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.style_sheet = sheet.into();
        self
    }
}
