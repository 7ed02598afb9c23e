use serde::{Deserialize, Serialize};

/// A column definition: header label plus an optional width.
///
/// When the width is unset the table's configured default applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Header text.
    pub label: String,
    /// Width in pixels, if fixed.
    #[serde(default)]
    pub width: Option<f32>,
}

impl ColumnDefinition {
    /// Create a column with the default width.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            width: None,
        }
    }

    /// Set an explicit width.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// The width to render with, falling back to `default`.
    pub fn resolved_width(&self, default: f32) -> f32 {
        self.width.unwrap_or(default)
    }
}
