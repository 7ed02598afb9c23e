//! Spreadsheet-style grid widget for the `griddom` scene graph.
//!
//! A [`Table`] is three scroll regions arranged as frozen panes: a header
//! row that only follows the body horizontally, a row-number column that
//! only follows it vertically, and the body itself, which is the only
//! region the user scrolls. Rows and columns can be added and removed at
//! any time; hovering headers highlights the matching column or row, and
//! clicks are reported through listeners as positional events.
//!
//! [`BoundTable`] layers a record-per-row model on top.

pub mod binding;
pub mod cell;
pub mod classes;
pub mod column;
pub mod config;
pub mod content_area;
pub mod error;
pub mod events;
pub mod key;
pub mod row;
pub mod scroll_region;
pub mod table;

pub use binding::{BoundTable, CellFactory, ColumnBinder};
pub use cell::{
    CellKind, ColumnHeaderCell, HeaderCell, PointerInput, PointerState, RowHeaderCell, TableCell,
    visual_classes,
};
pub use column::ColumnDefinition;
pub use config::TableConfig;
pub use content_area::ContentArea;
pub use error::{Result, TableError};
pub use events::{CellClick, ColumnHeaderClick, Listener, RowHeaderClick};
pub use key::{ColumnKey, RowKey};
pub use row::{HeightPolicy, Row};
pub use scroll_region::{Interaction, ScrollRegion};
pub use table::{CellContents, Table, TableId, TableOptions};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::binding::{BoundTable, ColumnBinder};
    pub use crate::column::ColumnDefinition;
    pub use crate::config::TableConfig;
    pub use crate::error::{Result, TableError};
    pub use crate::events::{CellClick, ColumnHeaderClick, RowHeaderClick};
    pub use crate::table::{CellContents, Table, TableOptions};
}
