use griddom::SceneError;
use thiserror::Error;

/// Errors raised by table operations.
///
/// Every variant is raised before the offending operation mutates anything,
/// so a failed call leaves the table as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    /// A constructor or registration argument is unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("row index {index} out of range (row count {len})")]
    RowOutOfRange { index: usize, len: usize },

    #[error("column index {index} out of range (column count {len})")]
    ColumnOutOfRange { index: usize, len: usize },

    /// The operation needs at least one row.
    #[error("the table has no rows")]
    NoRows,

    #[error(transparent)]
    Scene(#[from] SceneError),
}

pub type Result<T> = std::result::Result<T, TableError>;
