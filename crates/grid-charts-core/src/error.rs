//! Error types for grid-charts-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in grid-charts-core
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed A1-style cell notation
    #[error("Invalid anchor: {0}")]
    InvalidAnchor(String),

    /// Malformed range notation
    #[error("Invalid cell range: {0}")]
    InvalidRange(String),

    /// Row index out of bounds
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u32, u32),

    /// Sheet not found by name
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Invalid sheet name
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Duplicate sheet name
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),

    /// Table name is empty or contains characters a structured reference cannot carry
    #[error("Invalid table name: {0}")]
    InvalidTableName(String),

    /// Table name already used somewhere in the workbook
    #[error("Table name already exists: {0}")]
    DuplicateTableName(String),

    /// Table range overlaps another table on the same sheet
    #[error("Table {name} overlaps existing table {existing}")]
    TableOverlap { name: String, existing: String },

    /// Merged cell conflict
    #[error("Cell {0} is part of a merged region")]
    MergedCellConflict(String),

    /// Cells a region would move into or be written over are already in use
    #[error("Cells {0} are already in use")]
    OccupiedCells(String),

    /// The workbook has been closed and can no longer be mutated
    #[error("Workbook is closed")]
    WorkbookClosed,

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
