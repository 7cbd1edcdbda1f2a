//! Error types for grid-charts-layout

use thiserror::Error;

/// Result type alias using [`LayoutError`]
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors raised while laying out, promoting or referencing a region
///
/// All of these are contract violations; none are retried.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Shift or title insertion on a layout that was already promoted
    #[error("Layout {range} is promoted to table {table} and can no longer move")]
    LayoutFrozen { range: String, table: String },

    /// Promotion requested on a layout that is already a table
    #[error("Layout is already promoted to table {0}")]
    PromotionConflict(String),

    /// Reference, title or promotion requested before the layout has a worksheet
    #[error("Layout has not been written to a worksheet")]
    UnboundSource,

    /// The region was already written once
    #[error("Table {0} has already been written to a worksheet")]
    AlreadyWritten(String),

    /// More references of one role than the chart kind accepts
    #[error("Chart kind accepts at most {limit} {role} reference(s)")]
    UnsupportedReferenceRole { role: &'static str, limit: usize },

    /// Column offset past the last column of the region
    #[error("Column offset {offset} out of range for {columns} column(s)")]
    ColumnOffsetOutOfRange { offset: usize, columns: usize },

    /// Two source columns with the same name
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    /// Source columns of different lengths
    #[error("Column {column} has {found} values, expected {expected}")]
    RaggedColumns {
        column: String,
        expected: usize,
        found: usize,
    },

    /// Row shift that would leave the addressable grid
    #[error("Shifting rows by {delta} from row {start_row} leaves the grid")]
    ShiftOutOfBounds { delta: i64, start_row: u32 },

    /// Column name not present in the source
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// Grid model error (anchor parsing, sheet and table bookkeeping)
    #[error(transparent)]
    Core(#[from] grid_charts_core::Error),
}
