//! CSV error types

use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur while reading CSV input
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Header row has a blank column name
    #[error("Header column {0} is empty")]
    EmptyHeader(usize),

    /// The records do not form a valid source
    #[error("Layout error: {0}")]
    Layout(#[from] grid_charts_layout::LayoutError),
}
