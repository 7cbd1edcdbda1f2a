//! Error types for grid-charts-chart

use grid_charts_layout::LayoutError;
use thiserror::Error;

/// Result type alias using [`ChartError`]
pub type Result<T> = std::result::Result<T, ChartError>;

/// Errors raised while binding or building a chart
#[derive(Debug, Error)]
pub enum ChartError {
    /// Layout, reference or grid error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Color text that is not `#RRGGBB`
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Chart requires a structured table but the source is plain cells
    #[error("Source {0} is not a table; write it with as_table enabled")]
    NotATable(String),
}

impl From<grid_charts_core::Error> for ChartError {
    fn from(err: grid_charts_core::Error) -> Self {
        ChartError::Layout(LayoutError::Core(err))
    }
}
