//! Prelude module - common imports for grid-charts users
//!
//! ```rust
//! use grid_charts::prelude::*;
//! ```

pub use crate::{
    // Chart types
    BarChart,
    BarOrientation,
    CellAddress,
    CellValue,
    Chart,
    ChartBuilder,
    ChartError,
    ChartKind,
    ChartSpec,
    ChartType,
    Color,
    ColorMap,
    ColorPalette,
    // Layout types
    Column,
    DataTable,
    DonutChart,
    Layout,
    LayoutError,
    LineChart,
    MoneyAxis,
    NumberFormat,
    ScatterChart,
    SeriesReference,
    SeriesRole,
    Style,
    StyleSpec,
    TabularSource,
    // Main types
    Workbook,
    // Extension traits
    WorkbookChartExt,
    Worksheet,
    WriteOptions,
};

#[cfg(feature = "csv")]
pub use crate::{CsvReadOptions, CsvReader};
