//! # grid-charts
//!
//! Lays tabular data out on worksheets and binds it to chart series.
//!
//! ## Features
//!
//! - A1 anchors resolved to zero-based coordinates
//! - Region layouts whose range notation follows every shift
//! - Merged title rows and structured table promotion
//! - Coordinate or `table[column]` references, whichever the region supports
//! - Line, bar, doughnut and scatter chart configuration
//! - CSV input (`csv` feature, on by default)
//!
//! ## Example
//!
//! ```rust
//! use grid_charts::prelude::*;
//!
//! let source = TabularSource::new(vec![
//!     Column::new("Category", ["A", "B", "C", "D"]),
//!     Column::new("Value", [10, 23, 7, 15]),
//! ])?;
//!
//! let mut workbook = Workbook::new();
//! let mut table = DataTable::new("Sales", source).with_sheet("Sheet1");
//!
//! let spec = ChartSpec::new("Sales", ChartKind::Bar(BarChart::default()))
//!     .with_write_options(WriteOptions::default().with_table(true));
//! let chart = workbook.add_chart(&spec, &mut table)?;
//!
//! assert_eq!(chart.series[0].values.to_formula(), "sales[Value]");
//! # Ok::<(), grid_charts::ChartError>(())
//! ```

pub mod prelude;
pub mod placement;

pub use placement::{ChartSpec, WorkbookChartExt};

// Re-export core types
pub use grid_charts_core::{
    sanitize_sheet_name, CellAddress, CellRange, CellValue, Color, Error, FormatAllocator,
    FormatId, NumberFormat, Result, Style, StylePool, TableColumn, TableDefinition, Workbook,
    Worksheet, MAX_COLS, MAX_ROWS, MAX_SHEET_NAME_LEN,
};

// Re-export layout types
pub use grid_charts_layout::{
    check_title, get_reference, insert_title, promote, series_name_reference, table_definition,
    write_source, CellReference, Column, DataTable, Layout, LayoutError, LayoutState,
    ReferenceBuilder, ResolvedStyles, RoleBudget, SeriesReference, SeriesRole, Shape, StyleSpec,
    TableBinding, TabularSource, WriteOptions,
};

// Re-export chart types
pub use grid_charts_chart::{
    Axis, AxisPosition, BarChart, BarOrientation, Chart, ChartAnchor, ChartBinder, ChartBuilder,
    ChartError, ChartKind, ChartOptions, ChartType, ColorMap, ColorPalette, DataSeries,
    DonutChart, Legend, LegendPosition, LineChart, MoneyAxis, PointFill, ScatterChart,
    SeriesBinding,
};

// Re-export I/O types
#[cfg(feature = "csv")]
pub use grid_charts_csv::{CsvError, CsvReadOptions, CsvReader};
