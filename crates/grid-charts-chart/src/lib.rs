//! # grid-charts-chart
//!
//! Chart configuration for regions laid out by `grid-charts-layout`.
//!
//! [`ChartBinder`] resolves the category, value and series-name references
//! of a written region; a [`ChartKind`] turns them into a [`Chart`].

pub mod axis;
pub mod binder;
pub mod chart;
pub mod error;
pub mod kinds;
pub mod legend;
pub mod palette;
pub mod series;

pub use axis::{Axis, AxisPosition};
pub use binder::{ChartBinder, SeriesBinding};
pub use chart::{Chart, ChartAnchor, ChartType};
pub use error::{ChartError, Result};
pub use kinds::{
    BarChart, BarOrientation, ChartBuilder, ChartKind, ChartOptions, DonutChart, LineChart,
    ScatterChart,
};
pub use legend::{Legend, LegendPosition};
pub use palette::{ColorMap, ColorPalette, MoneyAxis};
pub use series::{DataSeries, PointFill};
