//! # grid-charts-csv
//!
//! Reads CSV text into a [`TabularSource`](grid_charts_layout::TabularSource).

mod error;
mod options;
mod reader;

pub use error::{CsvError, CsvResult};
pub use options::CsvReadOptions;
pub use reader::CsvReader;
