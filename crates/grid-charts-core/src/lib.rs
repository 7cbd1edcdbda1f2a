//! # grid-charts-core
//!
//! Grid model used by the grid-charts layout engine.
//!
//! This crate provides the worksheet-level building blocks:
//! - [`CellAddress`] - parses A1 notation into zero-based coordinates
//! - [`CellRange`] - a rectangular block of cells
//! - [`CellValue`] - scalar cell values (numbers, strings, booleans, dates)
//! - [`Style`] and [`StylePool`] - cell formats and the handle allocator
//! - [`Worksheet`], [`Workbook`] - ownership of cells, merges and tables
//!
//! ## Example
//!
//! ```rust
//! use grid_charts_core::{CellAddress, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.sheet_mut("Sheet1").unwrap();
//! sheet.set_cell_value("B5", "Hello").unwrap();
//!
//! let addr = CellAddress::parse("B5").unwrap();
//! assert_eq!((addr.row, addr.col), (4, 1));
//! ```

pub mod cell;
pub mod error;
pub mod style;
pub mod table;
pub mod workbook;
pub mod worksheet;

pub use cell::{CellAddress, CellData, CellRange, CellValue};
pub use error::{Error, Result};
pub use style::{Color, FormatAllocator, FormatId, NumberFormat, Style, StylePool};
pub use table::{TableColumn, TableDefinition};
pub use workbook::{sanitize_sheet_name, Workbook};
pub use worksheet::{check_bounds, Worksheet};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u32 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
