//! # grid-charts-layout
//!
//! Places tabular data on a worksheet and hands out references into it.
//!
//! The flow is one way: a [`TabularSource`] and an anchor give a [`Layout`];
//! the source is written, optionally titled and then optionally promoted to
//! a structured table; references are requested last.
//!
//! ## Example
//!
//! ```rust
//! use grid_charts_core::Workbook;
//! use grid_charts_layout::{Column, DataTable, SeriesRole, TabularSource, WriteOptions};
//!
//! let source = TabularSource::new(vec![
//!     Column::new("Category", ["A", "B", "C", "D"]),
//!     Column::new("Value", [10, 23, 7, 15]),
//! ])?;
//!
//! let mut workbook = Workbook::new();
//! let mut table = DataTable::new("Sales", source);
//! table.add_to_workbook(&mut workbook, "Sheet1", WriteOptions::default().with_title(false))?;
//!
//! let values = table.reference(1, SeriesRole::Value)?;
//! assert_eq!(values.to_formula(), "Sheet1!$B$2:$B$5");
//!
//! table.promote(&mut workbook)?;
//! assert_eq!(table.reference(1, SeriesRole::Value)?.to_formula(), "sales[Value]");
//! # Ok::<(), grid_charts_layout::LayoutError>(())
//! ```

pub mod error;
pub mod layout;
pub mod promote;
pub mod reference;
pub mod source;
pub mod style;
pub mod table;
pub mod title;
pub mod writer;

pub use error::{LayoutError, Result};
pub use layout::{Layout, LayoutState, Shape, TableBinding};
pub use promote::{promote, table_definition};
pub use reference::{
    get_reference, series_name_reference, CellReference, ReferenceBuilder, RoleBudget,
    SeriesReference, SeriesRole,
};
pub use source::{Column, TabularSource};
pub use style::{ResolvedStyles, StyleSpec};
pub use table::{DataTable, WriteOptions};
pub use title::{check_title, insert_title};
pub use writer::write_source;
