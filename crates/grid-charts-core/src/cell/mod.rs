//! Cell-related types
//!
//! - [`CellAddress`] - a cell's location (e.g., "B5")
//! - [`CellRange`] - a block of cells (e.g., "A1:B4")
//! - [`CellValue`] - the scalar stored in a cell
//! - [`CellData`] - value plus style handle

mod address;
mod storage;
mod value;

pub use address::{CellAddress, CellRange};
pub use storage::{CellData, CellStorage};
pub use value::CellValue;
