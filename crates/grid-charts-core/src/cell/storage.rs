//! Sparse cell storage
//!
//! Only non-empty cells are stored, in a row-major `BTreeMap` so iteration
//! follows sheet order.

use std::collections::BTreeMap;

use super::{CellRange, CellValue};
use crate::style::StylePool;

/// Complete data for a single cell
#[derive(Debug, Clone, PartialEq)]
pub struct CellData {
    /// The cell's value
    pub value: CellValue,
    /// Index into the style pool (0 = default style)
    pub style_index: u32,
}

impl CellData {
    /// Create a new cell with a value and default style
    pub fn new(value: CellValue) -> Self {
        Self {
            value,
            style_index: 0,
        }
    }

    /// Create a new cell with a value and style
    pub fn with_style(value: CellValue, style_index: u32) -> Self {
        Self { value, style_index }
    }

    /// Check if this cell is effectively empty (no value and default style)
    pub fn is_empty(&self) -> bool {
        self.value.is_empty() && self.style_index == 0
    }
}

/// Row-based sparse storage for worksheet cells
///
/// Structure: `BTreeMap<row_index, BTreeMap<col_index, CellData>>`
#[derive(Debug, Default)]
pub struct CellStorage {
    rows: BTreeMap<u32, BTreeMap<u32, CellData>>,
    style_pool: StylePool,
    merged_regions: Vec<CellRange>,
}

impl CellStorage {
    /// Create a new empty cell storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cell
    pub fn get(&self, row: u32, col: u32) -> Option<&CellData> {
        self.rows.get(&row).and_then(|r| r.get(&col))
    }

    /// Set a cell, removing it when the data is empty
    pub fn set(&mut self, row: u32, col: u32, data: CellData) {
        if data.is_empty() {
            self.remove(row, col);
        } else {
            self.rows.entry(row).or_default().insert(col, data);
        }
    }

    /// Set just the cell value (preserving style)
    pub fn set_value(&mut self, row: u32, col: u32, value: CellValue) {
        let style_index = self.get(row, col).map(|c| c.style_index).unwrap_or(0);
        self.set(row, col, CellData::with_style(value, style_index));
    }

    /// Remove a cell
    pub fn remove(&mut self, row: u32, col: u32) -> Option<CellData> {
        let row_map = self.rows.get_mut(&row)?;
        let removed = row_map.remove(&col);
        if row_map.is_empty() {
            self.rows.remove(&row);
        }
        removed
    }

    /// Move every cell of `range` down by `rows`, bottom row first
    ///
    /// Cells already sitting in the destination rows inside the range's
    /// columns are overwritten.
    pub fn move_block_down(&mut self, range: &CellRange, rows: u32) {
        if rows == 0 {
            return;
        }
        for row in (range.start.row..=range.end.row).rev() {
            for col in range.start.col..=range.end.col {
                let moved = self.remove(row, col);
                let target = row + rows;
                match moved {
                    Some(data) => self.set(target, col, data),
                    None => {
                        self.remove(target, col);
                    }
                }
            }
        }
    }

    /// Get the number of non-empty cells
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(|r| r.len()).sum()
    }

    /// Whether any cell of `range` holds a value or a non-default style
    pub fn any_in(&self, range: &CellRange) -> bool {
        self.rows
            .range(range.start.row..=range.end.row)
            .any(|(_, cols)| cols.range(range.start.col..=range.end.col).next().is_some())
    }

    /// Get merged regions
    pub fn merged_regions(&self) -> &[CellRange] {
        &self.merged_regions
    }

    /// Add a merged region
    pub fn add_merged_region(&mut self, range: CellRange) {
        self.merged_regions.push(range);
    }

    /// Get the style pool
    pub fn style_pool(&self) -> &StylePool {
        &self.style_pool
    }

    /// Get the style pool mutably
    pub fn style_pool_mut(&mut self) -> &mut StylePool {
        &mut self.style_pool
    }
}
