//! Worksheet type

use crate::cell::{CellAddress, CellData, CellRange, CellStorage, CellValue};
use crate::error::{Error, Result};
use crate::style::{FormatAllocator, FormatId, Style};
use crate::table::TableDefinition;
use crate::{MAX_COLS, MAX_ROWS};

/// A worksheet (single sheet in a workbook)
#[derive(Debug)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Cell storage, including the sheet's style pool
    cells: CellStorage,
    /// Structured tables declared on this sheet
    tables: Vec<TableDefinition>,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cells: CellStorage::new(),
            tables: Vec::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    // === Cell Access ===

    /// Get cell value (convenience method)
    pub fn get_value(&self, address: &str) -> Result<CellValue> {
        let addr = CellAddress::parse(address)?;
        Ok(self.get_value_at(addr.row, addr.col))
    }

    /// Get cell value by indices
    pub fn get_value_at(&self, row: u32, col: u32) -> CellValue {
        self.cells
            .get(row, col)
            .map(|c| c.value.clone())
            .unwrap_or_default()
    }

    /// Get a cell's style index by row/column, 0 when unstyled
    pub fn cell_style_index_at(&self, row: u32, col: u32) -> FormatId {
        self.cells.get(row, col).map(|c| c.style_index).unwrap_or(0)
    }

    /// Get a style by its index in this worksheet's style pool
    pub fn style_by_index(&self, style_index: FormatId) -> Option<&Style> {
        self.cells.style_pool().get(style_index)
    }

    /// Get the non-default style applied to a cell, if any
    pub fn cell_style_at(&self, row: u32, col: u32) -> Option<&Style> {
        match self.cell_style_index_at(row, col) {
            0 => None,
            idx => self.style_by_index(idx),
        }
    }

    // === Cell Modification ===

    /// Set a cell value by address string
    pub fn set_cell_value<V: Into<CellValue>>(&mut self, address: &str, value: V) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_value_at(addr.row, addr.col, value)
    }

    /// Set a cell value by row and column indices
    pub fn set_cell_value_at<V: Into<CellValue>>(
        &mut self,
        row: u32,
        col: u32,
        value: V,
    ) -> Result<()> {
        validate_cell_position(row, col)?;
        self.cells.set_value(row, col, value.into());
        Ok(())
    }

    /// Write a value together with an already allocated format
    ///
    /// `None` writes the value with the default style.
    pub fn write_at<V: Into<CellValue>>(
        &mut self,
        row: u32,
        col: u32,
        value: V,
        format: Option<FormatId>,
    ) -> Result<()> {
        validate_cell_position(row, col)?;
        self.cells.set(
            row,
            col,
            CellData::with_style(value.into(), format.unwrap_or(0)),
        );
        Ok(())
    }

    // === Range Operations ===

    /// Check that a region can be written at `range`
    ///
    /// The range must lie on the sheet and must not cut into a declared
    /// table or a merged region. Plain cells are overwritten.
    pub fn check_write(&self, range: &CellRange) -> Result<()> {
        check_bounds(range)?;
        if let Some(table) = self.overlapping_table(range) {
            return Err(Error::OccupiedCells(format!(
                "{} (table {})",
                range.to_two_corner_string(),
                table.name
            )));
        }
        if let Some(merged) = self.overlapping_merge(range) {
            return Err(Error::MergedCellConflict(merged.to_two_corner_string()));
        }
        Ok(())
    }

    /// Check that `range` can move down by `rows` without touching anything
    ///
    /// The block itself must not intersect a table or a merged region, and
    /// the rows it newly covers, within its columns, must be completely
    /// unused: no values, no styled cells, no merges and no tables.
    pub fn check_block_move(&self, range: &CellRange, rows: u32) -> Result<()> {
        let new_end = range
            .end
            .row
            .checked_add(rows)
            .ok_or(Error::RowOutOfBounds(u32::MAX, MAX_ROWS - 1))?;
        validate_cell_position(new_end, range.end.col)?;

        if let Some(table) = self.overlapping_table(range) {
            return Err(Error::other(format!(
                "cannot move {} across table {}",
                range.to_two_corner_string(),
                table.name
            )));
        }
        if let Some(merged) = self.overlapping_merge(range) {
            return Err(Error::MergedCellConflict(merged.to_two_corner_string()));
        }
        if rows == 0 {
            return Ok(());
        }

        let uncovered = CellRange::from_indices(
            range.end.row + 1,
            range.start.col,
            new_end,
            range.end.col,
        );
        if self.cells.any_in(&uncovered)
            || self.overlapping_table(&uncovered).is_some()
            || self.overlapping_merge(&uncovered).is_some()
        {
            return Err(Error::OccupiedCells(uncovered.to_two_corner_string()));
        }
        Ok(())
    }

    /// Move a block of cells down by `rows`
    ///
    /// Nothing moves unless [`check_block_move`](Self::check_block_move)
    /// passes.
    pub fn move_block_down(&mut self, range: &CellRange, rows: u32) -> Result<()> {
        self.check_block_move(range, rows)?;
        self.cells.move_block_down(range, rows);
        Ok(())
    }

    fn overlapping_table(&self, range: &CellRange) -> Option<&TableDefinition> {
        self.tables.iter().find(|t| t.range.overlaps(range))
    }

    fn overlapping_merge(&self, range: &CellRange) -> Option<&CellRange> {
        self.cells
            .merged_regions()
            .iter()
            .find(|existing| range.overlaps(existing))
    }

    // === Merged Cells ===

    /// Get merged regions
    pub fn merged_regions(&self) -> &[CellRange] {
        self.cells.merged_regions()
    }

    /// Check that `range` can be merged
    pub fn check_merge(&self, range: &CellRange) -> Result<()> {
        check_bounds(range)?;
        if self.overlapping_merge(range).is_some() {
            return Err(Error::MergedCellConflict(range.to_string()));
        }
        Ok(())
    }

    /// Merge cells
    pub fn merge_cells(&mut self, range: &CellRange) -> Result<()> {
        self.check_merge(range)?;
        self.cells.add_merged_region(*range);
        Ok(())
    }

    /// Merge a range and write `value` into its top-left cell with `style`
    pub fn merge_range<V: Into<CellValue>>(
        &mut self,
        range: &CellRange,
        value: V,
        style: &Style,
    ) -> Result<()> {
        self.merge_cells(range)?;
        let format = self.cells.style_pool_mut().get_or_insert(style.clone());
        self.write_at(range.start.row, range.start.col, value, Some(format))
    }

    // === Tables ===

    /// Find a table on this sheet by name (case-insensitive)
    pub fn table(&self, name: &str) -> Option<&TableDefinition> {
        self.tables
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Check that `table` fits on the sheet next to the tables already there
    ///
    /// Name uniqueness across the workbook is checked by
    /// [`Workbook::check_table_name`](crate::Workbook::check_table_name).
    pub fn check_table(&self, table: &TableDefinition) -> Result<()> {
        check_bounds(&table.range)?;
        if let Some(existing) = self.overlapping_table(&table.range) {
            return Err(Error::TableOverlap {
                name: table.name.clone(),
                existing: existing.name.clone(),
            });
        }
        Ok(())
    }

    /// Declare a table over already written cells
    pub(crate) fn add_table(&mut self, table: TableDefinition) -> Result<()> {
        self.check_table(&table)?;
        self.tables.push(table);
        Ok(())
    }
}

impl FormatAllocator for Worksheet {
    fn add_format(&mut self, style: Style) -> FormatId {
        self.cells.style_pool_mut().get_or_insert(style)
    }

    fn format(&self, id: FormatId) -> Option<&Style> {
        self.cells.style_pool().get(id)
    }
}

/// Fail unless every cell of `range` lies on the sheet
pub fn check_bounds(range: &CellRange) -> Result<()> {
    validate_cell_position(range.end.row, range.end.col)
}

fn validate_cell_position(row: u32, col: u32) -> Result<()> {
    if row >= MAX_ROWS {
        return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
    }
    if col >= MAX_COLS {
        return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableColumn;

    #[test]
    fn test_set_cell_values() {
        let mut ws = Worksheet::new("Test");

        ws.set_cell_value("A1", "Hello").unwrap();
        ws.set_cell_value("B1", 42.0).unwrap();
        ws.set_cell_value("C1", true).unwrap();

        assert_eq!(ws.get_value("A1").unwrap().as_string(), Some("Hello"));
        assert_eq!(ws.get_value("B1").unwrap().as_number(), Some(42.0));
        assert_eq!(ws.get_value("C1").unwrap().as_bool(), Some(true));
        assert!(ws.set_cell_value("A0", 1).is_err());
    }

    #[test]
    fn test_write_rejects_positions_past_sheet_limits() {
        let mut ws = Worksheet::new("Test");
        assert!(matches!(
            ws.write_at(MAX_ROWS, 0, 1, None),
            Err(Error::RowOutOfBounds(..))
        ));
        assert!(matches!(
            ws.write_at(0, MAX_COLS, 1, None),
            Err(Error::ColumnOutOfBounds(..))
        ));
    }

    #[test]
    fn test_write_with_format() {
        let mut ws = Worksheet::new("Test");
        let money = ws.add_format(Style::with_number_format("$#,##0.00"));

        ws.write_at(1, 1, 10.0, Some(money)).unwrap();
        assert_eq!(ws.cell_style_index_at(1, 1), money);
        assert_eq!(
            ws.cell_style_at(1, 1).map(|s| s.number_format.format_string()),
            Some("$#,##0.00")
        );
    }

    #[test]
    fn test_merge_range() {
        let mut ws = Worksheet::new("Test");

        let range = CellRange::parse("A1:C1").unwrap();
        ws.merge_range(&range, "Title", &Style::title()).unwrap();

        assert_eq!(ws.merged_regions(), &[range]);
        assert_eq!(ws.get_value("A1").unwrap().as_string(), Some("Title"));
        assert!(ws.cell_style_at(0, 0).unwrap().bold);

        let overlapping = CellRange::parse("B1:D2").unwrap();
        assert!(matches!(
            ws.merge_cells(&overlapping),
            Err(Error::MergedCellConflict(_))
        ));
    }

    #[test]
    fn test_tables_cannot_overlap() {
        let mut ws = Worksheet::new("Test");
        let first = TableDefinition::new(
            "first",
            CellRange::parse("A1:B3").unwrap(),
            vec![TableColumn::new("x"), TableColumn::new("y")],
        )
        .unwrap();
        let second = TableDefinition::new(
            "second",
            CellRange::parse("B2:B4").unwrap(),
            vec![TableColumn::new("z")],
        )
        .unwrap();

        ws.add_table(first).unwrap();
        assert!(matches!(
            ws.add_table(second),
            Err(Error::TableOverlap { .. })
        ));
        assert!(ws.table("FIRST").is_some());
    }

    #[test]
    fn test_move_block_refuses_table_cells() {
        let mut ws = Worksheet::new("Test");
        let range = CellRange::parse("A1:B3").unwrap();
        ws.add_table(
            TableDefinition::new(
                "t",
                range,
                vec![TableColumn::new("x"), TableColumn::new("y")],
            )
            .unwrap(),
        )
        .unwrap();

        assert!(ws.move_block_down(&range, 1).is_err());
        assert!(ws
            .move_block_down(&CellRange::parse("D1:D2").unwrap(), 1)
            .is_ok());
    }

    #[test]
    fn test_move_block_refuses_occupied_rows_below() {
        let mut ws = Worksheet::new("Test");
        ws.set_cell_value("A1", "Category").unwrap();
        ws.set_cell_value("B3", 7).unwrap();
        ws.set_cell_value("A4", "Lower").unwrap();
        let block = CellRange::parse("A1:B3").unwrap();

        assert!(matches!(
            ws.move_block_down(&block, 1),
            Err(Error::OccupiedCells(ref cells)) if cells == "A4:B4"
        ));
        assert_eq!(ws.get_value("A1").unwrap().as_string(), Some("Category"));
        assert_eq!(ws.get_value("A4").unwrap().as_string(), Some("Lower"));

        // a value outside the block's columns does not block the move
        let mut ws = Worksheet::new("Test");
        ws.set_cell_value("A1", "Category").unwrap();
        ws.set_cell_value("C4", "aside").unwrap();
        ws.move_block_down(&block, 1).unwrap();
        assert_eq!(ws.get_value("A2").unwrap().as_string(), Some("Category"));
    }

    #[test]
    fn test_move_block_refuses_merges_and_tables_below() {
        let block = CellRange::parse("A1:B2").unwrap();

        let mut ws = Worksheet::new("Test");
        ws.merge_cells(&CellRange::parse("B3:C3").unwrap()).unwrap();
        assert!(matches!(
            ws.check_block_move(&block, 1),
            Err(Error::OccupiedCells(_))
        ));

        let mut ws = Worksheet::new("Test");
        ws.add_table(
            TableDefinition::new(
                "lower",
                CellRange::parse("B4:B6").unwrap(),
                vec![TableColumn::new("x")],
            )
            .unwrap(),
        )
        .unwrap();
        assert!(ws.check_block_move(&block, 1).is_ok());
        assert!(matches!(
            ws.check_block_move(&block, 2),
            Err(Error::OccupiedCells(_))
        ));
    }

    #[test]
    fn test_check_write() {
        let mut ws = Worksheet::new("Test");
        ws.set_cell_value("A1", "plain").unwrap();
        ws.merge_cells(&CellRange::parse("D1:E1").unwrap()).unwrap();

        assert!(ws.check_write(&CellRange::parse("A1:C3").unwrap()).is_ok());
        assert!(matches!(
            ws.check_write(&CellRange::parse("C1:D2").unwrap()),
            Err(Error::MergedCellConflict(_))
        ));
        assert!(matches!(
            ws.check_write(&CellRange::from_indices(MAX_ROWS - 1, 0, MAX_ROWS, 0)),
            Err(Error::RowOutOfBounds(..))
        ));
    }
}
