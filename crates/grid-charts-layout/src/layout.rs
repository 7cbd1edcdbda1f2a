//! Region bounds on a worksheet

use grid_charts_core::{CellAddress, CellRange};
use tracing::{debug, trace};

use crate::error::{LayoutError, Result};

/// Rows and columns of a tabular source
///
/// `rows` counts data rows only; the header row is implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

/// Promotion record of a layout
///
/// The column list is captured at promotion time; positional offsets are
/// resolved against it from then on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableBinding {
    /// Structured table name
    pub name: String,
    /// Column headers in table order
    pub columns: Vec<String>,
}

/// Whether a layout can still move
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutState {
    /// Plain cells; bounds may shift
    Open,
    /// Declared as a table; bounds are fixed
    Promoted(TableBinding),
}

/// Rectangular region a tabular source occupies, header row included
///
/// `end_row = start_row + rows` and `end_col = start_col + cols - 1`
/// (`start_col` for a source without columns).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    sheet: Option<String>,
    start_row: u32,
    start_col: u32,
    end_row: u32,
    end_col: u32,
    shape: Shape,
    state: LayoutState,
}

impl Layout {
    /// Lay out a region of `shape` at an A1-style anchor
    pub fn create(anchor: &str, shape: Shape) -> Result<Self> {
        Self::at(CellAddress::parse(anchor)?, shape)
    }

    /// Lay out a region of `shape` with its header at `anchor`
    pub fn at(anchor: CellAddress, shape: Shape) -> Result<Self> {
        let rows = u32::try_from(shape.rows).ok();
        let end_row = rows.and_then(|r| anchor.row.checked_add(r));
        let cols = u32::try_from(shape.cols.saturating_sub(1)).ok();
        let end_col = cols.and_then(|c| anchor.col.checked_add(c));

        let (Some(end_row), Some(end_col)) = (end_row, end_col) else {
            return Err(grid_charts_core::Error::InvalidRange(format!(
                "{} rows x {} columns do not fit below {}",
                shape.rows, shape.cols, anchor
            ))
            .into());
        };

        let layout = Self {
            sheet: None,
            start_row: anchor.row,
            start_col: anchor.col,
            end_row,
            end_col,
            shape,
            state: LayoutState::Open,
        };
        debug!(
            range = %layout.range_notation(),
            rows = shape.rows,
            cols = shape.cols,
            "created layout"
        );
        Ok(layout)
    }

    /// Attach the layout to the worksheet that holds its cells
    pub fn bind<S: Into<String>>(&mut self, sheet: S) {
        self.sheet = Some(sheet.into());
    }

    /// Name of the bound worksheet
    pub fn sheet(&self) -> Option<&str> {
        self.sheet.as_deref()
    }

    /// Name of the bound worksheet, failing when unbound
    pub fn require_sheet(&self) -> Result<&str> {
        self.sheet().ok_or(LayoutError::UnboundSource)
    }

    pub fn start_row(&self) -> u32 {
        self.start_row
    }

    pub fn start_col(&self) -> u32 {
        self.start_col
    }

    pub fn end_row(&self) -> u32 {
        self.end_row
    }

    pub fn end_col(&self) -> u32 {
        self.end_col
    }

    /// Shape the layout was created for
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// The four bounds as a range
    pub fn range(&self) -> CellRange {
        CellRange::from_indices(self.start_row, self.start_col, self.end_row, self.end_col)
    }

    /// Two-corner notation of the current bounds, e.g. `"A1:B5"`
    pub fn range_notation(&self) -> String {
        self.range().to_two_corner_string()
    }

    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    /// Promotion record, if promoted
    pub fn table_binding(&self) -> Option<&TableBinding> {
        match &self.state {
            LayoutState::Open => None,
            LayoutState::Promoted(binding) => Some(binding),
        }
    }

    pub fn is_promoted(&self) -> bool {
        matches!(self.state, LayoutState::Promoted(_))
    }

    /// Move the region by `delta` rows
    pub fn shift_rows(&mut self, delta: i64) -> Result<()> {
        self.ensure_open()?;

        let out_of_bounds = || LayoutError::ShiftOutOfBounds {
            delta,
            start_row: self.start_row,
        };
        let start_row =
            u32::try_from(i64::from(self.start_row) + delta).map_err(|_| out_of_bounds())?;
        let end_row =
            u32::try_from(i64::from(self.end_row) + delta).map_err(|_| out_of_bounds())?;

        self.start_row = start_row;
        self.end_row = end_row;
        trace!(delta, range = %self.range_notation(), "shifted layout");
        Ok(())
    }

    /// Fail with [`LayoutError::LayoutFrozen`] once promoted
    pub fn ensure_open(&self) -> Result<()> {
        match &self.state {
            LayoutState::Open => Ok(()),
            LayoutState::Promoted(binding) => Err(LayoutError::LayoutFrozen {
                range: self.range_notation(),
                table: binding.name.clone(),
            }),
        }
    }

    pub(crate) fn mark_promoted(&mut self, binding: TableBinding) -> Result<()> {
        if let LayoutState::Promoted(existing) = &self.state {
            return Err(LayoutError::PromotionConflict(existing.name.clone()));
        }
        self.state = LayoutState::Promoted(binding);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bounds_follow_shape() {
        let layout = Layout::create("A1", Shape::new(4, 2)).unwrap();
        assert_eq!(
            (layout.start_row(), layout.start_col(), layout.end_row(), layout.end_col()),
            (0, 0, 4, 1)
        );
        assert_eq!(layout.range_notation(), "A1:B5");

        let layout = Layout::create("C3", Shape::new(10, 3)).unwrap();
        assert_eq!(layout.range_notation(), "C3:E13");
    }

    #[test]
    fn test_empty_shape() {
        let layout = Layout::create("B2", Shape::new(0, 0)).unwrap();
        assert_eq!(layout.end_row(), layout.start_row());
        assert_eq!(layout.end_col(), layout.start_col());
        assert_eq!(layout.range_notation(), "B2:B2");
    }

    #[test]
    fn test_invalid_anchor() {
        let err = Layout::create("11", Shape::new(1, 1)).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::Core(grid_charts_core::Error::InvalidAnchor(_))
        ));
    }

    #[test]
    fn test_shift_rows_recomputes_notation() {
        let mut layout = Layout::create("A1", Shape::new(4, 2)).unwrap();
        layout.shift_rows(2).unwrap();
        assert_eq!(layout.range_notation(), "A3:B7");
        layout.shift_rows(-2).unwrap();
        assert_eq!(layout.range_notation(), "A1:B5");

        let err = layout.shift_rows(-1).unwrap_err();
        assert!(matches!(err, LayoutError::ShiftOutOfBounds { delta: -1, .. }));
        assert_eq!(layout.start_row(), 0);
    }

    #[test]
    fn test_promoted_layout_is_frozen() {
        let mut layout = Layout::create("A1", Shape::new(4, 2)).unwrap();
        layout
            .mark_promoted(TableBinding {
                name: "sales".into(),
                columns: vec!["Category".into(), "Value".into()],
            })
            .unwrap();

        assert!(layout.is_promoted());
        assert!(matches!(
            layout.shift_rows(1),
            Err(LayoutError::LayoutFrozen { .. })
        ));
        assert!(matches!(
            layout.mark_promoted(TableBinding {
                name: "again".into(),
                columns: Vec::new(),
            }),
            Err(LayoutError::PromotionConflict(name)) if name == "sales"
        ));
    }

    proptest! {
        #[test]
        fn prop_bounds_follow_anchor_and_shape(
            row in 0u32..100_000,
            col in 0u32..1_000,
            rows in 0usize..10_000,
            cols in 1usize..200,
        ) {
            let layout = Layout::at(CellAddress::new(row, col), Shape::new(rows, cols)).unwrap();
            prop_assert_eq!(layout.end_row(), row + rows as u32);
            prop_assert_eq!(layout.end_col(), col + cols as u32 - 1);
        }
    }
}
