//! Series references into a laid out region
//!
//! An open layout is referenced by coordinates; a promoted layout by
//! `table[column]`. Both forms select the same data cells, the header row
//! always excluded.

use std::fmt;

use grid_charts_core::CellAddress;
use tracing::trace;

use crate::error::{LayoutError, Result};
use crate::layout::{Layout, LayoutState};

/// Reference to one column of data cells
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeriesReference {
    /// Coordinate range on a sheet
    Range {
        sheet: String,
        first_row: u32,
        first_col: u32,
        last_row: u32,
        last_col: u32,
    },
    /// Structured reference, `table[column]`
    Named { table: String, column: String },
}

impl SeriesReference {
    /// Formula text for the reference
    ///
    /// `Sheet1!$B$2:$B$5` for ranges, `sales[Value]` for table columns.
    pub fn to_formula(&self) -> String {
        match self {
            SeriesReference::Range {
                sheet,
                first_row,
                first_col,
                last_row,
                last_col,
            } => format!(
                "{}!{}:{}",
                quote_sheet_name(sheet),
                CellAddress::absolute(*first_row, *first_col),
                CellAddress::absolute(*last_row, *last_col)
            ),
            SeriesReference::Named { table, column } => format!("{}[{}]", table, column),
        }
    }

    pub fn is_named(&self) -> bool {
        matches!(self, SeriesReference::Named { .. })
    }
}

impl fmt::Display for SeriesReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_formula())
    }
}

/// Reference to a single cell, used for series names
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellReference {
    pub sheet: String,
    pub row: u32,
    pub col: u32,
}

impl CellReference {
    /// Formula text, e.g. `Sheet1!$B$1`
    pub fn to_formula(&self) -> String {
        format!(
            "{}!{}",
            quote_sheet_name(&self.sheet),
            CellAddress::absolute(self.row, self.col)
        )
    }
}

impl fmt::Display for CellReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_formula())
    }
}

/// What a referenced column is used for in a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeriesRole {
    Category,
    Value,
}

impl SeriesRole {
    pub fn as_str(self) -> &'static str {
        match self {
            SeriesRole::Category => "category",
            SeriesRole::Value => "value",
        }
    }
}

/// Reference to the data cells of the column at `column_offset`
///
/// Category and value references are built the same way; the role only
/// matters to [`ReferenceBuilder`]'s budget.
pub fn get_reference(
    layout: &Layout,
    column_offset: usize,
    role: SeriesRole,
) -> Result<SeriesReference> {
    let sheet = layout.require_sheet()?;

    let reference = match layout.state() {
        LayoutState::Promoted(binding) => {
            let column = binding.columns.get(column_offset).ok_or(
                LayoutError::ColumnOffsetOutOfRange {
                    offset: column_offset,
                    columns: binding.columns.len(),
                },
            )?;
            SeriesReference::Named {
                table: binding.name.clone(),
                column: column.clone(),
            }
        }
        LayoutState::Open => {
            let col = column_col(layout, column_offset)?;
            SeriesReference::Range {
                sheet: sheet.to_string(),
                first_row: layout.start_row() + 1,
                first_col: col,
                last_row: layout.end_row(),
                last_col: col,
            }
        }
    };

    trace!(role = role.as_str(), column_offset, reference = %reference, "resolved reference");
    Ok(reference)
}

/// Reference to the header cell of the column at `column_offset`
///
/// Always a cell on the sheet, promoted or not.
pub fn series_name_reference(layout: &Layout, column_offset: usize) -> Result<CellReference> {
    let sheet = layout.require_sheet()?;
    Ok(CellReference {
        sheet: sheet.to_string(),
        row: layout.start_row(),
        col: column_col(layout, column_offset)?,
    })
}

fn column_col(layout: &Layout, column_offset: usize) -> Result<u32> {
    let columns = layout.shape().cols;
    if column_offset >= columns {
        return Err(LayoutError::ColumnOffsetOutOfRange {
            offset: column_offset,
            columns,
        });
    }
    // offset < cols and end_col = start_col + cols - 1 fits in u32
    Ok(layout.start_col() + column_offset as u32)
}

/// How many references of each role one chart kind accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoleBudget {
    /// `None` means unlimited
    pub categories: Option<usize>,
    /// `None` means unlimited
    pub values: Option<usize>,
}

impl RoleBudget {
    /// No limits
    pub const UNLIMITED: RoleBudget = RoleBudget {
        categories: None,
        values: None,
    };

    /// Exactly one category and one value column
    pub const SINGLE_PAIR: RoleBudget = RoleBudget {
        categories: Some(1),
        values: Some(1),
    };

    fn limit(&self, role: SeriesRole) -> Option<usize> {
        match role {
            SeriesRole::Category => self.categories,
            SeriesRole::Value => self.values,
        }
    }
}

impl Default for RoleBudget {
    fn default() -> Self {
        Self::UNLIMITED
    }
}

/// Hands out references while enforcing a chart kind's [`RoleBudget`]
#[derive(Debug, Clone)]
pub struct ReferenceBuilder<'a> {
    layout: &'a Layout,
    budget: RoleBudget,
    categories: usize,
    values: usize,
}

impl<'a> ReferenceBuilder<'a> {
    pub fn new(layout: &'a Layout, budget: RoleBudget) -> Self {
        Self {
            layout,
            budget,
            categories: 0,
            values: 0,
        }
    }

    /// Reference for `role`, counted against the budget
    pub fn reference(&mut self, column_offset: usize, role: SeriesRole) -> Result<SeriesReference> {
        let used = match role {
            SeriesRole::Category => &mut self.categories,
            SeriesRole::Value => &mut self.values,
        };
        if let Some(limit) = self.budget.limit(role) {
            if *used >= limit {
                return Err(LayoutError::UnsupportedReferenceRole {
                    role: role.as_str(),
                    limit,
                });
            }
        }

        let reference = get_reference(self.layout, column_offset, role)?;
        *used += 1;
        Ok(reference)
    }

    /// Header cell reference for the series name; not counted
    pub fn series_name(&self, column_offset: usize) -> Result<CellReference> {
        series_name_reference(self.layout, column_offset)
    }
}

/// Quote a sheet name for use in a formula when needed
fn quote_sheet_name(name: &str) -> String {
    let plain = name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !name.starts_with(|c: char| c.is_ascii_digit());
    if plain {
        name.to_string()
    } else {
        format!("'{}'", name.replace('\'', "''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Shape, TableBinding};
    use pretty_assertions::assert_eq;

    fn bound(anchor: &str) -> Layout {
        let mut layout = Layout::create(anchor, Shape::new(4, 2)).unwrap();
        layout.bind("Sheet1");
        layout
    }

    fn promoted(layout: &mut Layout) {
        layout
            .mark_promoted(TableBinding {
                name: "sales".into(),
                columns: vec!["Category".into(), "Value".into()],
            })
            .unwrap();
    }

    #[test]
    fn test_range_reference_excludes_header() {
        let layout = bound("A1");
        let reference = get_reference(&layout, 1, SeriesRole::Value).unwrap();
        assert_eq!(
            reference,
            SeriesReference::Range {
                sheet: "Sheet1".into(),
                first_row: 1,
                first_col: 1,
                last_row: 4,
                last_col: 1,
            }
        );
        assert_eq!(reference.to_formula(), "Sheet1!$B$2:$B$5");
    }

    #[test]
    fn test_named_reference_after_promotion() {
        let mut layout = bound("A1");
        promoted(&mut layout);

        let reference = get_reference(&layout, 1, SeriesRole::Value).unwrap();
        assert_eq!(
            reference,
            SeriesReference::Named {
                table: "sales".into(),
                column: "Value".into(),
            }
        );
        assert_eq!(reference.to_string(), "sales[Value]");
    }

    #[test]
    fn test_series_name_points_at_header_either_way() {
        let mut layout = bound("C3");
        let before = series_name_reference(&layout, 1).unwrap();
        promoted(&mut layout);
        let after = series_name_reference(&layout, 1).unwrap();

        assert_eq!(before, after);
        assert_eq!(after.to_formula(), "Sheet1!$D$3");
    }

    #[test]
    fn test_unbound_layout() {
        let layout = Layout::create("A1", Shape::new(4, 2)).unwrap();
        assert!(matches!(
            get_reference(&layout, 0, SeriesRole::Category),
            Err(LayoutError::UnboundSource)
        ));
        assert!(matches!(
            series_name_reference(&layout, 0),
            Err(LayoutError::UnboundSource)
        ));
    }

    #[test]
    fn test_offset_out_of_range() {
        let mut layout = bound("A1");
        assert!(matches!(
            get_reference(&layout, 2, SeriesRole::Value),
            Err(LayoutError::ColumnOffsetOutOfRange { offset: 2, columns: 2 })
        ));
        promoted(&mut layout);
        assert!(get_reference(&layout, 2, SeriesRole::Value).is_err());
    }

    #[test]
    fn test_budget_rejects_second_value() {
        let layout = bound("A1");
        let mut builder = ReferenceBuilder::new(&layout, RoleBudget::SINGLE_PAIR);

        builder.reference(0, SeriesRole::Category).unwrap();
        builder.reference(1, SeriesRole::Value).unwrap();
        let err = builder.reference(1, SeriesRole::Value).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::UnsupportedReferenceRole { role: "value", limit: 1 }
        ));
    }

    #[test]
    fn test_failed_lookup_does_not_use_budget() {
        let layout = bound("A1");
        let mut builder = ReferenceBuilder::new(&layout, RoleBudget::SINGLE_PAIR);

        assert!(builder.reference(5, SeriesRole::Value).is_err());
        assert!(builder.reference(1, SeriesRole::Value).is_ok());
    }

    #[test]
    fn test_sheet_names_are_quoted() {
        let mut layout = Layout::create("A1", Shape::new(2, 1)).unwrap();
        layout.bind("Revenue by Region");
        let reference = get_reference(&layout, 0, SeriesRole::Category).unwrap();
        assert_eq!(reference.to_formula(), "'Revenue by Region'!$A$2:$A$3");
        assert_eq!(quote_sheet_name("O'Brien"), "'O''Brien'");
    }
}
