//! Structured table declarations
//!
//! A table is structural metadata laid over cells that are already written:
//! a name, the covered range (header row included) and one column entry per
//! header with the format the column is declared with.

use crate::cell::CellRange;
use crate::error::{Error, Result};
use crate::style::FormatId;

/// One declared table column
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableColumn {
    /// Header text, also the name used in `table[column]` references
    pub header: String,
    /// Declared column format, `None` for the default style
    pub format: Option<FormatId>,
}

impl TableColumn {
    /// Create a column with no declared format
    pub fn new<S: Into<String>>(header: S) -> Self {
        Self {
            header: header.into(),
            format: None,
        }
    }

    /// Attach a format handle
    pub fn with_format(mut self, format: Option<FormatId>) -> Self {
        self.format = format;
        self
    }
}

/// A structured table declared on a worksheet
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableDefinition {
    /// Table name as used in structured references
    pub name: String,
    /// Covered range, header row included
    pub range: CellRange,
    /// Columns in positional order
    pub columns: Vec<TableColumn>,
}

impl TableDefinition {
    /// Create a table definition, checking that the columns fit the range
    pub fn new<S: Into<String>>(
        name: S,
        range: CellRange,
        columns: Vec<TableColumn>,
    ) -> Result<Self> {
        let name = name.into();
        validate_table_name(&name)?;

        if columns.len() as u64 != range.col_count() as u64 {
            return Err(Error::InvalidRange(format!(
                "table {} declares {} columns over {}",
                name,
                columns.len(),
                range.to_two_corner_string()
            )));
        }

        Ok(Self {
            name,
            range,
            columns,
        })
    }

    /// Find a column's position by header
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.header == header)
    }
}

/// Normalize a display name into a table name
///
/// Lower-cases and joins whitespace-separated words with underscores:
/// `"Quarterly Sales"` becomes `"quarterly_sales"`.
pub fn normalize_table_name(display_name: &str) -> String {
    display_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

/// Check that a name can appear in a `name[column]` reference
pub fn validate_table_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidTableName("table name cannot be empty".into()));
    }
    if let Some(c) = name
        .chars()
        .find(|c| c.is_whitespace() || matches!(c, '[' | ']' | '!' | ':' | '\'' | '"'))
    {
        return Err(Error::InvalidTableName(format!(
            "'{}' contains '{}'",
            name, c
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_table_name() {
        assert_eq!(normalize_table_name("Sales"), "sales");
        assert_eq!(normalize_table_name("Quarterly Sales"), "quarterly_sales");
        assert_eq!(normalize_table_name("  Net   Income "), "net_income");
    }

    #[test]
    fn test_validate_table_name() {
        assert!(validate_table_name("sales_2024").is_ok());
        assert!(validate_table_name("").is_err());
        assert!(validate_table_name("bad name").is_err());
        assert!(validate_table_name("bad[name]").is_err());
    }

    #[test]
    fn test_column_count_must_match_range() {
        let range = CellRange::from_indices(0, 0, 4, 1);
        let ok = TableDefinition::new(
            "sales",
            range,
            vec![TableColumn::new("Category"), TableColumn::new("Value")],
        )
        .unwrap();
        assert_eq!(ok.column_index("Value"), Some(1));

        let bad = TableDefinition::new("sales", range, vec![TableColumn::new("Category")]);
        assert!(bad.is_err());
    }
}
