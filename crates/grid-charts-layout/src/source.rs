//! Tabular input data

use ahash::AHashSet;
use grid_charts_core::CellValue;

use crate::error::{LayoutError, Result};
use crate::layout::Shape;

/// A named column of values
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    /// Header text
    pub name: String,
    /// Values, top to bottom
    pub values: Vec<CellValue>,
}

impl Column {
    /// Create a column
    pub fn new<S, I, V>(name: S, values: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered named columns of equal length
///
/// Column names are unique. One column is the index column (the first one
/// unless [`with_index`](TabularSource::with_index) picks another); styling
/// may treat it differently from the data columns.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabularSource {
    columns: Vec<Column>,
    index: usize,
}

impl TabularSource {
    /// Build a source from columns
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut seen = AHashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(LayoutError::DuplicateColumn(column.name.clone()));
            }
        }

        if let Some(first) = columns.first() {
            let expected = first.values.len();
            if let Some(bad) = columns.iter().find(|c| c.values.len() != expected) {
                return Err(LayoutError::RaggedColumns {
                    column: bad.name.clone(),
                    expected,
                    found: bad.values.len(),
                });
            }
        }

        Ok(Self { columns, index: 0 })
    }

    /// Build a source from a header row and records
    pub fn from_rows<H, S>(headers: H, rows: Vec<Vec<CellValue>>) -> Result<Self>
    where
        H: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut columns: Vec<Column> = headers
            .into_iter()
            .map(|name| Column {
                name: name.into(),
                values: Vec::with_capacity(rows.len()),
            })
            .collect();

        for row in rows {
            if row.len() != columns.len() {
                let column = columns
                    .get(row.len())
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| format!("#{}", row.len()));
                return Err(LayoutError::RaggedColumns {
                    column,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
            for (column, value) in columns.iter_mut().zip(row) {
                column.values.push(value);
            }
        }

        Self::new(columns)
    }

    /// Use the named column as the index column
    pub fn with_index(mut self, name: &str) -> Result<Self> {
        self.index = self.require_column(name)?;
        Ok(self)
    }

    /// Position of the index column
    pub fn index(&self) -> usize {
        self.index
    }

    /// Name of the index column, `None` for a source without columns
    pub fn index_name(&self) -> Option<&str> {
        self.columns.get(self.index).map(|c| c.name.as_str())
    }

    /// Number of data rows (the header is not counted)
    pub fn row_count(&self) -> usize {
        self.columns.first().map(|c| c.values.len()).unwrap_or(0)
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Rows and columns as a [`Shape`]
    pub fn shape(&self) -> Shape {
        Shape::new(self.row_count(), self.column_count())
    }

    /// All columns in order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column at a position
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Column names in order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Position of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Position of a column by name, failing for unknown names
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| LayoutError::UnknownColumn(name.to_string()))
    }

    /// Values of the row at `row`, in column order
    pub fn row(&self, row: usize) -> impl Iterator<Item = &CellValue> {
        self.columns.iter().filter_map(move |c| c.values.get(row))
    }

    /// Distinct values of a column in first-occurrence order
    pub fn distinct_values(&self, index: usize) -> Vec<&CellValue> {
        let Some(column) = self.columns.get(index) else {
            return Vec::new();
        };

        let mut seen = AHashSet::new();
        column
            .values
            .iter()
            .filter(|v| seen.insert((v.type_name(), v.to_string())))
            .collect()
    }
}
