//! Style resolution
//!
//! A [`StyleSpec`] is resolved once per written region into
//! [`ResolvedStyles`]. The cell writer and the table promoter both read
//! formats from that one value, so declared table column formats always
//! match what the cells were written with.

use std::collections::BTreeMap;

use ahash::AHashMap;
use grid_charts_core::{FormatAllocator, FormatId, Style};
use tracing::trace;

/// How a region's cells are formatted
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleSpec {
    /// Number format for every data cell without a column override
    pub main_format: Option<String>,
    /// Full styles keyed by column name; these win over `main_format`
    pub per_column_formats: BTreeMap<String, Style>,
    /// Whether `main_format` also covers the index column
    pub apply_to_index: bool,
}

impl StyleSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the main number format
    pub fn with_main_format<S: Into<String>>(mut self, format: S) -> Self {
        self.main_format = Some(format.into());
        self
    }

    /// Override the style of one column
    pub fn with_column_format<S: Into<String>>(mut self, column: S, style: Style) -> Self {
        self.per_column_formats.insert(column.into(), style);
        self
    }

    /// Apply the main format to the index column too
    pub fn with_apply_to_index(mut self, apply: bool) -> Self {
        self.apply_to_index = apply;
        self
    }

    /// Register every format with `allocator`
    pub fn resolve<A: FormatAllocator + ?Sized>(&self, allocator: &mut A) -> ResolvedStyles {
        let main = self
            .main_format
            .as_ref()
            .map(|f| allocator.add_format(Style::with_number_format(f.as_str())));

        let by_column: AHashMap<String, FormatId> = self
            .per_column_formats
            .iter()
            .map(|(column, style)| (column.clone(), allocator.add_format(style.clone())))
            .collect();

        trace!(?main, columns = by_column.len(), "resolved styles");
        ResolvedStyles {
            main,
            by_column,
            apply_to_index: self.apply_to_index,
        }
    }
}

/// Format handles produced from a [`StyleSpec`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedStyles {
    main: Option<FormatId>,
    by_column: AHashMap<String, FormatId>,
    apply_to_index: bool,
}

impl ResolvedStyles {
    /// Handle for the main format
    pub fn main(&self) -> Option<FormatId> {
        self.main
    }

    /// Handle registered for a column override
    pub fn column(&self, column: &str) -> Option<FormatId> {
        self.by_column.get(column).copied()
    }

    /// Format for a data cell of `column`
    ///
    /// A column override always wins. The main format covers the index
    /// column only when `apply_to_index` was set.
    pub fn format_for(&self, column: &str, is_index: bool) -> Option<FormatId> {
        match self.column(column) {
            Some(id) => Some(id),
            None if is_index && !self.apply_to_index => None,
            None => self.main,
        }
    }
}
