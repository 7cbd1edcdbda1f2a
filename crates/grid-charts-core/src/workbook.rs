//! Workbook type - the document that owns worksheets and table names

use tracing::debug;

use crate::error::{Error, Result};
use crate::table::TableDefinition;
use crate::worksheet::Worksheet;
use crate::MAX_SHEET_NAME_LEN;

const INVALID_SHEET_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];

/// A workbook (spreadsheet document)
///
/// Once [`close`](Workbook::close)d, every mutating call fails with
/// [`Error::WorkbookClosed`]; reads keep working.
#[derive(Debug)]
pub struct Workbook {
    /// Worksheets in the workbook
    worksheets: Vec<Worksheet>,
    /// Set by `close`
    closed: bool,
}

impl Workbook {
    /// Create a new workbook with one worksheet named "Sheet1"
    pub fn new() -> Self {
        Self {
            worksheets: vec![Worksheet::new("Sheet1")],
            closed: false,
        }
    }

    /// Get the number of worksheets
    pub fn sheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// Get a worksheet by name
    pub fn sheet(&self, name: &str) -> Option<&Worksheet> {
        self.worksheets.iter().find(|ws| ws.name() == name)
    }

    /// Get a mutable worksheet by name
    pub fn sheet_mut(&mut self, name: &str) -> Result<&mut Worksheet> {
        self.ensure_open()?;
        self.worksheets
            .iter_mut()
            .find(|ws| ws.name() == name)
            .ok_or_else(|| Error::SheetNotFound(name.into()))
    }

    /// Get a worksheet by name, adding it first if it does not exist
    pub fn get_or_add_sheet_mut(&mut self, name: &str) -> Result<&mut Worksheet> {
        self.ensure_open()?;
        let index = match self.sheet_index(name) {
            Some(index) => index,
            None => self.add_worksheet_with_name(name)?,
        };
        Ok(&mut self.worksheets[index])
    }

    /// Get the index of a worksheet by name
    pub fn sheet_index(&self, name: &str) -> Option<usize> {
        self.worksheets.iter().position(|ws| ws.name() == name)
    }

    /// Add a new worksheet with specified name
    pub fn add_worksheet_with_name(&mut self, name: &str) -> Result<usize> {
        self.ensure_open()?;
        self.check_sheet_name(name)?;

        let index = self.worksheets.len();
        self.worksheets.push(Worksheet::new(name));
        debug!(sheet = name, index, "added worksheet");

        Ok(index)
    }

    // ==================== Tables ====================

    /// Declare a table on `sheet`
    ///
    /// Table names are unique across the whole workbook, compared
    /// case-insensitively.
    pub fn add_table(&mut self, sheet: &str, table: TableDefinition) -> Result<()> {
        self.ensure_open()?;
        self.check_table_name(&table.name)?;

        let name = table.name.clone();
        let range = table.range;
        self.sheet_mut(sheet)?.add_table(table)?;
        debug!(sheet, table = %name, range = %range, "declared table");
        Ok(())
    }

    /// Fail with [`Error::DuplicateTableName`] when `name` is taken
    pub fn check_table_name(&self, name: &str) -> Result<()> {
        match self.table(name) {
            Some(existing) => Err(Error::DuplicateTableName(existing.name.clone())),
            None => Ok(()),
        }
    }

    /// Find a table anywhere in the workbook
    pub fn table(&self, name: &str) -> Option<&TableDefinition> {
        self.worksheets.iter().find_map(|ws| ws.table(name))
    }

    // ==================== Lifecycle ====================

    /// Close the workbook; later mutations fail with [`Error::WorkbookClosed`]
    pub fn close(&mut self) {
        if !self.closed {
            debug!(sheets = self.worksheets.len(), "closing workbook");
        }
        self.closed = true;
    }

    /// Whether [`close`](Workbook::close) has been called
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Fail with [`Error::WorkbookClosed`] once closed
    pub fn ensure_open(&self) -> Result<()> {
        if self.closed {
            Err(Error::WorkbookClosed)
        } else {
            Ok(())
        }
    }

    /// Check that a new sheet could be added as `name`
    pub fn check_sheet_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
        }
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name too long (max {} characters)",
                MAX_SHEET_NAME_LEN
            )));
        }
        if let Some(c) = name.chars().find(|c| INVALID_SHEET_CHARS.contains(c)) {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name cannot contain '{}'",
                c
            )));
        }

        let name_lower = name.to_lowercase();
        if self
            .worksheets
            .iter()
            .any(|ws| ws.name().to_lowercase() == name_lower)
        {
            return Err(Error::DuplicateSheetName(name.into()));
        }

        Ok(())
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn arbitrary text (usually a chart title) into a usable sheet name
///
/// Characters a sheet name cannot hold are dropped and the result is cut to
/// the sheet name limit. Empty input falls back to "Sheet1".
pub fn sanitize_sheet_name(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| !INVALID_SHEET_CHARS.contains(c))
        .take(MAX_SHEET_NAME_LEN)
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        "Sheet1".to_string()
    } else {
        cleaned.to_string()
    }
}
