//! High level region writer
//!
//! [`DataTable`] ties a source, its anchor and its style together and runs
//! write, title and promotion in the only order that keeps references valid.

use grid_charts_core::{sanitize_sheet_name, Workbook, Worksheet};
use tracing::debug;

use crate::error::{LayoutError, Result};
use crate::layout::Layout;
use crate::promote::{promote, table_definition};
use crate::reference::{
    get_reference, series_name_reference, CellReference, SeriesReference, SeriesRole,
};
use crate::source::TabularSource;
use crate::style::{ResolvedStyles, StyleSpec};
use crate::title::{check_title, insert_title};
use crate::writer::write_source;

/// Options for [`DataTable::add_to_workbook`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WriteOptions {
    /// Promote the written region to a structured table
    pub as_table: bool,
    /// Put the display name in a merged title row above the region
    pub add_title: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            as_table: false,
            add_title: true,
        }
    }
}

impl WriteOptions {
    pub fn with_table(mut self, as_table: bool) -> Self {
        self.as_table = as_table;
        self
    }

    pub fn with_title(mut self, add_title: bool) -> Self {
        self.add_title = add_title;
        self
    }
}

/// Everything produced by writing a [`DataTable`]
#[derive(Debug, Clone)]
struct Written {
    layout: Layout,
    styles: ResolvedStyles,
}

/// A tabular source to be placed on a worksheet
#[derive(Debug, Clone)]
pub struct DataTable {
    name: String,
    source: TabularSource,
    sheet: Option<String>,
    position: String,
    style: StyleSpec,
    table_name: Option<String>,
    written: Option<Written>,
}

impl DataTable {
    /// Create a table named `name` anchored at "A1"
    ///
    /// The name is the title text and, normalized, the default table name.
    pub fn new<S: Into<String>>(name: S, source: TabularSource) -> Self {
        Self {
            name: name.into(),
            source,
            sheet: None,
            position: "A1".to_string(),
            style: StyleSpec::default(),
            table_name: None,
            written: None,
        }
    }

    /// Worksheet to write to; created when missing
    pub fn with_sheet<S: Into<String>>(mut self, sheet: S) -> Self {
        self.sheet = Some(sheet.into());
        self
    }

    /// Anchor of the header row, A1 notation
    pub fn with_position<S: Into<String>>(mut self, position: S) -> Self {
        self.position = position.into();
        self
    }

    pub fn with_style(mut self, style: StyleSpec) -> Self {
        self.style = style;
        self
    }

    /// Explicit structured table name instead of the normalized display name
    pub fn with_table_name<S: Into<String>>(mut self, name: S) -> Self {
        self.table_name = Some(name.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &TabularSource {
        &self.source
    }

    pub fn sheet(&self) -> Option<&str> {
        self.sheet.as_deref()
    }

    pub fn style(&self) -> &StyleSpec {
        &self.style
    }

    /// Layout once written
    pub fn layout(&self) -> Option<&Layout> {
        self.written.as_ref().map(|w| &w.layout)
    }

    /// Formats the cells were written with
    pub fn resolved_styles(&self) -> Option<&ResolvedStyles> {
        self.written.as_ref().map(|w| &w.styles)
    }

    /// Whether the region has been promoted to a table
    pub fn is_table(&self) -> bool {
        self.layout().is_some_and(Layout::is_promoted)
    }

    /// Write the source on its sheet, or on `default_sheet` when none was set
    ///
    /// `default_sheet` is sanitized into a valid sheet name. The title is
    /// inserted before promotion. Every check runs before the first cell is
    /// written: on error the workbook is unchanged and the table stays
    /// unwritten.
    pub fn add_to_workbook(
        &mut self,
        workbook: &mut Workbook,
        default_sheet: &str,
        options: WriteOptions,
    ) -> Result<&Layout> {
        if self.written.is_some() {
            return Err(LayoutError::AlreadyWritten(self.name.clone()));
        }
        workbook.ensure_open()?;

        let sheet_name = match &self.sheet {
            Some(sheet) => sheet.clone(),
            None => sanitize_sheet_name(default_sheet),
        };
        let mut layout = Layout::create(&self.position, self.source.shape())?;
        layout.bind(sheet_name.as_str());
        self.check_placement(workbook, &layout, options)?;

        let worksheet = workbook.get_or_add_sheet_mut(&sheet_name)?;
        let styles = self.style.resolve(worksheet);
        write_source(worksheet, &layout, &self.source, &styles)?;
        if options.add_title {
            insert_title(worksheet, &mut layout, &self.name)?;
        }
        if options.as_table {
            promote(
                workbook,
                &mut layout,
                &self.source,
                &styles,
                self.table_name.as_deref(),
                &self.name,
            )?;
        }

        self.sheet = Some(sheet_name);
        let written = self.written.insert(Written { layout, styles });
        debug!(
            table = %self.name,
            range = %written.layout.range_notation(),
            promoted = options.as_table,
            "added table to workbook"
        );
        Ok(&written.layout)
    }

    /// Everything [`add_to_workbook`](Self::add_to_workbook) can refuse
    ///
    /// A sheet that does not exist yet is checked as an empty one.
    fn check_placement(
        &self,
        workbook: &Workbook,
        layout: &Layout,
        options: WriteOptions,
    ) -> Result<()> {
        let sheet_name = layout.require_sheet()?;
        let scratch;
        let worksheet = match workbook.sheet(sheet_name) {
            Some(worksheet) => worksheet,
            None => {
                workbook.check_sheet_name(sheet_name)?;
                scratch = Worksheet::new(sheet_name);
                &scratch
            }
        };
        worksheet.check_write(&layout.range())?;

        let mut placed = layout.clone();
        if options.add_title {
            check_title(worksheet, &placed)?;
            placed.shift_rows(1)?;
        }
        if options.as_table {
            let definition = table_definition(
                &placed,
                &self.source,
                &ResolvedStyles::default(),
                self.table_name.as_deref(),
                &self.name,
            )?;
            workbook.check_table_name(&definition.name)?;
            worksheet.check_table(&definition)?;
        }
        Ok(())
    }

    /// Promote an already written region to a structured table
    pub fn promote(&mut self, workbook: &mut Workbook) -> Result<String> {
        let written = self.written.as_mut().ok_or(LayoutError::UnboundSource)?;
        promote(
            workbook,
            &mut written.layout,
            &self.source,
            &written.styles,
            self.table_name.as_deref(),
            &self.name,
        )
    }

    /// Reference to the data of the column at `column_offset`
    pub fn reference(&self, column_offset: usize, role: SeriesRole) -> Result<SeriesReference> {
        get_reference(self.require_layout()?, column_offset, role)
    }

    /// Reference to the data of a column by name
    pub fn column_reference(&self, column: &str, role: SeriesRole) -> Result<SeriesReference> {
        self.reference(self.source.require_column(column)?, role)
    }

    /// Reference to the header cell of the column at `column_offset`
    pub fn series_name_reference(&self, column_offset: usize) -> Result<CellReference> {
        series_name_reference(self.require_layout()?, column_offset)
    }

    /// Layout once written, failing before
    pub fn require_layout(&self) -> Result<&Layout> {
        self.layout().ok_or(LayoutError::UnboundSource)
    }
}
