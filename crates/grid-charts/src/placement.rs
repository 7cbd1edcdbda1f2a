//! End-to-end chart placement
//!
//! A [`ChartSpec`] writes a [`DataTable`] (when not yet written), binds its
//! references and builds the chart configuration for the chosen kind.

use grid_charts_chart::{
    Chart, ChartAnchor, ChartBuilder, ChartError, ChartKind, ChartOptions, ColorPalette,
    MoneyAxis, Result,
};
use grid_charts_core::Workbook;
use grid_charts_layout::{DataTable, WriteOptions};
use tracing::debug;

/// Everything needed to place one chart over a data table
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// Chart title, also the default sheet name for the table
    pub title: String,
    /// Top-left cell of the chart
    pub chart_position: String,
    /// Which column is the money column
    pub money_axis: MoneyAxis,
    pub x_axis_title: Option<String>,
    pub y_axis_title: Option<String>,
    pub palette: ColorPalette,
    /// Width and height in pixels, defaults when unset
    pub size: (Option<u32>, Option<u32>),
    pub kind: ChartKind,
    /// Refuse sources that are not promoted to a table
    pub require_table: bool,
    /// How the table is written when it has not been yet
    pub write: WriteOptions,
}

impl ChartSpec {
    /// Chart of `kind` titled `title`, placed at E1
    pub fn new<S: Into<String>>(title: S, kind: ChartKind) -> Self {
        Self {
            title: title.into(),
            chart_position: "E1".to_string(),
            money_axis: MoneyAxis::Y,
            x_axis_title: None,
            y_axis_title: None,
            palette: ColorPalette::default(),
            size: (None, None),
            kind,
            require_table: false,
            write: WriteOptions::default(),
        }
    }

    pub fn with_position<S: Into<String>>(mut self, position: S) -> Self {
        self.chart_position = position.into();
        self
    }

    pub fn with_money_axis(mut self, money_axis: MoneyAxis) -> Self {
        self.money_axis = money_axis;
        self
    }

    pub fn with_axis_titles(mut self, x: Option<&str>, y: Option<&str>) -> Self {
        self.x_axis_title = x.map(str::to_string);
        self.y_axis_title = y.map(str::to_string);
        self
    }

    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (Some(width), Some(height));
        self
    }

    pub fn with_write_options(mut self, write: WriteOptions) -> Self {
        self.write = write;
        self
    }

    /// Only accept tables written with `as_table`
    pub fn requiring_table(mut self) -> Self {
        self.require_table = true;
        self
    }

    /// Write `table` if needed, then bind and build the chart
    ///
    /// A table that was already written keeps its layout; references are
    /// requested only after title insertion and promotion are done. Chart
    /// level checks run before the table is written.
    pub fn add_to_workbook(&self, workbook: &mut Workbook, table: &mut DataTable) -> Result<Chart> {
        if workbook.is_closed() {
            return Err(grid_charts_core::Error::WorkbookClosed.into());
        }
        let promoted = match table.layout() {
            Some(layout) => layout.is_promoted(),
            None => self.write.as_table,
        };
        if self.require_table && !promoted {
            return Err(ChartError::NotATable(table.name().to_string()));
        }
        let binder = self.kind.binder(table.source(), self.money_axis)?;
        let mut anchor = ChartAnchor::at(&self.chart_position)?.with_size(self.size.0, self.size.1);

        if table.layout().is_none() {
            table.add_to_workbook(workbook, &self.title, self.write)?;
        }
        let layout = table.require_layout()?;
        let binding = binder.bind(layout, table.source())?;

        if let Some(sheet) = layout.sheet() {
            anchor = anchor.on_sheet(sheet);
        }

        let options = ChartOptions {
            title: self.title.clone(),
            x_axis_title: self.x_axis_title.clone(),
            y_axis_title: self.y_axis_title.clone(),
            palette: self.palette,
            anchor,
        };
        let chart = self.kind.build(&binding, &options);
        debug!(
            title = %self.title,
            chart_type = ?chart.chart_type,
            values = %binding.value_ref,
            named = binding.value_ref.is_named(),
            "built chart"
        );
        Ok(chart)
    }
}

/// Chart placement on a [`Workbook`]
pub trait WorkbookChartExt {
    /// Place a chart over `table`, writing the table first if needed
    fn add_chart(&mut self, spec: &ChartSpec, table: &mut DataTable) -> Result<Chart>;
}

impl WorkbookChartExt for Workbook {
    fn add_chart(&mut self, spec: &ChartSpec, table: &mut DataTable) -> Result<Chart> {
        spec.add_to_workbook(self, table)
    }
}
