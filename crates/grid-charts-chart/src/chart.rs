//! Chart types

use grid_charts_core::CellAddress;

use crate::axis::Axis;
use crate::legend::Legend;
use crate::series::DataSeries;

/// Chart types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChartType {
    /// Vertical bars
    Column,
    /// Horizontal bars
    Bar,
    Line,
    Doughnut,
    Scatter,
}

/// Chart definition
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chart {
    /// Chart type
    pub chart_type: ChartType,
    /// Chart title
    pub title: Option<String>,
    /// Data series
    pub series: Vec<DataSeries>,
    /// Category axis (X)
    pub category_axis: Option<Axis>,
    /// Value axis (Y)
    pub value_axis: Option<Axis>,
    /// Legend
    pub legend: Option<Legend>,
    /// Doughnut hole size in percent
    pub hole_size: Option<u8>,
    /// Angle of the first slice in degrees
    pub rotation: Option<u16>,
    /// Position anchor
    pub anchor: ChartAnchor,
}

impl Chart {
    /// Create a new chart
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            title: None,
            series: Vec::new(),
            category_axis: None,
            value_axis: None,
            legend: None,
            hole_size: None,
            rotation: None,
            anchor: ChartAnchor::default(),
        }
    }

    /// Set chart title
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the anchor
    pub fn with_anchor(mut self, anchor: ChartAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Add a data series
    pub fn add_series(&mut self, series: DataSeries) {
        self.series.push(series);
    }
}

/// Where a chart sits on its worksheet
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartAnchor {
    /// Worksheet the chart is inserted into, set when placed
    pub sheet: Option<String>,
    /// Top-left cell
    pub cell: CellAddress,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl ChartAnchor {
    pub const DEFAULT_WIDTH: u32 = 480;
    pub const DEFAULT_HEIGHT: u32 = 288;

    /// Anchor at an A1-style position with the default size
    pub fn at(position: &str) -> grid_charts_core::Result<Self> {
        Ok(Self {
            cell: CellAddress::parse(position)?,
            ..Self::default()
        })
    }

    /// Set the size, keeping defaults for `None`
    pub fn with_size(mut self, width: Option<u32>, height: Option<u32>) -> Self {
        self.width = width.unwrap_or(Self::DEFAULT_WIDTH);
        self.height = height.unwrap_or(Self::DEFAULT_HEIGHT);
        self
    }

    pub fn on_sheet<S: Into<String>>(mut self, sheet: S) -> Self {
        self.sheet = Some(sheet.into());
        self
    }
}

impl Default for ChartAnchor {
    /// E1, 480 x 288
    fn default() -> Self {
        Self {
            sheet: None,
            cell: CellAddress::new(0, 4),
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
        }
    }
}
