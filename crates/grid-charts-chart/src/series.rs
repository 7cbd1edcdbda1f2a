//! Data series types

use grid_charts_core::Color;
use grid_charts_layout::{CellReference, SeriesReference};

/// Fill override for one data point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointFill {
    /// Position of the point within the series
    pub index: usize,
    /// Fill color
    pub fill: Color,
}

/// Data series for a chart
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataSeries {
    /// Header cell holding the series name
    pub name: Option<CellReference>,
    /// Values (Y data)
    pub values: SeriesReference,
    /// Categories (X data)
    pub categories: Option<SeriesReference>,
    /// Per-point fills; points without an entry keep the series fill
    pub points: Vec<PointFill>,
    /// Series fill
    pub fill: Option<Color>,
}

impl DataSeries {
    /// Create a new data series
    pub fn new(values: SeriesReference) -> Self {
        Self {
            name: None,
            values,
            categories: None,
            points: Vec::new(),
            fill: None,
        }
    }

    /// Set series name
    pub fn with_name(mut self, name: CellReference) -> Self {
        self.name = Some(name);
        self
    }

    /// Set categories
    pub fn with_categories(mut self, categories: SeriesReference) -> Self {
        self.categories = Some(categories);
        self
    }

    /// Set per-point fills
    pub fn with_points(mut self, points: Vec<PointFill>) -> Self {
        self.points = points;
        self
    }
}
