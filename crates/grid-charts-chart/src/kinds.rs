//! Chart kinds
//!
//! Each kind turns a [`SeriesBinding`] into a [`Chart`]. [`ChartKind`] is
//! the closed set the pipeline dispatches over.

use grid_charts_layout::{RoleBudget, TabularSource};

use crate::axis::{Axis, AxisPosition};
use crate::binder::{ChartBinder, SeriesBinding};
use crate::chart::{Chart, ChartAnchor, ChartType};
use crate::error::Result;
use crate::legend::{Legend, LegendPosition};
use crate::palette::{ColorMap, ColorPalette, MoneyAxis};
use crate::series::DataSeries;

/// Settings shared by every chart kind
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartOptions {
    pub title: String,
    pub x_axis_title: Option<String>,
    pub y_axis_title: Option<String>,
    pub palette: ColorPalette,
    pub anchor: ChartAnchor,
}

impl ChartOptions {
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
            x_axis_title: None,
            y_axis_title: None,
            palette: ColorPalette::default(),
            anchor: ChartAnchor::default(),
        }
    }
}

/// Builds one kind of chart from resolved references
pub trait ChartBuilder {
    /// References this kind accepts
    fn role_budget(&self) -> RoleBudget {
        RoleBudget::UNLIMITED
    }

    /// Produce the chart configuration
    fn build(&self, binding: &SeriesBinding, options: &ChartOptions) -> Chart;
}

/// Title, anchor and the single series every kind starts from
fn base_chart(chart_type: ChartType, binding: &SeriesBinding, options: &ChartOptions) -> Chart {
    let mut series = DataSeries::new(binding.value_ref.clone())
        .with_name(binding.series_name_ref.clone())
        .with_categories(binding.category_ref.clone());
    if let Some(points) = &binding.points {
        series = series.with_points(points.clone());
    }

    let mut chart = Chart::new(chart_type)
        .with_title(options.title.as_str())
        .with_anchor(options.anchor.clone());
    chart.add_series(series);
    chart
}

fn axes(options: &ChartOptions, category: AxisPosition, value: AxisPosition) -> (Axis, Axis) {
    (
        Axis::new(category).with_optional_title(options.x_axis_title.as_deref()),
        Axis::new(value).with_optional_title(options.y_axis_title.as_deref()),
    )
}

fn fill_series_with_primary(chart: &mut Chart, palette: &ColorPalette) {
    for series in &mut chart.series {
        series.fill = Some(palette.primary);
    }
}

/// Line chart with optional axis scaling
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineChart {
    pub max_x_axis_value: Option<f64>,
    pub x_major_unit: Option<f64>,
    pub x_minor_unit: Option<f64>,
    pub y_major_unit: Option<f64>,
    pub y_minor_unit: Option<f64>,
}

impl ChartBuilder for LineChart {
    fn build(&self, binding: &SeriesBinding, options: &ChartOptions) -> Chart {
        let mut chart = base_chart(ChartType::Line, binding, options);
        fill_series_with_primary(&mut chart, &options.palette);

        let (x, y) = axes(options, AxisPosition::Bottom, AxisPosition::Left);
        chart.category_axis = Some(
            x.with_maximum(self.max_x_axis_value)
                .with_units(self.x_major_unit, self.x_minor_unit),
        );
        chart.value_axis = Some(y.with_units(self.y_major_unit, self.y_minor_unit));
        chart
    }
}

/// Direction bars are drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BarOrientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Bar chart, vertical (column) or horizontal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarChart {
    pub orientation: BarOrientation,
}

impl ChartBuilder for BarChart {
    fn build(&self, binding: &SeriesBinding, options: &ChartOptions) -> Chart {
        let (chart_type, category, value) = match self.orientation {
            BarOrientation::Vertical => {
                (ChartType::Column, AxisPosition::Bottom, AxisPosition::Left)
            }
            BarOrientation::Horizontal => {
                (ChartType::Bar, AxisPosition::Left, AxisPosition::Bottom)
            }
        };

        let mut chart = base_chart(chart_type, binding, options);
        fill_series_with_primary(&mut chart, &options.palette);

        let (x, y) = axes(options, category, value);
        chart.category_axis = Some(x);
        chart.value_axis = Some(y);
        chart
    }
}

/// Doughnut chart over exactly one category/value pair
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DonutChart {
    /// Hole size in percent, kept within 10..=90
    pub hole_size: u8,
    /// Angle of the first slice
    pub rotation: Option<u16>,
    /// Category column by name, the first column when unset
    pub categories_col: Option<String>,
    /// Value column by name, the second column when unset
    pub values_col: Option<String>,
    /// Slice colors by category
    pub colors: ColorMap,
}

impl Default for DonutChart {
    fn default() -> Self {
        Self {
            hole_size: 50,
            rotation: None,
            categories_col: None,
            values_col: None,
            colors: ColorMap::new(),
        }
    }
}

impl DonutChart {
    /// `(category, value)` offsets from the configured column names
    pub fn column_offsets(&self, source: &TabularSource) -> Result<(usize, usize)> {
        let category = match &self.categories_col {
            Some(name) => source.require_column(name)?,
            None => 0,
        };
        let value = match &self.values_col {
            Some(name) => source.require_column(name)?,
            None => 1,
        };
        Ok((category, value))
    }
}

impl ChartBuilder for DonutChart {
    fn role_budget(&self) -> RoleBudget {
        RoleBudget::SINGLE_PAIR
    }

    fn build(&self, binding: &SeriesBinding, options: &ChartOptions) -> Chart {
        let mut chart = base_chart(ChartType::Doughnut, binding, options);
        chart.hole_size = Some(self.hole_size.clamp(10, 90));
        chart.rotation = self.rotation.map(|r| r % 360);
        chart.legend = Some(Legend::new(LegendPosition::Right));
        chart
    }
}

/// Scatter chart; the money axis picks which column is plotted on y
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScatterChart;

impl ChartBuilder for ScatterChart {
    fn build(&self, binding: &SeriesBinding, options: &ChartOptions) -> Chart {
        let mut chart = base_chart(ChartType::Scatter, binding, options);
        fill_series_with_primary(&mut chart, &options.palette);

        let (x, y) = axes(options, AxisPosition::Bottom, AxisPosition::Left);
        chart.category_axis = Some(x);
        chart.value_axis = Some(y);
        chart
    }
}

/// The supported chart kinds
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChartKind {
    Line(LineChart),
    Bar(BarChart),
    Donut(DonutChart),
    Scatter(ScatterChart),
}

impl ChartKind {
    fn builder(&self) -> &dyn ChartBuilder {
        match self {
            ChartKind::Line(kind) => kind,
            ChartKind::Bar(kind) => kind,
            ChartKind::Donut(kind) => kind,
            ChartKind::Scatter(kind) => kind,
        }
    }

    /// Binder configured for this kind
    ///
    /// Donut charts pick columns by name and carry slice colors; every other
    /// kind follows the money axis.
    pub fn binder(&self, source: &TabularSource, money_axis: MoneyAxis) -> Result<ChartBinder> {
        let binder = ChartBinder::new(money_axis).with_budget(self.builder().role_budget());
        match self {
            ChartKind::Donut(donut) => {
                let (category, value) = donut.column_offsets(source)?;
                Ok(binder
                    .with_columns(category, value)
                    .with_colors(donut.colors.clone()))
            }
            _ => Ok(binder),
        }
    }
}

impl ChartBuilder for ChartKind {
    fn role_budget(&self) -> RoleBudget {
        self.builder().role_budget()
    }

    fn build(&self, binding: &SeriesBinding, options: &ChartOptions) -> Chart {
        self.builder().build(binding, options)
    }
}

impl Default for ChartKind {
    fn default() -> Self {
        ChartKind::Line(LineChart::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_charts_core::Color;
    use grid_charts_layout::{Column, Layout, LayoutError, Shape};
    use pretty_assertions::assert_eq;

    use crate::error::ChartError;
    use crate::series::PointFill;

    fn source() -> TabularSource {
        TabularSource::new(vec![
            Column::new("Region", ["North", "South", "North"]),
            Column::new("Units", [3, 4, 5]),
            Column::new("Revenue", [30.0, 40.5, 52.25]),
        ])
        .unwrap()
    }

    fn layout() -> Layout {
        let mut layout = Layout::create("B2", Shape::new(3, 3)).unwrap();
        layout.bind("Data");
        layout
    }

    fn build(kind: &ChartKind, money_axis: MoneyAxis) -> Chart {
        let source = source();
        let binding = kind
            .binder(&source, money_axis)
            .unwrap()
            .bind(&layout(), &source)
            .unwrap();
        kind.build(&binding, &ChartOptions::new("Revenue"))
    }

    #[test]
    fn test_line_axes() {
        let kind = ChartKind::Line(LineChart {
            max_x_axis_value: Some(10.0),
            y_major_unit: Some(5.0),
            ..LineChart::default()
        });
        let chart = build(&kind, MoneyAxis::Y);

        assert_eq!(chart.chart_type, ChartType::Line);
        assert_eq!(chart.title.as_deref(), Some("Revenue"));
        let x = chart.category_axis.unwrap();
        assert_eq!((x.maximum, x.major_unit), (Some(10.0), None));
        assert_eq!(chart.value_axis.unwrap().major_unit, Some(5.0));
        assert_eq!(chart.series[0].fill, Some(ColorPalette::default().primary));
    }

    #[test]
    fn test_bar_orientation() {
        let vertical = build(&ChartKind::Bar(BarChart::default()), MoneyAxis::Y);
        assert_eq!(vertical.chart_type, ChartType::Column);

        let horizontal = build(
            &ChartKind::Bar(BarChart {
                orientation: BarOrientation::Horizontal,
            }),
            MoneyAxis::Y,
        );
        assert_eq!(horizontal.chart_type, ChartType::Bar);
        assert_eq!(
            horizontal.category_axis.map(|a| a.position),
            Some(AxisPosition::Left)
        );
    }

    #[test]
    fn test_scatter_follows_money_axis() {
        let chart = build(&ChartKind::Scatter(ScatterChart), MoneyAxis::X);
        let series = &chart.series[0];
        assert_eq!(series.values.to_formula(), "Data!$B$3:$B$5");
        assert_eq!(
            series.categories.as_ref().map(|c| c.to_formula()),
            Some("Data!$C$3:$C$5".to_string())
        );
    }

    #[test]
    fn test_donut_named_columns_and_colors() {
        let mut colors = ColorMap::new();
        colors.insert("South", Color::BLUE);
        let kind = ChartKind::Donut(DonutChart {
            values_col: Some("Revenue".into()),
            rotation: Some(450),
            colors,
            ..DonutChart::default()
        });
        let chart = build(&kind, MoneyAxis::Y);

        assert_eq!(chart.hole_size, Some(50));
        assert_eq!(chart.rotation, Some(90));
        let series = &chart.series[0];
        assert_eq!(series.values.to_formula(), "Data!$D$3:$D$5");
        assert_eq!(
            series.name.as_ref().map(|n| n.to_formula()),
            Some("Data!$D$2".to_string())
        );
        assert_eq!(
            series.points,
            vec![PointFill {
                index: 1,
                fill: Color::BLUE,
            }]
        );
        assert_eq!(series.fill, None);
    }

    #[test]
    fn test_donut_unknown_column() {
        let kind = ChartKind::Donut(DonutChart {
            categories_col: Some("Missing".into()),
            ..DonutChart::default()
        });
        let err = kind.binder(&source(), MoneyAxis::Y).unwrap_err();
        assert!(matches!(
            err,
            ChartError::Layout(LayoutError::UnknownColumn(name)) if name == "Missing"
        ));
    }

    #[test]
    fn test_donut_takes_one_pair_only() {
        let kind = ChartKind::Donut(DonutChart::default());
        let source = source();
        let err = kind
            .binder(&source, MoneyAxis::Y)
            .unwrap()
            .bind_values(&layout(), &source, &[1, 2])
            .unwrap_err();
        assert!(matches!(
            err,
            ChartError::Layout(LayoutError::UnsupportedReferenceRole { .. })
        ));

        let line = ChartKind::default()
            .binder(&source, MoneyAxis::Y)
            .unwrap()
            .bind_values(&layout(), &source, &[1, 2])
            .unwrap();
        assert_eq!(line.len(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_every_kind_is_serializable() {
        fn assert_serde<T: serde::Serialize + serde::de::DeserializeOwned>() {}
        assert_serde::<ColorMap>();
        assert_serde::<DonutChart>();
        assert_serde::<ChartKind>();
        assert_serde::<ChartOptions>();
    }
}
