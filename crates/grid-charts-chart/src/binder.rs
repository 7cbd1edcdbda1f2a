//! Chart Binder
//!
//! Resolves the category, value and series-name references of a written
//! region for one chart, plus the per-category point fills.

use grid_charts_layout::{
    CellReference, Layout, ReferenceBuilder, RoleBudget, SeriesReference, SeriesRole,
    TabularSource,
};
use tracing::debug;

use crate::error::Result;
use crate::palette::{ColorMap, MoneyAxis};
use crate::series::PointFill;

/// References for one chart series
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesBinding {
    pub category_ref: SeriesReference,
    pub value_ref: SeriesReference,
    pub series_name_ref: CellReference,
    /// Fills for categories that have a color, `None` when none do
    pub points: Option<Vec<PointFill>>,
}

/// Binds a written region to chart series
#[derive(Debug, Clone, Default)]
pub struct ChartBinder {
    money_axis: MoneyAxis,
    budget: RoleBudget,
    columns: Option<(usize, usize)>,
    colors: ColorMap,
}

impl ChartBinder {
    pub fn new(money_axis: MoneyAxis) -> Self {
        Self {
            money_axis,
            ..Self::default()
        }
    }

    /// Limit the references the chart kind accepts
    pub fn with_budget(mut self, budget: RoleBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Use explicit `(category, value)` offsets instead of the money axis
    pub fn with_columns(mut self, category: usize, value: usize) -> Self {
        self.columns = Some((category, value));
        self
    }

    pub fn with_colors(mut self, colors: ColorMap) -> Self {
        self.colors = colors;
        self
    }

    /// `(category, value)` offsets this binder resolves
    pub fn column_offsets(&self) -> (usize, usize) {
        self.columns
            .unwrap_or_else(|| self.money_axis.column_offsets())
    }

    /// Bind the single category/value pair
    pub fn bind(&self, layout: &Layout, source: &TabularSource) -> Result<SeriesBinding> {
        let (category, value) = self.column_offsets();
        let mut refs = ReferenceBuilder::new(layout, self.budget);

        let binding = SeriesBinding {
            category_ref: refs.reference(category, SeriesRole::Category)?,
            value_ref: refs.reference(value, SeriesRole::Value)?,
            series_name_ref: refs.series_name(value)?,
            points: self.points(source, category),
        };
        debug!(
            category = %binding.category_ref,
            value = %binding.value_ref,
            colored_points = binding.points.as_ref().map_or(0, Vec::len),
            "bound chart series"
        );
        Ok(binding)
    }

    /// Bind one series per value column, all sharing the category column
    ///
    /// Every value column counts against the budget, so a kind limited to
    /// one pair rejects a second value with `UnsupportedReferenceRole`.
    pub fn bind_values(
        &self,
        layout: &Layout,
        source: &TabularSource,
        value_offsets: &[usize],
    ) -> Result<Vec<SeriesBinding>> {
        let (category, _) = self.column_offsets();
        let mut refs = ReferenceBuilder::new(layout, self.budget);

        let category_ref = refs.reference(category, SeriesRole::Category)?;
        let points = self.points(source, category);

        let mut bindings = Vec::with_capacity(value_offsets.len());
        for &value in value_offsets {
            bindings.push(SeriesBinding {
                category_ref: category_ref.clone(),
                value_ref: refs.reference(value, SeriesRole::Value)?,
                series_name_ref: refs.series_name(value)?,
                points: points.clone(),
            });
        }

        debug!(category = %category_ref, series = bindings.len(), "bound chart series");
        Ok(bindings)
    }

    /// Point fills in distinct-category order, skipping uncolored categories
    fn points(&self, source: &TabularSource, category: usize) -> Option<Vec<PointFill>> {
        if self.colors.is_empty() {
            return None;
        }

        let points: Vec<PointFill> = source
            .distinct_values(category)
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| {
                self.colors
                    .get(&value.to_string())
                    .map(|fill| PointFill { index, fill })
            })
            .collect();

        (!points.is_empty()).then_some(points)
    }
}
