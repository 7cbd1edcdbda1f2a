//! Axis types

/// Chart axis
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Axis {
    /// Axis title
    pub title: Option<String>,
    /// Minimum value
    pub minimum: Option<f64>,
    /// Maximum value
    pub maximum: Option<f64>,
    /// Major unit
    pub major_unit: Option<f64>,
    /// Minor unit
    pub minor_unit: Option<f64>,
    /// Number format of tick labels
    pub number_format: Option<String>,
    /// Position
    pub position: AxisPosition,
}

impl Axis {
    /// Create a new axis
    pub fn new(position: AxisPosition) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Set axis title
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set an optional axis title
    pub fn with_optional_title(mut self, title: Option<&str>) -> Self {
        self.title = title.map(str::to_string);
        self
    }

    /// Set the upper bound
    pub fn with_maximum(mut self, max: Option<f64>) -> Self {
        self.maximum = max;
        self
    }

    /// Set major and minor tick units
    pub fn with_units(mut self, major: Option<f64>, minor: Option<f64>) -> Self {
        self.major_unit = major;
        self.minor_unit = minor;
        self
    }

    /// Set the tick label number format
    pub fn with_number_format<S: Into<String>>(mut self, format: S) -> Self {
        self.number_format = Some(format.into());
        self
    }
}

/// Axis position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisPosition {
    #[default]
    Bottom,
    Top,
    Left,
    Right,
}
