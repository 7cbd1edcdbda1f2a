//! Colors and the money axis setting

use ahash::AHashMap;
use grid_charts_core::Color;

use crate::error::{ChartError, Result};

/// Which axis carries monetary values
///
/// With `Y` the first column is the category and the second the value;
/// with `X` the two swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoneyAxis {
    X,
    #[default]
    Y,
}

impl MoneyAxis {
    /// Column offsets as `(category, value)`
    pub fn column_offsets(self) -> (usize, usize) {
        match self {
            MoneyAxis::Y => (0, 1),
            MoneyAxis::X => (1, 0),
        }
    }
}

/// Chart color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorPalette {
    /// Default series fill
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            primary: Color::rgb(0x4A, 0x90, 0xE2),
            secondary: Color::rgb(0x50, 0xE3, 0xC2),
            accent: Color::rgb(0xF5, 0xA6, 0x23),
        }
    }
}

impl ColorPalette {
    /// Build a palette from `#RRGGBB` strings
    pub fn from_hex(primary: &str, secondary: &str, accent: &str) -> Result<Self> {
        Ok(Self {
            primary: parse_color(primary)?,
            secondary: parse_color(secondary)?,
            accent: parse_color(accent)?,
        })
    }
}

/// Display color per category value, keyed by the value's text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorMap {
    colors: AHashMap<String, Color>,
}

impl ColorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(category, "#RRGGBB")` pairs
    pub fn from_hex<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut map = Self::new();
        for (category, hex) in pairs {
            map.insert(category, parse_color(hex.as_ref())?);
        }
        Ok(map)
    }

    pub fn insert<K: Into<String>>(&mut self, category: K, color: Color) {
        self.colors.insert(category.into(), color);
    }

    pub fn get(&self, category: &str) -> Option<Color> {
        self.colors.get(category).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

fn parse_color(hex: &str) -> Result<Color> {
    Color::from_hex(hex).ok_or_else(|| ChartError::InvalidColor(hex.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_axis_offsets() {
        assert_eq!(MoneyAxis::default(), MoneyAxis::Y);
        assert_eq!(MoneyAxis::Y.column_offsets(), (0, 1));
        assert_eq!(MoneyAxis::X.column_offsets(), (1, 0));
    }

    #[test]
    fn test_default_palette() {
        let palette = ColorPalette::default();
        assert_eq!(palette.primary.to_string(), "#4A90E2");
        assert_eq!(palette.secondary.to_string(), "#50E3C2");
        assert_eq!(palette.accent.to_string(), "#F5A623");
        assert_eq!(
            ColorPalette::from_hex("#4A90E2", "#50E3C2", "#F5A623").unwrap(),
            palette
        );
    }

    #[test]
    fn test_color_map_rejects_bad_hex() {
        let map = ColorMap::from_hex([("B", "#FF0000")]).unwrap();
        assert_eq!(map.get("B"), Some(Color::RED));
        assert_eq!(map.get("A"), None);

        let err = ColorMap::from_hex([("B", "red")]).unwrap_err();
        assert!(matches!(err, ChartError::InvalidColor(text) if text == "red"));
    }
}
