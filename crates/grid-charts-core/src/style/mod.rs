//! Cell formats
//!
//! - [`Style`] - what a written cell looks like
//! - [`StylePool`] - deduplicating store that hands out [`FormatId`]s
//! - [`FormatAllocator`] - the format-creation capability layouts resolve against

mod color;
mod number_format;
mod pool;

pub use color::Color;
pub use number_format::NumberFormat;
pub use pool::{FormatAllocator, FormatId, StylePool};

/// Format of one cell
///
/// Only what regions and their titles need: emphasis, centring, a solid
/// background and the number format. Cells and table columns refer to a
/// style by [`FormatId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    pub bold: bool,
    pub italic: bool,
    /// Centred horizontally and vertically
    pub centered: bool,
    /// Solid background
    pub fill: Option<Color>,
    pub number_format: NumberFormat,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Style that only carries a number format string
    pub fn with_number_format<S: Into<String>>(format: S) -> Self {
        Self::new().number_format(format)
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    /// Set a custom number format string
    pub fn number_format<S: Into<String>>(mut self, format: S) -> Self {
        self.number_format = NumberFormat::Custom(format.into());
        self
    }

    /// Bold and centred; used for merged title rows
    pub fn title() -> Self {
        Self::new().bold(true).centered(true)
    }
}
