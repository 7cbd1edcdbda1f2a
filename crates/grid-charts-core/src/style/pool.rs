//! Style pool and format handles

use super::Style;
use ahash::AHashMap;

/// Handle to a style stored in a [`StylePool`]
///
/// Index 0 is always the default style.
pub type FormatId = u32;

/// The format-creation capability of a worksheet
///
/// Anything that can turn a [`Style`] into a [`FormatId`] can back the
/// style resolver. Implementations must return handles that stay valid for
/// the lifetime of the owning workbook.
pub trait FormatAllocator {
    /// Register a style and return its handle
    fn add_format(&mut self, style: Style) -> FormatId;

    /// Look a handle back up
    fn format(&self, id: FormatId) -> Option<&Style>;
}

/// Style pool for deduplicating styles
///
/// Each unique style is stored once; cells and table columns reference
/// styles by index.
#[derive(Debug)]
pub struct StylePool {
    /// All unique styles (index 0 is default)
    styles: Vec<Style>,
    index_map: AHashMap<Style, FormatId>,
}

impl StylePool {
    /// Create a new style pool with default style at index 0
    pub fn new() -> Self {
        let default = Style::default();
        let mut index_map = AHashMap::with_capacity(16);
        index_map.insert(default.clone(), 0);

        Self {
            styles: vec![default],
            index_map,
        }
    }

    /// Get or create a style, returning its index
    pub fn get_or_insert(&mut self, style: Style) -> FormatId {
        if let Some(&idx) = self.index_map.get(&style) {
            return idx;
        }

        let idx = self.styles.len() as FormatId;
        self.index_map.insert(style.clone(), idx);
        self.styles.push(style);
        idx
    }

    /// Get a style by index
    pub fn get(&self, index: FormatId) -> Option<&Style> {
        self.styles.get(index as usize)
    }

    /// Get the number of styles, default included
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the pool only has the default style
    pub fn is_empty(&self) -> bool {
        self.styles.len() <= 1
    }
}

impl Default for StylePool {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatAllocator for StylePool {
    fn add_format(&mut self, style: Style) -> FormatId {
        self.get_or_insert(style)
    }

    fn format(&self, id: FormatId) -> Option<&Style> {
        self.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn test_default_style() {
        let pool = StylePool::new();
        assert_eq!(pool.len(), 1);
        assert!(pool.is_empty());
        assert_eq!(pool.get(0), Some(&Style::default()));
    }

    #[test]
    fn test_deduplication() {
        let mut pool = StylePool::new();

        let idx1 = pool.get_or_insert(Style::new().bold(true));
        let idx2 = pool.get_or_insert(Style::new().bold(true));
        let idx3 = pool.get_or_insert(Style::with_number_format("$#,##0.00"));

        assert_eq!(idx1, idx2);
        assert_ne!(idx1, idx3);
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_allocator_handles_resolve() {
        let mut pool = StylePool::new();
        let style = Style::new().fill_color(Color::RED).italic(true);

        let id = pool.add_format(style.clone());
        assert!(id > 0);
        assert_eq!(pool.format(id), Some(&style));
    }
}
