//! CSV options

/// Options for reading CSV input
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Whether first row is header; without one, columns are named
    /// `Column1`, `Column2`, ...
    pub has_header: bool,
    /// Detect booleans, numbers and ISO dates instead of keeping text
    pub auto_detect_types: bool,
    /// Column to use as the index column, the first one when unset
    pub index_column: Option<String>,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            has_header: true,
            auto_detect_types: true,
            index_column: None,
        }
    }
}

impl CsvReadOptions {
    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quote character
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    /// Set whether the first row is a header
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Keep every field as text
    pub fn without_type_detection(mut self) -> Self {
        self.auto_detect_types = false;
        self
    }

    /// Pick the index column by name
    pub fn with_index_column<S: Into<String>>(mut self, name: S) -> Self {
        self.index_column = Some(name.into());
        self
    }
}
