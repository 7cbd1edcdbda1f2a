//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use grid_charts_core::CellValue;
use grid_charts_layout::TabularSource;
use tracing::debug;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;

/// CSV reader producing tabular sources
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a tabular source
    pub fn read_file<P: AsRef<Path>>(
        path: P,
        options: &CsvReadOptions,
    ) -> CsvResult<TabularSource> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a tabular source
    ///
    /// Every record must have as many fields as the header.
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<TabularSource> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(options.has_header)
            .from_reader(reader);

        let mut headers: Vec<String> = Vec::new();
        if options.has_header {
            for (col, name) in csv_reader.headers()?.iter().enumerate() {
                let name = name.trim();
                if name.is_empty() {
                    return Err(CsvError::EmptyHeader(col));
                }
                headers.push(name.to_string());
            }
        }

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            let row: Vec<CellValue> = record
                .iter()
                .map(|field| {
                    if options.auto_detect_types {
                        Self::detect_type(field)
                    } else {
                        CellValue::string(field)
                    }
                })
                .collect();
            rows.push(row);
        }

        if !options.has_header {
            let width = rows.first().map(Vec::len).unwrap_or(0);
            headers = (1..=width).map(|i| format!("Column{}", i)).collect();
        }

        debug!(columns = headers.len(), rows = rows.len(), "read csv");
        let source = TabularSource::from_rows(headers, rows)?;
        match &options.index_column {
            Some(name) => Ok(source.with_index(name)?),
            None => Ok(source),
        }
    }

    /// Detect the type of a field value
    fn detect_type(field: &str) -> CellValue {
        let field = field.trim();

        if field.is_empty() {
            return CellValue::Empty;
        }

        if field.eq_ignore_ascii_case("true") {
            return CellValue::Boolean(true);
        }
        if field.eq_ignore_ascii_case("false") {
            return CellValue::Boolean(false);
        }

        if let Ok(n) = field.parse::<f64>() {
            if n.is_finite() {
                return CellValue::Number(n);
            }
        }

        if let Ok(date) = NaiveDate::parse_from_str(field, "%Y-%m-%d") {
            return CellValue::Date(date);
        }

        CellValue::string(field)
    }
}
