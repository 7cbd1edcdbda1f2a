//! Writes a tabular source into the cells its layout describes

use grid_charts_core::Worksheet;
use tracing::debug;

use crate::error::Result;
use crate::layout::Layout;
use crate::source::TabularSource;
use crate::style::ResolvedStyles;

/// Write the header at `start_row` and the data rows below it
///
/// Header cells keep the default style; data cells get
/// [`ResolvedStyles::format_for`] their column.
pub fn write_source(
    worksheet: &mut Worksheet,
    layout: &Layout,
    source: &TabularSource,
    styles: &ResolvedStyles,
) -> Result<()> {
    let header_row = layout.start_row();
    let first_col = layout.start_col();

    for (offset, column) in (0u32..).zip(source.columns()) {
        let col = first_col + offset;
        worksheet.write_at(header_row, col, column.name.as_str(), None)?;

        let format = styles.format_for(&column.name, offset as usize == source.index());
        for (row, value) in (header_row + 1..).zip(&column.values) {
            worksheet.write_at(row, col, value.clone(), format)?;
        }
    }

    debug!(
        sheet = worksheet.name(),
        range = %layout.range_notation(),
        cells = (source.row_count() + 1) * source.column_count(),
        "wrote source"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Shape;
    use crate::source::Column;
    use crate::style::StyleSpec;
    use grid_charts_core::{CellValue, NumberFormat};

    #[test]
    fn test_writes_header_and_formatted_data() {
        let source = TabularSource::new(vec![
            Column::new("Category", ["A", "B"]),
            Column::new("Value", [10, 23]),
        ])
        .unwrap();
        let mut ws = Worksheet::new("Sheet1");
        let layout = Layout::create("B2", Shape::new(2, 2)).unwrap();
        let styles = StyleSpec::new()
            .with_main_format(NumberFormat::CURRENCY)
            .resolve(&mut ws);

        write_source(&mut ws, &layout, &source, &styles).unwrap();

        assert_eq!(ws.get_value("B2").unwrap().as_string(), Some("Category"));
        assert_eq!(ws.get_value("C2").unwrap().as_string(), Some("Value"));
        assert_eq!(ws.get_value("C4").unwrap(), CellValue::from(23));

        // index column keeps the default style, data columns get the main format
        assert_eq!(ws.cell_style_index_at(2, 1), 0);
        assert_eq!(ws.cell_style_index_at(2, 2), styles.main().unwrap());
        assert_eq!(ws.cell_style_index_at(1, 2), 0);
    }
}
