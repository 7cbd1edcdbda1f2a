//! Charts over CSV input
#![cfg(feature = "csv")]

use std::io::Write;

use grid_charts::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_chart_from_csv_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Day,Revenue").unwrap();
    writeln!(file, "2024-01-01,120.5").unwrap();
    writeln!(file, "2024-01-02,98").unwrap();
    writeln!(file, "2024-01-03,143.25").unwrap();
    file.flush().unwrap();

    let source = CsvReader::read_file(file.path(), &CsvReadOptions::default()).unwrap();
    let mut workbook = Workbook::new();
    let mut table = DataTable::new("Daily Revenue", source)
        .with_sheet("Sheet1")
        .with_style(StyleSpec::new().with_main_format(NumberFormat::CURRENCY));

    let spec = ChartSpec::new("Daily Revenue", ChartKind::Line(LineChart::default()))
        .with_write_options(WriteOptions::default().with_table(true))
        .with_axis_titles(Some("Day"), Some("USD"));
    let chart = workbook.add_chart(&spec, &mut table).unwrap();

    assert_eq!(chart.series[0].values.to_formula(), "daily_revenue[Revenue]");
    assert_eq!(
        chart.series[0].categories.as_ref().map(|c| c.to_formula()),
        Some("daily_revenue[Day]".to_string())
    );
    assert_eq!(
        chart.value_axis.as_ref().and_then(|a| a.title.as_deref()),
        Some("USD")
    );

    let ws = workbook.sheet("Sheet1").unwrap();
    assert!(matches!(ws.get_value("A3").unwrap(), CellValue::Date(_)));
}
