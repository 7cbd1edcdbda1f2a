//! Formatting parity between cells and tables, and per-category colors

use grid_charts::prelude::*;
use grid_charts::PointFill;
use pretty_assertions::assert_eq;

fn sales() -> TabularSource {
    TabularSource::new(vec![
        Column::new("Category", ["A", "B", "C", "D"]),
        Column::new("Value", [10, 23, 7, 15]),
    ])
    .unwrap()
}

#[test]
fn test_single_point_directive_for_colored_category() {
    let mut workbook = Workbook::new();
    let mut table = DataTable::new("Sales", sales());
    let donut = DonutChart {
        colors: ColorMap::from_hex([("B", "#FF0000")]).unwrap(),
        ..DonutChart::default()
    };
    let spec = ChartSpec::new("Sales", ChartKind::Donut(donut));

    let chart = workbook.add_chart(&spec, &mut table).unwrap();

    assert_eq!(
        chart.series[0].points,
        vec![PointFill {
            index: 1,
            fill: Color::from_hex("#FF0000").unwrap(),
        }]
    );
}

#[test]
fn test_table_columns_declare_cell_formats() {
    let mut workbook = Workbook::new();
    let style = StyleSpec::new()
        .with_main_format(NumberFormat::CURRENCY_MILLIONS)
        .with_column_format("Category", Style::new().italic(true));
    let mut table = DataTable::new("Sales", sales()).with_style(style);
    table
        .add_to_workbook(&mut workbook, "Sheet1", WriteOptions::default().with_table(true))
        .unwrap();

    let ws = workbook.sheet("Sheet1").unwrap();
    let definition = ws.table("sales").unwrap();
    let layout = table.layout().unwrap();
    let first_data_row = layout.start_row() + 1;

    for (offset, column) in definition.columns.iter().enumerate() {
        let col = layout.start_col() + offset as u32;
        for row in first_data_row..=layout.end_row() {
            assert_eq!(column.format.unwrap_or(0), ws.cell_style_index_at(row, col));
        }
    }

    let value_style = ws.cell_style_at(first_data_row, 1).unwrap();
    assert_eq!(
        value_style.number_format.format_string(),
        NumberFormat::CURRENCY_MILLIONS
    );
    assert!(ws.cell_style_at(first_data_row, 0).unwrap().italic);
}

#[test]
fn test_palette_primary_fills_series() {
    let mut workbook = Workbook::new();
    let mut table = DataTable::new("Sales", sales());
    let palette = ColorPalette::from_hex("#112233", "#445566", "#778899").unwrap();
    let spec = ChartSpec::new("Sales", ChartKind::Line(LineChart::default())).with_palette(palette);

    let chart = workbook.add_chart(&spec, &mut table).unwrap();
    assert_eq!(chart.series[0].fill, Some(Color::rgb(0x11, 0x22, 0x33)));
}
