//! Table promotion
//!
//! Promotion declares structural table metadata over cells that are already
//! written. No cell values are touched.

use grid_charts_core::table::normalize_table_name;
use grid_charts_core::{TableColumn, TableDefinition, Workbook};
use tracing::debug;

use crate::error::{LayoutError, Result};
use crate::layout::{Layout, TableBinding};
use crate::source::TabularSource;
use crate::style::ResolvedStyles;

/// Promote a written layout to a named structured table
///
/// The table name is `name` when given, otherwise `display_name` lower-cased
/// with whitespace runs turned into underscores. Column formats come from
/// `styles`, the same value the cells were written with.
pub fn promote(
    workbook: &mut Workbook,
    layout: &mut Layout,
    source: &TabularSource,
    styles: &ResolvedStyles,
    name: Option<&str>,
    display_name: &str,
) -> Result<String> {
    let definition = table_definition(layout, source, styles, name, display_name)?;
    let sheet = layout.require_sheet()?.to_string();

    let table_name = definition.name.clone();
    workbook.add_table(&sheet, definition)?;

    layout.mark_promoted(TableBinding {
        name: table_name.clone(),
        columns: source.column_names().map(str::to_string).collect(),
    })?;

    debug!(
        sheet = %sheet,
        table = %table_name,
        range = %layout.range_notation(),
        "promoted layout to table"
    );
    Ok(table_name)
}

/// The table [`promote`] would declare over `layout`
///
/// Nothing is registered; the workbook still has to accept the name and
/// the range.
pub fn table_definition(
    layout: &Layout,
    source: &TabularSource,
    styles: &ResolvedStyles,
    name: Option<&str>,
    display_name: &str,
) -> Result<TableDefinition> {
    if let Some(binding) = layout.table_binding() {
        return Err(LayoutError::PromotionConflict(binding.name.clone()));
    }

    let table_name = match name {
        Some(name) => name.to_string(),
        None => normalize_table_name(display_name),
    };

    let columns: Vec<TableColumn> = source
        .columns()
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let format = styles.format_for(&c.name, i == source.index());
            TableColumn::new(c.name.as_str()).with_format(format)
        })
        .collect();

    Ok(TableDefinition::new(table_name, layout.range(), columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Column;
    use crate::style::StyleSpec;
    use crate::writer::write_source;
    use grid_charts_core::{NumberFormat, Style};
    use pretty_assertions::assert_eq;

    struct Fixture {
        workbook: Workbook,
        layout: Layout,
        source: TabularSource,
        styles: ResolvedStyles,
    }

    fn fixture() -> Fixture {
        let source = TabularSource::new(vec![
            Column::new("Category", ["A", "B", "C", "D"]),
            Column::new("Value", [10, 23, 7, 15]),
        ])
        .unwrap();
        let mut workbook = Workbook::new();
        let ws = workbook.sheet_mut("Sheet1").unwrap();
        let mut layout = Layout::create("A1", source.shape()).unwrap();
        layout.bind(ws.name());
        let styles = StyleSpec::new()
            .with_main_format(NumberFormat::CURRENCY)
            .with_column_format("Category", Style::new().bold(true))
            .resolve(ws);
        write_source(ws, &layout, &source, &styles).unwrap();

        Fixture {
            workbook,
            layout,
            source,
            styles,
        }
    }

    #[test]
    fn test_promote_declares_table() {
        let Fixture {
            mut workbook,
            mut layout,
            source,
            styles,
        } = fixture();

        let name = promote(
            &mut workbook,
            &mut layout,
            &source,
            &styles,
            None,
            "Quarterly Sales",
        )
        .unwrap();
        assert_eq!(name, "quarterly_sales");
        assert!(layout.is_promoted());

        let table = workbook.table("quarterly_sales").unwrap();
        assert_eq!(table.range.to_two_corner_string(), "A1:B5");
        assert_eq!(
            table.columns,
            vec![
                TableColumn::new("Category").with_format(styles.column("Category")),
                TableColumn::new("Value").with_format(styles.main()),
            ]
        );
    }

    #[test]
    fn test_table_column_formats_match_cells() {
        let Fixture {
            mut workbook,
            mut layout,
            source,
            styles,
        } = fixture();
        promote(&mut workbook, &mut layout, &source, &styles, Some("sales"), "ignored").unwrap();

        let ws = workbook.sheet("Sheet1").unwrap();
        let table = ws.table("sales").unwrap();
        for (offset, column) in table.columns.iter().enumerate() {
            let cell_format = ws.cell_style_index_at(1, offset as u32);
            assert_eq!(column.format.unwrap_or(0), cell_format);
        }
    }

    #[test]
    fn test_promote_twice_conflicts() {
        let Fixture {
            mut workbook,
            mut layout,
            source,
            styles,
        } = fixture();
        promote(&mut workbook, &mut layout, &source, &styles, Some("sales"), "").unwrap();

        let err = promote(&mut workbook, &mut layout, &source, &styles, Some("other"), "")
            .unwrap_err();
        assert!(matches!(err, LayoutError::PromotionConflict(name) if name == "sales"));
    }

    #[test]
    fn test_promote_requires_bound_layout() {
        let Fixture {
            mut workbook,
            source,
            styles,
            ..
        } = fixture();
        let mut unbound = Layout::create("D1", source.shape()).unwrap();

        let err = promote(&mut workbook, &mut unbound, &source, &styles, Some("t"), "")
            .unwrap_err();
        assert!(matches!(err, LayoutError::UnboundSource));
        assert!(!unbound.is_promoted());
    }

    #[test]
    fn test_blank_display_name_is_rejected() {
        let Fixture {
            mut workbook,
            mut layout,
            source,
            styles,
        } = fixture();

        let err = promote(&mut workbook, &mut layout, &source, &styles, None, "   ").unwrap_err();
        assert!(matches!(
            err,
            LayoutError::Core(grid_charts_core::Error::InvalidTableName(_))
        ));
        assert!(!layout.is_promoted());
    }
}
