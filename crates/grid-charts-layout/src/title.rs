//! Merged title row above a written region

use grid_charts_core::{CellRange, Style, Worksheet};
use tracing::debug;

use crate::error::Result;
use crate::layout::Layout;

/// Put `text` in a merged, bold, centred row directly above the region
///
/// The written block moves down one row and the layout follows it, so the
/// title lands on the row just above the new `start_row`. Only open
/// layouts can take a title; references handed out before this call are
/// stale afterwards. On error the sheet and the layout are left as they were.
pub fn insert_title(worksheet: &mut Worksheet, layout: &mut Layout, text: &str) -> Result<()> {
    check_title(worksheet, layout)?;

    let block = layout.range();
    worksheet.move_block_down(&block, 1)?;
    worksheet.merge_range(&title_row(&block), text, &Style::title())?;

    layout.shift_rows(1)?;
    debug!(
        sheet = worksheet.name(),
        title = text,
        range = %layout.range_notation(),
        "inserted title"
    );
    Ok(())
}

/// Check that [`insert_title`] would succeed, without touching anything
///
/// The row below the region must be unused within its columns.
pub fn check_title(worksheet: &Worksheet, layout: &Layout) -> Result<()> {
    layout.ensure_open()?;
    let sheet = layout.require_sheet()?;
    if sheet != worksheet.name() {
        return Err(grid_charts_core::Error::other(format!(
            "layout belongs to sheet {}, not {}",
            sheet,
            worksheet.name()
        ))
        .into());
    }

    let block = layout.range();
    worksheet.check_block_move(&block, 1)?;
    worksheet.check_merge(&title_row(&block))?;
    Ok(())
}

fn title_row(block: &CellRange) -> CellRange {
    CellRange::from_indices(block.start.row, block.start.col, block.start.row, block.end.col)
}
