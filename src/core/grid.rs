use crate::models::block::Block;
use crate::models::class_record::ClassRecord;
use crate::models::day::Day;
use std::collections::HashSet;

/// A record resolved for a grid cell, tagged with whether it comes from
/// the selection or is only previewed through the title filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellEntry<'a> {
    pub record: &'a ClassRecord,
    pub selected: bool,
}

/// One resolved row of the weekly grid: a block and its six day cells.
pub struct GridRow<'a> {
    pub block: Block,
    pub cells: Vec<Vec<CellEntry<'a>>>,
}

fn scheduled_at(rec: &ClassRecord, block: Block, day: Day) -> bool {
    rec.block == block.label() && rec.occupies(day)
}

/// Records to show in the `(block, day)` cell.
///
/// Selected rows come first, followed by rows of the active title that
/// are not already selected under the same `(nrc, title, block)`. The
/// result never holds two rows with the same `(nrc, title, block)`; on a
/// clash the selected row wins. An empty result means an empty cell.
pub fn resolve_cell<'a>(
    block: Block,
    day: Day,
    pool: &'a [ClassRecord],
    selection: &'a [ClassRecord],
    active_title: Option<&str>,
) -> Vec<&'a ClassRecord> {
    resolve_cell_entries(block, day, pool, selection, active_title)
        .into_iter()
        .map(|e| e.record)
        .collect()
}

/// Same as [`resolve_cell`], keeping the selected/preview tag.
pub fn resolve_cell_entries<'a>(
    block: Block,
    day: Day,
    pool: &'a [ClassRecord],
    selection: &'a [ClassRecord],
    active_title: Option<&str>,
) -> Vec<CellEntry<'a>> {
    let selected_here = selection
        .iter()
        .filter(|r| scheduled_at(r, block, day))
        .map(|record| CellEntry {
            record,
            selected: true,
        });

    let filtered_here: Vec<CellEntry<'a>> = match active_title {
        Some(title) => {
            let selected_keys: HashSet<(&str, &str, &str)> =
                selection.iter().map(|r| r.cell_key()).collect();
            pool.iter()
                .filter(|r| r.title == title && scheduled_at(r, block, day))
                .filter(|r| !selected_keys.contains(&r.cell_key()))
                .map(|record| CellEntry {
                    record,
                    selected: false,
                })
                .collect()
        }
        None => Vec::new(),
    };

    let mut seen: HashSet<(&str, &str, &str)> = HashSet::new();
    selected_here
        .chain(filtered_here)
        .filter(|e| seen.insert(e.record.cell_key()))
        .collect()
}

/// Resolve every cell of the 7 × 6 grid, block by block.
pub fn resolve_grid<'a>(
    pool: &'a [ClassRecord],
    selection: &'a [ClassRecord],
    active_title: Option<&str>,
) -> Vec<GridRow<'a>> {
    Block::ALL
        .into_iter()
        .map(|block| GridRow {
            block,
            cells: Day::ALL
                .into_iter()
                .map(|day| resolve_cell_entries(block, day, pool, selection, active_title))
                .collect(),
        })
        .collect()
}
