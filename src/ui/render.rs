//! Text rendering of the session panels and the weekly grid.

use crate::config::Config;
use crate::core::grid::{CellEntry, GridRow};
use crate::core::import::ImportBatch;
use crate::core::session::{SchedulingSession, SectionChoice};
use crate::models::block::Block;
use crate::models::day::Day;
use crate::models::section_group::SectionGroup;
use crate::ui::messages::{header, hint, info, success, warning};
use crate::utils::colors::{CYAN, GREEN, colorize};
use crate::utils::table::{Column, Table};

/// Marker put in front of rows only previewed through the title filter.
pub const PREVIEW_MARK: &str = "~ ";

fn entry_lines(entry: &CellEntry<'_>, show_professor: bool) -> Vec<String> {
    let rec = entry.record;
    let mark = if entry.selected { "" } else { PREVIEW_MARK };

    let mut lines = vec![
        format!("{}{} {}", mark, rec.title, rec.section),
        format!("NRC: {}", rec.nrc),
    ];
    if show_professor {
        let prof = rec.professor_display();
        if !prof.is_empty() {
            lines.push(prof);
        }
    }
    lines
}

/// Render the 7 × 6 block/day grid.
pub fn render_grid(rows: &[GridRow<'_>], cfg: &Config) -> String {
    let mut columns = vec![Column::new("Bloque", 6)];
    columns.extend(Day::ALL.iter().map(|d| Column::new(d.label(), cfg.cell_width)));
    let mut table = Table::new(columns);

    for row in rows {
        let mut cells: Vec<Vec<String>> = vec![vec![row.block.label().to_string()]];
        for entries in &row.cells {
            let mut lines = Vec::new();
            for (i, entry) in entries.iter().enumerate() {
                if i > 0 {
                    lines.push(String::new());
                }
                lines.extend(entry_lines(entry, cfg.show_professor));
            }
            cells.push(lines);
        }
        table.add_row(cells);
    }

    table.render()
}

pub fn print_grid(session: &SchedulingSession, cfg: &Config) {
    header("Calendario semanal");
    print!("{}", render_grid(&session.grid(), cfg));
    if session.title_filter().is_some() {
        hint(format!("{}= preview of the filtered course, not selected", PREVIEW_MARK.trim()));
    }
}

/// One resolved cell, entry by entry.
pub fn print_cell(block: Block, day: Day, entries: &[CellEntry<'_>], cfg: &Config) {
    header(format!("{} {}", day.label(), block.label()));
    if entries.is_empty() {
        hint("Empty cell.");
        return;
    }
    for entry in entries {
        for line in entry_lines(entry, cfg.show_professor) {
            println!("  {}", line);
        }
    }
}

fn group_line(group: &SectionGroup) -> String {
    format!(
        "{} {}  NRC: {}",
        group.title,
        group.section,
        colorize(&group.nrc, CYAN)
    )
}

fn group_detail(group: &SectionGroup) -> String {
    let prof = group.professor_display();
    let slots = group.slots_summary();
    match (prof.is_empty(), slots.is_empty()) {
        (true, _) => format!("    {}", slots),
        (false, true) => format!("    {}", prof),
        (false, false) => format!("    {} | {}", prof, slots),
    }
}

/// "Clases seleccionadas" panel.
pub fn print_selected(groups: &[SectionGroup]) {
    header("Clases seleccionadas");
    if groups.is_empty() {
        hint("No classes selected.");
        return;
    }
    for group in groups {
        println!("{}", group_line(group));
        println!("{}", group_detail(group));
    }
}

/// Sections of the filtered title, selected ones marked with [x].
pub fn print_sections(title: &str, choices: &[SectionChoice]) {
    header(format!("Secciones de {}", title));
    if choices.is_empty() {
        hint("No sections for this course.");
        return;
    }
    for choice in choices {
        let mark = if choice.selected {
            colorize("[x]", GREEN)
        } else {
            "[ ]".to_string()
        };
        println!("{} {}", mark, group_line(&choice.group));
        println!("{}", group_detail(&choice.group));
    }
}

pub fn print_titles(titles: &[&str]) {
    header("Materias");
    if titles.is_empty() {
        hint("No courses loaded.");
        return;
    }
    for (i, t) in titles.iter().enumerate() {
        println!("{:>3}. {}", i + 1, t);
    }
}

pub fn print_files(files: &[String]) {
    header("Archivos cargados");
    if files.is_empty() {
        hint("No files loaded.");
        return;
    }
    for f in files {
        println!("  - {}", f);
    }
}

/// Summary of an import, with diagnostics for dropped rows and failed files.
pub fn print_import_report(batch: &ImportBatch) {
    for report in &batch.reports {
        match &report.error {
            Some(e) => warning(format!("{}: could not be read ({})", report.file, e)),
            None => info(format!(
                "{}: {} rows read, {} classes kept, {} dropped",
                report.file,
                report.rows_read,
                report.rows_kept,
                report.rows_dropped()
            )),
        }
    }

    if batch.records.is_empty() {
        warning("No valid classes found. Load a valid CSV file.");
    } else {
        success(format!(
            "Loaded {} classes from {} file(s).",
            batch.records.len(),
            batch.files.len()
        ));
    }
}
