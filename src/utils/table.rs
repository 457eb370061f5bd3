//! Table rendering utilities for CLI outputs.
//!
//! Cells may hold several lines; each line is wrapped to the column
//! width and padded by display width, so accented titles line up.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width: width.max(1),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Vec<String>>>,
}

fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Add a row; each cell is a list of lines. Missing cells render blank.
    pub fn add_row(&mut self, row: Vec<Vec<String>>) {
        self.rows.push(row);
    }

    fn separator(&self) -> String {
        let mut out = String::from("+");
        for col in &self.columns {
            out.push_str(&"-".repeat(col.width + 2));
            out.push('+');
        }
        out.push('\n');
        out
    }

    fn render_line(&self, cells: &[String]) -> String {
        let mut out = String::from("|");
        for (i, col) in self.columns.iter().enumerate() {
            let text = cells.get(i).map(String::as_str).unwrap_or("");
            out.push(' ');
            out.push_str(&pad(text, col.width));
            out.push_str(" |");
        }
        out.push('\n');
        out
    }

    fn wrap_cell(&self, col: usize, lines: &[String]) -> Vec<String> {
        let width = self.columns[col].width;
        lines
            .iter()
            .flat_map(|l| {
                if l.is_empty() {
                    vec![String::new()]
                } else {
                    textwrap::wrap(l, width)
                        .into_iter()
                        .map(|c| c.into_owned())
                        .collect()
                }
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let mut out = self.separator();

        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        out.push_str(&self.render_line(&headers));
        out.push_str(&self.separator());

        for row in &self.rows {
            let wrapped: Vec<Vec<String>> = (0..self.columns.len())
                .map(|i| match row.get(i) {
                    Some(lines) => self.wrap_cell(i, lines),
                    None => Vec::new(),
                })
                .collect();
            let height = wrapped.iter().map(Vec::len).max().unwrap_or(0).max(1);

            for line_idx in 0..height {
                let line: Vec<String> = wrapped
                    .iter()
                    .map(|cell| cell.get(line_idx).cloned().unwrap_or_default())
                    .collect();
                out.push_str(&self.render_line(&line));
            }
            out.push_str(&self.separator());
        }

        out
    }
}
