//! Reading course-offering CSV exports into class records.
//!
//! Each file is parsed as its own task on the rayon pool; the batch is
//! only assembled after every task has joined, so callers never see a
//! partially imported pool.

use crate::core::filter::filter_records;
use crate::errors::AppResult;
use crate::models::class_record::{ClassRecord, RawRow};
use csv::{ReaderBuilder, Trim};
use rayon::prelude::*;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Per-file diagnostics of an import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub file: String,
    pub rows_read: usize,
    pub rows_kept: usize,
    /// Parse failure message. A failed file contributes no rows.
    pub error: Option<String>,
}

impl FileReport {
    pub fn rows_dropped(&self) -> usize {
        self.rows_read - self.rows_kept
    }
}

/// Everything produced by one import: the concatenated pool and the files it came from.
#[derive(Debug, Clone, Default)]
pub struct ImportBatch {
    pub records: Vec<ClassRecord>,
    pub files: Vec<String>,
    pub reports: Vec<FileReport>,
}

impl ImportBatch {
    pub fn rows_dropped(&self) -> usize {
        self.reports.iter().map(FileReport::rows_dropped).sum()
    }

    pub fn failed_files(&self) -> Vec<&FileReport> {
        self.reports.iter().filter(|r| r.error.is_some()).collect()
    }
}

/// Name a file is known by inside a session (its base name).
pub fn file_id(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Tokenize a delimited export with a header row into raw rows.
///
/// Blank lines are skipped, short rows simply miss their trailing
/// columns, and invalid UTF-8 is replaced rather than rejected.
pub fn read_raw_rows<R: Read>(reader: R, delimiter: u8) -> AppResult<Vec<RawRow>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .byte_headers()?
        .iter()
        .map(|h| {
            String::from_utf8_lossy(h)
                .trim_start_matches('\u{feff}')
                .to_string()
        })
        .collect();

    let mut rows = Vec::new();
    for result in rdr.byte_records() {
        let record = result?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .filter(|(h, _)| !h.is_empty())
            .map(|(h, v)| (h.clone(), String::from_utf8_lossy(v).to_string()))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

pub fn read_file(path: &Path, delimiter: u8) -> AppResult<Vec<RawRow>> {
    let file = File::open(path)?;
    read_raw_rows(file, delimiter)
}

fn import_one(path: &Path, delimiter: u8) -> (Vec<ClassRecord>, FileReport) {
    let id = file_id(path);
    match read_file(path, delimiter) {
        Ok(rows) => {
            let records = filter_records(&rows, &id);
            let report = FileReport {
                file: id,
                rows_read: rows.len(),
                rows_kept: records.len(),
                error: None,
            };
            (records, report)
        }
        Err(e) => (
            Vec::new(),
            FileReport {
                file: id,
                rows_read: 0,
                rows_kept: 0,
                error: Some(e.to_string()),
            },
        ),
    }
}

/// Parse all files concurrently and join them into one batch.
pub fn import_files(paths: &[PathBuf], delimiter: u8) -> ImportBatch {
    let parsed: Vec<(Vec<ClassRecord>, FileReport)> = paths
        .par_iter()
        .map(|p| import_one(p, delimiter))
        .collect();

    let mut batch = ImportBatch::default();
    for (records, report) in parsed {
        batch.records.extend(records);
        batch.files.push(report.file.clone());
        batch.reports.push(report);
    }
    batch
}
