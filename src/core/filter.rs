use crate::models::class_record::{ClassRecord, RawRow};

/// Keep only the rows scheduled on at least one day and stamp them with
/// the file they came from.
///
/// Rows without any day column are treated as all-blank and dropped.
pub fn filter_records(raw_rows: &[RawRow], file_id: &str) -> Vec<ClassRecord> {
    raw_rows
        .iter()
        .map(ClassRecord::from_raw)
        .filter(ClassRecord::has_schedule)
        .map(|rec| rec.with_source(file_id))
        .collect()
}

/// Apply the same day predicate to records that are already built.
pub fn refilter(records: &[ClassRecord]) -> Vec<ClassRecord> {
    records
        .iter()
        .filter(|r| r.has_schedule())
        .cloned()
        .collect()
}
