use crate::core::grouping::group_sections;
use crate::models::class_record::ClassRecord;
use crate::models::section_group::SectionGroup;
use std::collections::HashSet;

/// The student's chosen time-slots.
///
/// Every mutation builds the new contents first and swaps them in with a
/// single assignment, so no caller ever observes a half-applied toggle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    records: Vec<ClassRecord>,
}

/// What a toggle did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Selected(usize),
    Deselected(usize),
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<ClassRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ClassRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ClassRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains_nrc(&self, nrc: &str) -> bool {
        self.records.iter().any(|r| r.nrc == nrc)
    }

    pub fn contains_section(&self, nrc: &str, section: &str) -> bool {
        self.records
            .iter()
            .any(|r| r.nrc == nrc && r.section == section)
    }

    /// Selected records grouped per section, in selection order.
    pub fn groups(&self) -> Vec<SectionGroup> {
        group_sections(&self.records)
    }

    /// Select or deselect every pool row sharing `clicked.nrc`, across all
    /// sections with that NRC.
    ///
    /// Presence is checked by NRC alone: if any selected row carries the
    /// NRC, the whole NRC is considered selected and gets removed.
    /// Otherwise the sibling rows whose `(nrc, section)` is not yet
    /// selected are appended.
    pub fn toggle_by_nrc(&mut self, pool: &[ClassRecord], clicked: &ClassRecord) -> ToggleOutcome {
        let siblings: Vec<&ClassRecord> = pool.iter().filter(|c| c.nrc == clicked.nrc).collect();

        let selected_nrcs: HashSet<&str> = self.records.iter().map(|r| r.nrc.as_str()).collect();
        let already_selected = siblings
            .iter()
            .all(|c| selected_nrcs.contains(c.nrc.as_str()));

        if already_selected {
            let before = self.records.len();
            let next: Vec<ClassRecord> = self
                .records
                .iter()
                .filter(|r| r.nrc != clicked.nrc)
                .cloned()
                .collect();
            let removed = before - next.len();
            self.records = next;
            return ToggleOutcome::Deselected(removed);
        }

        let selected_keys: HashSet<(&str, &str)> =
            self.records.iter().map(|r| r.section_key()).collect();
        let additions: Vec<ClassRecord> = siblings
            .into_iter()
            .filter(|c| !selected_keys.contains(&c.section_key()))
            .cloned()
            .collect();

        let added = additions.len();
        let mut next = self.records.clone();
        next.extend(additions);
        self.records = next;
        ToggleOutcome::Selected(added)
    }

    /// Drop every selected row of the given section. Returns how many rows went away.
    pub fn remove_by_key(&mut self, nrc: &str, section: &str) -> usize {
        let before = self.records.len();
        self.records
            .retain(|r| !(r.nrc == nrc && r.section == section));
        before - self.records.len()
    }

    pub fn clear(&mut self) {
        self.records = Vec::new();
    }

    /// Drop every selected row imported from `file_id`. Returns how many rows went away.
    pub fn purge_by_file(&mut self, file_id: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.source_file != file_id);
        before - self.records.len()
    }

    /// Replace the contents wholesale (used when restoring a saved schedule).
    pub fn replace(&mut self, records: Vec<ClassRecord>) {
        self.records = records;
    }
}
