use crate::core::grid::{self, CellEntry, GridRow};
use crate::core::grouping::group_sections;
use crate::core::import::ImportBatch;
use crate::core::persistence::{KeyValueStore, ScheduleBridge};
use crate::core::selection::{Selection, ToggleOutcome};
use crate::errors::{AppError, AppResult};
use crate::models::block::Block;
use crate::models::class_record::ClassRecord;
use crate::models::day::Day;
use crate::models::section_group::SectionGroup;
use std::collections::HashSet;

/// A section of the filtered title, as offered to the student.
#[derive(Debug, Clone)]
pub struct SectionChoice {
    pub group: SectionGroup,
    pub selected: bool,
}

/// Result of restoring a saved schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOutcome {
    pub restored: usize,
    /// Restored rows whose section is not in the current pool.
    pub orphaned: usize,
}

/// Pool, imported files, selection and title filter of one scheduling session.
#[derive(Debug, Default)]
pub struct SchedulingSession {
    pool: Vec<ClassRecord>,
    files: Vec<String>,
    selection: Selection,
    title_filter: Option<String>,
}

impl SchedulingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(&self) -> &[ClassRecord] {
        &self.pool
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn title_filter(&self) -> Option<&str> {
        self.title_filter.as_deref()
    }

    pub fn has_pool(&self) -> bool {
        !self.pool.is_empty()
    }

    /// Publish a freshly imported batch. Selection and title filter start over.
    pub fn load_batch(&mut self, batch: ImportBatch) -> usize {
        self.selection.clear();
        self.title_filter = None;
        self.files = batch.files;
        self.pool = batch.records;
        self.pool.len()
    }

    /// Withdraw a file: its rows leave the pool and the selection together.
    /// Returns how many selected rows were purged.
    pub fn remove_file(&mut self, file_id: &str) -> AppResult<usize> {
        if !self.files.iter().any(|f| f == file_id) {
            return Err(AppError::UnknownFile(file_id.to_string()));
        }

        self.files.retain(|f| f != file_id);
        self.pool.retain(|c| c.source_file != file_id);
        let purged = self.selection.purge_by_file(file_id);
        self.title_filter = None;
        Ok(purged)
    }

    /// Distinct non-empty course titles, in first-seen order.
    pub fn titles(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.pool
            .iter()
            .map(|c| c.title.as_str())
            .filter(|t| !t.is_empty() && seen.insert(*t))
            .collect()
    }

    pub fn set_title_filter(&mut self, title: Option<String>) {
        self.title_filter = title.filter(|t| !t.trim().is_empty());
    }

    /// Sections offered for a title, flagged when already selected.
    pub fn sections_for_title(&self, title: &str) -> Vec<SectionChoice> {
        group_sections(self.pool.iter().filter(|c| c.title == title))
            .into_iter()
            .map(|group| SectionChoice {
                selected: self.selection.contains_section(&group.nrc, &group.section),
                group,
            })
            .collect()
    }

    /// Toggle every row sharing the NRC, as if the student clicked its first section.
    pub fn toggle_nrc(&mut self, nrc: &str) -> AppResult<ToggleOutcome> {
        let clicked = self
            .pool
            .iter()
            .find(|c| c.nrc == nrc)
            .cloned()
            .ok_or_else(|| AppError::UnknownNrc(nrc.to_string()))?;
        Ok(self.selection.toggle_by_nrc(&self.pool, &clicked))
    }

    /// Toggle starting from a specific section of the NRC.
    pub fn toggle_section(&mut self, nrc: &str, section: &str) -> AppResult<ToggleOutcome> {
        let clicked = self
            .pool
            .iter()
            .find(|c| c.nrc == nrc && c.section == section)
            .cloned()
            .ok_or_else(|| AppError::UnknownSection(nrc.to_string(), section.to_string()))?;
        Ok(self.selection.toggle_by_nrc(&self.pool, &clicked))
    }

    pub fn remove_section(&mut self, nrc: &str, section: &str) -> AppResult<usize> {
        match self.selection.remove_by_key(nrc, section) {
            0 => Err(AppError::UnknownSection(nrc.to_string(), section.to_string())),
            n => Ok(n),
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selected_groups(&self) -> Vec<SectionGroup> {
        self.selection.groups()
    }

    pub fn cell(&self, block: Block, day: Day) -> Vec<CellEntry<'_>> {
        grid::resolve_cell_entries(
            block,
            day,
            &self.pool,
            self.selection.records(),
            self.title_filter(),
        )
    }

    pub fn grid(&self) -> Vec<GridRow<'_>> {
        grid::resolve_grid(&self.pool, self.selection.records(), self.title_filter())
    }

    pub fn save<S: KeyValueStore>(&self, bridge: &mut ScheduleBridge<'_, S>) -> AppResult<()> {
        bridge.save(&self.selection)
    }

    /// Restore the saved schedule into the selection.
    ///
    /// Refused while the pool is empty; the selection is left untouched on
    /// any error or when nothing is saved.
    pub fn load<S: KeyValueStore>(
        &mut self,
        bridge: &ScheduleBridge<'_, S>,
    ) -> AppResult<LoadOutcome> {
        let saved = bridge
            .load(self.pool.is_empty())?
            .ok_or(AppError::NoSavedSchedule)?;

        let pool_keys: HashSet<(&str, &str)> = self.pool.iter().map(|c| c.section_key()).collect();
        let orphaned = saved
            .records()
            .iter()
            .filter(|r| !pool_keys.contains(&r.section_key()))
            .count();

        let restored = saved.len();
        self.selection = saved;
        Ok(LoadOutcome { restored, orphaned })
    }
}
