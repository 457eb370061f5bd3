use super::class_record::ClassRecord;
use serde::Serialize;

/// All time-slots of one course section, identified by `(nrc, section)`.
///
/// Display metadata comes from the first record seen for the section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionGroup {
    pub nrc: String,
    pub section: String,
    pub title: String,
    pub professor_first_name: String,
    pub professor_last_name: String,
    pub occurrences: Vec<ClassRecord>,
}

impl SectionGroup {
    pub fn from_first(rec: &ClassRecord) -> Self {
        Self {
            nrc: rec.nrc.clone(),
            section: rec.section.clone(),
            title: rec.title.clone(),
            professor_first_name: rec.professor_first_name.clone(),
            professor_last_name: rec.professor_last_name.clone(),
            occurrences: Vec::new(),
        }
    }

    pub fn key(&self) -> (&str, &str) {
        (&self.nrc, &self.section)
    }

    pub fn professor_display(&self) -> String {
        let first = self
            .professor_first_name
            .split(' ')
            .next()
            .unwrap_or_default();
        format!("{} {}", first, self.professor_last_name)
            .trim()
            .to_string()
    }

    /// Compact "Lunes A, Miércoles A" summary of the occurrences.
    pub fn slots_summary(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        for occ in &self.occurrences {
            for day in occ.scheduled_days() {
                let slot = format!("{} {}", day.label(), occ.block);
                if !parts.contains(&slot) {
                    parts.push(slot);
                }
            }
        }
        parts.join(", ")
    }
}
