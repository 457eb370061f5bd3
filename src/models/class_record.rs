use super::day::Day;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One parsed CSV row: column name → cell value.
pub type RawRow = BTreeMap<String, String>;

pub const COL_TITLE: &str = "Titulo";
pub const COL_NRC: &str = "NRC";
pub const COL_SECTION: &str = "Seccion";
pub const COL_BLOCK: &str = "Bloque";
pub const COL_PROF_NAME: &str = "NOMBRE_PROFESOR";
pub const COL_PROF_LASTNAME: &str = "AP_PATERNO_PROFESOR";
pub const COL_SOURCE: &str = "__archivo";

/// Columns consumed by `ClassRecord`; anything else ends up in `extra`.
const KNOWN_COLUMNS: [&str; 12] = [
    COL_TITLE,
    COL_NRC,
    COL_SECTION,
    COL_BLOCK,
    COL_PROF_NAME,
    COL_PROF_LASTNAME,
    "Lunes",
    "Martes",
    "Miércoles",
    "Jueves",
    "Viernes",
    "Sábado",
];

/// A single time-slot row of a course offering.
///
/// Serialized with the export column names so that a saved
/// schedule keeps the same shape as the imported rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassRecord {
    #[serde(rename = "Titulo", default)]
    pub title: String,
    #[serde(rename = "NRC", default)]
    pub nrc: String,
    #[serde(rename = "Seccion", default)]
    pub section: String,
    #[serde(rename = "Bloque", default)]
    pub block: String,

    #[serde(rename = "Lunes", default)]
    pub monday: String,
    #[serde(rename = "Martes", default)]
    pub tuesday: String,
    #[serde(rename = "Miércoles", default)]
    pub wednesday: String,
    #[serde(rename = "Jueves", default)]
    pub thursday: String,
    #[serde(rename = "Viernes", default)]
    pub friday: String,
    #[serde(rename = "Sábado", default)]
    pub saturday: String,

    #[serde(rename = "NOMBRE_PROFESOR", default)]
    pub professor_first_name: String,
    #[serde(rename = "AP_PATERNO_PROFESOR", default)]
    pub professor_last_name: String,

    #[serde(rename = "__archivo", default)]
    pub source_file: String,

    /// Unrecognized columns, kept as they were read.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl ClassRecord {
    /// Build a record with the identity fields set and no scheduled day.
    pub fn new(title: &str, nrc: &str, section: &str, block: &str) -> Self {
        Self {
            title: title.to_string(),
            nrc: nrc.to_string(),
            section: section.to_string(),
            block: block.to_string(),
            ..Default::default()
        }
    }

    /// Builder-style setter for a day marker.
    pub fn with_day(mut self, day: Day, marker: &str) -> Self {
        *self.day_mut(day) = marker.to_string();
        self
    }

    pub fn with_professor(mut self, first_name: &str, last_name: &str) -> Self {
        self.professor_first_name = first_name.to_string();
        self.professor_last_name = last_name.to_string();
        self
    }

    pub fn with_source(mut self, file_id: &str) -> Self {
        self.source_file = file_id.to_string();
        self
    }

    /// Map a raw CSV row onto a record. Missing columns become empty strings.
    pub fn from_raw(row: &RawRow) -> Self {
        let get = |col: &str| row.get(col).cloned().unwrap_or_default();

        let mut rec = Self {
            title: get(COL_TITLE),
            nrc: get(COL_NRC),
            section: get(COL_SECTION),
            block: get(COL_BLOCK),
            professor_first_name: get(COL_PROF_NAME),
            professor_last_name: get(COL_PROF_LASTNAME),
            ..Default::default()
        };

        for day in Day::ALL {
            *rec.day_mut(day) = get(day.label());
        }

        rec.extra = row
            .iter()
            .filter(|(k, _)| !KNOWN_COLUMNS.contains(&k.as_str()) && k.as_str() != COL_SOURCE)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        rec
    }

    /// Raw marker stored in the given day column.
    pub fn day(&self, day: Day) -> &str {
        match day {
            Day::Monday => &self.monday,
            Day::Tuesday => &self.tuesday,
            Day::Wednesday => &self.wednesday,
            Day::Thursday => &self.thursday,
            Day::Friday => &self.friday,
            Day::Saturday => &self.saturday,
        }
    }

    fn day_mut(&mut self, day: Day) -> &mut String {
        match day {
            Day::Monday => &mut self.monday,
            Day::Tuesday => &mut self.tuesday,
            Day::Wednesday => &mut self.wednesday,
            Day::Thursday => &mut self.thursday,
            Day::Friday => &mut self.friday,
            Day::Saturday => &mut self.saturday,
        }
    }

    /// True when the day column holds a non-blank marker.
    pub fn occupies(&self, day: Day) -> bool {
        !self.day(day).trim().is_empty()
    }

    /// True when the record is scheduled on at least one day.
    pub fn has_schedule(&self) -> bool {
        Day::ALL.iter().any(|d| self.occupies(*d))
    }

    /// Days on which this time-slot is scheduled, in weekday order.
    pub fn scheduled_days(&self) -> Vec<Day> {
        Day::ALL.into_iter().filter(|d| self.occupies(*d)).collect()
    }

    /// Identity of the section this time-slot belongs to.
    pub fn section_key(&self) -> (&str, &str) {
        (&self.nrc, &self.section)
    }

    /// Key used to collapse duplicates inside a grid cell.
    pub fn cell_key(&self) -> (&str, &str, &str) {
        (&self.nrc, &self.title, &self.block)
    }

    /// Professor name as shown to the student: first given name + paternal surname.
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
}
