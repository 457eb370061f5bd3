use serde::Serialize;

/// Weekdays that can carry a class, as they appear in the CSV header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Day {
    Monday,    // Lunes
    Tuesday,   // Martes
    Wednesday, // Miércoles
    Thursday,  // Jueves
    Friday,    // Viernes
    Saturday,  // Sábado
}

impl Day {
    pub const ALL: [Day; 6] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    /// Column name used by the course-offering export.
    pub fn label(&self) -> &'static str {
        match self {
            Day::Monday => "Lunes",
            Day::Tuesday => "Martes",
            Day::Wednesday => "Miércoles",
            Day::Thursday => "Jueves",
            Day::Friday => "Viernes",
            Day::Saturday => "Sábado",
        }
    }

    /// Parse a day from user input: the Spanish label (with or without
    /// accents) or the English name, case-insensitive.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "lunes" | "lu" | "monday" | "mon" => Some(Day::Monday),
            "martes" | "ma" | "tuesday" | "tue" => Some(Day::Tuesday),
            "miércoles" | "miercoles" | "mi" | "wednesday" | "wed" => Some(Day::Wednesday),
            "jueves" | "ju" | "thursday" | "thu" => Some(Day::Thursday),
            "viernes" | "vi" | "friday" | "fri" => Some(Day::Friday),
            "sábado" | "sabado" | "sa" | "saturday" | "sat" => Some(Day::Saturday),
            _ => None,
        }
    }
}
