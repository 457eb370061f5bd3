#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use horario::models::class_record::ClassRecord;
use horario::models::day::Day;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const HEADER: &str = "Titulo;NRC;Seccion;Bloque;NOMBRE_PROFESOR;AP_PATERNO_PROFESOR;Lunes;Martes;Miércoles;Jueves;Viernes;Sábado;Sala";

/// Offering with two Cálculo sections, one Física section on two days and
/// a Química row without any scheduled day.
pub const OFERTA_MATE: &str = "Titulo;NRC;Seccion;Bloque;NOMBRE_PROFESOR;AP_PATERNO_PROFESOR;Lunes;Martes;Miércoles;Jueves;Viernes;Sábado;Sala
Cálculo I;1001;1;A;Ana María;Pérez;x;;;;;;S101
Cálculo I;1001;1;B;Ana María;Pérez;;;x;;;;S101
Cálculo I;1002;2;C;Luis;Soto;;x;;;;;S102
Física I;2001;1;A;Carla;Rojas;;;;x;;;L1
Física I;2001;1;A;Carla;Rojas;;;;;x;;L1
Química;3001;1;D;Pedro;Díaz;;;;;;;Q1
";

/// Second offering file, used for multi-file imports.
pub const OFERTA_HUM: &str = "Titulo;NRC;Seccion;Bloque;NOMBRE_PROFESOR;AP_PATERNO_PROFESOR;Lunes;Martes;Miércoles;Jueves;Viernes;Sábado
Historia;4001;1;E;Marta;Vidal;;;;;;x
Historia;4001;1;F;Marta;Vidal;;;;;;x
Inglés;5001;3;G;John;Smith;  ;x;;;;
";

pub fn hor() -> Command {
    cargo_bin_cmd!("horario")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_horario.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Write `content` as `file_name` inside a per-test temp directory and return its path
pub fn write_csv(test: &str, file_name: &str, content: &str) -> String {
    let mut dir: PathBuf = env::temp_dir();
    dir.push(format!("horario_tests_{}", test));
    fs::create_dir_all(&dir).expect("create test dir");
    let path = dir.join(file_name);
    fs::write(&path, content).expect("write csv");
    path.to_string_lossy().to_string()
}

/// Initialize a test DB through the CLI (no config file written)
pub fn init_db(db_path: &str) {
    hor()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Short-hand for an in-memory record scheduled on the given days.
pub fn rec(title: &str, nrc: &str, section: &str, block: &str, days: &[Day]) -> ClassRecord {
    days.iter()
        .fold(ClassRecord::new(title, nrc, section, block), |r, d| {
            r.with_day(*d, "x")
        })
        .with_source("oferta.csv")
}
