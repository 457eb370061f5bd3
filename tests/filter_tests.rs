use horario::core::filter::{filter_records, refilter};
use horario::core::import::read_raw_rows;
use horario::models::class_record::RawRow;
use horario::models::day::Day;

mod common;
use common::{OFERTA_MATE, rec};

fn row(pairs: &[(&str, &str)]) -> RawRow {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_keeps_only_rows_with_a_scheduled_day() {
    let rows = read_raw_rows(OFERTA_MATE.as_bytes(), b';').expect("parse csv");
    assert_eq!(rows.len(), 6);

    let records = filter_records(&rows, "oferta.csv");
    assert_eq!(records.len(), 5);
    assert!(records.iter().all(|r| r.title != "Química"));
    assert!(records.iter().all(|r| r.source_file == "oferta.csv"));
}

#[test]
fn test_blank_and_missing_day_columns_are_dropped() {
    let rows = vec![
        row(&[("Titulo", "A"), ("NRC", "1"), ("Lunes", "   ")]),
        row(&[("Titulo", "B"), ("NRC", "2")]),
        row(&[("Titulo", "C"), ("NRC", "3"), ("Sábado", " x ")]),
    ];

    let records = filter_records(&rows, "f.csv");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].nrc, "3");
    assert!(records[0].occupies(Day::Saturday));
    assert!(!records[0].occupies(Day::Monday));
}

#[test]
fn test_unrecognized_columns_are_preserved() {
    let rows = read_raw_rows(OFERTA_MATE.as_bytes(), b';').expect("parse csv");
    let records = filter_records(&rows, "oferta.csv");

    assert_eq!(records[0].extra.get("Sala").map(String::as_str), Some("S101"));
    assert!(!records[0].extra.contains_key("NRC"));
    assert_eq!(records[0].professor_display(), "Ana Pérez");
}

#[test]
fn test_filtering_is_idempotent() {
    let rows = read_raw_rows(OFERTA_MATE.as_bytes(), b';').expect("parse csv");
    let once = filter_records(&rows, "oferta.csv");
    let twice = refilter(&once);
    assert_eq!(once, twice);

    let pool = vec![
        rec("X", "1", "1", "A", &[Day::Monday]),
        rec("Y", "2", "1", "B", &[]),
    ];
    let filtered = refilter(&pool);
    assert_eq!(filtered.len(), 1);
    assert_eq!(refilter(&filtered), filtered);
}

#[test]
fn test_short_rows_and_blank_lines() {
    let csv = "Titulo;NRC;Seccion;Bloque;Lunes;Martes\n\nÁlgebra;77;1;A;x\nÁlgebra;78;1;B\n";
    let rows = read_raw_rows(csv.as_bytes(), b';').expect("parse csv");
    assert_eq!(rows.len(), 2);

    let records = filter_records(&rows, "corto.csv");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].nrc, "77");
    assert_eq!(records[0].tuesday, "");
}

#[test]
fn test_identity_fields_are_kept_verbatim() {
    let rows = vec![
        row(&[("Titulo", " Cálculo"), ("NRC", "1001 "), ("Bloque", "A"), ("Lunes", "x")]),
        row(&[("Titulo", "Cálculo"), ("NRC", "1001"), ("Bloque", "A"), ("Lunes", "x")]),
    ];

    let records = filter_records(&rows, "f.csv");
    assert_eq!(records[0].nrc, "1001 ");
    assert_eq!(records[0].title, " Cálculo");
    assert_ne!(records[0].section_key(), records[1].section_key());
}
