use horario::core::selection::{Selection, ToggleOutcome};
use horario::models::class_record::ClassRecord;
use horario::models::day::Day;

mod common;
use common::rec;

fn twin_sections() -> Vec<ClassRecord> {
    vec![
        rec("Álgebra", "123", "A", "A", &[Day::Monday]),
        rec("Álgebra", "123", "B", "A", &[Day::Monday]),
    ]
}

#[test]
fn test_toggle_selects_every_section_of_the_nrc() {
    let pool = twin_sections();
    let mut sel = Selection::new();

    let outcome = sel.toggle_by_nrc(&pool, &pool[1]);
    assert_eq!(outcome, ToggleOutcome::Selected(2));
    assert_eq!(sel.len(), 2);
    assert!(sel.contains_section("123", "A"));
    assert!(sel.contains_section("123", "B"));

    let outcome = sel.toggle_by_nrc(&pool, &pool[0]);
    assert_eq!(outcome, ToggleOutcome::Deselected(2));
    assert!(sel.is_empty());
}

#[test]
fn test_toggle_twice_restores_previous_selection() {
    let mut pool = twin_sections();
    pool.push(rec("Física", "900", "1", "C", &[Day::Friday]));

    let mut sel = Selection::new();
    sel.toggle_by_nrc(&pool, &pool[2]);
    let before = sel.clone();

    sel.toggle_by_nrc(&pool, &pool[0]);
    assert_eq!(sel.len(), 3);
    sel.toggle_by_nrc(&pool, &pool[0]);

    assert_eq!(sel, before);
}

#[test]
fn test_toggle_does_not_duplicate_section_keys() {
    let pool = vec![
        rec("Cálculo", "1001", "1", "A", &[Day::Monday]),
        rec("Cálculo", "1001", "1", "B", &[Day::Wednesday]),
    ];
    let mut sel = Selection::new();

    assert_eq!(sel.toggle_by_nrc(&pool, &pool[0]), ToggleOutcome::Selected(2));
    assert_eq!(sel.groups().len(), 1);
    assert_eq!(sel.groups()[0].occurrences.len(), 2);
}

#[test]
fn test_remove_by_key_drops_only_that_section() {
    let pool = twin_sections();
    let mut sel = Selection::new();
    sel.toggle_by_nrc(&pool, &pool[0]);

    assert_eq!(sel.remove_by_key("123", "A"), 1);
    assert!(!sel.contains_section("123", "A"));
    assert!(sel.contains_section("123", "B"));
    assert_eq!(sel.remove_by_key("123", "A"), 0);
}

#[test]
fn test_partial_nrc_selection_counts_as_selected() {
    let pool = twin_sections();
    let mut sel = Selection::new();
    sel.toggle_by_nrc(&pool, &pool[0]);
    sel.remove_by_key("123", "A");

    // section B still carries the NRC, so the next toggle removes it
    assert_eq!(sel.toggle_by_nrc(&pool, &pool[0]), ToggleOutcome::Deselected(1));
    assert!(sel.is_empty());
}

#[test]
fn test_purge_by_file_uses_exact_file_id() {
    let mut sel = Selection::from_records(vec![
        rec("A", "1", "1", "A", &[Day::Monday]).with_source("oferta.csv"),
        rec("B", "2", "1", "B", &[Day::Tuesday]).with_source("oferta.csv.bak"),
        rec("C", "3", "1", "C", &[Day::Friday]).with_source("otra.csv"),
    ]);

    assert_eq!(sel.purge_by_file("oferta.csv"), 1);
    let nrcs: Vec<&str> = sel.records().iter().map(|r| r.nrc.as_str()).collect();
    assert_eq!(nrcs, vec!["2", "3"]);
}

#[test]
fn test_clear_empties_selection() {
    let pool = twin_sections();
    let mut sel = Selection::new();
    sel.toggle_by_nrc(&pool, &pool[0]);
    assert!(sel.contains_nrc("123"));

    sel.clear();
    assert!(sel.is_empty());
    assert!(!sel.contains_nrc("123"));
}
