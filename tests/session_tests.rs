use horario::core::import::import_files;
use horario::core::selection::ToggleOutcome;
use horario::core::session::SchedulingSession;
use horario::errors::AppError;
use horario::models::block::Block;
use horario::models::day::Day;
use std::path::PathBuf;

mod common;
use common::{OFERTA_HUM, OFERTA_MATE, write_csv};

fn two_file_session(test: &str) -> SchedulingSession {
    let paths = vec![
        PathBuf::from(write_csv(test, "mate.csv", OFERTA_MATE)),
        PathBuf::from(write_csv(test, "hum.csv", OFERTA_HUM)),
    ];
    let batch = import_files(&paths, b';');
    let mut session = SchedulingSession::new();
    session.load_batch(batch);
    session
}

#[test]
fn test_import_concatenates_files_in_order() {
    let paths = vec![
        PathBuf::from(write_csv("session_import", "mate.csv", OFERTA_MATE)),
        PathBuf::from(write_csv("session_import", "hum.csv", OFERTA_HUM)),
    ];
    let batch = import_files(&paths, b';');

    assert_eq!(batch.files, vec!["mate.csv", "hum.csv"]);
    assert_eq!(batch.records.len(), 8);
    assert_eq!(batch.rows_dropped(), 1);
    assert!(batch.failed_files().is_empty());

    assert_eq!(batch.records[0].source_file, "mate.csv");
    assert_eq!(batch.records[7].source_file, "hum.csv");
    assert_eq!(batch.records[7].nrc, "5001");
}

#[test]
fn test_unreadable_file_is_reported_and_skipped() {
    let paths = vec![
        PathBuf::from(write_csv("session_missing", "mate.csv", OFERTA_MATE)),
        std::env::temp_dir().join("horario_tests_session_missing/nope.csv"),
    ];
    let batch = import_files(&paths, b';');

    assert_eq!(batch.records.len(), 5);
    let failed = batch.failed_files();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].file, "nope.csv");
}

#[test]
fn test_titles_are_distinct_in_first_seen_order() {
    let session = two_file_session("session_titles");
    assert_eq!(
        session.titles(),
        vec!["Cálculo I", "Física I", "Historia", "Inglés"]
    );
}

#[test]
fn test_sections_for_title_flag_selection() {
    let mut session = two_file_session("session_sections");
    session.toggle_nrc("1002").expect("toggle");

    let choices = session.sections_for_title("Cálculo I");
    assert_eq!(choices.len(), 2);
    assert_eq!(choices[0].group.nrc, "1001");
    assert!(!choices[0].selected);
    assert_eq!(choices[1].group.nrc, "1002");
    assert!(choices[1].selected);
}

#[test]
fn test_toggle_unknown_nrc_is_an_error() {
    let mut session = two_file_session("session_unknown");
    assert!(matches!(
        session.toggle_nrc("9999"),
        Err(AppError::UnknownNrc(_))
    ));
    assert!(matches!(
        session.toggle_section("1001", "7"),
        Err(AppError::UnknownSection(_, _))
    ));
    assert!(matches!(
        session.remove_section("1001", "1"),
        Err(AppError::UnknownSection(_, _))
    ));
}

#[test]
fn test_remove_file_purges_pool_and_selection() {
    let mut session = two_file_session("session_remove");
    assert_eq!(session.toggle_nrc("4001").expect("toggle"), ToggleOutcome::Selected(2));
    session.toggle_nrc("2001").expect("toggle");
    session.set_title_filter(Some("Historia".to_string()));

    let purged = session.remove_file("hum.csv").expect("remove");
    assert_eq!(purged, 2);
    assert_eq!(session.files(), ["mate.csv".to_string()]);
    assert!(session.pool().iter().all(|c| c.source_file == "mate.csv"));
    assert!(session.selection().records().iter().all(|c| c.nrc == "2001"));
    assert!(session.title_filter().is_none());

    assert!(matches!(
        session.remove_file("hum.csv"),
        Err(AppError::UnknownFile(_))
    ));
}

#[test]
fn test_new_batch_resets_selection_and_filter() {
    let mut session = two_file_session("session_reset");
    session.toggle_nrc("1001").expect("toggle");
    session.set_title_filter(Some("Cálculo I".to_string()));

    let paths = vec![PathBuf::from(write_csv("session_reset", "hum.csv", OFERTA_HUM))];
    let loaded = session.load_batch(import_files(&paths, b';'));

    assert_eq!(loaded, 3);
    assert!(session.selection().is_empty());
    assert!(session.title_filter().is_none());
    assert_eq!(session.files(), ["hum.csv".to_string()]);
}

#[test]
fn test_blank_title_filter_clears_it() {
    let mut session = two_file_session("session_blank_filter");
    session.set_title_filter(Some("Física I".to_string()));
    assert_eq!(session.title_filter(), Some("Física I"));

    session.set_title_filter(Some("   ".to_string()));
    assert!(session.title_filter().is_none());
}

#[test]
fn test_cell_combines_selection_and_preview() {
    let mut session = two_file_session("session_cell");
    session.toggle_nrc("1001").expect("toggle");
    session.set_title_filter(Some("Cálculo I".to_string()));

    let monday_a = session.cell(Block::A, Day::Monday);
    assert_eq!(monday_a.len(), 1);
    assert!(monday_a[0].selected);

    let tuesday_c = session.cell(Block::C, Day::Tuesday);
    assert_eq!(tuesday_c.len(), 1);
    assert!(!tuesday_c[0].selected);
    assert_eq!(tuesday_c[0].record.nrc, "1002");

    session.clear_selection();
    assert!(session.selected_groups().is_empty());
    assert_eq!(session.grid().len(), 7);
}
