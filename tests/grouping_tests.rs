use horario::core::grouping::group_sections;
use horario::models::class_record::ClassRecord;
use horario::models::day::Day;
use std::collections::BTreeSet;

mod common;
use common::rec;

#[test]
fn test_groups_by_nrc_and_section_in_first_seen_order() {
    let records = vec![
        rec("Cálculo I", "1001", "1", "A", &[Day::Monday]),
        rec("Física I", "2001", "1", "A", &[Day::Thursday]),
        rec("Cálculo I", "1001", "1", "B", &[Day::Wednesday]),
        rec("Cálculo I", "1001", "2", "C", &[Day::Tuesday]),
    ];

    let groups = group_sections(&records);
    let keys: Vec<(&str, &str)> = groups.iter().map(|g| g.key()).collect();
    assert_eq!(keys, vec![("1001", "1"), ("2001", "1"), ("1001", "2")]);

    assert_eq!(groups[0].occurrences.len(), 2);
    assert_eq!(groups[0].occurrences[0].block, "A");
    assert_eq!(groups[0].occurrences[1].block, "B");
    assert_eq!(groups[0].slots_summary(), "Lunes A, Miércoles B");
}

#[test]
fn test_metadata_comes_from_first_record() {
    let first =
        rec("Cálculo I", "1001", "1", "A", &[Day::Monday]).with_professor("Ana María", "Pérez");
    let second =
        rec("Calculo 1", "1001", "1", "B", &[Day::Friday]).with_professor("Otro", "Nombre");

    let groups = group_sections(&[first, second]);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].title, "Cálculo I");
    assert_eq!(groups[0].professor_display(), "Ana Pérez");
}

#[test]
fn test_key_set_does_not_depend_on_input_order() {
    let mut records = vec![
        rec("A", "1", "1", "A", &[Day::Monday]),
        rec("A", "1", "2", "B", &[Day::Monday]),
        rec("B", "2", "1", "C", &[Day::Friday]),
        rec("A", "1", "1", "D", &[Day::Tuesday]),
    ];

    let keys = |rs: &[ClassRecord]| -> BTreeSet<(String, String)> {
        group_sections(rs)
            .into_iter()
            .map(|g| (g.nrc, g.section))
            .collect()
    };

    let forward = keys(&records);
    records.reverse();
    let backward = keys(&records);

    assert_eq!(forward, backward);
    assert_eq!(forward.len(), 3);
}

#[test]
fn test_empty_input_gives_no_groups() {
    let none: Vec<ClassRecord> = Vec::new();
    let groups = group_sections(&none);
    assert!(groups.is_empty());
}
