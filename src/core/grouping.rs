use crate::models::class_record::ClassRecord;
use crate::models::section_group::SectionGroup;
use std::collections::HashMap;

/// Collapse time-slot records into sections keyed by `(nrc, section)`.
///
/// Groups come out in first-seen order and each group keeps its
/// occurrences in input order.
pub fn group_sections<'a, I>(records: I) -> Vec<SectionGroup>
where
    I: IntoIterator<Item = &'a ClassRecord>,
{
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut groups: Vec<SectionGroup> = Vec::new();

    for rec in records {
        let key = (rec.nrc.clone(), rec.section.clone());
        let pos = *index.entry(key).or_insert_with(|| {
            groups.push(SectionGroup::from_first(rec));
            groups.len() - 1
        });
        groups[pos].occurrences.push(rec.clone());
    }

    groups
}
