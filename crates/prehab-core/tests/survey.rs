//! Integrity of the static survey and section catalogue.

use std::collections::BTreeSet;

use prehab_core::survey::{CONTENT_SECTIONS, SURVEY_QUESTIONS, TOTAL_SECTIONS, content_section};

#[test]
fn catalogue_has_the_expected_shape() {
    assert_eq!(SURVEY_QUESTIONS.len(), 3);
    assert_eq!(TOTAL_SECTIONS, 5);

    let age = &SURVEY_QUESTIONS[0];
    assert_eq!(age.id, "age");
    assert!(!age.multiple);
    assert!(SURVEY_QUESTIONS[1..].iter().all(|q| q.multiple));
}

#[test]
fn section_ids_are_unique() {
    let ids: BTreeSet<&str> = CONTENT_SECTIONS.iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), CONTENT_SECTIONS.len());
}

#[test]
fn section_lookup_by_id() {
    assert_eq!(content_section("nutrition").map(|s| s.title), Some("Ravitsemus"));
    assert_eq!(content_section("dentistry").map(|s| s.id), None);
}

#[test]
fn relevance_sets_only_name_known_answer_values() {
    let known: BTreeSet<&str> = SURVEY_QUESTIONS
        .iter()
        .flat_map(|q| q.options.iter().map(|o| o.id))
        .chain(["all"])
        .collect();

    for section in CONTENT_SECTIONS {
        for value in section.relevant_for {
            assert!(known.contains(value), "{} references unknown value {value}", section.id);
        }
    }
}
