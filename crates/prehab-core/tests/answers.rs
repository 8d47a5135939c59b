//! Answer representation and the stored JSON shape.

use std::collections::BTreeSet;

use prehab_core::models::answer::{Answer, RawAnswers, answered_count, flattened_values};

fn multi(values: &[&str]) -> Answer {
    Answer::MultiChoice(values.iter().map(|v| v.to_string()).collect())
}

#[test]
fn single_choice_serializes_as_plain_string() {
    let answer = Answer::SingleChoice("under_65".to_string());
    assert_eq!(serde_json::to_string(&answer).unwrap(), "\"under_65\"");
}

#[test]
fn multi_choice_serializes_as_array() {
    let answer = multi(&["alcohol", "smoking"]);
    assert_eq!(serde_json::to_string(&answer).unwrap(), "[\"alcohol\",\"smoking\"]");
}

#[test]
fn stored_blob_shape_parses_back() {
    let blob = r#"{"age":"over_65","health_conditions":[],"lifestyle":["smoking","low_activity"]}"#;
    let answers: RawAnswers = serde_json::from_str(blob).unwrap();

    assert_eq!(answers["age"], Answer::SingleChoice("over_65".to_string()));
    assert_eq!(answers["lifestyle"], multi(&["smoking", "low_activity"]));
    assert_eq!(answers["health_conditions"], Answer::MultiChoice(BTreeSet::new()));
}

#[test]
fn empty_selections_do_not_count_as_answered() {
    assert!(!multi(&[]).is_answered());
    assert!(!Answer::SingleChoice(String::new()).is_answered());
    assert!(multi(&["smoking"]).is_answered());
    assert!(Answer::SingleChoice("under_65".to_string()).is_answered());
}

#[test]
fn answered_count_skips_empty_answers() {
    let mut answers = RawAnswers::new();
    answers.insert("age".to_string(), Answer::SingleChoice("under_65".to_string()));
    answers.insert("lifestyle".to_string(), multi(&["smoking"]));
    answers.insert("health_conditions".to_string(), multi(&[]));

    assert_eq!(answered_count(&answers), 2);
}

#[test]
fn flattened_values_union_all_questions() {
    let mut answers = RawAnswers::new();
    answers.insert("age".to_string(), Answer::SingleChoice("over_65".to_string()));
    answers.insert("lifestyle".to_string(), multi(&["smoking", "alcohol"]));

    let values = flattened_values(&answers);
    assert_eq!(values, ["over_65", "smoking", "alcohol"].into_iter().collect());
}
