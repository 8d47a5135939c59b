//! The combined completion percentage and the profile reset.

use prehab_core::models::answer::{Answer, RawAnswers};
use prehab_profile::profile::{reset_profile, user_profile};
use prehab_profile::progress::{
    CompletionWeights, completion_percentage, completion_percentage_with, mark_section_visited,
};
use prehab_profile::screening::{submit_test, test_history};
use prehab_profile::survey::{load_survey_answers, save_survey_answers};
use prehab_instruments::ScreeningInstrument;
use prehab_instruments::instruments::substance::SubstanceScreen;
use prehab_instruments::scoring::{TestAnswer, YesNo};
use prehab_storage::store::MemoryStore;

fn multi(values: &[&str]) -> Answer {
    Answer::MultiChoice(values.iter().map(|v| v.to_string()).collect())
}

fn answers(age: &str, lifestyle: &[&str], conditions: &[&str]) -> RawAnswers {
    let mut answers = RawAnswers::new();
    answers.insert("age".to_string(), Answer::SingleChoice(age.to_string()));
    answers.insert("lifestyle".to_string(), multi(lifestyle));
    answers.insert("health_conditions".to_string(), multi(conditions));
    answers
}

#[test]
fn empty_store_is_zero_percent() {
    let store = MemoryStore::new();
    assert_eq!(completion_percentage(&store), 0);
}

#[test]
fn full_survey_alone_is_half_done() {
    let store = MemoryStore::new();
    save_survey_answers(&store, &answers("under_65", &["smoking"], &["diabetes"])).unwrap();
    assert_eq!(completion_percentage(&store), 50);
}

#[test]
fn partial_survey_and_partial_visits_round_to_the_exact_value() {
    let store = MemoryStore::new();
    // Two of three questions answered (an empty multi-select is unanswered),
    // and two of the four personalized sections visited:
    // round(66.67 * 0.5 + 50 * 0.5) = 58.
    save_survey_answers(&store, &answers("under_65", &["smoking"], &[])).unwrap();
    mark_section_visited(&store, "movement").unwrap();
    mark_section_visited(&store, "substance_use").unwrap();

    assert_eq!(completion_percentage(&store), 58);
}

#[test]
fn everything_done_is_one_hundred() {
    let store = MemoryStore::new();
    save_survey_answers(&store, &answers("over_65", &["smoking"], &["diabetes"])).unwrap();
    for section in ["movement", "nutrition", "mental_wellbeing", "substance_use", "other_diseases"] {
        mark_section_visited(&store, section).unwrap();
    }
    assert_eq!(completion_percentage(&store), 100);
}

#[test]
fn sections_outside_the_personalized_set_do_not_count() {
    let store = MemoryStore::new();
    // No smoking/alcohol/substance answers, so substance_use is not in the
    // personalized set; visiting it moves nothing.
    save_survey_answers(&store, &answers("under_65", &["low_activity"], &[])).unwrap();
    let before = completion_percentage(&store);
    mark_section_visited(&store, "substance_use").unwrap();
    mark_section_visited(&store, "no_such_section").unwrap();

    assert_eq!(completion_percentage(&store), before);
}

#[test]
fn visiting_never_decreases_completion() {
    let store = MemoryStore::new();
    save_survey_answers(&store, &answers("over_65", &["alcohol"], &["heart_disease"])).unwrap();

    let mut previous = completion_percentage(&store);
    for section in ["movement", "substance_use", "no_such_section", "nutrition", "other_diseases"] {
        mark_section_visited(&store, section).unwrap();
        let current = completion_percentage(&store);
        assert!(current >= previous, "{section} decreased completion");
        previous = current;
    }
}

#[test]
fn stored_answers_round_trip_through_the_derived_profile() {
    let store = MemoryStore::new();
    let submitted = answers("over_65", &["smoking", "low_activity"], &["diabetes", "sleep_apnea"]);
    save_survey_answers(&store, &submitted).unwrap();

    assert_eq!(load_survey_answers(&store), Some(submitted.clone()));

    let profile = user_profile(&store);
    let expected = prehab_core::models::profile::UserProfile::from_answers(Some(&submitted));
    assert_eq!(profile.age_group, expected.age_group);
    assert_eq!(profile.lifestyle, expected.lifestyle);
    assert_eq!(profile.health_conditions, expected.health_conditions);
}

#[test]
fn weights_are_tunable() {
    let store = MemoryStore::new();
    save_survey_answers(&store, &answers("under_65", &[], &[])).unwrap();

    let survey_only = CompletionWeights { survey: 1.0, sections: 0.0 };
    // One of three questions answered either way, but weighted fully.
    assert_eq!(completion_percentage_with(&store, survey_only), 33);
}

#[test]
fn reset_clears_the_profile_but_keeps_test_histories() {
    let store = MemoryStore::new();
    save_survey_answers(&store, &answers("under_65", &["substance"], &[])).unwrap();
    mark_section_visited(&store, "movement").unwrap();

    let submission: std::collections::BTreeMap<u32, TestAnswer> = SubstanceScreen
        .items()
        .iter()
        .map(|item| (item.id, TestAnswer::Choice(YesNo::No)))
        .collect();
    submit_test(&store, &SubstanceScreen, &submission).unwrap();

    reset_profile(&store).unwrap();

    assert_eq!(load_survey_answers(&store), None);
    assert_eq!(completion_percentage(&store), 0);
    assert!(!user_profile(&store).has_completed_survey);
    assert_eq!(test_history(&store, "substance").len(), 1);
}
