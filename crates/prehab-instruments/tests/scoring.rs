//! Instrument scoring: exact totals, tier boundaries, and submission
//! validation.

use std::collections::BTreeMap;

use prehab_instruments::instruments::audit::Audit;
use prehab_instruments::instruments::fagerstrom::Fagerstrom;
use prehab_instruments::instruments::substance::SubstanceScreen;
use prehab_instruments::scoring::{TestAnswer, YesNo};
use prehab_instruments::{ScreeningInstrument, all_instruments, get_instrument};
use prehab_instruments::error::InstrumentError;

fn points(values: &[(u32, u8)]) -> BTreeMap<u32, TestAnswer> {
    values.iter().map(|(id, p)| (*id, TestAnswer::Points(*p))).collect()
}

fn uniform_choice(instrument: &dyn ScreeningInstrument, choice: YesNo) -> BTreeMap<u32, TestAnswer> {
    instrument
        .items()
        .iter()
        .map(|item| (item.id, TestAnswer::Choice(choice)))
        .collect()
}

#[test]
fn registry_knows_all_three_instruments() {
    let ids: Vec<String> = all_instruments().iter().map(|i| i.id().to_string()).collect();
    assert_eq!(ids, ["audit", "fagerstrom", "substance"]);
    assert!(get_instrument("fagerstrom").is_some());
    assert!(get_instrument("phq9").is_none());
}

#[test]
fn audit_all_zero_scores_zero() {
    let answers = points(&[(1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0), (7, 0), (8, 0), (9, 0), (10, 0)]);
    assert_eq!(Audit.score(&answers).unwrap(), 0);
}

#[test]
fn audit_maximum_is_forty() {
    let answers = points(&[(1, 4), (2, 4), (3, 4), (4, 4), (5, 4), (6, 4), (7, 4), (8, 4), (9, 4), (10, 4)]);
    assert_eq!(Audit.score(&answers).unwrap(), Audit.max_score());
}

#[test]
fn audit_tier_boundaries() {
    assert_eq!(Audit.classify(7).title, "Alkoholinkäyttö on hallinnassa.");
    assert_eq!(
        Audit.classify(8).title,
        "Alkoholinkäyttö on niin runsasta, että siihen liittyy riskejä."
    );
    assert_eq!(
        Audit.classify(13).title,
        "Alkoholinkäyttö on niin runsasta, että siihen liittyy riskejä."
    );
    assert_eq!(
        Audit.classify(14).title,
        "Päihderiippuvuus on todennäköinen. Alkoholinkäyttöä on vähennettävä."
    );
}

#[test]
fn audit_rejects_values_outside_an_items_options() {
    // Items 9 and 10 only offer 4/2/0.
    let mut answers = points(&[(1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0), (7, 0), (8, 0), (10, 0)]);
    answers.insert(9, TestAnswer::Points(3));

    match Audit.score(&answers) {
        Err(InstrumentError::InvalidAnswer { item_id, .. }) => assert_eq!(item_id, 9),
        other => panic!("expected invalid answer, got {other:?}"),
    }
}

#[test]
fn incomplete_submission_reports_missing_items() {
    let answers = points(&[(1, 2), (3, 1)]);
    match Audit.score(&answers) {
        Err(InstrumentError::IncompleteSubmission { instrument_id, missing }) => {
            assert_eq!(instrument_id, "audit");
            assert_eq!(missing, vec![2, 4, 5, 6, 7, 8, 9, 10]);
        }
        other => panic!("expected incomplete submission, got {other:?}"),
    }
}

#[test]
fn fagerstrom_maximum_is_ten() {
    let answers = points(&[(1, 3), (2, 1), (3, 1), (4, 3), (5, 1), (6, 1)]);
    assert_eq!(Fagerstrom.score(&answers).unwrap(), Fagerstrom.max_score());
}

#[test]
fn fagerstrom_binary_items_store_numeric_answers() {
    let answers = points(&[(1, 0), (2, 1), (3, 0), (4, 0), (5, 0), (6, 1)]);
    assert_eq!(Fagerstrom.score(&answers).unwrap(), 2);
}

#[test]
fn fagerstrom_tier_boundaries() {
    assert_eq!(Fagerstrom.classify(3).title, "Vähäinen tai ei lainkaan riippuvuutta");
    assert_eq!(Fagerstrom.classify(4).title, "Kohtalainen riippuvuus");
    assert_eq!(Fagerstrom.classify(6).title, "Kohtalainen riippuvuus");
    assert_eq!(Fagerstrom.classify(7).title, "Voimakas riippuvuus");
}

#[test]
fn substance_all_yes_scores_eighteen() {
    // Items 4 and 5 are inverted: "kyllä" there contributes nothing.
    let answers = uniform_choice(&SubstanceScreen, YesNo::Yes);
    assert_eq!(SubstanceScreen.score(&answers).unwrap(), 18);
}

#[test]
fn substance_all_no_scores_two() {
    let answers = uniform_choice(&SubstanceScreen, YesNo::No);
    assert_eq!(SubstanceScreen.score(&answers).unwrap(), 2);
}

#[test]
fn substance_clean_submission_scores_zero() {
    let mut answers = uniform_choice(&SubstanceScreen, YesNo::No);
    answers.insert(4, TestAnswer::Choice(YesNo::Yes));
    answers.insert(5, TestAnswer::Choice(YesNo::Yes));
    let score = SubstanceScreen.score(&answers).unwrap();
    assert_eq!(score, 0);
    assert_eq!(SubstanceScreen.classify(score).title, "Ei merkittäviä ongelmia");
}

#[test]
fn substance_tier_boundaries() {
    assert_eq!(
        SubstanceScreen.classify(1).title,
        "Ota yhteyttä terveysasemallesi neuvontaa varten"
    );
    assert_eq!(
        SubstanceScreen.classify(5).title,
        "Ota yhteyttä terveysasemallesi neuvontaa varten"
    );
    assert_eq!(
        SubstanceScreen.classify(6).title,
        "Kuulut riskiryhmään ja hyödyt vieroitusohjelmasta"
    );
    assert_eq!(
        SubstanceScreen.classify(11).title,
        "Huumeiden käyttösi on merkittävää ja tarvitset intensiivistä vieroitushoitoa"
    );
}

#[test]
fn substance_rejects_numeric_answers() {
    let mut answers = uniform_choice(&SubstanceScreen, YesNo::No);
    answers.insert(7, TestAnswer::Points(1));
    match SubstanceScreen.score(&answers) {
        Err(InstrumentError::InvalidAnswer { item_id, .. }) => assert_eq!(item_id, 7),
        other => panic!("expected invalid answer, got {other:?}"),
    }
}

#[test]
fn selected_labels_echo_the_chosen_option() {
    let item = &Fagerstrom.items()[0];
    assert_eq!(item.selected_label(&TestAnswer::Points(3)), Some("alle 5 minuuttia"));
    assert_eq!(item.selected_label(&TestAnswer::Points(9)), None);

    let yes_no = &SubstanceScreen.items()[0];
    assert_eq!(yes_no.selected_label(&TestAnswer::Choice(YesNo::Yes)), Some("Kyllä"));
}

#[test]
fn answers_keep_their_stored_json_shape() {
    let blob = serde_json::to_string(&TestAnswer::Points(3)).unwrap();
    assert_eq!(blob, "3");

    let blob = serde_json::to_string(&TestAnswer::Choice(YesNo::No)).unwrap();
    assert_eq!(blob, "\"ei\"");

    let parsed: TestAnswer = serde_json::from_str("\"kyllä\"").unwrap();
    assert_eq!(parsed, TestAnswer::Choice(YesNo::Yes));
}
