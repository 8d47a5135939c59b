//! Screening-test submission and result history.

use std::collections::BTreeMap;

use tracing::debug;

use prehab_instruments::error::InstrumentError;
use prehab_instruments::scoring::{TestAnswer, TestResult};
use prehab_instruments::{ScreeningInstrument, get_instrument};
use prehab_storage::store::KeyValueStore;
use prehab_storage::{keys, state};

use crate::error::ProfileError;

/// The stored result history for one instrument, oldest first.
pub fn test_history(store: &dyn KeyValueStore, instrument_id: &str) -> Vec<TestResult> {
    state::load_state(store, &keys::test_results(instrument_id)).unwrap_or_default()
}

/// Validate, score, and record one submission.
///
/// Scoring rejects the submission before anything is written when an item
/// is unanswered, so a failed submission leaves the history untouched.
/// Completed results are appended — never replaced or deduplicated.
pub fn submit_test(
    store: &dyn KeyValueStore,
    instrument: &dyn ScreeningInstrument,
    answers: &BTreeMap<u32, TestAnswer>,
) -> Result<TestResult, ProfileError> {
    let score = instrument.score(answers)?;
    let result = TestResult {
        score,
        date: jiff::Timestamp::now(),
        answers: answers.clone(),
    };

    let mut history = test_history(store, instrument.id());
    history.push(result.clone());
    state::save_state(store, &keys::test_results(instrument.id()), &history)?;

    debug!(
        instrument = instrument.id(),
        score,
        submissions = history.len(),
        "screening test recorded"
    );
    Ok(result)
}

/// [`submit_test`] with an instrument looked up by id, for callers that
/// only carry the form's identifier.
pub fn submit_test_by_id(
    store: &dyn KeyValueStore,
    instrument_id: &str,
    answers: &BTreeMap<u32, TestAnswer>,
) -> Result<TestResult, ProfileError> {
    let instrument = get_instrument(instrument_id)
        .ok_or_else(|| InstrumentError::UnknownInstrument(instrument_id.to_string()))?;
    submit_test(store, instrument.as_ref(), answers)
}
