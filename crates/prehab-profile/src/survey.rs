//! Survey answer persistence.

use prehab_core::models::answer::RawAnswers;
use prehab_core::models::records::SurveyRecord;
use prehab_storage::error::StorageError;
use prehab_storage::store::KeyValueStore;
use prehab_storage::{keys, session, state};

/// Store the full answer set as one record. Every answer change rewrites the
/// whole blob, so a failed write never leaves a partial record.
pub fn save_survey_answers(
    store: &dyn KeyValueStore,
    answers: &RawAnswers,
) -> Result<(), StorageError> {
    let record = SurveyRecord {
        answers: answers.clone(),
        timestamp: jiff::Timestamp::now(),
        session_id: session::session_id(store)?,
        version: "1.0".to_string(),
    };
    state::save_state(store, keys::SURVEY_ANSWERS, &record)
}

/// The stored raw answers, or `None` when no survey has been submitted (or
/// the stored blob no longer parses).
pub fn load_survey_answers(store: &dyn KeyValueStore) -> Option<RawAnswers> {
    state::load_state::<SurveyRecord>(store, keys::SURVEY_ANSWERS).map(|record| record.answers)
}
