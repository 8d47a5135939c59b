//! Storage key conventions.
//!
//! Pure string functions — every record lives under the `prehab_` namespace,
//! one serialized JSON blob per key.

pub const SURVEY_ANSWERS: &str = "prehab_survey_answers";
pub const PROGRESS: &str = "prehab_progress";
pub const VISITED_SECTIONS: &str = "prehab_visited_sections";
pub const PREFERENCES: &str = "prehab_preferences";
pub const USER_DATA: &str = "prehab_user_data";
pub const SESSION_ID: &str = "prehab_session_id";

/// The fixed top-level keys (section-progress and test-result keys are
/// derived per section/instrument).
pub const FIXED_KEYS: &[&str] = &[
    SURVEY_ANSWERS,
    PROGRESS,
    VISITED_SECTIONS,
    PREFERENCES,
    USER_DATA,
    SESSION_ID,
];

/// Per-content-section progress record, e.g. `prehab_movement_progress`.
pub fn section_progress(section_id: &str) -> String {
    format!("prehab_{section_id}_progress")
}

/// Append-only screening-test result history for one instrument,
/// e.g. `prehab_audit_test_results`.
pub fn test_results(instrument_id: &str) -> String {
    format!("prehab_{instrument_id}_test_results")
}
