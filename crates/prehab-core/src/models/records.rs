//! Persisted record shapes, one serialized JSON blob per storage key.
//! Field names keep the camelCase of the stored format.

use serde::{Deserialize, Serialize};

use super::answer::RawAnswers;

/// The `survey_answers` record: raw answers plus submission metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyRecord {
    pub answers: RawAnswers,
    pub timestamp: jiff::Timestamp,
    pub session_id: String,
    pub version: String,
}

/// The `progress` record tracking movement through the guide.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub current_section: String,
    pub completed_sections: Vec<String>,
    pub last_updated: jiff::Timestamp,
    pub session_id: String,
    pub total_sections: usize,
}

/// The `visited_sections` record. The section list grows monotonically
/// until a profile reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitedSectionsRecord {
    pub sections: Vec<String>,
    pub last_updated: jiff::Timestamp,
    pub session_id: String,
}

/// Per-content-section progress: which sub-topics were marked read, plus the
/// section's terminal task flag (exercises done, meal plan created, quiz
/// completed, ...). The flag name is normalized to `done` across sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionProgressRecord {
    #[serde(default)]
    pub read_sections: Vec<String>,
    #[serde(default)]
    pub done: bool,
}
