//! Progress calculation: the combined completion percentage, the visited-
//! section set, and per-content-section task progress.

use prehab_core::models::answer::{answered_count, flattened_values};
use prehab_core::models::records::{ProgressRecord, SectionProgressRecord, VisitedSectionsRecord};
use prehab_core::survey::{CONTENT_SECTIONS, SURVEY_QUESTIONS, TOTAL_SECTIONS};
use prehab_storage::error::StorageError;
use prehab_storage::store::KeyValueStore;
use prehab_storage::{keys, session, state};

use crate::survey::load_survey_answers;

/// Weights for the two halves of the completion percentage. The 50/50 split
/// is a tuning value, not a derived quantity.
#[derive(Debug, Clone, Copy)]
pub struct CompletionWeights {
    pub survey: f64,
    pub sections: f64,
}

impl Default for CompletionWeights {
    fn default() -> Self {
        CompletionWeights { survey: 0.5, sections: 0.5 }
    }
}

/// Combined completion percentage in [0, 100].
///
/// Half from the survey (answered questions over the fixed question count;
/// a multi-select answer counts only when non-empty) and half from visited
/// personalized sections. This formula is user-visible — keep it exact.
pub fn completion_percentage(store: &dyn KeyValueStore) -> u8 {
    completion_percentage_with(store, CompletionWeights::default())
}

pub fn completion_percentage_with(store: &dyn KeyValueStore, weights: CompletionWeights) -> u8 {
    let answers = load_survey_answers(store).unwrap_or_default();
    let visited = visited_sections(store);

    let survey_completion =
        answered_count(&answers) as f64 / SURVEY_QUESTIONS.len() as f64 * 100.0;

    // A section is personalized when its relevance set intersects the
    // union of all selected answer values, or carries the 'all' sentinel.
    let all_values = flattened_values(&answers);
    let personalized: Vec<&str> = CONTENT_SECTIONS
        .iter()
        .filter(|section| {
            section.relevant_for.contains(&"all")
                || section.relevant_for.iter().any(|v| all_values.contains(v))
        })
        .map(|section| section.id)
        .collect();

    let visited_personalized = visited
        .iter()
        .filter(|v| personalized.contains(&v.as_str()))
        .count();
    let section_completion = if personalized.is_empty() {
        0.0
    } else {
        visited_personalized as f64 / personalized.len() as f64 * 100.0
    };

    let total = survey_completion * weights.survey + section_completion * weights.sections;
    total.round().clamp(0.0, 100.0) as u8
}

/// The persisted visited-section list (append-only until reset).
pub fn visited_sections(store: &dyn KeyValueStore) -> Vec<String> {
    state::load_state::<VisitedSectionsRecord>(store, keys::VISITED_SECTIONS)
        .map(|record| record.sections)
        .unwrap_or_default()
}

/// Record a section visit. Idempotent — the set only grows.
pub fn mark_section_visited(store: &dyn KeyValueStore, section_id: &str) -> Result<(), StorageError> {
    let mut sections = visited_sections(store);
    if !sections.iter().any(|s| s == section_id) {
        sections.push(section_id.to_string());
    }
    let record = VisitedSectionsRecord {
        sections,
        last_updated: jiff::Timestamp::now(),
        session_id: session::session_id(store)?,
    };
    state::save_state(store, keys::VISITED_SECTIONS, &record)
}

/// Store the navigation progress record.
pub fn save_progress(
    store: &dyn KeyValueStore,
    current_section: &str,
    completed_sections: &[String],
) -> Result<(), StorageError> {
    let mut deduplicated: Vec<String> = Vec::new();
    for section in completed_sections {
        if !deduplicated.contains(section) {
            deduplicated.push(section.clone());
        }
    }
    let record = ProgressRecord {
        current_section: current_section.to_string(),
        completed_sections: deduplicated,
        last_updated: jiff::Timestamp::now(),
        session_id: session::session_id(store)?,
        total_sections: TOTAL_SECTIONS,
    };
    state::save_state(store, keys::PROGRESS, &record)
}

pub fn load_progress(store: &dyn KeyValueStore) -> Option<ProgressRecord> {
    state::load_state(store, keys::PROGRESS)
}

// Fixed task counts for the sections whose tracked work does not depend on
// the profile: read sub-topics plus the terminal task.
pub const MOVEMENT_TASKS: u32 = 3;
pub const NUTRITION_TASKS: u32 = 3;
pub const MENTAL_TASKS: u32 = 4;

/// Per-section completion: read sub-topics plus the terminal task flag over
/// a fixed task count.
pub fn section_progress_percentage(record: &SectionProgressRecord, total_tasks: u32) -> u8 {
    if total_tasks == 0 {
        return 0;
    }
    let completed = record.read_sections.len() as u32 + u32::from(record.done);
    ((f64::from(completed) / f64::from(total_tasks)) * 100.0).round().min(100.0) as u8
}

/// Per-section completion where the tracked sub-topics depend on the
/// profile (the substance and diseases sections): only relevant topics
/// count, plus the terminal task.
pub fn relevant_section_progress_percentage(
    record: &SectionProgressRecord,
    relevant_topics: &[&str],
) -> u8 {
    let total_tasks = relevant_topics.len() as u32 + 1;
    let read = record
        .read_sections
        .iter()
        .filter(|s| relevant_topics.contains(&s.as_str()))
        .count() as u32;
    let completed = read + u32::from(record.done);
    ((f64::from(completed) / f64::from(total_tasks)) * 100.0).round().min(100.0) as u8
}

pub fn load_section_progress(store: &dyn KeyValueStore, section_id: &str) -> SectionProgressRecord {
    state::load_state(store, &keys::section_progress(section_id)).unwrap_or_default()
}

/// Toggle a sub-topic's read state within a section.
pub fn toggle_subtopic_read(
    store: &dyn KeyValueStore,
    section_id: &str,
    subtopic: &str,
) -> Result<SectionProgressRecord, StorageError> {
    let mut record = load_section_progress(store, section_id);
    if let Some(index) = record.read_sections.iter().position(|s| s == subtopic) {
        record.read_sections.remove(index);
    } else {
        record.read_sections.push(subtopic.to_string());
    }
    state::save_state(store, &keys::section_progress(section_id), &record)?;
    Ok(record)
}

/// Set the section's terminal task flag (exercises done, quiz completed, ...).
pub fn mark_section_task_done(
    store: &dyn KeyValueStore,
    section_id: &str,
) -> Result<SectionProgressRecord, StorageError> {
    let mut record = load_section_progress(store, section_id);
    record.done = true;
    state::save_state(store, &keys::section_progress(section_id), &record)?;
    Ok(record)
}
