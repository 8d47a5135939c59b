//! Profile derivation and section relevance over the store.

use prehab_core::models::profile::{ContentFlags, Relevance, UserProfile, section_relevance};
use prehab_core::survey::CONTENT_SECTIONS;
use prehab_storage::store::KeyValueStore;

use crate::progress::visited_sections;
use crate::survey::load_survey_answers;

/// Derive the current profile from stored answers. Absent or unparseable
/// answers yield the fail-safe "no survey" default.
pub fn user_profile(store: &dyn KeyValueStore) -> UserProfile {
    UserProfile::from_answers(load_survey_answers(store).as_ref())
}

/// Content-visibility flags for the current profile.
pub fn content_flags(store: &dyn KeyValueStore) -> ContentFlags {
    ContentFlags::from_profile(&user_profile(store))
}

/// One content section's display state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionStatus {
    pub id: &'static str,
    pub title: &'static str,
    /// `None` while personalization is inactive (everything equally visible).
    pub relevance: Option<Relevance>,
    pub visited: bool,
}

/// All content sections for display, sorted high-relevance first when the
/// profile is personalized. Not-applicable sections stay in the list, last.
pub fn section_overview(store: &dyn KeyValueStore) -> Vec<SectionStatus> {
    let profile = user_profile(store);
    let visited = visited_sections(store);

    let mut sections: Vec<SectionStatus> = CONTENT_SECTIONS
        .iter()
        .map(|section| SectionStatus {
            id: section.id,
            title: section.title,
            relevance: section_relevance(section.id, &profile),
            visited: visited.iter().any(|v| v == section.id),
        })
        .collect();

    // Stable sort keeps the catalogue order within each tier.
    sections.sort_by_key(|s| s.relevance);
    sections
}

/// User-initiated reset: drop the survey answers and everything derived
/// from them. Screening-test histories survive — only a full store clear
/// removes those.
pub fn reset_profile(store: &dyn KeyValueStore) -> Result<(), prehab_storage::error::StorageError> {
    store.remove(prehab_storage::keys::SURVEY_ANSWERS)?;
    store.remove(prehab_storage::keys::PROGRESS)?;
    store.remove(prehab_storage::keys::VISITED_SECTIONS)?;
    for section in CONTENT_SECTIONS {
        store.remove(&prehab_storage::keys::section_progress(section.id))?;
    }
    Ok(())
}
