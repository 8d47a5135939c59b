//! prehab-core
//!
//! Pure domain types for the pre-surgical patient guide: survey answers,
//! the derived user profile, content-visibility flags, section relevance,
//! and the persisted record shapes. No I/O — this is the shared vocabulary
//! of the prehab system.

pub mod models;
pub mod survey;
