//! prehab-profile
//!
//! Profile derivation, progress calculation, and screening-test submission
//! over the persistent store. Everything here re-derives from the stored
//! raw answers on each read — the derived profile is never persisted.

pub mod error;
pub mod insights;
pub mod profile;
pub mod progress;
pub mod screening;
pub mod survey;

pub use error::ProfileError;
