//! prehab-instruments
//!
//! Screening instrument definitions and scoring. Pure data — no storage
//! dependency. Defines the items, per-item scoring rules, and result tiers
//! for each supported instrument.

pub mod error;
pub mod instruments;
pub mod scoring;

use std::collections::BTreeMap;

use error::InstrumentError;
use scoring::{Item, Outcome, TestAnswer};

/// Trait implemented by each screening instrument.
pub trait ScreeningInstrument: Send + Sync {
    /// Unique identifier (e.g. "audit", "fagerstrom").
    fn id(&self) -> &str;

    /// Human-readable name shown on forms and documents.
    fn name(&self) -> &str;

    /// Highest achievable score.
    fn max_score(&self) -> u32;

    /// The instrument's items in presentation order.
    fn items(&self) -> &[Item];

    /// Map a total score to its result tier.
    fn classify(&self, score: u32) -> Outcome;

    /// Score a complete answer set.
    ///
    /// Every item must be answered — an incomplete set is rejected outright
    /// rather than scored with defaults, and nothing is recorded for it.
    fn score(&self, answers: &BTreeMap<u32, TestAnswer>) -> Result<u32, InstrumentError> {
        let missing: Vec<u32> = self
            .items()
            .iter()
            .map(|item| item.id)
            .filter(|id| !answers.contains_key(id))
            .collect();
        if !missing.is_empty() {
            return Err(InstrumentError::IncompleteSubmission {
                instrument_id: self.id().to_string(),
                missing,
            });
        }

        let mut total = 0u32;
        for item in self.items() {
            total += u32::from(item.score(&answers[&item.id])?);
        }
        Ok(total)
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn ScreeningInstrument>> {
    vec![
        Box::new(instruments::audit::Audit),
        Box::new(instruments::fagerstrom::Fagerstrom),
        Box::new(instruments::substance::SubstanceScreen),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn ScreeningInstrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
