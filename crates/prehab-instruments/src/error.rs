use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("incomplete submission for '{instrument_id}': unanswered items {missing:?}")]
    IncompleteSubmission {
        instrument_id: String,
        missing: Vec<u32>,
    },

    #[error("invalid answer for item {item_id}: {reason}")]
    InvalidAnswer { item_id: u32, reason: String },
}
