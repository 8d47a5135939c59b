use thiserror::Error;

use prehab_instruments::error::InstrumentError;
use prehab_storage::error::StorageError;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Instrument(#[from] InstrumentError),
}
