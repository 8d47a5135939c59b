//! Typed JSON state over the raw key-value store.
//!
//! Readers are fail-safe: an absent key, a storage fault, or a blob that no
//! longer parses all read as `None`, with a warning for the latter two.
//! Parse errors never propagate past this module.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::StorageError;
use crate::store::KeyValueStore;

/// Load and deserialize the record at `key`, or `None`.
pub fn load_state<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let blob = match store.get(key) {
        Ok(blob) => blob?,
        Err(err) => {
            warn!(key, %err, "state read failed");
            return None;
        }
    };
    match serde_json::from_str(&blob) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key, %err, "stored record unparseable, treating as absent");
            None
        }
    }
}

/// Serialize and store `value` at `key` as one atomic blob.
pub fn save_state<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let blob = serde_json::to_string(value)?;
    store.set(key, &blob)
}
