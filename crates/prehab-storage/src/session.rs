//! Session identity.
//!
//! A session id is generated lazily once and reused for the lifetime of the
//! stored data. It is attached to persisted records for traceability only —
//! never validated, never used for access control.

use uuid::Uuid;

use crate::error::StorageError;
use crate::keys;
use crate::store::KeyValueStore;

fn generate_session_id() -> String {
    let millis = jiff::Timestamp::now().as_millisecond();
    let salt = Uuid::new_v4().simple().to_string();
    format!("prehab_{millis}_{}", &salt[..9])
}

/// The stored session id, creating one if none exists yet.
pub fn session_id(store: &dyn KeyValueStore) -> Result<String, StorageError> {
    if let Some(existing) = store.get(keys::SESSION_ID)? {
        return Ok(existing);
    }
    let fresh = generate_session_id();
    store.set(keys::SESSION_ID, &fresh)?;
    Ok(fresh)
}
