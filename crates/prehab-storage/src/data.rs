//! Whole-store utilities: free-form records, usage stats, and the
//! backup/restore envelope.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StorageError;
use crate::keys;
use crate::store::KeyValueStore;

const EXPORT_VERSION: &str = "1.0";

/// Free-form preferences blob, stamped with update time and session id.
pub fn save_preferences(
    store: &dyn KeyValueStore,
    session_id: &str,
    preferences: &Value,
) -> Result<(), StorageError> {
    let mut record = preferences.clone();
    if let Value::Object(fields) = &mut record {
        fields.insert(
            "lastUpdated".to_string(),
            Value::String(jiff::Timestamp::now().to_string()),
        );
        fields.insert("sessionId".to_string(), Value::String(session_id.to_string()));
    }
    store.set(keys::PREFERENCES, &serde_json::to_string(&record)?)
}

pub fn load_preferences(store: &dyn KeyValueStore) -> Option<Value> {
    crate::state::load_state(store, keys::PREFERENCES)
}

pub fn save_user_data(
    store: &dyn KeyValueStore,
    session_id: &str,
    user_data: &Value,
) -> Result<(), StorageError> {
    let mut record = user_data.clone();
    if let Value::Object(fields) = &mut record {
        fields.insert("sessionId".to_string(), Value::String(session_id.to_string()));
        fields.insert(
            "lastUpdated".to_string(),
            Value::String(jiff::Timestamp::now().to_string()),
        );
        fields.insert("version".to_string(), Value::String(EXPORT_VERSION.to_string()));
    }
    store.set(keys::USER_DATA, &serde_json::to_string(&record)?)
}

pub fn load_user_data(store: &dyn KeyValueStore) -> Option<Value> {
    crate::state::load_state(store, keys::USER_DATA)
}

/// Whether any record exists in the store at all.
pub fn has_stored_data(store: &dyn KeyValueStore) -> Result<bool, StorageError> {
    Ok(!store.keys()?.is_empty())
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyStat {
    pub exists: bool,
    pub size_bytes: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct StorageStats {
    pub individual: BTreeMap<String, KeyStat>,
    pub total_bytes: usize,
}

/// Per-key blob sizes and the total footprint. The fixed top-level keys are
/// always reported, present or not; derived keys only when stored.
pub fn storage_stats(store: &dyn KeyValueStore) -> Result<StorageStats, StorageError> {
    let mut individual = BTreeMap::new();
    let mut total_bytes = 0;

    let mut all_keys: Vec<String> = keys::FIXED_KEYS.iter().map(|k| k.to_string()).collect();
    for key in store.keys()? {
        if !all_keys.contains(&key) {
            all_keys.push(key);
        }
    }

    for key in all_keys {
        let blob = store.get(&key)?;
        let size_bytes = blob.as_ref().map_or(0, String::len);
        total_bytes += size_bytes;
        individual.insert(key, KeyStat { exists: blob.is_some(), size_bytes });
    }
    Ok(StorageStats { individual, total_bytes })
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExportEnvelope {
    export_date: jiff::Timestamp,
    version: String,
    data: BTreeMap<String, Value>,
}

/// Serialize every stored record into a backup envelope.
pub fn export_data(store: &dyn KeyValueStore) -> Result<String, StorageError> {
    let mut data = BTreeMap::new();
    for key in store.keys()? {
        if let Some(blob) = store.get(&key)? {
            // Non-JSON blobs (the session id) export as plain strings.
            let value = serde_json::from_str(&blob).unwrap_or(Value::String(blob));
            data.insert(key, value);
        }
    }
    let envelope = ExportEnvelope {
        export_date: jiff::Timestamp::now(),
        version: EXPORT_VERSION.to_string(),
        data,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Restore a backup envelope, replacing everything currently stored.
pub fn import_data(store: &dyn KeyValueStore, exported: &str) -> Result<(), StorageError> {
    let envelope: ExportEnvelope = serde_json::from_str(exported)
        .map_err(|err| StorageError::InvalidImport(err.to_string()))?;

    store.clear()?;
    for (key, value) in &envelope.data {
        let blob = match value {
            Value::String(plain) => plain.clone(),
            other => serde_json::to_string(other)?,
        };
        store.set(key, &blob)?;
    }
    Ok(())
}
