use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::warn;

use crate::error::StorageError;

/// The persistent store seen by the rest of the system: namespaced string
/// keys, one opaque blob per key. Injected everywhere so the profile and
/// progress logic can be tested against fixture data.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
    /// Remove everything, including screening-test histories.
    fn clear(&self) -> Result<(), StorageError>;
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}

fn poisoned() -> StorageError {
    StorageError::Unavailable("store lock poisoned".to_string())
}

/// Session-only store. Also the degraded fallback when the file-backed
/// store is unavailable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| poisoned())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| poisoned())?;
        entries.remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| poisoned())?;
        entries.clear();
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| poisoned())?;
        Ok(entries.keys().cloned().collect())
    }
}

/// File-backed store: the whole namespace is one JSON object on disk.
///
/// Every mutation rewrites the file through a temp-file rename, so a write
/// that fails can never leave a half-updated record behind.
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(map) => map,
                Err(err) => {
                    // A corrupt store file is treated as empty rather than
                    // refusing to start.
                    warn!(path = %path.display(), %err, "store file unreadable, starting empty");
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(StorageError::Io(err)),
        };
        Ok(FileStore {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let body = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| poisoned())?;
        let previous = entries.insert(key.to_string(), value.to_string());
        if let Err(err) = self.persist(&entries) {
            // Roll the in-memory view back so it matches what is on disk.
            match previous {
                Some(old) => entries.insert(key.to_string(), old),
                None => entries.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| poisoned())?;
        let previous = entries.remove(key);
        if let Err(err) = self.persist(&entries) {
            if let Some(old) = previous {
                entries.insert(key.to_string(), old);
            }
            return Err(err);
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| poisoned())?;
        let previous = std::mem::take(&mut *entries);
        if let Err(err) = self.persist(&entries) {
            *entries = previous;
            return Err(err);
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| poisoned())?;
        Ok(entries.keys().cloned().collect())
    }
}

const PROBE_KEY: &str = "prehab_storage_probe";

/// Write-then-delete probe: is this store actually usable?
pub fn is_available(store: &dyn KeyValueStore) -> bool {
    store.set(PROBE_KEY, "probe").is_ok() && store.remove(PROBE_KEY).is_ok()
}

/// Open the file-backed store at `path`, probing it once. If the file store
/// cannot be opened or fails the probe, degrade to a session-only in-memory
/// store with a warning — never block the caller over storage.
pub fn open_with_fallback(path: impl AsRef<Path>) -> Box<dyn KeyValueStore> {
    let path = path.as_ref();
    match FileStore::open(path) {
        Ok(store) if is_available(&store) => Box::new(store),
        Ok(_) => {
            warn!(path = %path.display(), "store failed probe, using in-memory fallback");
            Box::new(MemoryStore::new())
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "store unavailable, using in-memory fallback");
            Box::new(MemoryStore::new())
        }
    }
}
