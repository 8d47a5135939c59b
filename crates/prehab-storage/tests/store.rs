//! Store behavior: both backends, durability, and the fallback path.

use prehab_storage::store::{FileStore, KeyValueStore, MemoryStore, is_available, open_with_fallback};

#[test]
fn memory_store_round_trips() {
    let store = MemoryStore::new();
    store.set("prehab_a", "1").unwrap();
    store.set("prehab_b", "2").unwrap();

    assert_eq!(store.get("prehab_a").unwrap().as_deref(), Some("1"));
    assert_eq!(store.keys().unwrap(), vec!["prehab_a", "prehab_b"]);

    store.remove("prehab_a").unwrap();
    assert_eq!(store.get("prehab_a").unwrap(), None);

    store.clear().unwrap();
    assert!(store.keys().unwrap().is_empty());
}

#[test]
fn file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    {
        let store = FileStore::open(&path).unwrap();
        store.set("prehab_survey_answers", "{\"answers\":{}}").unwrap();
        store.set("prehab_session_id", "prehab_1_abc").unwrap();
    }

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(
        reopened.get("prehab_survey_answers").unwrap().as_deref(),
        Some("{\"answers\":{}}")
    );
    assert_eq!(reopened.keys().unwrap().len(), 2);
}

#[test]
fn file_store_leaves_no_temp_file_behind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let store = FileStore::open(&path).unwrap();
    store.set("prehab_progress", "{}").unwrap();

    assert!(path.exists());
    assert!(!path.with_extension("tmp").exists());
}

#[test]
fn corrupt_store_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "not json at all {{{").unwrap();

    let store = FileStore::open(&path).unwrap();
    assert!(store.keys().unwrap().is_empty());

    // And it is usable again from there.
    store.set("prehab_a", "1").unwrap();
    assert_eq!(store.get("prehab_a").unwrap().as_deref(), Some("1"));
}

#[test]
fn remove_and_clear_persist() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let store = FileStore::open(&path).unwrap();
    store.set("prehab_a", "1").unwrap();
    store.set("prehab_b", "2").unwrap();
    store.remove("prehab_a").unwrap();

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.keys().unwrap(), vec!["prehab_b"]);

    reopened.clear().unwrap();
    let reopened = FileStore::open(&path).unwrap();
    assert!(reopened.keys().unwrap().is_empty());
}

#[test]
fn probe_passes_on_a_working_store() {
    let store = MemoryStore::new();
    assert!(is_available(&store));
    // The probe cleans up after itself.
    assert!(store.keys().unwrap().is_empty());
}

#[test]
fn fallback_store_is_always_usable() {
    // A path whose parent directory does not exist cannot be persisted to,
    // so the fallback degrades to the in-memory store.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("store.json");

    let store = open_with_fallback(&path);
    store.set("prehab_a", "1").unwrap();
    assert_eq!(store.get("prehab_a").unwrap().as_deref(), Some("1"));
    assert!(!path.exists());
}
