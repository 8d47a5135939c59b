//! prehab-storage
//!
//! The persistent store adapter: a namespaced key-value interface with
//! in-memory and file-backed implementations, typed JSON state helpers,
//! and an availability probe that degrades to session-only storage.

pub mod data;
pub mod error;
pub mod keys;
pub mod session;
pub mod state;
pub mod store;
