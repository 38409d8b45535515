//! Key-value persistence
//!
//! The core only ever talks to a [`KeyValueStore`]:
//! - `MemoryStore` for native runs and tests
//! - `LocalStore` backed by browser LocalStorage (wasm32 only)
//!
//! Values are plain strings: integers for best scores, tags for enums.
//! Writes are fire-and-forget from the game's point of view; callers log
//! and drop any error.

#[cfg(target_arch = "wasm32")]
pub mod local;

#[cfg(target_arch = "wasm32")]
pub use local::LocalStore;

use std::collections::HashMap;

/// Storage failures
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("storage backend unavailable")]
    Unavailable,

    #[error("write rejected for key {key}: {reason}")]
    WriteRejected { key: String, reason: String },
}

/// Minimal string key-value contract
pub trait KeyValueStore {
    /// Read a value. Missing keys and backend failures both return `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
