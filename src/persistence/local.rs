//! Browser LocalStorage backend

use super::{KeyValueStore, PersistenceError};

/// LocalStorage-backed store. Missing storage (private mode, sandboxed
/// iframes) degrades to reads returning `None` and writes failing.
#[derive(Debug, Default)]
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    pub fn new() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if storage.is_none() {
            log::warn!("LocalStorage unavailable, progress will not be saved");
        }

        Self { storage }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let storage = self.storage.as_ref().ok_or(PersistenceError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| PersistenceError::WriteRejected {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }
}
