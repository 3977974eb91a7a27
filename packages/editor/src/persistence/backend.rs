use std::collections::HashMap;

use super::PersistenceError;

/// String key/value storage the snapshot store writes through.
pub trait StorageBackend {
    /// `Ok(None)` when the key was never written.
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

/// In-process storage for native hosts and tests.
#[derive(Default, Clone, Debug)]
pub struct MemoryBackend {
    items: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Browser `window.localStorage`.
pub struct LocalStorageBackend {
    storage: web_sys::Storage,
}

impl LocalStorageBackend {
    pub fn open() -> Result<Self, PersistenceError> {
        let window = web_sys::window().ok_or(PersistenceError::Unavailable)?;
        let storage = window
            .local_storage()
            .map_err(|e| PersistenceError::Backend(format!("{:?}", e)))?
            .ok_or(PersistenceError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl StorageBackend for LocalStorageBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        self.storage
            .get_item(key)
            .map_err(|e| PersistenceError::Backend(format!("{:?}", e)))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| PersistenceError::Backend(format!("{:?}", e)))
    }
}
