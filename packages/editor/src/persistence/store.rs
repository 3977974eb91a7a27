use serde::{Deserialize, Serialize};

use crate::spatial::grid::Snapshot;

use super::backend::StorageBackend;
use super::{PersistenceAdapter, PersistenceError};

pub const DEFAULT_STORAGE_KEY: &str = "sprite-editor.images";

/// Stored document: `{"images": [["#ffffff", ...], ...]}`
#[derive(Serialize, Deserialize, Default)]
struct SavedImages {
    #[serde(default)]
    images: Vec<Snapshot>,
}

/// Append-only list of snapshots under a single storage key.
pub struct SnapshotStore<B: StorageBackend> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> SnapshotStore<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self { backend, key: key.into() }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn read(&self) -> Result<SavedImages, PersistenceError> {
        match self.backend.get_item(&self.key)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(SavedImages::default()),
        }
    }
}

impl<B: StorageBackend> PersistenceAdapter for SnapshotStore<B> {
    fn save(&mut self, snapshot: &Snapshot) -> Result<usize, PersistenceError> {
        // A malformed document fails here rather than being overwritten.
        let mut saved = self.read()?;
        saved.images.push(snapshot.clone());
        let json = serde_json::to_string(&saved)?;
        self.backend.set_item(&self.key, &json)?;
        Ok(saved.images.len())
    }

    fn load_all(&self) -> Result<Vec<Snapshot>, PersistenceError> {
        Ok(self.read()?.images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::color::Color;
    use crate::persistence::backend::MemoryBackend;

    fn store() -> SnapshotStore<MemoryBackend> {
        SnapshotStore::new(MemoryBackend::new(), DEFAULT_STORAGE_KEY)
    }

    #[test]
    fn missing_key_loads_as_empty() {
        assert!(store().load_all().unwrap().is_empty());
    }

    #[test]
    fn save_appends_and_keeps_earlier_entries() {
        let mut store = store();
        let first = Snapshot::new(vec![Color::WHITE; 4]);
        let second = Snapshot::new(vec![Color::hex(0xeaaf4d); 4]);

        assert_eq!(store.save(&first).unwrap(), 1);
        assert_eq!(store.save(&second).unwrap(), 2);

        let all = store.load_all().unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[test]
    fn document_format_is_images_list_of_hex_arrays() {
        let mut store = store();
        store.save(&Snapshot::new(vec![Color::WHITE, Color::hex(0x58aeee)])).unwrap();
        let raw = store.backend().get_item(DEFAULT_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(raw, r##"{"images":[["#ffffff","#58aeee"]]}"##);
    }

    #[test]
    fn reads_documents_without_images_field() {
        let mut backend = MemoryBackend::new();
        backend.set_item(DEFAULT_STORAGE_KEY, "{}").unwrap();
        let store = SnapshotStore::new(backend, DEFAULT_STORAGE_KEY);
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn malformed_document_is_not_overwritten() {
        let mut backend = MemoryBackend::new();
        backend.set_item(DEFAULT_STORAGE_KEY, "not json").unwrap();
        let mut store = SnapshotStore::new(backend, DEFAULT_STORAGE_KEY);

        let err = store.save(&Snapshot::new(vec![Color::WHITE])).unwrap_err();
        assert!(matches!(err, PersistenceError::Format(_)));
        let raw = store.backend().get_item(DEFAULT_STORAGE_KEY).unwrap();
        assert_eq!(raw.as_deref(), Some("not json"));
    }
}
