//! Persistence - append-only sprite storage
//!
//! Saving appends the current grid to the stored list and never rewrites
//! earlier entries. No saved data is a valid empty state, not an error.

use thiserror::Error;

use crate::spatial::grid::Snapshot;

pub mod backend;
pub mod store;

pub use backend::{LocalStorageBackend, MemoryBackend, StorageBackend};
pub use store::{SnapshotStore, DEFAULT_STORAGE_KEY};

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("stored sprites are malformed: {0}")]
    Format(#[from] serde_json::Error),
}

pub trait PersistenceAdapter {
    /// Append a snapshot. Returns how many snapshots are stored afterwards.
    fn save(&mut self, snapshot: &Snapshot) -> Result<usize, PersistenceError>;
    /// Every stored snapshot, oldest first. Empty when nothing was saved yet.
    fn load_all(&self) -> Result<Vec<Snapshot>, PersistenceError>;
}
