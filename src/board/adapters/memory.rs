//! In-memory snapshot store backed by a single key-value slot.

use std::sync::RwLock;

use super::models::{decode_snapshot, encode_snapshot};
use crate::board::domain::Task;
use crate::board::ports::{SnapshotResult, SnapshotStore, SnapshotStoreError};

/// Thread-safe in-memory snapshot store.
///
/// Holds the serialised payload exactly as a durable adapter would, so
/// tests and embedders exercise the same codec path as the file-backed
/// store.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    slot: RwLock<Option<String>>,
}

impl InMemorySnapshotStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with a raw payload.
    #[must_use]
    pub fn with_raw(payload: impl Into<String>) -> Self {
        Self {
            slot: RwLock::new(Some(payload.into())),
        }
    }

    /// Returns a copy of the raw stored payload, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Storage`] when the slot lock is
    /// poisoned.
    pub fn raw(&self) -> SnapshotResult<Option<String>> {
        let slot = self.slot.read().map_err(poisoned)?;
        Ok(slot.clone())
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn load(&self) -> SnapshotResult<Option<Vec<Task>>> {
        let slot = self.slot.read().map_err(poisoned)?;
        slot.as_deref().map(decode_snapshot).transpose()
    }

    fn save(&self, tasks: &[Task]) -> SnapshotResult<()> {
        let payload = encode_snapshot(tasks)?;
        let mut slot = self.slot.write().map_err(poisoned)?;
        *slot = Some(payload);
        Ok(())
    }
}

fn poisoned(err: impl std::fmt::Display) -> SnapshotStoreError {
    SnapshotStoreError::storage(std::io::Error::other(err.to_string()))
}
