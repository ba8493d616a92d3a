//! Snapshot port for whole-collection persistence.

use crate::board::domain::Task;
use std::sync::Arc;
use thiserror::Error;

/// Result type for snapshot store operations.
pub type SnapshotResult<T> = Result<T, SnapshotStoreError>;

/// Whole-collection persistence contract.
///
/// A snapshot store holds at most one value: the serialised task
/// collection. Every save overwrites the previous snapshot; there is no
/// per-task persistence.
pub trait SnapshotStore: Send + Sync {
    /// Reads the persisted collection.
    ///
    /// Returns `Ok(None)` when no snapshot has been written yet.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Corrupt`] when a stored payload cannot
    /// be decoded, or [`SnapshotStoreError::Storage`] when the read itself
    /// fails.
    fn load(&self) -> SnapshotResult<Option<Vec<Task>>>;

    /// Serialises `tasks` and overwrites the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Storage`] when the write fails.
    fn save(&self, tasks: &[Task]) -> SnapshotResult<()>;
}

/// Errors returned by snapshot store implementations.
#[derive(Debug, Clone, Error)]
pub enum SnapshotStoreError {
    /// The stored payload could not be decoded.
    #[error("corrupt snapshot: {0}")]
    Corrupt(String),

    /// Storage-layer failure.
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl SnapshotStoreError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
