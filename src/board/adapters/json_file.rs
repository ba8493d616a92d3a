//! JSON file snapshot store scoped to a capability directory.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs_utf8::Dir;
use std::io;

use super::models::{decode_snapshot, encode_snapshot};
use crate::board::domain::Task;
use crate::board::ports::{SnapshotResult, SnapshotStore, SnapshotStoreError};

/// Default snapshot file name.
pub const DEFAULT_SNAPSHOT_FILE: &str = "tasks.json";

/// Snapshot store persisting the collection to one JSON file.
///
/// The store only ever touches files inside the directory capability it
/// was constructed with.
#[derive(Debug)]
pub struct JsonFileSnapshotStore {
    dir: Dir,
    file_name: Utf8PathBuf,
}

impl JsonFileSnapshotStore {
    /// Creates a store writing to [`DEFAULT_SNAPSHOT_FILE`] inside `dir`.
    #[must_use]
    pub fn new(dir: Dir) -> Self {
        Self::with_file_name(dir, DEFAULT_SNAPSHOT_FILE)
    }

    /// Creates a store writing to `file_name` inside `dir`.
    #[must_use]
    pub fn with_file_name(dir: Dir, file_name: impl Into<Utf8PathBuf>) -> Self {
        Self {
            dir,
            file_name: file_name.into(),
        }
    }

    /// Opens `dir_path` with ambient authority and stores snapshots there.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Storage`] when the directory cannot
    /// be opened.
    pub fn open_ambient(dir_path: impl AsRef<Utf8Path>) -> SnapshotResult<Self> {
        let dir = Dir::open_ambient_dir(dir_path.as_ref(), cap_std::ambient_authority())
            .map_err(SnapshotStoreError::storage)?;
        Ok(Self::new(dir))
    }
}

impl SnapshotStore for JsonFileSnapshotStore {
    fn load(&self) -> SnapshotResult<Option<Vec<Task>>> {
        match self.dir.read_to_string(&self.file_name) {
            Ok(raw) => decode_snapshot(&raw).map(Some),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SnapshotStoreError::storage(err)),
        }
    }

    fn save(&self, tasks: &[Task]) -> SnapshotResult<()> {
        let payload = encode_snapshot(tasks)?;

        // Write-then-rename keeps the previous snapshot intact if the
        // write is interrupted.
        let tmp_name = format!("{}.tmp", self.file_name);
        self.dir
            .write(&tmp_name, payload.as_bytes())
            .map_err(SnapshotStoreError::storage)?;
        self.dir
            .rename(&tmp_name, &self.dir, &self.file_name)
            .map_err(SnapshotStoreError::storage)?;
        Ok(())
    }
}
