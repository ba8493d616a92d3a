//! Snapshot store adapters.

mod json_file;
mod memory;
pub(crate) mod models;

pub use json_file::{DEFAULT_SNAPSHOT_FILE, JsonFileSnapshotStore};
pub use memory::InMemorySnapshotStore;
