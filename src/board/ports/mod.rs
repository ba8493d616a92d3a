//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by the board
//! service.

pub mod snapshot;

pub use snapshot::{SnapshotResult, SnapshotStore, SnapshotStoreError};
