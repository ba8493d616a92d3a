//! Service layer owning the authoritative task collection.

mod board;

pub use board::{TaskBoard, TaskDraft};
