//! Shared fixtures for board unit tests.

use crate::board::domain::{Category, PersistedTaskData, Priority, Task, TaskId, TaskText};
use chrono::{DateTime, Utc};

/// Builds a task with a fixed timestamp for deterministic assertions.
pub(super) fn task(id: i64, text: &str, priority: Priority, completed: bool) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::from_millis(id),
        text: TaskText::new(text).expect("fixture text must be valid"),
        completed,
        priority,
        category: Category::default(),
        due_date: None,
        created_at: DateTime::<Utc>::UNIX_EPOCH,
    })
}
