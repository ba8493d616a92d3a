//! Wire model and versioned codec for persisted task snapshots.
//!
//! Snapshots are stored as a JSON envelope carrying an explicit schema
//! version so future format changes can migrate old data on read rather
//! than silently dropping it. Decoding is tolerant: unknown fields are
//! ignored, and missing or unrecognised field values fall back to the
//! domain defaults instead of failing the whole load.

use crate::board::domain::{Category, PersistedTaskData, Priority, Task, TaskId, TaskText};
use crate::board::ports::{SnapshotResult, SnapshotStoreError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Current snapshot schema version.
pub(crate) const SNAPSHOT_VERSION: u32 = 1;

/// Versioned snapshot envelope.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SnapshotEnvelope {
    /// Schema version of the payload.
    pub(crate) version: u32,
    /// Serialised task records.
    pub(crate) tasks: Vec<TaskRecord>,
}

/// Persisted task record.
///
/// Field names keep the original persisted layout (camelCase, optional
/// `dueDate`/`createdAt`), so snapshots written before this crate existed
/// remain readable.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TaskRecord {
    /// Millisecond task identifier.
    pub(crate) id: i64,
    /// Task text.
    pub(crate) text: String,
    /// Completion flag; missing means incomplete.
    #[serde(default)]
    pub(crate) completed: bool,
    /// Priority token; unknown or missing falls back to the default.
    #[serde(default)]
    pub(crate) priority: String,
    /// Category token; unknown or missing falls back to the default.
    #[serde(default)]
    pub(crate) category: String,
    /// Optional ISO calendar date.
    #[serde(default)]
    pub(crate) due_date: Option<String>,
    /// RFC 3339 creation timestamp.
    #[serde(default)]
    pub(crate) created_at: Option<String>,
}

impl TaskRecord {
    /// Builds the wire record for a domain task.
    pub(crate) fn from_task(task: &Task) -> Self {
        Self {
            id: task.id().into_inner(),
            text: task.text().as_str().to_owned(),
            completed: task.is_completed(),
            priority: task.priority().as_str().to_owned(),
            category: task.category().as_str().to_owned(),
            due_date: task.due_date().map(|date| date.to_string()),
            created_at: Some(task.created_at().to_rfc3339()),
        }
    }

    /// Converts the record into a domain task.
    ///
    /// Returns `None` for records whose text is empty after trimming; such
    /// records cannot satisfy the domain invariant and are dropped from
    /// the decoded collection.
    pub(crate) fn into_task(self) -> Option<Task> {
        let text = TaskText::new(self.text).ok()?;
        let priority = Priority::try_from(self.priority.as_str()).unwrap_or_default();
        let category = Category::try_from(self.category.as_str()).unwrap_or_default();
        let due_date = self
            .due_date
            .as_deref()
            .and_then(|raw| raw.parse::<NaiveDate>().ok());
        let created_at = self
            .created_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map_or(DateTime::<Utc>::UNIX_EPOCH, |parsed| {
                parsed.with_timezone(&Utc)
            });

        Some(Task::from_persisted(PersistedTaskData {
            id: TaskId::from_millis(self.id),
            text,
            completed: self.completed,
            priority,
            category,
            due_date,
            created_at,
        }))
    }
}

/// Serialises the collection into the current envelope format.
///
/// # Errors
///
/// Returns [`SnapshotStoreError::Storage`] when JSON serialisation fails.
pub(crate) fn encode_snapshot(tasks: &[Task]) -> SnapshotResult<String> {
    let envelope = SnapshotEnvelope {
        version: SNAPSHOT_VERSION,
        tasks: tasks.iter().map(TaskRecord::from_task).collect(),
    };
    serde_json::to_string(&envelope).map_err(SnapshotStoreError::storage)
}

/// Decodes a stored payload, upgrading legacy layouts on the way in.
///
/// Version-0 snapshots, written before the envelope existed as a bare JSON
/// array of task records, are recognised and upgraded transparently.
///
/// # Errors
///
/// Returns [`SnapshotStoreError::Corrupt`] when the payload is not valid
/// JSON in either layout or carries an unsupported schema version.
pub(crate) fn decode_snapshot(raw: &str) -> SnapshotResult<Vec<Task>> {
    let records = match serde_json::from_str::<SnapshotEnvelope>(raw) {
        Ok(envelope) if envelope.version == SNAPSHOT_VERSION => envelope.tasks,
        Ok(envelope) => {
            return Err(SnapshotStoreError::Corrupt(format!(
                "unsupported snapshot version {}",
                envelope.version
            )));
        }
        Err(_) => serde_json::from_str::<Vec<TaskRecord>>(raw)
            .map_err(|err| SnapshotStoreError::Corrupt(err.to_string()))?,
    };

    Ok(records
        .into_iter()
        .filter_map(TaskRecord::into_task)
        .collect())
}
