//! Identifier and validated scalar types for the task board domain.

use super::TaskDomainError;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a task.
///
/// Identifiers are milliseconds since the Unix epoch at creation time and
/// increase strictly monotonically, so identifier order and creation order
/// coincide. The identifier is the stable handle for toggle and delete
/// operations and the tie-break for display sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Creates a task identifier from a millisecond timestamp value.
    #[must_use]
    pub const fn from_millis(value: i64) -> Self {
        Self(value)
    }

    /// Returns the wrapped millisecond value.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic source of task identifiers.
///
/// Issues the clock's current millisecond timestamp, bumped past the last
/// issued identifier when the clock has not advanced. This keeps
/// identifiers unique even for creations landing within the same
/// millisecond, while staying ordered by creation time at human-paced
/// input rates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskIdGenerator {
    last: i64,
}

impl TaskIdGenerator {
    /// Creates a generator that issues identifiers strictly above `floor`.
    ///
    /// Used when reopening a persisted collection so fresh identifiers
    /// never collide with stored ones.
    #[must_use]
    pub const fn seeded(floor: i64) -> Self {
        Self { last: floor }
    }

    /// Issues the next identifier from the clock's current time.
    pub fn next_id(&mut self, clock: &impl Clock) -> TaskId {
        self.last = clock
            .utc()
            .timestamp_millis()
            .max(self.last.saturating_add(1));
        TaskId(self.last)
    }
}

/// Validated task description text.
///
/// Leading and trailing whitespace is stripped before acceptance; the
/// remainder must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskText(String);

impl TaskText {
    /// Creates validated task text.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskText`] if the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTaskText);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the text as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when the text contains `needle`, compared
    /// case-insensitively. An empty needle matches.
    #[must_use]
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        self.0.to_lowercase().contains(&needle.to_lowercase())
    }
}

impl AsRef<str> for TaskText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
