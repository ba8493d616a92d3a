//! Pure query engine deriving display views from the task collection.
//!
//! Everything here is a side-effect-free function of the collection and
//! the query parameters, safe to recompute on every render.

use super::{ParseStatusFilterError, Priority, Task};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// View-level completion predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    /// Keep every task.
    #[default]
    All,
    /// Keep only tasks that are not completed.
    Active,
    /// Keep only completed tasks.
    Completed,
}

impl StatusFilter {
    /// Returns the canonical token for this filter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Returns `true` when `task` passes this filter.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.is_completed(),
            Self::Completed => task.is_completed(),
        }
    }
}

impl TryFrom<&str> for StatusFilter {
    type Error = ParseStatusFilterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseStatusFilterError(value.to_owned())),
        }
    }
}

/// Query parameters for a derived task view.
///
/// The search term applies on top of the filter: searching while the
/// completed filter is selected searches only completed tasks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskQuery {
    filter: StatusFilter,
    search: String,
}

impl TaskQuery {
    /// Creates a query that keeps every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the completion filter.
    #[must_use]
    pub fn with_filter(mut self, filter: StatusFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the case-insensitive search term. An empty term matches
    /// everything.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Returns the completion filter.
    #[must_use]
    pub const fn filter(&self) -> StatusFilter {
        self.filter
    }

    /// Returns the search term.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Returns `true` when `task` passes both the filter and the search.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.filter.matches(task)
            && (self.search.is_empty() || task.text().contains_ignore_case(&self.search))
    }
}

/// Derives the display view: filter, then search, then sort.
///
/// Tasks are ordered by priority rank ascending with identifier descending
/// as the tie-break, so the most recently created task leads within each
/// priority band. The order is total, which makes the sort idempotent.
#[must_use]
pub fn select<'a>(tasks: &'a [Task], query: &TaskQuery) -> Vec<&'a Task> {
    let mut view: Vec<&Task> = tasks.iter().filter(|task| query.matches(task)).collect();
    view.sort_by_key(|task| (task.priority().rank(), Reverse(task.id())));
    view
}

/// Aggregate counters, always computed over the entire collection rather
/// than the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    /// Tasks not yet completed.
    pub active: usize,
    /// Completed tasks.
    pub completed: usize,
    /// Incomplete tasks with high priority.
    pub high_priority: usize,
}

impl TaskCounts {
    /// Tallies the counters for `tasks`.
    #[must_use]
    pub fn tally(tasks: &[Task]) -> Self {
        let mut counts = Self::default();
        for task in tasks {
            if task.is_completed() {
                counts.completed += 1;
            } else {
                counts.active += 1;
                if task.priority() == Priority::High {
                    counts.high_priority += 1;
                }
            }
        }
        counts
    }
}
