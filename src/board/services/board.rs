//! The owning task board: mutations and snapshot synchronisation.

use crate::board::domain::{
    Category, Priority, Task, TaskCounts, TaskId, TaskIdGenerator, TaskQuery, TaskText, select,
};
use crate::board::ports::SnapshotStore;
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;

/// Draft payload for creating a task, collected from the add form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    text: String,
    priority: Priority,
    category: Category,
    due_date: Option<NaiveDate>,
}

impl TaskDraft {
    /// Creates a draft with the given text and default classification.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            priority: Priority::default(),
            category: Category::default(),
            due_date: None,
        }
    }

    /// Sets the draft priority.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the draft category.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Sets the draft due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Authoritative, explicitly owned task collection.
///
/// A board is constructed once at application start via [`TaskBoard::open`]
/// and passed by reference to whichever layer routes user input. Every
/// mutation rewrites the full snapshot through the injected
/// [`SnapshotStore`] before returning, so the next process start sees the
/// latest state.
///
/// Mutations never surface errors: empty task text and unknown identifiers
/// are silent no-ops, and snapshot write failures are absorbed (the
/// in-memory collection stays authoritative).
pub struct TaskBoard<S, C>
where
    S: SnapshotStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    ids: TaskIdGenerator,
    tasks: Vec<Task>,
}

impl<S, C> TaskBoard<S, C>
where
    S: SnapshotStore,
    C: Clock + Send + Sync,
{
    /// Opens a board from the persisted snapshot.
    ///
    /// A missing, unreadable, or undecodable snapshot initialises an empty
    /// collection; opening never fails. The identifier generator is seeded
    /// past the largest persisted identifier so fresh tasks never collide
    /// with stored ones.
    #[must_use]
    pub fn open(store: Arc<S>, clock: Arc<C>) -> Self {
        let tasks = store.load().ok().flatten().unwrap_or_default();
        let floor = tasks
            .iter()
            .map(|task| task.id().into_inner())
            .max()
            .unwrap_or(0);
        Self {
            store,
            clock,
            ids: TaskIdGenerator::seeded(floor),
            tasks,
        }
    }

    /// Creates a task from `draft` and prepends it to the collection,
    /// newest first.
    ///
    /// Returns `None` without mutating anything when the draft text is
    /// empty after trimming.
    pub fn add(&mut self, draft: TaskDraft) -> Option<TaskId> {
        let text = TaskText::new(draft.text).ok()?;
        let id = self.ids.next_id(&*self.clock);
        let task = Task::create(
            id,
            text,
            draft.priority,
            draft.category,
            draft.due_date,
            &*self.clock,
        );
        self.tasks.insert(0, task);
        self.sync();
        Some(id)
    }

    /// Flips the completion flag of the task matching `id`.
    ///
    /// Returns `false` without mutating anything when no task matches.
    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) else {
            return false;
        };
        task.toggle_completed();
        self.sync();
        true
    }

    /// Removes the task matching `id`.
    ///
    /// Returns `false` without mutating anything when no task matches.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id() != id);
        if self.tasks.len() == before {
            return false;
        }
        self.sync();
        true
    }

    /// Returns the collection in insertion order, newest first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the board holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Derives the filtered, searched, and sorted display view.
    #[must_use]
    pub fn view(&self, query: &TaskQuery) -> Vec<&Task> {
        select(&self.tasks, query)
    }

    /// Tallies the aggregate counters over the whole collection.
    #[must_use]
    pub fn counts(&self) -> TaskCounts {
        TaskCounts::tally(&self.tasks)
    }

    /// Best-effort snapshot write.
    ///
    /// Quota and I/O failures must not surface to the presentation layer;
    /// the in-memory collection stays authoritative and the next
    /// successful mutation rewrites the full state.
    fn sync(&self) {
        if self.store.save(&self.tasks).is_err() {
            // Swallowed per the persistence policy above.
        }
    }
}
