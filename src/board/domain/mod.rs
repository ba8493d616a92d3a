//! Domain model for the task board.
//!
//! The task domain models task creation, completion toggling, deletion by
//! identifier, and the pure query pipeline that derives display views,
//! keeping all infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod query;
mod task;

pub use error::{
    ParseCategoryError, ParsePriorityError, ParseStatusFilterError, TaskDomainError,
};
pub use ids::{TaskId, TaskIdGenerator, TaskText};
pub use query::{StatusFilter, TaskCounts, TaskQuery, select};
pub use task::{Category, PersistedTaskData, Priority, Task};
