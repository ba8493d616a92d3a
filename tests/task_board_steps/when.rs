//! When steps for task board BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::when;
use taskboard::board::domain::{Priority, StatusFilter, Task, TaskQuery};
use taskboard::board::services::TaskDraft;

#[when(r#"a task "{text}" with priority "{priority}" is added"#)]
fn add_task(world: &mut BoardWorld, text: String, priority: String) -> Result<(), eyre::Report> {
    let parsed = Priority::try_from(priority.as_str())?;
    // Blank text is silently rejected by the board; the Then steps assert
    // the resulting collection size either way.
    world.board.add(TaskDraft::new(text).with_priority(parsed));
    Ok(())
}

#[when("the newest task completion is toggled")]
fn toggle_newest(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let id = world
        .board
        .tasks()
        .first()
        .map(Task::id)
        .ok_or_else(|| eyre::eyre!("board is empty"))?;
    eyre::ensure!(
        world.board.toggle_complete(id),
        "toggle should find the newest task"
    );
    Ok(())
}

#[when(r#"the active tasks are searched for "{term}""#)]
fn search_active_tasks(world: &mut BoardWorld, term: String) {
    let query = TaskQuery::new()
        .with_filter(StatusFilter::Active)
        .with_search(term);
    world.last_view = Some(
        world
            .board
            .view(&query)
            .into_iter()
            .map(|task| task.text().as_str().to_owned())
            .collect(),
    );
}
