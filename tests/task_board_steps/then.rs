//! Then steps for task board BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::then;

#[then("the task count is {count:u64}")]
fn task_count_is(world: &mut BoardWorld, count: u64) -> Result<(), eyre::Report> {
    let len = u64::try_from(world.board.len())?;
    eyre::ensure!(len == count, "expected {count} tasks, found {len}");
    Ok(())
}

#[then(r#"the newest task text is "{text}""#)]
fn newest_task_text_is(world: &mut BoardWorld, text: String) -> Result<(), eyre::Report> {
    let newest = world
        .board
        .tasks()
        .first()
        .ok_or_else(|| eyre::eyre!("board is empty"))?;
    eyre::ensure!(
        newest.text().as_str() == text,
        "unexpected newest task text: {}",
        newest.text()
    );
    Ok(())
}

#[then("the newest task is active")]
fn newest_task_is_active(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let newest = world
        .board
        .tasks()
        .first()
        .ok_or_else(|| eyre::eyre!("board is empty"))?;
    eyre::ensure!(!newest.is_completed(), "newest task should be active");
    Ok(())
}

#[then("the view is empty")]
fn view_is_empty(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let view = world
        .last_view
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no search has been run in this scenario"))?;
    eyre::ensure!(view.is_empty(), "expected an empty view, found {view:?}");
    Ok(())
}
