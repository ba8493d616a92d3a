//! Given steps for task board BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::given;
use taskboard::board::services::TaskDraft;

#[given("an empty task board")]
fn empty_task_board(world: &mut BoardWorld) {
    *world = BoardWorld::new();
}

#[given(r#"a completed task "{text}""#)]
fn completed_task(world: &mut BoardWorld, text: String) -> Result<(), eyre::Report> {
    let id = world
        .board
        .add(TaskDraft::new(text))
        .ok_or_else(|| eyre::eyre!("task text rejected in scenario setup"))?;
    eyre::ensure!(
        world.board.toggle_complete(id),
        "toggle should find the freshly added task"
    );
    Ok(())
}

#[given(r#"an active task "{text}""#)]
fn active_task(world: &mut BoardWorld, text: String) -> Result<(), eyre::Report> {
    let _id = world
        .board
        .add(TaskDraft::new(text))
        .ok_or_else(|| eyre::eyre!("task text rejected in scenario setup"))?;
    Ok(())
}
