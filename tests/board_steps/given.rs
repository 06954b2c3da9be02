//! Given steps for project board BDD scenarios.

use super::world::BoardWorld;
use projectboard::board::domain::{ItemStatus, PeopleCount};
use rstest_bdd_macros::given;

#[given("an empty project board")]
fn empty_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    if !world.app.store().is_empty() {
        return Err(eyre::eyre!("expected a fresh board"));
    }
    Ok(())
}

#[given(r#"a board with an active project "{title}""#)]
fn board_with_active_project(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    world
        .app
        .store()
        .create(title, "created for the scenario", PeopleCount::new(2)?);
    Ok(())
}

#[given(r#"a board with a finished project "{title}""#)]
fn board_with_finished_project(
    world: &mut BoardWorld,
    title: String,
) -> Result<(), eyre::Report> {
    let id = world
        .app
        .store()
        .create(title, "created for the scenario", PeopleCount::new(2)?);
    if !world.app.store().transition(id, ItemStatus::Finished) {
        return Err(eyre::eyre!("project could not be finished"));
    }
    Ok(())
}
