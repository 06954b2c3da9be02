//! When steps for project board BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use projectboard::{ui::components::Component, validation::RawFormInput};
use rstest_bdd_macros::when;

#[when(r#"the user submits "{title}" described as "{description}" for "{people}" people"#)]
fn submit_project(
    world: &mut BoardWorld,
    title: String,
    description: String,
    people: String,
) -> Result<(), eyre::Report> {
    let input = RawFormInput::new(title, description, people);
    let form = world.app.form();
    form.fill(&input).wrap_err("fill entry form")?;
    form.submit().wrap_err("submit entry form")?;
    world.last_input = Some(input);
    Ok(())
}

#[when(r#"the user drags "{title}" onto the {lane} lane"#)]
fn drag_onto_lane(world: &mut BoardWorld, title: String, lane: String) -> Result<(), eyre::Report> {
    let source = world
        .app
        .item_element(world.item_id(&title)?)
        .ok_or_else(|| eyre::eyre!("item {title:?} is not rendered"))?;
    let target = world.lane(&lane)?.element();

    let mut session = world.app.drag_session();
    session.start(source).wrap_err("start drag")?;
    session.over(target).wrap_err("drag over lane")?;
    world.last_outcome = Some(session.release().wrap_err("release drag")?);
    Ok(())
}

#[when(r#"the user drags "{title}" and releases it outside any lane"#)]
fn drag_and_release_outside(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let source = world
        .app
        .item_element(world.item_id(&title)?)
        .ok_or_else(|| eyre::eyre!("item {title:?} is not rendered"))?;
    let outside = world.app.form().element();

    let mut session = world.app.drag_session();
    session.start(source).wrap_err("start drag")?;
    session.over(outside).wrap_err("drag over form")?;
    world.last_outcome = Some(session.release().wrap_err("release drag")?);
    Ok(())
}
