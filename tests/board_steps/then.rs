//! Then steps for project board BDD scenarios.

use super::world::BoardWorld;
use projectboard::{
    board::domain::ItemStatus, ui::services::DropOutcome, validation::RawFormInput,
};
use rstest_bdd_macros::then;

#[then(r#"the {lane} lane lists "{title}""#)]
fn lane_lists(world: &BoardWorld, lane: String, title: String) -> Result<(), eyre::Report> {
    let titles = world.lane_titles(&lane)?;
    if !titles.contains(&title) {
        return Err(eyre::eyre!("{lane} lane shows {titles:?}, missing {title:?}"));
    }

    let expected = ItemStatus::try_from(lane.as_str())
        .map_err(|err| eyre::eyre!("invalid lane in scenario: {err}"))?;
    let status = world
        .app
        .store()
        .find(world.item_id(&title)?)
        .map(|item| item.status());
    if status != Some(expected) {
        return Err(eyre::eyre!("{title:?} has status {status:?}, expected {expected}"));
    }
    Ok(())
}

#[then("the {lane} lane is empty")]
fn lane_is_empty(world: &BoardWorld, lane: String) -> Result<(), eyre::Report> {
    let titles = world.lane_titles(&lane)?;
    if !titles.is_empty() {
        return Err(eyre::eyre!("{lane} lane still shows {titles:?}"));
    }
    if !world.lane(&lane)?.assigned_items().is_empty() {
        return Err(eyre::eyre!("{lane} lane still caches items"));
    }
    Ok(())
}

#[then(r#"the item "{title}" shows "{text}""#)]
fn item_shows(world: &BoardWorld, title: String, text: String) -> Result<(), eyre::Report> {
    let element = world
        .app
        .item_element(world.item_id(&title)?)
        .ok_or_else(|| eyre::eyre!("item {title:?} is not rendered"))?;
    let assignment = world.document.texts_of(element, "h3");
    if assignment != [text.clone()] {
        return Err(eyre::eyre!("expected {text:?}, found {assignment:?}"));
    }
    Ok(())
}

#[then("the entry form is cleared")]
fn form_is_cleared(world: &BoardWorld) -> Result<(), eyre::Report> {
    let input = world.app.form().read_input();
    if input != RawFormInput::default() {
        return Err(eyre::eyre!("entry form still holds {input:?}"));
    }
    Ok(())
}

#[then("the entry form still holds the rejected input")]
fn form_keeps_rejected_input(world: &BoardWorld) -> Result<(), eyre::Report> {
    let expected = world
        .last_input
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no submission recorded"))?;
    let input = world.app.form().read_input();
    if &input != expected {
        return Err(eyre::eyre!("expected {expected:?}, found {input:?}"));
    }
    Ok(())
}

#[then(r#"the user is alerted "{message}""#)]
fn user_is_alerted(world: &BoardWorld, message: String) -> Result<(), eyre::Report> {
    let alerts = world.notifier.alerts();
    if alerts != [message.clone()] {
        return Err(eyre::eyre!("expected a single {message:?} alert, got {alerts:?}"));
    }
    Ok(())
}

#[then("the board holds {count:usize} items")]
fn board_holds(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let len = world.app.store().len();
    if len != count {
        return Err(eyre::eyre!("expected {count} items, found {len}"));
    }
    Ok(())
}

#[then("the drag ends with a drop")]
fn drag_ends_with_drop(world: &BoardWorld) -> Result<(), eyre::Report> {
    match world.last_outcome {
        Some(DropOutcome::Dropped { .. }) => Ok(()),
        other => Err(eyre::eyre!("expected a drop, got {other:?}")),
    }
}

#[then("the drag is cancelled")]
fn drag_is_cancelled(world: &BoardWorld) -> Result<(), eyre::Report> {
    match world.last_outcome {
        Some(DropOutcome::Cancelled) => Ok(()),
        other => Err(eyre::eyre!("expected a cancelled drag, got {other:?}")),
    }
}

#[then("no lane is highlighted")]
fn no_lane_highlighted(world: &BoardWorld) -> Result<(), eyre::Report> {
    for status in ItemStatus::ALL {
        if world.app.lane(status).is_drop_zone_active() {
            return Err(eyre::eyre!("{status} lane is still highlighted"));
        }
    }
    Ok(())
}
