//! Domain-focused tests for work items and their status.

use crate::board::domain::{
    BoardDomainError, ItemStatus, ParseItemStatusError, PeopleCount, WorkItem, WorkItemId,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

fn people(count: u32) -> PeopleCount {
    PeopleCount::new(count).expect("positive head count")
}

#[rstest]
fn new_item_starts_active_with_given_fields(clock: DefaultClock) {
    let item = WorkItem::new("Build API", "desc here", people(3), &clock);

    assert_eq!(item.status(), ItemStatus::Active);
    assert_eq!(item.title(), "Build API");
    assert_eq!(item.description(), "desc here");
    assert_eq!(item.people().value(), 3);
}

#[rstest]
fn new_items_receive_distinct_ids(clock: DefaultClock) {
    let first = WorkItem::new("One", "first item", people(1), &clock);
    let second = WorkItem::new("Two", "second item", people(1), &clock);

    assert_ne!(first.id(), second.id());
}

#[rstest]
#[case(1, "1 person")]
#[case(2, "2 persons")]
#[case(12, "12 persons")]
fn people_label_uses_singular_only_for_one(
    clock: DefaultClock,
    #[case] count: u32,
    #[case] expected: &str,
) {
    let item = WorkItem::new("Label", "label check", people(count), &clock);
    assert_eq!(item.people_label(), expected);
}

#[rstest]
#[case("active", ItemStatus::Active)]
#[case("finished", ItemStatus::Finished)]
#[case("  FINISHED ", ItemStatus::Finished)]
fn item_status_parses_canonical_names(#[case] raw: &str, #[case] expected: ItemStatus) {
    assert_eq!(ItemStatus::try_from(raw), Ok(expected));
}

#[rstest]
fn item_status_rejects_unknown_names() {
    assert_eq!(
        ItemStatus::try_from("archived"),
        Err(ParseItemStatusError("archived".to_owned()))
    );
}

#[rstest]
fn item_status_round_trips_through_as_str() {
    for status in ItemStatus::ALL {
        assert_eq!(ItemStatus::try_from(status.as_str()), Ok(status));
    }
}

#[rstest]
fn work_item_id_parses_its_display_form() {
    let id = WorkItemId::new();
    assert_eq!(id.to_string().parse::<WorkItemId>(), Ok(id));
}

#[rstest]
fn work_item_id_reads_back_a_padded_drag_payload() {
    let id = WorkItemId::new();
    let payload = format!("  {id}\n");

    assert_eq!(payload.parse::<WorkItemId>(), Ok(id));
    assert_eq!(WorkItemId::from_uuid(id.into_inner()), id);
}

#[rstest]
fn work_item_id_rejects_garbage() {
    assert_eq!(
        "0.8141".parse::<WorkItemId>(),
        Err(BoardDomainError::InvalidItemId("0.8141".to_owned()))
    );
}

#[rstest]
fn people_count_rejects_zero() {
    assert_eq!(
        PeopleCount::new(0),
        Err(BoardDomainError::InvalidPeopleCount(0))
    );
    assert_eq!(PeopleCount::new(4).map(PeopleCount::value), Ok(4));
}

#[rstest]
fn people_count_refuses_zero_when_deserialised() {
    assert!(serde_json::from_str::<PeopleCount>("0").is_err());
    assert_eq!(
        serde_json::from_str::<PeopleCount>("2").ok(),
        PeopleCount::new(2).ok()
    );
}
