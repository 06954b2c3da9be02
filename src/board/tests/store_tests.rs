//! Behavioural tests for the observable project store.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::board::{
    domain::{ItemStatus, PeopleCount, WorkItemId},
    ports::{Snapshot, StoreObserver},
    services::ProjectStore,
};
use mockable::DefaultClock;
use mockall::{Sequence, mock};
use rstest::{fixture, rstest};

mock! {
    Observer {}

    impl StoreObserver for Observer {
        fn notify(&mut self, snapshot: Snapshot);
    }
}

#[fixture]
fn store() -> ProjectStore {
    ProjectStore::new(DefaultClock)
}

fn people(count: u32) -> PeopleCount {
    PeopleCount::new(count).expect("positive head count")
}

/// Registers a closure observer that records every snapshot it receives.
fn recording_observer(store: &ProjectStore) -> Rc<RefCell<Vec<Snapshot>>> {
    let received = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&received);
    store.add_observer(move |snapshot: Snapshot| sink.borrow_mut().push(snapshot));
    received
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(5)]
fn create_appends_active_items_with_distinct_ids(store: ProjectStore, #[case] count: usize) {
    for index in 0..count {
        store.create(format!("Task {index}"), "some description", people(2));
    }

    let snapshot = store.snapshot();
    let ids: HashSet<WorkItemId> = snapshot.iter().map(|item| item.id()).collect();

    assert_eq!(store.len(), count);
    assert_eq!(ids.len(), count);
    assert!(snapshot.iter().all(|item| item.status() == ItemStatus::Active));
}

#[rstest]
fn create_preserves_insertion_order(store: ProjectStore) {
    store.create("First", "first description", people(1));
    store.create("Second", "second description", people(1));
    store.create("Third", "third description", people(1));

    let titles: Vec<String> = store
        .snapshot()
        .iter()
        .map(|item| item.title().to_owned())
        .collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}

#[rstest]
fn create_notifies_each_observer_once_with_full_snapshot(store: ProjectStore) {
    let mut observer = MockObserver::new();
    observer
        .expect_notify()
        .withf(|snapshot| snapshot.len() == 1 && snapshot[0].title() == "Build API")
        .times(1)
        .return_const(());
    store.add_observer(observer);

    store.create("Build API", "desc here", people(3));
}

#[rstest]
fn observers_are_notified_in_registration_order(store: ProjectStore) {
    let mut sequence = Sequence::new();
    let mut first = MockObserver::new();
    first
        .expect_notify()
        .times(1)
        .in_sequence(&mut sequence)
        .return_const(());
    let mut second = MockObserver::new();
    second
        .expect_notify()
        .times(1)
        .in_sequence(&mut sequence)
        .return_const(());
    store.add_observer(first);
    store.add_observer(second);

    store.create("Ordered", "ordering check", people(1));
}

#[rstest]
fn transition_to_new_status_mutates_and_notifies_once(store: ProjectStore) {
    let id = store.create("Move me", "drag target", people(2));
    let received = recording_observer(&store);

    let changed = store.transition(id, ItemStatus::Finished);

    assert!(changed);
    assert_eq!(
        store.find(id).map(|item| item.status()),
        Some(ItemStatus::Finished)
    );
    let received = received.borrow();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0][0].status(), ItemStatus::Finished);
}

#[rstest]
fn repeated_transition_to_same_status_is_a_no_op(store: ProjectStore) {
    let id = store.create("Move me", "drag target", people(2));
    let received = recording_observer(&store);

    assert!(store.transition(id, ItemStatus::Finished));
    assert!(!store.transition(id, ItemStatus::Finished));

    assert_eq!(received.borrow().len(), 1);
}

#[rstest]
fn transition_to_current_status_does_not_notify(store: ProjectStore) {
    let id = store.create("Stay", "already active", people(1));
    let mut observer = MockObserver::new();
    observer.expect_notify().never();
    store.add_observer(observer);

    assert!(!store.transition(id, ItemStatus::Active));
}

#[rstest]
fn transition_with_unknown_id_is_silently_ignored(store: ProjectStore) {
    store.create("Existing", "untouched item", people(1));
    let before = store.snapshot();
    let mut observer = MockObserver::new();
    observer.expect_notify().never();
    store.add_observer(observer);

    assert!(!store.transition(WorkItemId::new(), ItemStatus::Finished));
    assert_eq!(store.snapshot(), before);
}

#[rstest]
fn snapshots_do_not_alias_store_state(store: ProjectStore) {
    let id = store.create("Snapshot", "copy semantics", people(1));
    let received = recording_observer(&store);
    let retained = store.snapshot();

    store.transition(id, ItemStatus::Finished);

    assert_eq!(retained[0].status(), ItemStatus::Active);
    assert_eq!(received.borrow()[0][0].status(), ItemStatus::Finished);
}

#[rstest]
fn each_observer_receives_its_own_snapshot(store: ProjectStore) {
    let first = recording_observer(&store);
    let second = recording_observer(&store);

    store.create("Shared", "two observers", people(4));

    assert_eq!(first.borrow().len(), 1);
    assert_eq!(second.borrow().len(), 1);
    assert_eq!(first.borrow()[0], second.borrow()[0]);
    assert_eq!(store.observer_count(), 2);
}

#[rstest]
fn debug_output_is_available_while_observers_run() {
    let store = Rc::new(ProjectStore::new(DefaultClock));
    let formatted = Rc::new(RefCell::new(Vec::new()));
    let handle = Rc::downgrade(&store);
    let sink = Rc::clone(&formatted);
    store.add_observer(move |_snapshot: Snapshot| {
        if let Some(live) = handle.upgrade() {
            sink.borrow_mut().push(format!("{live:?}"));
        }
    });

    store.create("Inspect", "formatted mid-notification", people(1));

    let lines = formatted.borrow();
    assert_eq!(lines.len(), 1);
    assert!(lines.iter().all(|line| line.contains("observers: \"<notifying>\"")));
    assert!(format!("{store:?}").contains("observers: 1"));
}

#[rstest]
#[should_panic(expected = "already borrowed")]
fn transition_from_inside_a_notification_panics() {
    let store = Rc::new(ProjectStore::new(DefaultClock));
    let handle = Rc::downgrade(&store);
    store.add_observer(move |snapshot: Snapshot| {
        if let (Some(live), Some(item)) = (handle.upgrade(), snapshot.first()) {
            live.transition(item.id(), ItemStatus::Finished);
        }
    });

    store.create("Re-entrant", "moves itself on creation", people(1));
}
