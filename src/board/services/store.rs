//! Observable store owning every work item on the board.

use std::cell::RefCell;
use std::fmt;

use mockable::{Clock, DefaultClock};
use tracing::{debug, info};

use crate::board::{
    domain::{ItemStatus, PeopleCount, WorkItem, WorkItemId},
    ports::{Snapshot, StoreObserver},
};

/// Single owner of the board's work items.
///
/// The composition root constructs exactly one store and shares it by
/// reference with every component. Observers are notified synchronously, in
/// registration order, each with its own [`Snapshot`].
///
/// Observers must not call [`Self::create`], [`Self::transition`] or
/// [`Self::add_observer`] while being notified. Doing so panics on the
/// interior borrow.
pub struct ProjectStore {
    items: RefCell<Vec<WorkItem>>,
    observers: RefCell<Vec<Box<dyn StoreObserver>>>,
    clock: Box<dyn Clock>,
}

impl ProjectStore {
    /// Creates an empty store stamping items with the given clock.
    #[must_use]
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            items: RefCell::new(Vec::new()),
            observers: RefCell::new(Vec::new()),
            clock: Box::new(clock),
        }
    }

    /// Registers an observer for every future mutation.
    ///
    /// There is no unregistration; observers live as long as the store.
    ///
    /// # Panics
    ///
    /// Panics when called from inside an observer notification.
    pub fn add_observer(&self, observer: impl StoreObserver + 'static) {
        self.observers.borrow_mut().push(Box::new(observer));
    }

    /// Appends a new active work item and notifies every observer.
    ///
    /// Inputs are assumed to be validated by the caller.
    ///
    /// # Panics
    ///
    /// Panics when called from inside an observer notification.
    pub fn create(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: PeopleCount,
    ) -> WorkItemId {
        let item = WorkItem::new(title, description, people, &*self.clock);
        let id = item.id();
        info!(item_id = %id, title = item.title(), %people, "work item created");
        self.items.borrow_mut().push(item);
        self.notify_observers();
        id
    }

    /// Moves an item to `status` and notifies observers.
    ///
    /// Unknown identifiers and unchanged statuses are silent no-ops: nothing
    /// is mutated, nobody is notified and `false` is returned.
    ///
    /// # Panics
    ///
    /// Panics when called from inside an observer notification.
    pub fn transition(&self, id: WorkItemId, status: ItemStatus) -> bool {
        let changed = {
            let mut items = self.items.borrow_mut();
            match items.iter_mut().find(|item| item.id() == id) {
                Some(item) if item.status() != status => {
                    item.set_status(status);
                    true
                }
                Some(_) => {
                    debug!(item_id = %id, %status, "status unchanged; transition ignored");
                    false
                }
                None => {
                    debug!(item_id = %id, "unknown work item; transition ignored");
                    false
                }
            }
        };

        if changed {
            info!(item_id = %id, %status, "work item moved");
            self.notify_observers();
        }
        changed
    }

    /// Returns an independent copy of every item in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.items.borrow().clone()
    }

    /// Looks up a single item by identifier.
    #[must_use]
    pub fn find(&self, id: WorkItemId) -> Option<WorkItem> {
        self.items.borrow().iter().find(|item| item.id() == id).cloned()
    }

    /// Returns the number of items owned by the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Returns `true` when the store holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Returns the number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    fn notify_observers(&self) {
        let mut observers = self.observers.borrow_mut();
        debug!(observers = observers.len(), "notifying store observers");
        for observer in observers.iter_mut() {
            observer.notify(self.snapshot());
        }
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new(DefaultClock)
    }
}

/// Safe to format from inside an observer: the observer list is locked
/// while notifying, so its size is then shown as `"<notifying>"`.
impl fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("ProjectStore");
        debug.field("items", &self.items);
        match self.observers.try_borrow() {
            Ok(observers) => debug.field("observers", &observers.len()),
            Err(_) => debug.field("observers", &"<notifying>"),
        };
        debug.finish_non_exhaustive()
    }
}
