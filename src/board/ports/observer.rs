//! Observer port notified by the store after every mutation.

use crate::board::domain::WorkItem;

/// Independent copy of the store's item sequence, in insertion order.
///
/// Observers may keep or reshape it freely; it never aliases store state.
pub type Snapshot = Vec<WorkItem>;

/// Receives a fresh snapshot after every store mutation.
///
/// Any `FnMut(Snapshot)` closure is an observer. Implementations must not
/// call back into the store's mutating operations while being notified.
pub trait StoreObserver {
    /// Handles one notification.
    fn notify(&mut self, snapshot: Snapshot);
}

impl<F> StoreObserver for F
where
    F: FnMut(Snapshot),
{
    fn notify(&mut self, snapshot: Snapshot) {
        self(snapshot);
    }
}
