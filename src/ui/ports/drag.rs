//! Capabilities of the two drag roles.

use crate::ui::domain::DomEvent;

/// A component that can start a drag carrying a work item id.
pub trait DragSource {
    /// Writes the payload and allowed effect.
    fn drag_start(&self, event: &mut DomEvent);

    /// Observes the end of the drag. Never mutates board state.
    fn drag_end(&self, event: &mut DomEvent);
}

/// A component that can accept a dragged work item.
pub trait DropTarget {
    /// Accepts the drag when the payload type matches and marks the zone.
    fn drag_over(&self, event: &mut DomEvent);

    /// Turns the payload into a status transition.
    fn drop(&self, event: &mut DomEvent);

    /// Clears the drop zone mark.
    fn drag_leave(&self, event: &mut DomEvent);
}
