//! Port contracts for the UI layer.
//!
//! The host document and the notifier are external collaborators; the drag
//! traits describe what a component must offer to take part in a drag.

pub mod document;
pub mod drag;
pub mod notifier;

pub use document::{DocumentError, DocumentResult, HostDocument};
pub use drag::{DragSource, DropTarget};
pub use notifier::UserNotifier;
