//! Services driving the UI layer.

mod drag;

pub use drag::{DragError, DragResult, DragSession, DragState, DropOutcome};
