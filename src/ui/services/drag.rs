//! Drag session driving the browser's drag-and-drop event sequence.
//!
//! A session plays the part of the pointer. It dispatches `dragstart` to the
//! source, `dragover` and `dragleave` as the pointer moves between targets,
//! and on release either `drop` on the last target that accepted the drag
//! or nothing. `dragend` always closes the sequence at the source.
//!
//! The transfer follows the browser's access modes: writable during
//! `dragstart`, protected (types only) during `dragover`, `dragleave` and
//! `dragend`, and read-only during `drop`.

use std::mem;
use std::rc::Rc;

use thiserror::Error;
use tracing::debug;

use crate::ui::{
    domain::{DataTransfer, DomEvent, EventKind, NodeId, TransferMode},
    ports::{DocumentError, HostDocument},
};

/// Result type for drag session operations.
pub type DragResult<T> = Result<T, DragError>;

/// Errors raised by [`DragSession`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DragError {
    /// A drag is already in progress.
    #[error("a drag is already in progress")]
    AlreadyDragging,

    /// The operation needs a drag in progress.
    #[error("no drag in progress")]
    NotDragging,

    /// The document rejected a dispatch.
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Where the session is in the drag sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag started at `source` and has not been released.
    Dragging {
        /// Element the drag started on.
        source: NodeId,
        /// Payload written during `dragstart`.
        transfer: DataTransfer,
        /// Element the pointer is currently over.
        over: Option<NodeId>,
        /// Whether the last `dragover` was accepted.
        accepted: bool,
    },
}

/// How a drag ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The payload was dropped on `target`.
    Dropped {
        /// Element the `drop` event was dispatched to.
        target: NodeId,
    },
    /// The drag ended without a drop.
    Cancelled,
}

/// Pointer-side driver of a single drag at a time.
pub struct DragSession {
    document: Rc<dyn HostDocument>,
    state: DragState,
}

impl DragSession {
    /// Creates an idle session over a document.
    #[must_use]
    pub fn new(document: Rc<dyn HostDocument>) -> Self {
        Self {
            document,
            state: DragState::Idle,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &DragState {
        &self.state
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Starts a drag at `source` and returns a copy of the payload it wrote.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::AlreadyDragging`] while another drag is active,
    /// or [`DragError::Document`] when `source` is unknown.
    pub fn start(&mut self, source: NodeId) -> DragResult<DataTransfer> {
        if self.is_dragging() {
            return Err(DragError::AlreadyDragging);
        }

        let mut event = DomEvent::new(EventKind::DragStart).with_data_transfer(DataTransfer::new());
        self.document.dispatch(source, &mut event)?;
        let mut transfer = event.into_data_transfer().unwrap_or_default();
        transfer.set_mode(TransferMode::Protected);
        debug!(%source, types = ?transfer.types(), "drag started");

        self.state = DragState::Dragging {
            source,
            transfer: transfer.clone(),
            over: None,
            accepted: false,
        };
        Ok(transfer)
    }

    /// Moves the pointer over `target` and returns whether it accepted.
    ///
    /// Leaving a different previous target dispatches `dragleave` to it
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::NotDragging`] outside a drag, or
    /// [`DragError::Document`] when `target` is unknown.
    pub fn over(&mut self, target: NodeId) -> DragResult<bool> {
        let DragState::Dragging {
            transfer,
            over,
            accepted,
            ..
        } = &mut self.state
        else {
            return Err(DragError::NotDragging);
        };

        if let Some(previous) = over.filter(|previous| *previous != target) {
            dispatch_protected(self.document.as_ref(), previous, EventKind::DragLeave, transfer)?;
        }

        let event = dispatch_protected(self.document.as_ref(), target, EventKind::DragOver, transfer)?;
        *over = Some(target);
        *accepted = event.default_prevented();
        debug!(%target, accepted = *accepted, "drag over");
        Ok(*accepted)
    }

    /// Moves the pointer off the current target.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::NotDragging`] outside a drag, or
    /// [`DragError::Document`] when the dispatch fails.
    pub fn leave(&mut self) -> DragResult<()> {
        let DragState::Dragging {
            transfer,
            over,
            accepted,
            ..
        } = &mut self.state
        else {
            return Err(DragError::NotDragging);
        };

        if let Some(previous) = over.take() {
            dispatch_protected(self.document.as_ref(), previous, EventKind::DragLeave, transfer)?;
        }
        *accepted = false;
        Ok(())
    }

    /// Releases the pointer.
    ///
    /// Drops on the current target when its last `dragover` was accepted;
    /// otherwise the target sees `dragleave` and the drag is cancelled.
    /// Either way the source receives `dragend`, unless the drop re-rendered
    /// it away, and the session is idle afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::NotDragging`] outside a drag, or
    /// [`DragError::Document`] when a dispatch fails.
    pub fn release(&mut self) -> DragResult<DropOutcome> {
        let DragState::Dragging {
            source,
            transfer,
            over,
            accepted,
        } = mem::take(&mut self.state)
        else {
            return Err(DragError::NotDragging);
        };

        let document = self.document.as_ref();
        let outcome = match over {
            Some(target) if accepted => {
                let mut event = DomEvent::new(EventKind::Drop)
                    .with_data_transfer(transfer.with_mode(TransferMode::ReadOnly));
                document.dispatch(target, &mut event)?;
                DropOutcome::Dropped { target }
            }
            Some(target) => {
                dispatch_protected(document, target, EventKind::DragLeave, &transfer)?;
                DropOutcome::Cancelled
            }
            None => DropOutcome::Cancelled,
        };

        end_drag(document, source, &transfer)?;
        debug!(%source, ?outcome, "drag released");
        Ok(outcome)
    }

    /// Aborts the drag without dropping, as pressing escape would.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::NotDragging`] outside a drag, or
    /// [`DragError::Document`] when a dispatch fails.
    pub fn cancel(&mut self) -> DragResult<()> {
        let DragState::Dragging {
            source,
            transfer,
            over,
            ..
        } = mem::take(&mut self.state)
        else {
            return Err(DragError::NotDragging);
        };

        let document = self.document.as_ref();
        if let Some(target) = over {
            dispatch_protected(document, target, EventKind::DragLeave, &transfer)?;
        }
        end_drag(document, source, &transfer)?;
        debug!(%source, "drag cancelled");
        Ok(())
    }
}

/// Sends `dragend` to the source if it still exists. A successful drop
/// re-renders both lanes, which removes the element that started the drag.
fn end_drag(
    document: &dyn HostDocument,
    source: NodeId,
    transfer: &DataTransfer,
) -> DragResult<()> {
    if document.contains(source) {
        dispatch_protected(document, source, EventKind::DragEnd, transfer)?;
    } else {
        debug!(%source, "drag source removed before dragend");
    }
    Ok(())
}

fn dispatch_protected(
    document: &dyn HostDocument,
    target: NodeId,
    kind: EventKind,
    transfer: &DataTransfer,
) -> DragResult<DomEvent> {
    let mut event =
        DomEvent::new(kind).with_data_transfer(transfer.with_mode(TransferMode::Protected));
    document.dispatch(target, &mut event)?;
    Ok(event)
}
