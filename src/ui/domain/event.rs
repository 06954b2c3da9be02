//! Events dispatched through the host document.

use std::rc::Rc;

use super::{DataTransfer, NodeId};

/// Event types the board listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Form submission.
    Submit,
    /// A drag begins at its source.
    DragStart,
    /// A drag ends at its source, whether dropped or not.
    DragEnd,
    /// The pointer moves over a potential target.
    DragOver,
    /// The pointer leaves a potential target.
    DragLeave,
    /// The payload is released over an accepting target.
    Drop,
}

impl EventKind {
    /// Returns the DOM event name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::DragStart => "dragstart",
            Self::DragEnd => "dragend",
            Self::DragOver => "dragover",
            Self::DragLeave => "dragleave",
            Self::Drop => "drop",
        }
    }
}

/// Listener registered on an element.
///
/// Listeners capture whatever receiver they need when they are built; the
/// document invokes them with the event only.
pub type EventListener = Rc<dyn Fn(&mut DomEvent)>;

/// A single event travelling from its target up through its ancestors.
#[derive(Debug, Clone)]
pub struct DomEvent {
    kind: EventKind,
    target: Option<NodeId>,
    current_target: Option<NodeId>,
    default_prevented: bool,
    propagation_stopped: bool,
    data_transfer: Option<DataTransfer>,
}

impl DomEvent {
    /// Creates an undispatched event.
    #[must_use]
    pub const fn new(kind: EventKind) -> Self {
        Self {
            kind,
            target: None,
            current_target: None,
            default_prevented: false,
            propagation_stopped: false,
            data_transfer: None,
        }
    }

    /// Attaches a drag payload.
    #[must_use]
    pub fn with_data_transfer(mut self, data_transfer: DataTransfer) -> Self {
        self.data_transfer = Some(data_transfer);
        self
    }

    /// Returns the event type.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        self.kind
    }

    /// Returns the element the event was dispatched to.
    #[must_use]
    pub const fn target(&self) -> Option<NodeId> {
        self.target
    }

    /// Returns the element whose listeners are currently running.
    #[must_use]
    pub const fn current_target(&self) -> Option<NodeId> {
        self.current_target
    }

    /// Records the dispatch target. Called by document implementations.
    pub const fn set_target(&mut self, target: NodeId) {
        self.target = Some(target);
    }

    /// Records the element being visited. Called by document implementations.
    pub const fn set_current_target(&mut self, current_target: NodeId) {
        self.current_target = Some(current_target);
    }

    /// Suppresses the default action; for `dragover` this permits a drop.
    pub const fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Returns `true` once a listener suppressed the default action.
    #[must_use]
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Stops the event from reaching further ancestors.
    pub const fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Returns `true` once propagation was stopped.
    #[must_use]
    pub const fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    /// Returns the drag payload, if any.
    #[must_use]
    pub const fn data_transfer(&self) -> Option<&DataTransfer> {
        self.data_transfer.as_ref()
    }

    /// Returns the drag payload for writing, if any.
    pub const fn data_transfer_mut(&mut self) -> Option<&mut DataTransfer> {
        self.data_transfer.as_mut()
    }

    /// Consumes the event and returns its payload.
    #[must_use]
    pub fn into_data_transfer(self) -> Option<DataTransfer> {
        self.data_transfer
    }
}
