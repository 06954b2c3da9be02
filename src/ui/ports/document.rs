//! Host document port.
//!
//! Everything the components need from the page: cloning templates,
//! locating hosts and slots, writing text and classes, and routing events.
//! Markup structure stays opaque beyond the slots components look up.

use crate::ui::domain::{DomEvent, EventKind, EventListener, InsertPosition, NodeId, Selector};
use thiserror::Error;

/// Result type for host document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Page contract used by components.
///
/// All methods take `&self`; implementations use interior mutability so
/// listeners may call back into the document while an event is being
/// dispatched.
pub trait HostDocument {
    /// Clones the root element of the named template into a detached
    /// subtree and returns its root.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::TemplateNotFound`] when no such template
    /// exists.
    fn instantiate_template(&self, template_id: &str) -> DocumentResult<NodeId>;

    /// Returns `true` when a template is registered under the id.
    fn has_template(&self, template_id: &str) -> bool;

    /// Returns `true` while the handle refers to a live element, attached
    /// or not.
    fn contains(&self, node: NodeId) -> bool;

    /// Finds an element attached to the page by its id.
    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    /// Returns the id of an element, if it has one.
    fn element_id(&self, node: NodeId) -> Option<String>;

    /// Assigns an id to an element.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::UnknownNode`] for foreign handles.
    fn set_element_id(&self, node: NodeId, id: &str) -> DocumentResult<()>;

    /// Inserts `node` as the first or last child of `host`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::UnknownNode`] for foreign handles.
    fn insert_adjacent(
        &self,
        host: NodeId,
        position: InsertPosition,
        node: NodeId,
    ) -> DocumentResult<()>;

    /// Finds the first descendant of `root` matching `selector`, depth first.
    fn query_selector(&self, root: NodeId, selector: Selector<'_>) -> Option<NodeId>;

    /// Returns the direct children of `node` in order.
    fn children(&self, node: NodeId) -> Vec<NodeId>;

    /// Removes every child of `node` together with their subtrees and
    /// listeners. Handles to removed elements become unknown.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::UnknownNode`] for foreign handles.
    fn clear_children(&self, node: NodeId) -> DocumentResult<()>;

    /// Removes `node` and its subtree, detaching it first if attached.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::UnknownNode`] for foreign handles.
    fn remove(&self, node: NodeId) -> DocumentResult<()>;

    /// Returns the text content of an element.
    fn text(&self, node: NodeId) -> Option<String>;

    /// Replaces the text content of an element.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::UnknownNode`] for foreign handles.
    fn set_text(&self, node: NodeId, text: &str) -> DocumentResult<()>;

    /// Returns the current value of an input element.
    fn value(&self, node: NodeId) -> Option<String>;

    /// Replaces the value of an input element.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::UnknownNode`] for foreign handles.
    fn set_value(&self, node: NodeId, value: &str) -> DocumentResult<()>;

    /// Adds a class to an element.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::UnknownNode`] for foreign handles.
    fn add_class(&self, node: NodeId, class: &str) -> DocumentResult<()>;

    /// Removes a class from an element.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::UnknownNode`] for foreign handles.
    fn remove_class(&self, node: NodeId, class: &str) -> DocumentResult<()>;

    /// Returns `true` when the element carries the class.
    fn has_class(&self, node: NodeId, class: &str) -> bool;

    /// Registers a listener for one event type on an element.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::UnknownNode`] for foreign handles.
    fn add_event_listener(
        &self,
        node: NodeId,
        kind: EventKind,
        listener: EventListener,
    ) -> DocumentResult<()>;

    /// Dispatches `event` to `target` and bubbles it through its ancestors.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::UnknownNode`] for foreign handles.
    fn dispatch(&self, target: NodeId, event: &mut DomEvent) -> DocumentResult<()>;
}

/// Errors returned by host document implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DocumentError {
    /// No template is registered under the id.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// The handle does not belong to this document, or its element was
    /// removed.
    #[error("unknown node: {0}")]
    UnknownNode(NodeId),
}
