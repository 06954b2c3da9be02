//! Shared construction sequence and the component capability set.

use std::rc::Rc;

use thiserror::Error;
use tracing::debug;

use crate::config::{BoardConfig, TemplateIds};
use crate::ui::{
    domain::{DomEvent, EventListener, InsertPosition, NodeId, Selector},
    ports::{DocumentError, HostDocument},
};
use crate::validation::FormRulesError;

/// Result type for component construction and rendering.
pub type ComponentResult<T> = Result<T, ComponentError>;

/// Errors raised while building or rendering components.
///
/// Construction errors are fatal: the board cannot start without its
/// templates, host or slots.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ComponentError {
    /// The named template does not exist.
    #[error("template '{0}' not found")]
    TemplateNotFound(String),

    /// The named host element does not exist.
    #[error("host element '{0}' not found")]
    HostNotFound(String),

    /// A child slot the component relies on is missing from its template.
    #[error("{component} template has no '{selector}' element")]
    SlotNotFound {
        /// Component looking for the slot.
        component: &'static str,
        /// Selector that matched nothing.
        selector: String,
    },

    /// The configured entry form rules are unusable.
    #[error("invalid form rules: {0}")]
    InvalidRules(#[from] FormRulesError),

    /// The document rejected an operation.
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Document and configuration handed to every component.
#[derive(Clone)]
pub struct ComponentContext {
    /// Page the components render into.
    pub document: Rc<dyn HostDocument>,
    /// Shared board configuration.
    pub config: Rc<BoardConfig>,
}

impl ComponentContext {
    /// Bundles a document with a configuration.
    #[must_use]
    pub fn new(document: Rc<dyn HostDocument>, config: BoardConfig) -> Self {
        Self {
            document,
            config: Rc::new(config),
        }
    }
}

/// Where and how a component's element is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountSpec<'a> {
    /// Template to clone.
    pub template_id: &'a str,
    /// Element receiving the clone.
    pub host_id: &'a str,
    /// First or last child of the host.
    pub position: InsertPosition,
    /// Id assigned to the clone's root, if any.
    pub element_id: Option<&'a str>,
}

/// Instantiates, identifies and attaches a component element.
///
/// # Errors
///
/// Returns [`ComponentError::TemplateNotFound`] or
/// [`ComponentError::HostNotFound`] when the markup is incomplete.
pub fn mount(document: &dyn HostDocument, spec: &MountSpec<'_>) -> ComponentResult<NodeId> {
    let element = instantiate(document, spec.template_id)?;

    if let Some(element_id) = spec.element_id {
        document.set_element_id(element, element_id)?;
    }

    let host = document
        .element_by_id(spec.host_id)
        .ok_or_else(|| ComponentError::HostNotFound(spec.host_id.to_owned()))?;
    document.insert_adjacent(host, spec.position, element)?;

    debug!(
        template_id = spec.template_id,
        host_id = spec.host_id,
        element_id = spec.element_id,
        "component mounted"
    );
    Ok(element)
}

/// Clones a template into a detached element.
///
/// # Errors
///
/// Returns [`ComponentError::TemplateNotFound`] when the template is absent.
pub fn instantiate(document: &dyn HostDocument, template_id: &str) -> ComponentResult<NodeId> {
    document
        .instantiate_template(template_id)
        .map_err(|err| match err {
            DocumentError::TemplateNotFound(id) => ComponentError::TemplateNotFound(id),
            other => ComponentError::Document(other),
        })
}

/// Checks that every board template exists, in mounting order.
///
/// Item templates are only cloned once the store has content, so a board
/// must look for them up front rather than on the first render.
///
/// # Errors
///
/// Returns [`ComponentError::TemplateNotFound`] naming the first missing
/// template.
pub fn require_templates(
    document: &dyn HostDocument,
    templates: &TemplateIds,
) -> ComponentResult<()> {
    templates
        .all()
        .into_iter()
        .find(|template_id| !document.has_template(template_id))
        .map_or(Ok(()), |missing| {
            Err(ComponentError::TemplateNotFound(missing.to_owned()))
        })
}

/// Finds a required child of a component element.
///
/// # Errors
///
/// Returns [`ComponentError::SlotNotFound`] when nothing matches.
pub fn slot(
    document: &dyn HostDocument,
    component: &'static str,
    root: NodeId,
    selector: Selector<'_>,
) -> ComponentResult<NodeId> {
    document
        .query_selector(root, selector)
        .ok_or_else(|| ComponentError::SlotNotFound {
            component,
            selector: selector.to_string(),
        })
}

/// Capabilities every concrete component supplies.
pub trait Component: 'static {
    /// Returns the component's root element.
    fn element(&self) -> NodeId;

    /// Wires event listeners and store subscriptions.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError`] when a listener cannot be registered.
    fn configure(self: &Rc<Self>) -> ComponentResult<()>;

    /// Populates text and attributes.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError`] when the document rejects a write.
    fn render_content(&self) -> ComponentResult<()>;
}

/// Shares a mounted component and runs `configure` then `render_content`.
///
/// # Errors
///
/// Propagates the first error from either step.
pub fn activate<C: Component>(component: C) -> ComponentResult<Rc<C>> {
    let component = Rc::new(component);
    component.configure()?;
    component.render_content()?;
    Ok(component)
}

/// Builds a listener that calls `handler` on the component it was bound to.
///
/// Only a weak reference is kept, so listeners never keep their component
/// alive; once it is dropped the listener does nothing.
pub fn bind<C: 'static>(component: &Rc<C>, handler: fn(&C, &mut DomEvent)) -> EventListener {
    let receiver = Rc::downgrade(component);
    Rc::new(move |event: &mut DomEvent| {
        if let Some(component) = receiver.upgrade() {
            handler(&component, event);
        }
    })
}
