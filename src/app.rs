//! Composition root wiring the store, the entry form and both lanes.

use std::rc::Rc;

use tracing::info;

use crate::board::{
    domain::{ItemStatus, WorkItemId},
    services::ProjectStore,
};
use crate::config::BoardConfig;
use crate::ui::{
    components::{
        ComponentContext, ComponentResult, ProjectInput, ProjectItem, ProjectList,
        require_templates,
    },
    domain::NodeId,
    ports::{HostDocument, UserNotifier},
    services::DragSession,
};

/// A running board.
///
/// Owns the single [`ProjectStore`] and the three top-level components. The
/// form is mounted first, then the active lane, then the finished lane, so
/// the host ends up holding them in that order.
pub struct BoardApp {
    document: Rc<dyn HostDocument>,
    store: Rc<ProjectStore>,
    form: Rc<ProjectInput>,
    active: Rc<ProjectList>,
    finished: Rc<ProjectList>,
}

impl BoardApp {
    /// Builds the board on `document` with an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ui::components::ComponentError`] when a template,
    /// the host or a slot is missing. The board cannot run in that case.
    pub fn start(
        document: Rc<dyn HostDocument>,
        notifier: Rc<dyn UserNotifier>,
        config: BoardConfig,
    ) -> ComponentResult<Self> {
        Self::start_with_store(document, notifier, config, Rc::new(ProjectStore::default()))
    }

    /// Builds the board on `document` around an existing store.
    ///
    /// Items already in the store are rendered immediately.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ui::components::ComponentError`] when a template,
    /// the host or a slot is missing, or when the form rules admit a zero
    /// head count. Templates, item slots included, are checked before
    /// anything is mounted.
    pub fn start_with_store(
        document: Rc<dyn HostDocument>,
        notifier: Rc<dyn UserNotifier>,
        config: BoardConfig,
        store: Rc<ProjectStore>,
    ) -> ComponentResult<Self> {
        config.form_rules.check()?;
        require_templates(document.as_ref(), &config.templates)?;
        let context = ComponentContext::new(Rc::clone(&document), config);
        ProjectItem::verify_template(&context)?;
        let form = ProjectInput::create(&context, Rc::clone(&store), notifier)?;
        let active = ProjectList::create(&context, Rc::clone(&store), ItemStatus::Active)?;
        let finished = ProjectList::create(&context, Rc::clone(&store), ItemStatus::Finished)?;
        info!(
            host_id = %context.config.host_id,
            items = store.len(),
            "board started"
        );

        Ok(Self {
            document,
            store,
            form,
            active,
            finished,
        })
    }

    /// Returns the shared store.
    #[must_use]
    pub const fn store(&self) -> &Rc<ProjectStore> {
        &self.store
    }

    /// Returns the entry form.
    #[must_use]
    pub const fn form(&self) -> &Rc<ProjectInput> {
        &self.form
    }

    /// Returns the lane showing `status`.
    #[must_use]
    pub const fn lane(&self, status: ItemStatus) -> &Rc<ProjectList> {
        match status {
            ItemStatus::Active => &self.active,
            ItemStatus::Finished => &self.finished,
        }
    }

    /// Returns the active lane.
    #[must_use]
    pub const fn active(&self) -> &Rc<ProjectList> {
        &self.active
    }

    /// Returns the finished lane.
    #[must_use]
    pub const fn finished(&self) -> &Rc<ProjectList> {
        &self.finished
    }

    /// Returns the page the board renders into.
    #[must_use]
    pub const fn document(&self) -> &Rc<dyn HostDocument> {
        &self.document
    }

    /// Opens a drag session over the board's page.
    #[must_use]
    pub fn drag_session(&self) -> DragSession {
        DragSession::new(Rc::clone(&self.document))
    }

    /// Finds the rendered element of a work item.
    #[must_use]
    pub fn item_element(&self, id: WorkItemId) -> Option<NodeId> {
        self.document.element_by_id(&id.to_string())
    }
}
