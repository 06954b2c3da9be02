//! Lane component rendering every item of one status; the drop target.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{debug, error, warn};

use super::item::ProjectItem;
use super::lifecycle::{
    Component, ComponentContext, ComponentResult, MountSpec, activate, bind, mount, slot,
};
use crate::board::{
    domain::{ItemStatus, WorkItem, WorkItemId},
    ports::Snapshot,
    services::ProjectStore,
};
use crate::ui::{
    domain::{DROPPABLE_CLASS, DomEvent, EventKind, InsertPosition, NodeId, PLAIN_TEXT, Selector},
    ports::DropTarget,
};

const COMPONENT: &str = "list";

/// One lane of the board.
///
/// The lane keeps a cached copy of the items in its status, rebuilt in full
/// from every store notification, and re-renders its item components from
/// that cache.
pub struct ProjectList {
    context: ComponentContext,
    store: Rc<ProjectStore>,
    status: ItemStatus,
    element: NodeId,
    heading: NodeId,
    list: NodeId,
    assigned: RefCell<Vec<WorkItem>>,
    items: RefCell<Vec<Rc<ProjectItem>>>,
    render_passes: Cell<usize>,
}

impl ProjectList {
    /// Mounts a lane as the last child of the configured host and subscribes
    /// it to the store.
    ///
    /// # Errors
    ///
    /// Returns [`super::ComponentError`] when the list template, the host,
    /// the `h2` or the `ul` is missing.
    pub fn create(
        context: &ComponentContext,
        store: Rc<ProjectStore>,
        status: ItemStatus,
    ) -> ComponentResult<Rc<Self>> {
        let document = context.document.as_ref();
        let element_id = format!("{status}-projects");
        let element = mount(
            document,
            &MountSpec {
                template_id: &context.config.templates.project_list,
                host_id: &context.config.host_id,
                position: InsertPosition::BeforeEnd,
                element_id: Some(&element_id),
            },
        )?;
        let heading = slot(document, COMPONENT, element, Selector::Tag("h2"))?;
        let list = slot(document, COMPONENT, element, Selector::Tag("ul"))?;

        activate(Self {
            context: context.clone(),
            store,
            status,
            element,
            heading,
            list,
            assigned: RefCell::new(Vec::new()),
            items: RefCell::new(Vec::new()),
            render_passes: Cell::new(0),
        })
    }

    /// Returns the status this lane shows.
    #[must_use]
    pub const fn status(&self) -> ItemStatus {
        self.status
    }

    /// Returns the id given to the lane's `ul`.
    #[must_use]
    pub fn list_element_id(&self) -> String {
        format!("{}-projects-list", self.status)
    }

    /// Returns the lane's `ul`.
    #[must_use]
    pub const fn list_element(&self) -> NodeId {
        self.list
    }

    /// Returns the cached items of this lane in store order.
    #[must_use]
    pub fn assigned_items(&self) -> Vec<WorkItem> {
        self.assigned.borrow().clone()
    }

    /// Returns the item components currently rendered, first child first.
    #[must_use]
    pub fn rendered_items(&self) -> Vec<Rc<ProjectItem>> {
        self.items.borrow().clone()
    }

    /// Returns how many times the lane re-rendered its items.
    #[must_use]
    pub fn render_passes(&self) -> usize {
        self.render_passes.get()
    }

    /// Returns `true` while the lane is marked as a drop zone.
    #[must_use]
    pub fn is_drop_zone_active(&self) -> bool {
        self.context.document.has_class(self.list, DROPPABLE_CLASS)
    }

    /// Rebuilds the cache from a store snapshot and re-renders.
    pub fn refresh(&self, snapshot: Snapshot) {
        self.assign(snapshot);
        if let Err(err) = self.render_projects() {
            error!(lane = %self.status, error = %err, "failed to render lane");
        }
    }

    fn assign(&self, snapshot: Snapshot) {
        *self.assigned.borrow_mut() = snapshot
            .into_iter()
            .filter(|item| item.status() == self.status)
            .collect();
    }

    /// Replaces every rendered item with a fresh component per cached item.
    ///
    /// Either every cached item is rendered or none is: on failure the list
    /// is emptied again before the error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`super::ComponentError`] when an item cannot be mounted.
    pub fn render_projects(&self) -> ComponentResult<()> {
        let document = self.context.document.as_ref();
        document.clear_children(self.list)?;

        match self.mount_items() {
            Ok(rendered) => {
                *self.items.borrow_mut() = rendered;
                self.render_passes.set(self.render_passes.get() + 1);
                debug!(lane = %self.status, items = self.items.borrow().len(), "lane rendered");
                Ok(())
            }
            Err(err) => {
                self.items.borrow_mut().clear();
                document.clear_children(self.list)?;
                Err(err)
            }
        }
    }

    fn mount_items(&self) -> ComponentResult<Vec<Rc<ProjectItem>>> {
        let host_id = self.list_element_id();
        let mut rendered = Vec::new();
        for item in self.assigned.borrow().iter() {
            let component = ProjectItem::create(&self.context, &host_id, item.clone())?;
            // Items are inserted first-child, so the newest ends up on top.
            rendered.insert(0, component);
        }
        Ok(rendered)
    }

    fn set_drop_zone(&self, active: bool) {
        let document = self.context.document.as_ref();
        let result = if active {
            document.add_class(self.list, DROPPABLE_CLASS)
        } else {
            document.remove_class(self.list, DROPPABLE_CLASS)
        };
        if let Err(err) = result {
            error!(lane = %self.status, error = %err, "failed to toggle drop zone");
        }
    }
}

impl DropTarget for ProjectList {
    fn drag_over(&self, event: &mut DomEvent) {
        let accepts = event
            .data_transfer()
            .and_then(|transfer| transfer.first_type())
            == Some(PLAIN_TEXT);
        if accepts {
            event.prevent_default();
            self.set_drop_zone(true);
        }
    }

    fn drop(&self, event: &mut DomEvent) {
        self.set_drop_zone(false);

        let Some(payload) = event
            .data_transfer()
            .and_then(|transfer| transfer.get_data(PLAIN_TEXT))
        else {
            warn!(lane = %self.status, "drop without a readable payload");
            return;
        };
        match payload.parse::<WorkItemId>() {
            Ok(id) => {
                self.store.transition(id, self.status);
            }
            Err(err) => warn!(lane = %self.status, error = %err, "ignoring malformed drop payload"),
        }
    }

    fn drag_leave(&self, _event: &mut DomEvent) {
        self.set_drop_zone(false);
    }
}

impl Component for ProjectList {
    fn element(&self) -> NodeId {
        self.element
    }

    fn configure(self: &Rc<Self>) -> ComponentResult<()> {
        let document = &self.context.document;
        document.add_event_listener(
            self.element,
            EventKind::DragOver,
            bind(self, <Self as DropTarget>::drag_over),
        )?;
        document.add_event_listener(
            self.element,
            EventKind::DragLeave,
            bind(self, <Self as DropTarget>::drag_leave),
        )?;
        document.add_event_listener(
            self.element,
            EventKind::Drop,
            bind(self, <Self as DropTarget>::drop),
        )?;

        let lane = Rc::downgrade(self);
        self.store.add_observer(move |snapshot: Snapshot| {
            if let Some(lane) = lane.upgrade() {
                lane.refresh(snapshot);
            }
        });
        Ok(())
    }

    fn render_content(&self) -> ComponentResult<()> {
        let document = self.context.document.as_ref();
        document.set_element_id(self.list, &self.list_element_id())?;
        document.set_text(
            self.heading,
            &format!("{} PROJECTS", self.status.as_str().to_ascii_uppercase()),
        )?;
        // Start from whatever the store already holds.
        self.assign(self.store.snapshot());
        self.render_projects()
    }
}
