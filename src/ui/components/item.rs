//! Component rendering a single work item; the drag source.

use std::rc::Rc;

use tracing::debug;

use super::lifecycle::{
    Component, ComponentContext, ComponentResult, MountSpec, activate, bind, instantiate, mount,
    slot,
};
use crate::board::domain::WorkItem;
use crate::ui::{
    domain::{DomEvent, DropEffect, EventKind, InsertPosition, NodeId, PLAIN_TEXT, Selector},
    ports::{DragSource, HostDocument},
};

const COMPONENT: &str = "item";

/// Renders title, assignment and description of one work item.
pub struct ProjectItem {
    context: ComponentContext,
    element: NodeId,
    item: WorkItem,
}

impl ProjectItem {
    /// Mounts a new item as the first child of `host_id`.
    ///
    /// The element id is the item id.
    ///
    /// # Errors
    ///
    /// Returns [`super::ComponentError`] when the item template, the host or
    /// one of the text slots is missing.
    pub fn create(
        context: &ComponentContext,
        host_id: &str,
        item: WorkItem,
    ) -> ComponentResult<Rc<Self>> {
        let element_id = item.id().to_string();
        let element = mount(
            context.document.as_ref(),
            &MountSpec {
                template_id: &context.config.templates.single_project,
                host_id,
                position: InsertPosition::AfterBegin,
                element_id: Some(&element_id),
            },
        )?;
        activate(Self {
            context: context.clone(),
            element,
            item,
        })
    }

    /// Clones the item template once to confirm its text slots exist.
    ///
    /// The clone is removed again whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`super::ComponentError`] when the template or a slot is
    /// missing.
    pub fn verify_template(context: &ComponentContext) -> ComponentResult<()> {
        let document = context.document.as_ref();
        let sample = instantiate(document, &context.config.templates.single_project)?;
        let slots = text_slots(document, sample);
        document.remove(sample)?;
        slots.map(|_| ())
    }

    /// Returns the rendered work item.
    #[must_use]
    pub const fn item(&self) -> &WorkItem {
        &self.item
    }

    /// Returns `"{n} person(s) assigned"`.
    #[must_use]
    pub fn assignment_text(&self) -> String {
        format!("{} assigned", self.item.people_label())
    }
}

impl DragSource for ProjectItem {
    fn drag_start(&self, event: &mut DomEvent) {
        let Some(transfer) = event.data_transfer_mut() else {
            debug!(item_id = %self.item.id(), "dragstart without a transfer payload");
            return;
        };
        transfer.set_data(PLAIN_TEXT, self.item.id().to_string());
        transfer.set_effect_allowed(DropEffect::Move);
        debug!(item_id = %self.item.id(), "drag started");
    }

    fn drag_end(&self, _event: &mut DomEvent) {
        debug!(item_id = %self.item.id(), "drag ended");
    }
}

impl Component for ProjectItem {
    fn element(&self) -> NodeId {
        self.element
    }

    fn configure(self: &Rc<Self>) -> ComponentResult<()> {
        let document = &self.context.document;
        document.add_event_listener(
            self.element,
            EventKind::DragStart,
            bind(self, <Self as DragSource>::drag_start),
        )?;
        document.add_event_listener(
            self.element,
            EventKind::DragEnd,
            bind(self, <Self as DragSource>::drag_end),
        )?;
        Ok(())
    }

    fn render_content(&self) -> ComponentResult<()> {
        let document = self.context.document.as_ref();
        let [title, assignment, description] = text_slots(document, self.element)?;

        document.set_text(title, self.item.title())?;
        document.set_text(assignment, &self.assignment_text())?;
        document.set_text(description, self.item.description())?;
        Ok(())
    }
}

/// Title, assignment and description slots, in that order.
fn text_slots(document: &dyn HostDocument, root: NodeId) -> ComponentResult<[NodeId; 3]> {
    Ok([
        slot(document, COMPONENT, root, Selector::Tag("h2"))?,
        slot(document, COMPONENT, root, Selector::Tag("h3"))?,
        slot(document, COMPONENT, root, Selector::Tag("p"))?,
    ])
}
