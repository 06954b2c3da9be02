//! Entry form component turning validated input into new work items.

use std::rc::Rc;

use tracing::warn;

use super::lifecycle::{
    Component, ComponentContext, ComponentResult, MountSpec, activate, bind, mount, slot,
};
use crate::board::{domain::WorkItemId, services::ProjectStore};
use crate::ui::{
    domain::{DomEvent, EventKind, InsertPosition, NodeId, Selector},
    ports::UserNotifier,
};
use crate::validation::RawFormInput;

const COMPONENT: &str = "form";

/// The three-field entry form.
///
/// On submit the form validates its inputs against the configured
/// [`crate::validation::FormRules`]. Rejected input raises an alert and is
/// left untouched; accepted input becomes a new active item and the inputs
/// are cleared.
pub struct ProjectInput {
    context: ComponentContext,
    store: Rc<ProjectStore>,
    notifier: Rc<dyn UserNotifier>,
    element: NodeId,
    title_input: NodeId,
    description_input: NodeId,
    people_input: NodeId,
}

impl ProjectInput {
    /// Mounts the form as the first child of the configured host.
    ///
    /// # Errors
    ///
    /// Returns [`super::ComponentError`] when the form template, the host or
    /// one of the `#title`, `#description` and `#people` inputs is missing.
    pub fn create(
        context: &ComponentContext,
        store: Rc<ProjectStore>,
        notifier: Rc<dyn UserNotifier>,
    ) -> ComponentResult<Rc<Self>> {
        let document = context.document.as_ref();
        let element = mount(
            document,
            &MountSpec {
                template_id: &context.config.templates.project_input,
                host_id: &context.config.host_id,
                position: InsertPosition::AfterBegin,
                element_id: Some(&context.config.form_element_id),
            },
        )?;
        let title_input = slot(document, COMPONENT, element, Selector::Id("title"))?;
        let description_input = slot(document, COMPONENT, element, Selector::Id("description"))?;
        let people_input = slot(document, COMPONENT, element, Selector::Id("people"))?;

        activate(Self {
            context: context.clone(),
            store,
            notifier,
            element,
            title_input,
            description_input,
            people_input,
        })
    }

    /// Writes values into the three inputs, as a user typing would.
    ///
    /// # Errors
    ///
    /// Returns [`super::ComponentError`] when the document rejects a write.
    pub fn fill(&self, input: &RawFormInput) -> ComponentResult<()> {
        let document = self.context.document.as_ref();
        document.set_value(self.title_input, &input.title)?;
        document.set_value(self.description_input, &input.description)?;
        document.set_value(self.people_input, &input.people)?;
        Ok(())
    }

    /// Reads the current input values.
    #[must_use]
    pub fn read_input(&self) -> RawFormInput {
        let document = self.context.document.as_ref();
        RawFormInput::new(
            document.value(self.title_input).unwrap_or_default(),
            document.value(self.description_input).unwrap_or_default(),
            document.value(self.people_input).unwrap_or_default(),
        )
    }

    /// Validates the inputs and creates an item when they pass.
    ///
    /// Returns the new item's id, or `None` when the input was rejected and
    /// the user alerted.
    ///
    /// # Errors
    ///
    /// Returns [`super::ComponentError`] when the inputs cannot be cleared.
    pub fn submit(&self) -> ComponentResult<Option<WorkItemId>> {
        let input = self.read_input();
        let Some(draft) = self.context.config.form_rules.evaluate(&input) else {
            warn!(?input, "entry form input rejected");
            self.notifier.alert(&self.context.config.invalid_input_message);
            return Ok(None);
        };

        let id = self
            .store
            .create(draft.title, draft.description, draft.people);
        self.clear_inputs()?;
        Ok(Some(id))
    }

    /// Empties all three inputs.
    ///
    /// # Errors
    ///
    /// Returns [`super::ComponentError`] when the document rejects a write.
    pub fn clear_inputs(&self) -> ComponentResult<()> {
        self.fill(&RawFormInput::default())
    }

    fn submit_handler(&self, event: &mut DomEvent) {
        event.prevent_default();
        if let Err(err) = self.submit() {
            warn!(error = %err, "entry form submission failed");
        }
    }
}

impl Component for ProjectInput {
    fn element(&self) -> NodeId {
        self.element
    }

    fn configure(self: &Rc<Self>) -> ComponentResult<()> {
        self.context.document.add_event_listener(
            self.element,
            EventKind::Submit,
            bind(self, Self::submit_handler),
        )?;
        Ok(())
    }

    fn render_content(&self) -> ComponentResult<()> {
        Ok(())
    }
}
