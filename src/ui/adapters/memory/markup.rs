//! Declarative element trees used as templates.

use crate::config::BoardConfig;

/// Element description cloned by [`super::InMemoryDocument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSpec {
    pub(super) tag: String,
    pub(super) id: Option<String>,
    pub(super) classes: Vec<String>,
    pub(super) text: String,
    pub(super) children: Vec<ElementSpec>,
}

impl ElementSpec {
    /// Creates an empty element with the given tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Sets the element id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds a class.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Sets the text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Appends a child element.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }
}

/// Returns the three board templates keyed by the configured ids.
///
/// The form exposes `#title`, `#description` and `#people` inputs, an item
/// exposes `h2`, `h3` and `p`, and a list exposes an `h2` and a `ul`.
#[must_use]
pub fn board_templates(config: &BoardConfig) -> Vec<(String, ElementSpec)> {
    let form = ElementSpec::new("form")
        .with_child(labelled_input("title", "input"))
        .with_child(labelled_input("description", "textarea"))
        .with_child(labelled_input("people", "input"))
        .with_child(ElementSpec::new("button").with_text("ADD PROJECT"));

    let item = ElementSpec::new("li")
        .with_child(ElementSpec::new("h2"))
        .with_child(ElementSpec::new("h3"))
        .with_child(ElementSpec::new("p"));

    let list = ElementSpec::new("section")
        .with_class("projects")
        .with_child(ElementSpec::new("header").with_child(ElementSpec::new("h2")))
        .with_child(ElementSpec::new("ul"));

    vec![
        (config.templates.project_input.clone(), form),
        (config.templates.single_project.clone(), item),
        (config.templates.project_list.clone(), list),
    ]
}

fn labelled_input(id: &str, tag: &str) -> ElementSpec {
    ElementSpec::new("div")
        .with_class("form-control")
        .with_child(ElementSpec::new("label").with_text(id.to_ascii_uppercase()))
        .with_child(ElementSpec::new(tag).with_id(id))
}
