//! Arena-backed host document.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use tracing::trace;

use super::markup::{ElementSpec, board_templates};
use crate::config::BoardConfig;
use crate::ui::{
    domain::{DomEvent, EventKind, EventListener, InsertPosition, NodeId, Selector},
    ports::{DocumentError, DocumentResult, HostDocument},
};

/// Single-threaded document keeping every node in an arena.
///
/// Removed subtrees give their slots back to the arena, so repeated
/// re-renders do not grow it. Each reuse bumps the slot's generation, which
/// turns handles to the removed element into
/// [`DocumentError::UnknownNode`] rather than aliases of the new one.
pub struct InMemoryDocument {
    state: RefCell<DocumentState>,
}

#[derive(Default)]
struct DocumentState {
    slots: Vec<Slot>,
    free: Vec<usize>,
    templates: HashMap<String, ElementSpec>,
    listeners: HashMap<NodeId, Vec<(EventKind, EventListener)>>,
}

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

#[derive(Debug, Default)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: BTreeSet<String>,
    text: String,
    value: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl DocumentState {
    fn node(&self, id: NodeId) -> DocumentResult<&Node> {
        self.slots
            .get(id.index())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_ref())
            .ok_or(DocumentError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> DocumentResult<&mut Node> {
        self.slots
            .get_mut(id.index())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_mut())
            .ok_or(DocumentError::UnknownNode(id))
    }

    fn push(&mut self, node: Node) -> NodeId {
        if let Some(index) = self.free.pop()
            && let Some(slot) = self.slots.get_mut(index)
        {
            slot.node = Some(node);
            return NodeId::new(index).with_generation(slot.generation);
        }
        let id = NodeId::new(self.slots.len());
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        id
    }

    /// Frees `root` and its descendants along with their listeners.
    fn release(&mut self, root: NodeId) {
        let mut doomed = self.descendants(root);
        doomed.push(root);
        for id in doomed {
            self.listeners.remove(&id);
            let Some(slot) = self
                .slots
                .get_mut(id.index())
                .filter(|slot| slot.generation == id.generation())
            else {
                continue;
            };
            if slot.node.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(id.index());
            }
        }
    }

    fn live_nodes(&self) -> usize {
        self.slots.len().saturating_sub(self.free.len())
    }

    /// Builds a detached subtree from a template description.
    fn build(&mut self, spec: &ElementSpec, parent: Option<NodeId>) -> NodeId {
        let id = self.push(Node {
            tag: spec.tag.clone(),
            id: spec.id.clone(),
            classes: spec.classes.iter().cloned().collect(),
            text: spec.text.clone(),
            value: String::new(),
            parent,
            children: Vec::new(),
        });
        for child in &spec.children {
            let child_id = self.build(child, Some(id));
            if let Ok(node) = self.node_mut(id) {
                node.children.push(child_id);
            }
        }
        id
    }

    /// Descendants of `root` in document order, excluding `root`.
    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self
            .node(root)
            .map(|node| node.children.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(current) = stack.pop() {
            found.push(current);
            if let Ok(node) = self.node(current) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        found
    }

    /// `node` followed by each of its ancestors.
    fn ancestry(&self, node: NodeId) -> Vec<NodeId> {
        let mut path = vec![node];
        let mut current = self.node(node).ok().and_then(|n| n.parent);
        while let Some(parent) = current {
            path.push(parent);
            current = self.node(parent).ok().and_then(|n| n.parent);
        }
        path
    }

    fn detach(&mut self, node: NodeId) -> DocumentResult<()> {
        let parent = self.node_mut(node)?.parent.take();
        if let Some(parent) = parent {
            self.node_mut(parent)?.children.retain(|child| *child != node);
        }
        Ok(())
    }

    fn matches(&self, node: NodeId, selector: Selector<'_>) -> bool {
        self.node(node).is_ok_and(|n| match selector {
            Selector::Id(id) => n.id.as_deref() == Some(id),
            Selector::Tag(tag) => n.tag.eq_ignore_ascii_case(tag),
        })
    }
}

impl InMemoryDocument {
    /// Creates a page holding only an empty `body` root.
    #[must_use]
    pub fn new() -> Self {
        let mut state = DocumentState::default();
        state.push(Node {
            tag: "body".to_owned(),
            ..Node::default()
        });
        Self {
            state: RefCell::new(state),
        }
    }

    /// Creates the page the board expects: the configured host plus the
    /// form, item and list templates.
    #[must_use]
    pub fn for_board(config: &BoardConfig) -> Self {
        board_templates(config)
            .into_iter()
            .fold(Self::new().with_host(&config.host_id), |document, (id, spec)| {
                document.with_template(id, spec)
            })
    }

    /// Registers a template under `id`, replacing any previous one.
    #[must_use]
    pub fn with_template(self, id: impl Into<String>, spec: ElementSpec) -> Self {
        self.set_template(id, spec);
        self
    }

    /// Registers or replaces a template on a page already in use.
    pub fn set_template(&self, id: impl Into<String>, spec: ElementSpec) {
        self.state.borrow_mut().templates.insert(id.into(), spec);
    }

    /// Appends an empty `div` host with the given id to the body.
    #[must_use]
    pub fn with_host(self, id: &str) -> Self {
        {
            let mut state = self.state.borrow_mut();
            let root = self.root();
            let host = state.build(&ElementSpec::new("div").with_id(id), Some(root));
            if let Ok(body) = state.node_mut(root) {
                body.children.push(host);
            }
        }
        self
    }

    /// Returns the `body` element.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Returns the tag name of an element.
    #[must_use]
    pub fn tag(&self, node: NodeId) -> Option<String> {
        self.state.borrow().node(node).ok().map(|n| n.tag.clone())
    }

    /// Returns `true` when the element is live and reachable from the body.
    #[must_use]
    pub fn is_attached(&self, node: NodeId) -> bool {
        let state = self.state.borrow();
        state.node(node).is_ok() && state.ancestry(node).last() == Some(&self.root())
    }

    /// Returns how many elements the page holds, attached or detached.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.state.borrow().live_nodes()
    }

    /// Returns how many listeners are registered on an element.
    #[must_use]
    pub fn listener_count(&self, node: NodeId) -> usize {
        self.state.borrow().listeners.get(&node).map_or(0, Vec::len)
    }

    /// Text of every descendant with the given tag, in document order.
    #[must_use]
    pub fn texts_of(&self, root: NodeId, tag: &str) -> Vec<String> {
        let state = self.state.borrow();
        state
            .descendants(root)
            .into_iter()
            .filter(|node| state.matches(*node, Selector::Tag(tag)))
            .filter_map(|node| state.node(node).ok().map(|n| n.text.clone()))
            .collect()
    }
}

impl Default for InMemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl HostDocument for InMemoryDocument {
    fn instantiate_template(&self, template_id: &str) -> DocumentResult<NodeId> {
        let mut state = self.state.borrow_mut();
        let spec = state
            .templates
            .get(template_id)
            .cloned()
            .ok_or_else(|| DocumentError::TemplateNotFound(template_id.to_owned()))?;
        let root = state.build(&spec, None);
        trace!(template_id, %root, "template instantiated");
        Ok(root)
    }

    fn has_template(&self, template_id: &str) -> bool {
        self.state.borrow().templates.contains_key(template_id)
    }

    fn contains(&self, node: NodeId) -> bool {
        self.state.borrow().node(node).is_ok()
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let state = self.state.borrow();
        state
            .descendants(self.root())
            .into_iter()
            .find(|node| state.matches(*node, Selector::Id(id)))
    }

    fn element_id(&self, node: NodeId) -> Option<String> {
        self.state.borrow().node(node).ok().and_then(|n| n.id.clone())
    }

    fn set_element_id(&self, node: NodeId, id: &str) -> DocumentResult<()> {
        self.state.borrow_mut().node_mut(node)?.id = Some(id.to_owned());
        Ok(())
    }

    fn insert_adjacent(
        &self,
        host: NodeId,
        position: InsertPosition,
        node: NodeId,
    ) -> DocumentResult<()> {
        let mut state = self.state.borrow_mut();
        state.node(host)?;
        state.detach(node)?;
        state.node_mut(node)?.parent = Some(host);
        let children = &mut state.node_mut(host)?.children;
        match position {
            InsertPosition::AfterBegin => children.insert(0, node),
            InsertPosition::BeforeEnd => children.push(node),
        }
        Ok(())
    }

    fn query_selector(&self, root: NodeId, selector: Selector<'_>) -> Option<NodeId> {
        let state = self.state.borrow();
        state
            .descendants(root)
            .into_iter()
            .find(|node| state.matches(*node, selector))
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.state
            .borrow()
            .node(node)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    fn clear_children(&self, node: NodeId) -> DocumentResult<()> {
        let mut state = self.state.borrow_mut();
        let children = std::mem::take(&mut state.node_mut(node)?.children);
        let removed = children.len();
        for child in children {
            state.release(child);
        }
        trace!(%node, removed, live = state.live_nodes(), "children cleared");
        Ok(())
    }

    fn remove(&self, node: NodeId) -> DocumentResult<()> {
        if node == self.root() {
            return self.clear_children(node);
        }
        let mut state = self.state.borrow_mut();
        state.detach(node)?;
        state.release(node);
        trace!(%node, live = state.live_nodes(), "element removed");
        Ok(())
    }

    fn text(&self, node: NodeId) -> Option<String> {
        self.state.borrow().node(node).ok().map(|n| n.text.clone())
    }

    fn set_text(&self, node: NodeId, text: &str) -> DocumentResult<()> {
        text.clone_into(&mut self.state.borrow_mut().node_mut(node)?.text);
        Ok(())
    }

    fn value(&self, node: NodeId) -> Option<String> {
        self.state.borrow().node(node).ok().map(|n| n.value.clone())
    }

    fn set_value(&self, node: NodeId, value: &str) -> DocumentResult<()> {
        value.clone_into(&mut self.state.borrow_mut().node_mut(node)?.value);
        Ok(())
    }

    fn add_class(&self, node: NodeId, class: &str) -> DocumentResult<()> {
        self.state
            .borrow_mut()
            .node_mut(node)?
            .classes
            .insert(class.to_owned());
        Ok(())
    }

    fn remove_class(&self, node: NodeId, class: &str) -> DocumentResult<()> {
        self.state.borrow_mut().node_mut(node)?.classes.remove(class);
        Ok(())
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.state
            .borrow()
            .node(node)
            .is_ok_and(|n| n.classes.contains(class))
    }

    fn add_event_listener(
        &self,
        node: NodeId,
        kind: EventKind,
        listener: EventListener,
    ) -> DocumentResult<()> {
        let mut state = self.state.borrow_mut();
        state.node(node)?;
        state
            .listeners
            .entry(node)
            .or_default()
            .push((kind, listener));
        Ok(())
    }

    fn dispatch(&self, target: NodeId, event: &mut DomEvent) -> DocumentResult<()> {
        let path = {
            let state = self.state.borrow();
            state.node(target)?;
            state.ancestry(target)
        };
        trace!(event = event.kind().as_str(), %target, "dispatching event");
        event.set_target(target);

        for node in path {
            // Listeners may touch the document, so none of its state stays
            // borrowed while they run.
            let listeners: Vec<EventListener> = self
                .state
                .borrow()
                .listeners
                .get(&node)
                .map(|registered| {
                    registered
                        .iter()
                        .filter(|(kind, _)| *kind == event.kind())
                        .map(|(_, listener)| Rc::clone(listener))
                        .collect()
                })
                .unwrap_or_default();

            event.set_current_target(node);
            for listener in listeners {
                listener(event);
            }
            if event.propagation_stopped() {
                break;
            }
        }
        Ok(())
    }
}
