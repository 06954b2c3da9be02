//! Board components and the lifecycle they share.
//!
//! Every component is built the same way: [`mount`] clones its template,
//! names it and attaches it to a host, then [`activate`] runs the
//! component's own [`Component::configure`] and
//! [`Component::render_content`] exactly once.

mod form;
mod item;
mod lifecycle;
mod list;

pub use form::ProjectInput;
pub use item::ProjectItem;
pub use lifecycle::{
    Component, ComponentContext, ComponentError, ComponentResult, MountSpec, activate, bind,
    instantiate, mount, require_templates, slot,
};
pub use list::ProjectList;
