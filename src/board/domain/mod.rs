//! Domain model for work items.
//!
//! A work item is immutable apart from its status. Everything else is fixed
//! when the store creates it.

mod error;
mod ids;
mod item;

pub use error::{BoardDomainError, ParseItemStatusError};
pub use ids::{PeopleCount, WorkItemId};
pub use item::{ItemStatus, WorkItem};
