//! Value types shared by the document contract and the components.

mod event;
mod node;
mod transfer;

pub use event::{DomEvent, EventKind, EventListener};
pub use node::{InsertPosition, NodeId, Selector};
pub use transfer::{DROPPABLE_CLASS, DataTransfer, DropEffect, PLAIN_TEXT, TransferMode};
