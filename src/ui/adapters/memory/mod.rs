//! In-memory host document and notifier.
//!
//! These run the whole board without a browser and back every test in the
//! crate.

mod document;
mod markup;
mod notifier;

pub use document::InMemoryDocument;
pub use markup::{ElementSpec, board_templates};
pub use notifier::RecordingNotifier;
