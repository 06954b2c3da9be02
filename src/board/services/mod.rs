//! Application services for the board context.

mod store;

pub use store::ProjectStore;
