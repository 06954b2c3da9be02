//! Port contracts for the board context.

pub mod observer;

pub use observer::{Snapshot, StoreObserver};
