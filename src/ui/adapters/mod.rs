//! Adapter implementations of the UI ports.

pub mod memory;
