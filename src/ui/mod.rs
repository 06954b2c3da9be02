//! Headless UI layer: host document contract, components and drag protocol.
//!
//! Components never own board state. They render what the store tells them
//! and turn user events into store calls:
//!
//! - Event, node and transfer types in [`domain`]
//! - Host document, notifier and drag capability contracts in [`ports`]
//! - In-memory document and notifier in [`adapters`]
//! - Lifecycle plus the form, list and item components in [`components`]
//! - The drag session driver in [`services`]

pub mod adapters;
pub mod components;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
