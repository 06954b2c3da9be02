//! Work items and the observable store that owns them.
//!
//! The board context is the single source of truth for every work item on
//! the page. UI components read from it through observer notifications and
//! write to it only through [`services::ProjectStore::create`] and
//! [`services::ProjectStore::transition`]. The module follows the same
//! layering as the rest of the crate:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - The store itself in [`services`]

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
