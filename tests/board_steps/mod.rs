//! Step definitions for the project board scenarios.

mod given;
mod then;
mod when;
pub mod world;
