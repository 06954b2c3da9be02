//! Unit tests for the board context.

mod domain_tests;
mod store_tests;
