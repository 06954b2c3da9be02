//! Field validation for user-entered work item data.
//!
//! [`rules`] holds the pure predicate over a single [`Validatable`] field.
//! [`form`] composes three such checks into the entry form's accept/reject
//! decision.

pub mod form;
pub mod rules;

pub use form::{FormRules, FormRulesError, ProjectDraft, RawFormInput};
pub use rules::{Validatable, ValidatableValue, validate};
