//! Error types for work item parsing.

use thiserror::Error;

/// Errors returned while constructing domain board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The value is not a valid work item identifier.
    #[error("invalid work item id '{0}'")]
    InvalidItemId(String),

    /// A work item needs at least one assignee.
    #[error("people count must be at least 1, got {0}")]
    InvalidPeopleCount(u32),
}

/// Error returned while parsing an item status from its string form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown item status: {0}")]
pub struct ParseItemStatusError(pub String);
