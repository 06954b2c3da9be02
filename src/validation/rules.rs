//! Individual validation rules and the combined predicate.
//!
//! Each rule is a pure function returning `true` when its constraint holds
//! or does not apply. A constraint applies only when its option is set and
//! the value has the matching kind: length bounds for text, numeric bounds
//! for numbers.

use serde::{Deserialize, Serialize};

/// The value under validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValidatableValue {
    /// Free text, measured in characters.
    Text(String),
    /// Whole number.
    Number(i64),
}

/// A value together with the constraints it must satisfy.
///
/// # Examples
///
/// ```rust
/// use projectboard::validation::{Validatable, validate};
///
/// assert!(!validate(&Validatable::text("ab").required().min_length(5)));
/// assert!(validate(&Validatable::number(3).min(1).max(5)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validatable {
    /// Value being checked.
    pub value: ValidatableValue,
    /// Text must be non-blank after trimming.
    #[serde(default)]
    pub required: bool,
    /// Minimum text length in characters.
    #[serde(default)]
    pub min_length: Option<usize>,
    /// Maximum text length in characters.
    #[serde(default)]
    pub max_length: Option<usize>,
    /// Inclusive numeric lower bound.
    #[serde(default)]
    pub min: Option<i64>,
    /// Inclusive numeric upper bound.
    #[serde(default)]
    pub max: Option<i64>,
}

impl Validatable {
    /// Creates an unconstrained text field.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::unconstrained(ValidatableValue::Text(value.into()))
    }

    /// Creates an unconstrained numeric field.
    #[must_use]
    pub const fn number(value: i64) -> Self {
        Self::unconstrained(ValidatableValue::Number(value))
    }

    const fn unconstrained(value: ValidatableValue) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    /// Marks the field as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the minimum text length.
    #[must_use]
    pub const fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Sets the maximum text length.
    #[must_use]
    pub const fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Sets the inclusive numeric lower bound.
    #[must_use]
    pub const fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the inclusive numeric upper bound.
    #[must_use]
    pub const fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Returns `true` when every applicable constraint holds.
#[must_use]
pub fn validate(input: &Validatable) -> bool {
    check_required(input)
        && check_min_length(input)
        && check_max_length(input)
        && check_min(input)
        && check_max(input)
}

/// Text must contain something other than whitespace. Numbers always pass.
#[must_use]
pub fn check_required(input: &Validatable) -> bool {
    if !input.required {
        return true;
    }
    match &input.value {
        ValidatableValue::Text(text) => !text.trim().is_empty(),
        ValidatableValue::Number(_) => true,
    }
}

/// Text must be at least `min_length` characters long.
#[must_use]
pub fn check_min_length(input: &Validatable) -> bool {
    match (&input.value, input.min_length) {
        (ValidatableValue::Text(text), Some(min_length)) => text.chars().count() >= min_length,
        _ => true,
    }
}

/// Text must be at most `max_length` characters long.
#[must_use]
pub fn check_max_length(input: &Validatable) -> bool {
    match (&input.value, input.max_length) {
        (ValidatableValue::Text(text), Some(max_length)) => text.chars().count() <= max_length,
        _ => true,
    }
}

/// Numbers must be at least `min`.
#[must_use]
pub const fn check_min(input: &Validatable) -> bool {
    match (&input.value, input.min) {
        (ValidatableValue::Number(value), Some(min)) => *value >= min,
        _ => true,
    }
}

/// Numbers must be at most `max`.
#[must_use]
pub const fn check_max(input: &Validatable) -> bool {
    match (&input.value, input.max) {
        (ValidatableValue::Number(value), Some(max)) => *value <= max,
        _ => true,
    }
}
