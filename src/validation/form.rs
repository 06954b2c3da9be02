//! Entry form rules composed from individual field checks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rules::{Validatable, validate};
use crate::board::domain::PeopleCount;

/// Raw text values read from the entry form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFormInput {
    /// Title input value.
    pub title: String,
    /// Description input value.
    pub description: String,
    /// People input value, not yet parsed.
    pub people: String,
}

impl RawFormInput {
    /// Creates raw input from the three field values.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: people.into(),
        }
    }
}

/// Accepted form input, ready to hand to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    /// Item title.
    pub title: String,
    /// Item description.
    pub description: String,
    /// Number of people assigned.
    pub people: PeopleCount,
}

/// Rule sets that could admit an item nobody works on, or nothing at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormRulesError {
    /// The people minimum admits zero or negative head counts.
    #[error("people_min must be at least 1, got {0}")]
    PeopleMinBelowOne(i64),

    /// The people maximum is below the minimum.
    #[error("people_max {max} is below people_min {min}")]
    EmptyPeopleRange {
        /// Configured minimum.
        min: i64,
        /// Configured maximum.
        max: i64,
    },
}

/// Constraints applied by the entry form.
///
/// # Examples
///
/// ```
/// use projectboard::validation::{FormRules, RawFormInput};
///
/// let rules = FormRules::default();
/// assert!(rules.evaluate(&RawFormInput::new("Build API", "desc here", "3")).is_some());
/// assert!(rules.evaluate(&RawFormInput::new("Build API", "desc", "3")).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormRules {
    /// Minimum description length in characters.
    pub description_min_length: usize,
    /// Optional maximum title length in characters.
    pub title_max_length: Option<usize>,
    /// Minimum number of people.
    pub people_min: i64,
    /// Optional maximum number of people.
    pub people_max: Option<i64>,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            description_min_length: 5,
            title_max_length: None,
            people_min: 1,
            people_max: None,
        }
    }
}

impl FormRules {
    /// Creates rules that only require non-blank text and a positive count.
    ///
    /// Useful for tests that do not care about description length.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            description_min_length: 0,
            ..Default::default()
        }
    }

    /// Verifies the rules themselves before a board uses them.
    ///
    /// # Errors
    ///
    /// Returns [`FormRulesError::PeopleMinBelowOne`] when `people_min` is
    /// below one, or [`FormRulesError::EmptyPeopleRange`] when `people_max`
    /// is below `people_min`.
    pub const fn check(&self) -> Result<(), FormRulesError> {
        if self.people_min < 1 {
            return Err(FormRulesError::PeopleMinBelowOne(self.people_min));
        }
        match self.people_max {
            Some(max) if max < self.people_min => Err(FormRulesError::EmptyPeopleRange {
                min: self.people_min,
                max,
            }),
            _ => Ok(()),
        }
    }

    /// Checks every field and returns the parsed draft when all pass.
    ///
    /// A people value that does not parse as a whole number fails, and so
    /// does zero whatever `people_min` says. No per-field detail is reported.
    #[must_use]
    pub fn evaluate(&self, input: &RawFormInput) -> Option<ProjectDraft> {
        let people: i64 = input.people.trim().parse().ok()?;

        let mut title = Validatable::text(input.title.as_str()).required();
        if let Some(max_length) = self.title_max_length {
            title = title.max_length(max_length);
        }
        let description = Validatable::text(input.description.as_str())
            .required()
            .min_length(self.description_min_length);
        let mut people_check = Validatable::number(people).required().min(self.people_min);
        if let Some(max) = self.people_max {
            people_check = people_check.max(max);
        }

        if !(validate(&title) && validate(&description) && validate(&people_check)) {
            return None;
        }

        Some(ProjectDraft {
            title: input.title.clone(),
            description: input.description.clone(),
            people: PeopleCount::new(u32::try_from(people).ok()?).ok()?,
        })
    }
}
