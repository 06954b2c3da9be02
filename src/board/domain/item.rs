//! Work item entity and its lane status.

use super::{ParseItemStatusError, PeopleCount, WorkItemId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lane a work item currently belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// Work is still ongoing.
    Active,
    /// Work has been completed.
    Finished,
}

impl ItemStatus {
    /// Every status, in lane display order.
    pub const ALL: [Self; 2] = [Self::Active, Self::Finished];

    /// Returns the canonical lowercase representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl TryFrom<&str> for ItemStatus {
    type Error = ParseItemStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            _ => Err(ParseItemStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single task or project on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    id: WorkItemId,
    title: String,
    description: String,
    people: PeopleCount,
    status: ItemStatus,
    created_at: DateTime<Utc>,
}

impl WorkItem {
    /// Creates a new active work item with a fresh identifier.
    ///
    /// Inputs are taken as given; callers validate them beforehand.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: PeopleCount,
        clock: &(impl Clock + ?Sized),
    ) -> Self {
        Self {
            id: WorkItemId::new(),
            title: title.into(),
            description: description.into(),
            people,
            status: ItemStatus::Active,
            created_at: clock.utc(),
        }
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> WorkItemId {
        self.id
    }

    /// Returns the item title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the item description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the number of people assigned.
    #[must_use]
    pub const fn people(&self) -> PeopleCount {
        self.people
    }

    /// Returns the current lane status.
    #[must_use]
    pub const fn status(&self) -> ItemStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns `"1 person"` or `"{n} persons"`.
    #[must_use]
    pub fn people_label(&self) -> String {
        if self.people == PeopleCount::ONE {
            "1 person".to_owned()
        } else {
            format!("{} persons", self.people)
        }
    }

    /// Moves the item to another lane.
    ///
    /// Only the store calls this; it is the single writer of item status.
    pub(crate) const fn set_status(&mut self, status: ItemStatus) {
        self.status = status;
    }
}
