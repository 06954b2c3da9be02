//! Node handles, insertion positions and child selectors.

use std::fmt;

/// Opaque handle to an element owned by a host document.
///
/// Documents may reuse the storage of removed elements. The generation
/// tells a handle to the removed element apart from one to its successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl NodeId {
    /// Wraps a document-specific index at generation zero.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            generation: 0,
        }
    }

    /// Returns the same slot at another generation.
    #[must_use]
    pub const fn with_generation(self, generation: u32) -> Self {
        Self {
            index: self.index,
            generation,
        }
    }

    /// Returns the document-specific index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    /// Returns how many times the slot had been reused when this handle
    /// was issued.
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.generation == 0 {
            write!(f, "node#{}", self.index)
        } else {
            write!(f, "node#{}.{}", self.index, self.generation)
        }
    }
}

/// Where an element is inserted relative to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// As the host's first child.
    AfterBegin,
    /// As the host's last child.
    BeforeEnd,
}

/// Child lookup used by components to find their slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    /// Matches an element id (`#title`).
    Id(&'a str),
    /// Matches a tag name (`ul`).
    Tag(&'a str),
}

impl<'a> Selector<'a> {
    /// Parses `#id` as an id selector and anything else as a tag.
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        raw.strip_prefix('#').map_or(Self::Tag(raw), Self::Id)
    }
}

impl fmt::Display for Selector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Tag(tag) => f.write_str(tag),
        }
    }
}
