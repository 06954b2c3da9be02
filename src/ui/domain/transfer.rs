//! Drag transfer payload.
//!
//! Mirrors the browser's data store: the drag source writes entries while
//! the store is read/write, targets only see the declared types during
//! `dragover`, and the data becomes readable again for `drop`.

/// The only payload type the board uses.
pub const PLAIN_TEXT: &str = "text/plain";

/// Class marking a list as an active drop zone.
pub const DROPPABLE_CLASS: &str = "droppable";

/// Access mode of a [`DataTransfer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferMode {
    /// Entries and effect can be written (drag start).
    #[default]
    ReadWrite,
    /// Entries can be read but not written (drop).
    ReadOnly,
    /// Only the declared types are visible (dragover, dragleave, dragend).
    Protected,
}

/// Operation the drag source allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    /// Nothing set yet.
    #[default]
    None,
    /// The dragged item is moved.
    Move,
}

/// Typed entries carried by a drag operation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataTransfer {
    entries: Vec<(String, String)>,
    effect_allowed: DropEffect,
    mode: TransferMode,
}

impl DataTransfer {
    /// Creates an empty, writable transfer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` under `format`, replacing any previous entry.
    ///
    /// Returns `false` without writing unless the transfer is writable.
    pub fn set_data(&mut self, format: &str, data: impl Into<String>) -> bool {
        if self.mode != TransferMode::ReadWrite {
            return false;
        }
        let data = data.into();
        match self.entries.iter_mut().find(|(existing, _)| existing == format) {
            Some(entry) => entry.1 = data,
            None => self.entries.push((format.to_owned(), data)),
        }
        true
    }

    /// Reads the entry stored under `format`.
    ///
    /// Protected transfers never reveal their data.
    #[must_use]
    pub fn get_data(&self, format: &str) -> Option<&str> {
        if self.mode == TransferMode::Protected {
            return None;
        }
        self.entries
            .iter()
            .find(|(existing, _)| existing == format)
            .map(|(_, data)| data.as_str())
    }

    /// Returns the declared types in the order they were written.
    #[must_use]
    pub fn types(&self) -> Vec<&str> {
        self.entries.iter().map(|(format, _)| format.as_str()).collect()
    }

    /// Returns the first declared type, if any.
    #[must_use]
    pub fn first_type(&self) -> Option<&str> {
        self.entries.first().map(|(format, _)| format.as_str())
    }

    /// Returns the allowed effect.
    #[must_use]
    pub const fn effect_allowed(&self) -> DropEffect {
        self.effect_allowed
    }

    /// Sets the allowed effect; ignored unless the transfer is writable.
    pub fn set_effect_allowed(&mut self, effect: DropEffect) {
        if self.mode == TransferMode::ReadWrite {
            self.effect_allowed = effect;
        }
    }

    /// Returns the current access mode.
    #[must_use]
    pub const fn mode(&self) -> TransferMode {
        self.mode
    }

    /// Switches the access mode. Called by whoever drives the drag.
    pub const fn set_mode(&mut self, mode: TransferMode) {
        self.mode = mode;
    }

    /// Returns a copy of this transfer in another mode.
    #[must_use]
    pub fn with_mode(&self, mode: TransferMode) -> Self {
        let mut copy = self.clone();
        copy.mode = mode;
        copy
    }
}
