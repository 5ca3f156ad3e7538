// Copyright (c) 2025 - Cowboy AI, Inc.
//! Append-only buffer of events not yet persisted

use crate::events::Event;

/// Pending changes of one aggregate
///
/// Only the aggregate appends and only the persistence path clears; everyone
/// else gets a read-only slice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeLog {
    events: Vec<Event>,
}

impl ChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event and return a reference to the stored copy
    pub(crate) fn append(&mut self, event: Event) -> &Event {
        let index = self.events.len();
        self.events.push(event);
        &self.events[index]
    }

    /// Drop all pending events after they were persisted
    pub(crate) fn clear(&mut self) {
        self.events.clear();
    }

    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
