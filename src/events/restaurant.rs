// Copyright (c) 2025 - Cowboy AI, Inc.
//! Restaurant Domain Events
//!
//! Typed view over the [`Event`] envelope for the names this build knows.
//! Decoding an envelope with an unknown name yields `None`, never an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::envelope::Event;
use crate::domain::{RestaurantId, TableNumber};

/// Payload shared by all table events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablePayload {
    pub table: TableNumber,
}

/// Restaurant events known to this version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestaurantEvent {
    /// A table was booked
    BookedTable(TablePayload),

    /// A booked table was freed
    ReleasedTable(TablePayload),

    /// A table joined the floor plan
    TableAdded(TablePayload),
}

impl RestaurantEvent {
    pub const BOOKED_TABLE: &'static str = "booked_table";
    pub const RELEASED_TABLE: &'static str = "released_table";
    pub const TABLE_ADDED: &'static str = "table_added";

    pub fn booked_table(table: TableNumber) -> Self {
        Self::BookedTable(TablePayload { table })
    }

    pub fn released_table(table: TableNumber) -> Self {
        Self::ReleasedTable(TablePayload { table })
    }

    pub fn table_added(table: TableNumber) -> Self {
        Self::TableAdded(TablePayload { table })
    }

    /// Discriminator tag written to the envelope
    pub fn name(&self) -> &'static str {
        match self {
            Self::BookedTable(_) => Self::BOOKED_TABLE,
            Self::ReleasedTable(_) => Self::RELEASED_TABLE,
            Self::TableAdded(_) => Self::TABLE_ADDED,
        }
    }

    /// Table the event is about
    pub fn table(&self) -> TableNumber {
        match self {
            Self::BookedTable(p) | Self::ReleasedTable(p) | Self::TableAdded(p) => p.table,
        }
    }

    /// Wrap into an envelope for `originator_id`
    pub fn into_event(self, originator_id: RestaurantId, timestamp: DateTime<Utc>) -> Event {
        let payload = match self {
            Self::BookedTable(p) | Self::ReleasedTable(p) | Self::TableAdded(p) => {
                serde_json::json!({ "table": p.table.get() })
            }
        };
        Event::new(self.name(), originator_id, timestamp, payload)
    }

    /// Decode an envelope
    ///
    /// - `Ok(Some(_))` for a known name with a valid payload
    /// - `Ok(None)` for a name this version does not know
    /// - `Err(_)` for a known name whose payload does not match
    pub fn decode(event: &Event) -> Result<Option<Self>, serde_json::Error> {
        let decoded = match event.name() {
            Self::BOOKED_TABLE => Self::BookedTable(TablePayload::deserialize(event.payload())?),
            Self::RELEASED_TABLE => {
                Self::ReleasedTable(TablePayload::deserialize(event.payload())?)
            }
            Self::TABLE_ADDED => Self::TableAdded(TablePayload::deserialize(event.payload())?),
            _ => return Ok(None),
        };
        Ok(Some(decoded))
    }
}
