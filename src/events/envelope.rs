// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event Envelope
//!
//! The stored and dispatched shape of every event. The `name` field is the
//! discriminator; the payload stays raw JSON so that histories written by a
//! newer version (with names this build does not know) still load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::RestaurantId;

/// Immutable record of something that happened to an aggregate
///
/// Fields are private; once built an event is only ever read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier (UUID v7 for time ordering)
    event_id: Uuid,

    /// Discriminator tag, e.g. `booked_table`
    name: String,

    /// Aggregate this event belongs to
    originator_id: RestaurantId,

    /// When this event occurred
    timestamp: DateTime<Utc>,

    /// Payload schema version
    #[serde(default = "Event::default_version")]
    event_version: u32,

    /// Event-specific data
    #[serde(default)]
    payload: serde_json::Value,
}

impl Event {
    /// Current payload schema version
    pub const CURRENT_VERSION: u32 = 1;

    fn default_version() -> u32 {
        Self::CURRENT_VERSION
    }

    /// Record a new event
    ///
    /// The timestamp is supplied by the caller; only the id is generated here.
    pub fn new(
        name: impl Into<String>,
        originator_id: RestaurantId,
        timestamp: DateTime<Utc>,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            name: name.into(),
            originator_id,
            timestamp,
            event_version: Self::CURRENT_VERSION,
            payload,
        }
    }

    /// Rebuild an event from stored parts
    pub fn restore(
        event_id: Uuid,
        name: impl Into<String>,
        originator_id: RestaurantId,
        timestamp: DateTime<Utc>,
        event_version: u32,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            event_id,
            name: name.into(),
            originator_id,
            timestamp,
            event_version,
            payload,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn originator_id(&self) -> &RestaurantId {
        &self.originator_id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn event_version(&self) -> u32 {
        self.event_version
    }

    pub fn payload(&self) -> &serde_json::Value {
        &self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_timestamp() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-01-19T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_new_event_uses_current_version() {
        let id = RestaurantId::new("1").unwrap();
        let event = Event::new("booked_table", id.clone(), test_timestamp(), json!({"table": 1}));

        assert_eq!(event.name(), "booked_table");
        assert_eq!(event.originator_id(), &id);
        assert_eq!(event.timestamp(), test_timestamp());
        assert_eq!(event.event_version(), Event::CURRENT_VERSION);
        assert_eq!(event.payload()["table"], 1);
    }

    #[test]
    fn test_missing_version_and_payload_default() {
        let raw = json!({
            "event_id": "01934f4a-0001-7000-8000-000000000001",
            "name": "table_added",
            "originator_id": "1",
            "timestamp": "2026-01-19T12:00:00Z",
        });

        let event: Event = serde_json::from_value(raw).unwrap();

        assert_eq!(event.event_version(), 1);
        assert!(event.payload().is_null());
    }

    #[test]
    fn test_invalid_originator_rejected() {
        let raw = json!({
            "event_id": "01934f4a-0001-7000-8000-000000000001",
            "name": "table_added",
            "originator_id": "",
            "timestamp": "2026-01-19T12:00:00Z",
        });

        assert!(serde_json::from_value::<Event>(raw).is_err());
    }
}
