// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for restaurant-booking
//!
//! Deterministic test data: fixed UUIDs and timestamps so that histories built
//! here compare equal across runs.

#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use uuid::Uuid;

use restaurant_booking::domain::{RestaurantId, TableNumber};
use restaurant_booking::events::{Event, RestaurantEvent};

pub const RESTAURANT_ID_1: &str = "1";
pub const RESTAURANT_ID_MISSING: &str = "missing";

// Fixed test timestamp (2026-01-19T12:00:00Z)
pub const FIXED_TIMESTAMP: &str = "2026-01-19T12:00:00Z";

pub fn restaurant_id() -> RestaurantId {
    RestaurantId::new(RESTAURANT_ID_1).expect("Invalid restaurant id in test fixture")
}

pub fn table(n: u32) -> TableNumber {
    TableNumber::new(n).expect("Invalid table number in test fixture")
}

/// Parse the fixed timestamp
pub fn fixed_timestamp() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(FIXED_TIMESTAMP)
        .expect("Invalid timestamp in test fixture")
        .with_timezone(&Utc)
}

/// Fixed timestamp shifted by `minutes`
pub fn timestamp_at(minutes: i64) -> DateTime<Utc> {
    fixed_timestamp() + Duration::minutes(minutes)
}

/// Deterministic event id for position `n` in a fixture history
pub fn event_id(n: u32) -> Uuid {
    Uuid::parse_str(&format!("01934f4a-{:04x}-7000-8000-{:012x}", n, n))
        .expect("Invalid UUID in test fixture")
}

/// Build a stored event for restaurant "1" at position `n`
pub fn stored(n: u32, event: RestaurantEvent) -> Event {
    Event::restore(
        event_id(n),
        event.name(),
        restaurant_id(),
        timestamp_at(n as i64),
        1,
        json!({ "table": event.table().get() }),
    )
}

/// History: table 2 added, table 1 booked, table 2 booked, table 1 released
pub fn busy_evening_history() -> Vec<Event> {
    vec![
        stored(1, RestaurantEvent::table_added(table(2))),
        stored(2, RestaurantEvent::booked_table(table(1))),
        stored(3, RestaurantEvent::booked_table(table(2))),
        stored(4, RestaurantEvent::released_table(table(1))),
    ]
}

/// Event written by a newer build that this one does not know
pub fn future_event(n: u32) -> Event {
    Event::restore(
        event_id(n),
        "table_reserved_for_vip",
        restaurant_id(),
        timestamp_at(n as i64),
        2,
        json!({ "table": 1, "guest": "someone important" }),
    )
}
