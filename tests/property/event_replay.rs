// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for History Replay

use proptest::prelude::*;
use restaurant_booking::aggregate::{apply_event, Restaurant, RestaurantState};
use restaurant_booking::events::{Event, RestaurantEvent};
use serde_json::json;

use crate::fixtures::*;

// ============================================================================
// Strategies
// ============================================================================

/// Any single history entry, including names this build does not know
fn history_event() -> impl Strategy<Value = Event> {
    let known = (0u8..3, 1u32..6, 0u32..1000).prop_map(|(kind, n, position)| {
        let event = match kind {
            0 => RestaurantEvent::booked_table(table(n)),
            1 => RestaurantEvent::released_table(table(n)),
            _ => RestaurantEvent::table_added(table(n)),
        };
        stored(position, event)
    });
    let unknown = (0u32..1000).prop_map(future_event);
    let malformed = (0u32..1000).prop_map(|position| {
        Event::restore(
            event_id(position),
            RestaurantEvent::BOOKED_TABLE,
            restaurant_id(),
            timestamp_at(position as i64),
            1,
            json!({ "seat": "window" }),
        )
    });

    prop_oneof![
        8 => known,
        1 => unknown,
        1 => malformed,
    ]
}

fn history() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(history_event(), 0..40)
}

fn is_known(event: &Event) -> bool {
    matches!(RestaurantEvent::decode(event), Ok(Some(_)))
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Replay never produces pending changes
    #[test]
    fn prop_reconstruct_has_no_pending_changes(events in history()) {
        let restaurant = Restaurant::reconstruct(restaurant_id(), &events);

        prop_assert!(restaurant.pending_changes().is_empty());
        prop_assert_eq!(restaurant.version(), events.len() as u64);
    }

    /// Replaying the same history twice gives the same state
    #[test]
    fn prop_replay_is_deterministic(events in history()) {
        let first = Restaurant::reconstruct(restaurant_id(), &events);
        let second = Restaurant::reconstruct(restaurant_id(), &events);

        prop_assert_eq!(first.state(), second.state());
    }

    /// Replaying a history in two parts equals replaying it at once
    #[test]
    fn prop_replay_composes(events in history(), split in 0usize..40) {
        let split = split.min(events.len());
        let (head, tail) = events.split_at(split);

        let whole = RestaurantState::from_events(restaurant_id(), &events);
        let partial = RestaurantState::from_events(restaurant_id(), head);
        let resumed = tail.iter().fold(partial, apply_event);

        prop_assert_eq!(whole, resumed);
    }

    /// Events that cannot be decoded never influence state
    #[test]
    fn prop_undecodable_events_are_ignored(events in history()) {
        let known: Vec<Event> = events.iter().filter(|e| is_known(e)).cloned().collect();

        let with_all = RestaurantState::from_events(restaurant_id(), &events);
        let only_known = RestaurantState::from_events(restaurant_id(), &known);

        prop_assert_eq!(with_all, only_known);
    }
}
