// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Command Execution

use proptest::prelude::*;
use restaurant_booking::aggregate::{
    AddTableCommand, BookAnyTableCommand, BookTableCommand, ReleaseTableCommand, Restaurant,
    RestaurantCommand, RestaurantState,
};

use crate::fixtures::*;

fn command() -> impl Strategy<Value = RestaurantCommand> {
    let timestamp = fixed_timestamp();
    prop_oneof![
        (1u32..5).prop_map(move |n| RestaurantCommand::from(BookTableCommand {
            table: table(n),
            timestamp,
        })),
        Just(RestaurantCommand::from(BookAnyTableCommand { timestamp })),
        (1u32..5).prop_map(move |n| RestaurantCommand::from(ReleaseTableCommand {
            table: table(n),
            timestamp,
        })),
        Just(RestaurantCommand::from(AddTableCommand { timestamp })),
    ]
}

proptest! {
    /// Exactly one event per accepted command, none per rejected command
    #[test]
    fn prop_one_event_per_successful_command(
        commands in prop::collection::vec(command(), 0..30)
    ) {
        let mut restaurant = Restaurant::new(restaurant_id());

        for command in commands {
            let before = restaurant.clone();

            let accepted = restaurant.execute(command).is_ok();

            let appended = restaurant.pending_changes().len() - before.pending_changes().len();
            if accepted {
                prop_assert_eq!(appended, 1);
            } else {
                prop_assert_eq!(appended, 0);
                prop_assert_eq!(&restaurant, &before);
            }
        }
    }

    /// The change log alone rebuilds the in-memory state
    #[test]
    fn prop_pending_changes_rebuild_state(
        commands in prop::collection::vec(command(), 0..30)
    ) {
        let mut restaurant = Restaurant::new(restaurant_id());
        for command in commands {
            let _ = restaurant.execute(command);
        }

        let rebuilt = RestaurantState::from_events(restaurant_id(), restaurant.pending_changes());

        prop_assert_eq!(&rebuilt, restaurant.state());
    }
}
