// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event-Sourced Restaurant Aggregate
//!
//! ```text
//! Command → handle_command() → Result<Event, DomainRuleViolation>
//!                                    ↓
//!                  apply_event() + ChangeLog::append()
//! ```
//!
//! State is never written directly: it is a fold of [`apply_event`] over the
//! history, and every command goes through the same function for the event it
//! produced.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::change_log::ChangeLog;
use super::commands::*;
use super::handlers::handle_command;
use crate::domain::{DomainRuleViolation, FloorPlan, RestaurantId, TableNumber, TableStatus};
use crate::events::{Event, RestaurantEvent};

/// Immutable restaurant state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantState {
    /// Aggregate ID
    pub id: RestaurantId,

    /// Tables and their booking status
    pub floor_plan: FloorPlan,

    /// Timestamp of the first applied event
    pub created_at: Option<DateTime<Utc>>,

    /// Timestamp of the latest applied event
    pub updated_at: Option<DateTime<Utc>>,
}

impl RestaurantState {
    /// State of a restaurant with no history
    pub fn opening(id: RestaurantId) -> Self {
        Self {
            id,
            floor_plan: FloorPlan::opening(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Fold a history into state
    pub fn from_events(id: RestaurantId, events: &[Event]) -> Self {
        let initial = Self::opening(id);

        events
            .iter()
            .fold(initial, |state, event| apply_event(state, event))
    }
}

/// Apply an event to state (pure function)
///
/// Total: never fails. Events for another aggregate, events with names this
/// version does not know, and known events with malformed payloads are
/// skipped and leave the state untouched.
pub fn apply_event(state: RestaurantState, event: &Event) -> RestaurantState {
    if event.originator_id() != &state.id {
        debug!(
            restaurant = %state.id,
            originator = %event.originator_id(),
            "skipping event for another aggregate"
        );
        return state;
    }

    let decoded = match RestaurantEvent::decode(event) {
        Ok(Some(decoded)) => decoded,
        Ok(None) => {
            debug!(restaurant = %state.id, name = event.name(), "ignoring unknown event");
            return state;
        }
        Err(e) => {
            warn!(
                restaurant = %state.id,
                name = event.name(),
                error = %e,
                "ignoring event with malformed payload"
            );
            return state;
        }
    };

    let floor_plan = match decoded {
        RestaurantEvent::BookedTable(p) => state.floor_plan.with_status(p.table, TableStatus::Booked),
        RestaurantEvent::ReleasedTable(p) => state.floor_plan.with_status(p.table, TableStatus::Free),
        RestaurantEvent::TableAdded(p) => state.floor_plan.with_table(p.table),
    };

    RestaurantState {
        floor_plan,
        created_at: state.created_at.or(Some(event.timestamp())),
        updated_at: Some(event.timestamp()),
        ..state
    }
}

/// Restaurant aggregate root
///
/// Holds the current state, the stream version it was loaded at and the
/// pending change log.
///
/// ```rust
/// use chrono::Utc;
/// use restaurant_booking::aggregate::Restaurant;
/// use restaurant_booking::domain::RestaurantId;
///
/// let mut restaurant = Restaurant::reconstruct(RestaurantId::new("1").unwrap(), &[]);
/// restaurant.book_any_table(Utc::now()).unwrap();
///
/// assert_eq!(restaurant.pending_changes().len(), 1);
/// assert!(restaurant.book_any_table(Utc::now()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    state: RestaurantState,
    version: u64,
    changes: ChangeLog,
}

impl Restaurant {
    /// Restaurant with no history
    pub fn new(id: RestaurantId) -> Self {
        Self::reconstruct(id, &[])
    }

    /// Replay `history` in order
    ///
    /// The result has no pending changes and its version equals the number of
    /// historical events, including skipped ones.
    pub fn reconstruct(id: RestaurantId, history: &[Event]) -> Self {
        let state = RestaurantState::from_events(id, history);
        debug!(restaurant = %state.id, events = history.len(), "reconstructed restaurant");

        Self {
            state,
            version: history.len() as u64,
            changes: ChangeLog::new(),
        }
    }

    pub fn id(&self) -> &RestaurantId {
        &self.state.id
    }

    pub fn state(&self) -> &RestaurantState {
        &self.state
    }

    pub fn floor_plan(&self) -> &FloorPlan {
        &self.state.floor_plan
    }

    /// Stream version the pending changes build on
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Events recorded since load (or since the last successful save)
    pub fn pending_changes(&self) -> &[Event] {
        self.changes.as_slice()
    }

    pub fn has_pending_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Execute a command
    ///
    /// On success exactly one event is applied and appended to the change
    /// log. On failure nothing changes.
    pub fn execute(
        &mut self,
        command: impl Into<RestaurantCommand>,
    ) -> Result<&Event, DomainRuleViolation> {
        let command = command.into();

        let event = match handle_command(&self.state, command) {
            Ok(event) => event,
            Err(violation) => {
                debug!(
                    restaurant = %self.state.id,
                    command = command.kind(),
                    %violation,
                    "command rejected"
                );
                return Err(violation);
            }
        };

        self.state = apply_event(self.state.clone(), &event);
        debug!(
            restaurant = %self.state.id,
            command = command.kind(),
            event = event.name(),
            "command accepted"
        );

        Ok(self.changes.append(event))
    }

    pub fn book_table(
        &mut self,
        table: TableNumber,
        timestamp: DateTime<Utc>,
    ) -> Result<&Event, DomainRuleViolation> {
        self.execute(BookTableCommand { table, timestamp })
    }

    /// Book the lowest-numbered free table
    pub fn book_any_table(&mut self, timestamp: DateTime<Utc>) -> Result<&Event, DomainRuleViolation> {
        self.execute(BookAnyTableCommand { timestamp })
    }

    pub fn release_table(
        &mut self,
        table: TableNumber,
        timestamp: DateTime<Utc>,
    ) -> Result<&Event, DomainRuleViolation> {
        self.execute(ReleaseTableCommand { table, timestamp })
    }

    pub fn add_table(&mut self, timestamp: DateTime<Utc>) -> Result<&Event, DomainRuleViolation> {
        self.execute(AddTableCommand { timestamp })
    }

    /// Mark pending changes as persisted at `new_version`
    pub(crate) fn commit(&mut self, new_version: u64) {
        self.changes.clear();
        self.version = new_version;
    }
}
