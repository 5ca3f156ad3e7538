// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Command Handlers for the Restaurant Aggregate
//!
//! ```text
//! handle_command(&State, Command) → Result<Event, DomainRuleViolation>
//! ```
//!
//! Handlers validate booking rules against the current state and build the
//! event on success. They never touch the change log or the state itself; the
//! [`Restaurant`](super::Restaurant) does that once a handler accepts.

use crate::aggregate::commands::*;
use crate::aggregate::restaurant::RestaurantState;
use crate::domain::invariants::{
    first_available, next_table, validate_can_book, validate_can_release,
};
use crate::domain::DomainRuleViolation;
use crate::events::{Event, RestaurantEvent};

/// Handle BookTable
///
/// # Business Rules
/// - Table must be on the floor plan
/// - Table must not already be booked
pub fn handle_book_table(
    state: &RestaurantState,
    command: BookTableCommand,
) -> Result<Event, DomainRuleViolation> {
    validate_can_book(&state.floor_plan, command.table)?;

    Ok(RestaurantEvent::booked_table(command.table).into_event(state.id.clone(), command.timestamp))
}

/// Handle BookAnyTable
///
/// # Business Rules
/// - At least one table must be free; the lowest-numbered one is taken
pub fn handle_book_any_table(
    state: &RestaurantState,
    command: BookAnyTableCommand,
) -> Result<Event, DomainRuleViolation> {
    let table = first_available(&state.floor_plan)?;

    handle_book_table(
        state,
        BookTableCommand {
            table,
            timestamp: command.timestamp,
        },
    )
}

/// Handle ReleaseTable
///
/// # Business Rules
/// - Table must be on the floor plan
/// - Table must currently be booked
pub fn handle_release_table(
    state: &RestaurantState,
    command: ReleaseTableCommand,
) -> Result<Event, DomainRuleViolation> {
    validate_can_release(&state.floor_plan, command.table)?;

    Ok(RestaurantEvent::released_table(command.table)
        .into_event(state.id.clone(), command.timestamp))
}

/// Handle AddTable
///
/// # Business Rules
/// - The new table takes the number after the highest one
/// - Fails once that number would pass `u32::MAX`
pub fn handle_add_table(
    state: &RestaurantState,
    command: AddTableCommand,
) -> Result<Event, DomainRuleViolation> {
    let table = next_table(&state.floor_plan)?;

    Ok(RestaurantEvent::table_added(table).into_event(state.id.clone(), command.timestamp))
}

/// Route a command to its handler
pub fn handle_command(
    state: &RestaurantState,
    command: RestaurantCommand,
) -> Result<Event, DomainRuleViolation> {
    match command {
        RestaurantCommand::BookTable(c) => handle_book_table(state, c),
        RestaurantCommand::BookAnyTable(c) => handle_book_any_table(state, c),
        RestaurantCommand::ReleaseTable(c) => handle_release_table(state, c),
        RestaurantCommand::AddTable(c) => handle_add_table(state, c),
    }
}
