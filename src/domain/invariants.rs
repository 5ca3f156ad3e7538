// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Booking Invariants
//!
//! Business rules checked before a command may produce an event. All functions
//! are pure: they read a [`FloorPlan`] and either accept or explain why not.
//!
//! # Rules
//!
//! 1. A table must be on the floor plan to be booked or released
//! 2. A table cannot be booked twice
//! 3. Only a booked table can be released
//! 4. "Book any table" needs at least one free table
//! 5. A new table needs a number above the current highest

use super::floor_plan::FloorPlan;
use super::identifiers::TableNumber;

/// Validation result for booking rules
pub type ValidationResult = Result<(), DomainRuleViolation>;

/// A command would break a booking invariant
///
/// Returned by command handlers; the aggregate is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainRuleViolation {
    /// Table is already booked
    #[error("Table {0} is already booked")]
    TableAlreadyBooked(TableNumber),

    /// Table is free, nothing to release
    #[error("Table {0} is not booked")]
    TableNotBooked(TableNumber),

    /// Table is not on the floor plan
    #[error("Table {0} does not exist")]
    UnknownTable(TableNumber),

    /// Every table is booked
    #[error("No table available")]
    NoTableAvailable,

    /// The highest table number is already on the floor plan
    #[error("Floor plan is full")]
    FloorPlanFull,
}

/// Validate that `table` can be booked
pub fn validate_can_book(plan: &FloorPlan, table: TableNumber) -> ValidationResult {
    if !plan.contains(table) {
        return Err(DomainRuleViolation::UnknownTable(table));
    }
    if plan.is_booked(table) {
        return Err(DomainRuleViolation::TableAlreadyBooked(table));
    }
    Ok(())
}

/// Validate that `table` can be released
pub fn validate_can_release(plan: &FloorPlan, table: TableNumber) -> ValidationResult {
    if !plan.contains(table) {
        return Err(DomainRuleViolation::UnknownTable(table));
    }
    if !plan.is_booked(table) {
        return Err(DomainRuleViolation::TableNotBooked(table));
    }
    Ok(())
}

/// Pick the number a newly added table should get
pub fn next_table(plan: &FloorPlan) -> Result<TableNumber, DomainRuleViolation> {
    plan.next_table_number().ok_or(DomainRuleViolation::FloorPlanFull)
}

/// Pick the table an unspecified booking should take
pub fn first_available(plan: &FloorPlan) -> Result<TableNumber, DomainRuleViolation> {
    plan.first_free().ok_or(DomainRuleViolation::NoTableAvailable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TableStatus;

    fn table(n: u32) -> TableNumber {
        TableNumber::new(n).unwrap()
    }

    #[test]
    fn test_can_book_free_table() {
        assert_eq!(validate_can_book(&FloorPlan::opening(), table(1)), Ok(()));
    }

    #[test]
    fn test_cannot_book_twice() {
        let plan = FloorPlan::opening().with_status(table(1), TableStatus::Booked);

        assert_eq!(
            validate_can_book(&plan, table(1)),
            Err(DomainRuleViolation::TableAlreadyBooked(table(1)))
        );
    }

    #[test]
    fn test_cannot_book_unknown_table() {
        assert_eq!(
            validate_can_book(&FloorPlan::opening(), table(9)),
            Err(DomainRuleViolation::UnknownTable(table(9)))
        );
    }

    #[test]
    fn test_cannot_release_free_table() {
        assert_eq!(
            validate_can_release(&FloorPlan::opening(), table(1)),
            Err(DomainRuleViolation::TableNotBooked(table(1)))
        );
    }

    #[test]
    fn test_next_table_when_plan_full() {
        let plan = FloorPlan::opening().with_table(table(u32::MAX));

        assert_eq!(next_table(&plan), Err(DomainRuleViolation::FloorPlanFull));
        assert_eq!(next_table(&FloorPlan::opening()), Ok(table(2)));
    }

    #[test]
    fn test_first_available_when_full() {
        let plan = FloorPlan::opening().with_status(table(1), TableStatus::Booked);

        assert_eq!(first_available(&plan), Err(DomainRuleViolation::NoTableAvailable));
    }
}
