// Copyright (c) 2025 - Cowboy AI, Inc.
//! Booking Domain Models
//!
//! Value objects and business rules for the restaurant booking context.
//!
//! - [`RestaurantId`] - validated aggregate identifier
//! - [`TableNumber`] - 1-based table number
//! - [`FloorPlan`] - tables and their [`TableStatus`]
//! - [`invariants`] - pure rule checks returning [`DomainRuleViolation`]

pub mod floor_plan;
pub mod identifiers;
pub mod invariants;

pub use floor_plan::{FloorPlan, TableStatus};
pub use identifiers::{RestaurantId, TableNumber, ValueError};
pub use invariants::{DomainRuleViolation, ValidationResult};
