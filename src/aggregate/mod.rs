// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event-Sourced Aggregates
//!
//! The restaurant aggregate follows the fold pattern:
//! - State is reconstructed by folding events: `[Event] → State`
//! - Commands are validated by pure handlers: `State → Command → Result<Event, Error>`
//! - Accepted events are applied at once and kept in a pending change log
//!
//! # Event Sourcing Pattern
//!
//! ```text
//! Command → Restaurant → Event → ChangeLog → RestaurantRepository::save
//!    ↓           ↓          ↓
//! Intent    Validation    Fact
//! ```
//!
//! # Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use restaurant_booking::aggregate::Restaurant;
//! use restaurant_booking::domain::{DomainRuleViolation, RestaurantId, TableNumber};
//!
//! let id = RestaurantId::new("1").unwrap();
//! let mut restaurant = Restaurant::reconstruct(id, &[]);
//!
//! let event = restaurant.book_table(TableNumber::FIRST, Utc::now()).unwrap();
//! assert_eq!(event.name(), "booked_table");
//!
//! let again = restaurant.book_table(TableNumber::FIRST, Utc::now());
//! assert_eq!(again, Err(DomainRuleViolation::TableAlreadyBooked(TableNumber::FIRST)));
//! assert_eq!(restaurant.pending_changes().len(), 1);
//! ```
//!
//! # Design Principles
//!
//! ## 1. Command-Event Separation
//! - Commands express intent and can fail
//! - Events express facts and cannot fail
//!
//! ## 2. Total Event Application
//! - `apply_event(State, &Event) → State`
//! - Unknown event names are skipped so older builds can read newer histories
//!
//! ## 3. Time as Parameter
//! - Never call `Utc::now()` in domain logic
//! - Timestamps come in with the command

pub mod change_log;
pub mod commands;
pub mod handlers;
pub mod restaurant;

pub use change_log::ChangeLog;
pub use commands::*;
pub use handlers::*;
pub use restaurant::{apply_event, Restaurant, RestaurantState};
