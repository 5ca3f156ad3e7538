// Copyright (c) 2025 - Cowboy AI, Inc.
//! Restaurant Domain Events
//!
//! Events are immutable facts representing state changes that have occurred.
//!
//! # Event Sourcing Principles
//!
//! 1. **Events are immutable**: Once created, events never change
//! 2. **Events are past tense**: `booked_table`, not `book_table`
//! 3. **Events carry their origin**: every event names its `originator_id`
//! 4. **Events are versioned**: `event_version` for schema evolution
//!
//! # Forward Compatibility
//!
//! The envelope keeps its payload as raw JSON. A history containing names this
//! build does not know still deserializes; the aggregate skips those events.
//!
//! # Module Organization
//!
//! - [`envelope`] - the [`Event`] record stored and dispatched
//! - [`restaurant`] - typed [`RestaurantEvent`] view for known names

pub mod envelope;
pub mod restaurant;

pub use envelope::Event;
pub use restaurant::{RestaurantEvent, TablePayload};
