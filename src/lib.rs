// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event-sourced restaurant table booking
//!
//! A restaurant aggregate whose state is a fold over its event history and
//! whose every change is recorded as an event, plus the capability interfaces
//! it is persisted and observed through.
//!
//! ```text
//! Command → Restaurant → Event → RestaurantRepository::save
//!                                   ↓                  ↓
//!                            EventStore::append   EventDispatcher::dispatch
//! ```
//!
//! # Modules
//!
//! - [`domain`] - identifiers, floor plan and booking rules
//! - [`events`] - the immutable [`Event`] envelope and typed restaurant events
//! - [`aggregate`] - [`Restaurant`], commands and pure handlers
//! - [`event_store`] - persistence capability and an in-memory stand-in
//! - [`dispatch`] - delivery capability and the name-keyed [`HandlerRegistry`]
//! - [`notification`] - booking notifications over pluggable senders
//! - [`repository`] - load/save cycle tying it together

pub mod aggregate;
pub mod config;
pub mod dispatch;
pub mod domain;
pub mod errors;
pub mod event_store;
pub mod events;
pub mod notification;
pub mod repository;

// Re-export commonly used types
pub use aggregate::{Restaurant, RestaurantCommand, RestaurantState};
pub use config::BookingConfig;
pub use dispatch::{EventDispatcher, EventHandler, HandlerRegistry};
pub use domain::{DomainRuleViolation, RestaurantId, TableNumber};
pub use errors::{BookingError, BookingResult};
pub use event_store::{EventStore, InMemoryEventStore};
pub use events::{Event, RestaurantEvent};
pub use repository::RestaurantRepository;
