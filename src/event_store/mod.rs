// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event Store Abstraction
//!
//! The persistence capability the repository needs, and nothing more.
//!
//! # Event Store Requirements
//!
//! 1. **Append-Only**: Events are never updated or deleted
//! 2. **Ordered**: Events keep their order within a restaurant's stream
//! 3. **Atomic**: An append succeeds or fails as a whole
//! 4. **Optimistic Concurrency**: Appends state the version they build on
//!
//! # Example
//!
//! ```rust
//! use restaurant_booking::event_store::{EventStore, InMemoryEventStore};
//! use restaurant_booking::domain::RestaurantId;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let store = InMemoryEventStore::new();
//! let missing = RestaurantId::new("missing").unwrap();
//!
//! assert!(store.load(&missing).await.unwrap().is_none());
//! # });
//! ```

use async_trait::async_trait;

use crate::domain::RestaurantId;
use crate::errors::BookingResult;
use crate::events::Event;

pub mod memory;

pub use memory::InMemoryEventStore;

/// Event Store trait for persisting and retrieving restaurant events
///
/// Implementations must guarantee:
/// - **Atomicity**: `append` writes all events or none
/// - **Consistency**: Event order is preserved on read
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Read a restaurant's full history
    ///
    /// Returns `None` when no stream exists for `id`. An unknown restaurant is
    /// not an error.
    async fn load(&self, id: &RestaurantId) -> BookingResult<Option<Vec<Event>>>;

    /// Append events to a restaurant's stream
    ///
    /// # Arguments
    ///
    /// * `id` - The restaurant these events belong to
    /// * `events` - Events to append, in production order
    /// * `expected_version` - Number of events the caller believes are stored
    ///
    /// # Returns
    ///
    /// The new version (stream length) after appending
    ///
    /// # Errors
    ///
    /// - `ConcurrencyConflict` if `expected_version` does not match
    /// - `Storage` if writing fails
    async fn append(
        &self,
        id: &RestaurantId,
        events: &[Event],
        expected_version: u64,
    ) -> BookingResult<u64>;

    /// Current stream length, or `None` if no stream exists
    async fn version(&self, id: &RestaurantId) -> BookingResult<Option<u64>> {
        Ok(self.load(id).await?.map(|events| events.len() as u64))
    }
}
