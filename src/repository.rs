// Copyright (c) 2025 - Cowboy AI, Inc.
//! Restaurant Repository
//!
//! Owns the load/save cycle of the restaurant aggregate. Both collaborators
//! are injected at construction; nothing is looked up globally.
//!
//! # Transaction Semantics
//!
//! `save` is one transaction:
//! 1. Append pending changes to the store at the loaded version
//! 2. Clear the change log and advance the version (only after 1 succeeded)
//! 3. Dispatch the committed events in production order
//!
//! If step 1 fails, the aggregate keeps its pending changes and nothing is
//! dispatched.

use std::sync::Arc;
use tracing::{debug, info};

use crate::aggregate::Restaurant;
use crate::dispatch::EventDispatcher;
use crate::domain::RestaurantId;
use crate::errors::BookingResult;
use crate::event_store::EventStore;

/// Load and save restaurants through an event store
pub struct RestaurantRepository<S: ?Sized, D: ?Sized> {
    store: Arc<S>,
    dispatcher: Arc<D>,
}

impl<S, D> RestaurantRepository<S, D>
where
    S: EventStore + ?Sized,
    D: EventDispatcher + ?Sized,
{
    pub fn new(store: Arc<S>, dispatcher: Arc<D>) -> Self {
        Self { store, dispatcher }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Load a restaurant by replaying its history
    ///
    /// Returns `Ok(None)` when the store has no stream for `id`.
    pub async fn get(&self, id: &RestaurantId) -> BookingResult<Option<Restaurant>> {
        let Some(history) = self.store.load(id).await? else {
            debug!(restaurant = %id, "restaurant not found");
            return Ok(None);
        };

        Ok(Some(Restaurant::reconstruct(id.clone(), &history)))
    }

    /// Load a restaurant, or start a fresh one with no history
    pub async fn get_or_new(&self, id: &RestaurantId) -> BookingResult<Restaurant> {
        Ok(self
            .get(id)
            .await?
            .unwrap_or_else(|| Restaurant::new(id.clone())))
    }

    /// Persist pending changes, then dispatch them
    ///
    /// Saving a restaurant without pending changes does nothing.
    pub async fn save(&self, restaurant: &mut Restaurant) -> BookingResult<()> {
        if !restaurant.has_pending_changes() {
            debug!(restaurant = %restaurant.id(), "nothing to save");
            return Ok(());
        }

        let new_version = self
            .store
            .append(
                restaurant.id(),
                restaurant.pending_changes(),
                restaurant.version(),
            )
            .await?;

        let committed = restaurant.pending_changes().to_vec();
        restaurant.commit(new_version);

        info!(
            restaurant = %restaurant.id(),
            events = committed.len(),
            version = new_version,
            "saved restaurant"
        );

        self.dispatcher.dispatch(&committed).await;
        Ok(())
    }
}

impl<S: ?Sized, D: ?Sized> Clone for RestaurantRepository<S, D> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            dispatcher: Arc::clone(&self.dispatcher),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::NoopDispatcher;
    use crate::event_store::InMemoryEventStore;
    use chrono::Utc;

    fn repository() -> RestaurantRepository<InMemoryEventStore, NoopDispatcher> {
        RestaurantRepository::new(Arc::new(InMemoryEventStore::new()), Arc::new(NoopDispatcher))
    }

    #[tokio::test]
    async fn test_save_without_changes_is_noop() {
        let repo = repository();
        let mut restaurant = Restaurant::new(RestaurantId::new("1").unwrap());

        repo.save(&mut restaurant).await.unwrap();

        assert_eq!(repo.store().stream_count().await, 0);
    }

    #[tokio::test]
    async fn test_get_or_new_starts_fresh() {
        let repo = repository();
        let id = RestaurantId::new("1").unwrap();

        let restaurant = repo.get_or_new(&id).await.unwrap();

        assert_eq!(restaurant.id(), &id);
        assert_eq!(restaurant.version(), 0);
    }

    #[tokio::test]
    async fn test_save_advances_version() {
        let repo = repository();
        let id = RestaurantId::new("1").unwrap();
        let mut restaurant = repo.get_or_new(&id).await.unwrap();
        restaurant.add_table(Utc::now()).unwrap();
        restaurant.book_any_table(Utc::now()).unwrap();

        repo.save(&mut restaurant).await.unwrap();

        assert_eq!(restaurant.version(), 2);
        assert!(restaurant.pending_changes().is_empty());
    }
}
