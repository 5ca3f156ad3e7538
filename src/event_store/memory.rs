// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-Memory Event Store
//!
//! Stand-in for a durable store. Streams live in a map behind an async
//! `RwLock`; the version check and the write happen under one write guard so
//! appends stay atomic.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::RestaurantId;
use crate::errors::{BookingError, BookingResult};
use crate::event_store::EventStore;
use crate::events::Event;

/// Event store keeping every stream in process memory
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    streams: RwLock<HashMap<RestaurantId, Vec<Event>>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with existing histories
    pub fn with_streams(streams: impl IntoIterator<Item = (RestaurantId, Vec<Event>)>) -> Self {
        Self {
            streams: RwLock::new(streams.into_iter().collect()),
        }
    }

    /// Number of streams held
    pub async fn stream_count(&self) -> usize {
        self.streams.read().await.len()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn load(&self, id: &RestaurantId) -> BookingResult<Option<Vec<Event>>> {
        let streams = self.streams.read().await;
        let events = streams.get(id).cloned();

        debug!(
            restaurant = %id,
            found = events.is_some(),
            "loaded stream"
        );
        Ok(events)
    }

    async fn append(
        &self,
        id: &RestaurantId,
        events: &[Event],
        expected_version: u64,
    ) -> BookingResult<u64> {
        let mut streams = self.streams.write().await;
        let actual = streams.get(id).map(|s| s.len() as u64).unwrap_or(0);

        if actual != expected_version {
            return Err(BookingError::ConcurrencyConflict {
                expected: expected_version,
                actual,
            });
        }

        if let Some(foreign) = events.iter().find(|e| e.originator_id() != id) {
            return Err(BookingError::Storage(format!(
                "event {} belongs to restaurant {}, not {}",
                foreign.event_id(),
                foreign.originator_id(),
                id
            )));
        }

        if events.is_empty() {
            return Ok(actual);
        }

        let stream = streams.entry(id.clone()).or_default();
        stream.extend_from_slice(events);
        let new_version = stream.len() as u64;

        info!(
            restaurant = %id,
            appended = events.len(),
            version = new_version,
            "appended events"
        );
        Ok(new_version)
    }

    async fn version(&self, id: &RestaurantId) -> BookingResult<Option<u64>> {
        Ok(self.streams.read().await.get(id).map(|s| s.len() as u64))
    }
}
