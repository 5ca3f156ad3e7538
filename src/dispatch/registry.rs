// Copyright (c) 2025 - Cowboy AI, Inc.
//! Handler Registry
//!
//! Explicit mapping from event name to handlers, filled in at start-up and
//! consulted on every dispatch. Adding a new reaction means registering a
//! handler, not touching the dispatch loop.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

use super::{EventDispatcher, EventHandler};
use crate::events::Event;

/// Dispatcher routing events by name
///
/// For each event, name-specific handlers run first in registration order,
/// then catch-all handlers in registration order.
#[derive(Default)]
pub struct HandlerRegistry {
    by_name: HashMap<String, Vec<Arc<dyn EventHandler>>>,
    catch_all: Vec<Arc<dyn EventHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for events named `name`
    pub fn register(mut self, name: impl Into<String>, handler: Arc<dyn EventHandler>) -> Self {
        let name = name.into();
        debug!(name = %name, "registered event handler");
        self.by_name.entry(name).or_default().push(handler);
        self
    }

    /// Register `handler` for every name in `names`
    pub fn register_many<I, S>(mut self, names: I, handler: Arc<dyn EventHandler>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self = self.register(name, Arc::clone(&handler));
        }
        self
    }

    /// Register `handler` for all events
    pub fn register_all(mut self, handler: Arc<dyn EventHandler>) -> Self {
        self.catch_all.push(handler);
        self
    }

    /// Handlers that would receive an event named `name`
    pub fn handlers_for(&self, name: &str) -> Vec<Arc<dyn EventHandler>> {
        self.by_name
            .get(name)
            .into_iter()
            .flatten()
            .chain(self.catch_all.iter())
            .cloned()
            .collect()
    }

    /// Number of registrations, name-specific and catch-all
    pub fn len(&self) -> usize {
        self.by_name.values().map(Vec::len).sum::<usize>() + self.catch_all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl EventDispatcher for HandlerRegistry {
    async fn dispatch(&self, events: &[Event]) {
        for event in events {
            let handlers = self.handlers_for(event.name());
            trace!(
                event_id = %event.event_id(),
                name = event.name(),
                handlers = handlers.len(),
                "dispatching event"
            );

            for handler in handlers {
                if let Err(error) = handler.handle(event).await {
                    handler.handle_error(event, error).await;
                }
            }
        }
    }
}
