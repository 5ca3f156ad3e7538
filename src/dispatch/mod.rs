// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event Dispatch
//!
//! Delivers newly committed events to interested handlers.
//!
//! # Delivery Semantics
//!
//! - **Fire**: `dispatch` returns nothing; the caller does not wait on outcomes
//! - **Ordered**: events are delivered in the order they were produced
//! - **Handler-owned failures**: a failing handler reports through
//!   [`EventHandler::handle_error`] and never stops delivery to others
//!
//! # Architecture
//!
//! ```text
//! RestaurantRepository::save → EventDispatcher::dispatch(&[Event])
//!                                        ↓
//!                               HandlerRegistry (name → handlers)
//!                                        ↓
//!                               EventHandler::handle(&Event)
//! ```

use async_trait::async_trait;
use tracing::warn;

use crate::errors::{BookingError, BookingResult};
use crate::events::Event;

pub mod registry;

pub use registry::HandlerRegistry;

/// Event handler trait
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Handle a delivered event
    async fn handle(&self, event: &Event) -> BookingResult<()>;

    /// Handle an error returned by [`handle`](Self::handle)
    async fn handle_error(&self, event: &Event, error: BookingError) {
        warn!(
            event_id = %event.event_id(),
            name = event.name(),
            error = %error,
            "event handler failed"
        );
    }
}

/// Function-based event handler
pub struct FnEventHandler<F>
where
    F: Fn(&Event) -> BookingResult<()> + Send + Sync,
{
    handler: F,
}

impl<F> FnEventHandler<F>
where
    F: Fn(&Event) -> BookingResult<()> + Send + Sync,
{
    pub fn new(handler: F) -> Self {
        Self { handler }
    }
}

#[async_trait]
impl<F> EventHandler for FnEventHandler<F>
where
    F: Fn(&Event) -> BookingResult<()> + Send + Sync,
{
    async fn handle(&self, event: &Event) -> BookingResult<()> {
        (self.handler)(event)
    }
}

/// Dispatch capability consumed by the repository
#[async_trait]
pub trait EventDispatcher: Send + Sync {
    /// Deliver `events` in order to every interested handler
    async fn dispatch(&self, events: &[Event]);
}

/// Dispatcher that delivers nowhere
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDispatcher;

#[async_trait]
impl EventDispatcher for NoopDispatcher {
    async fn dispatch(&self, _events: &[Event]) {}
}
