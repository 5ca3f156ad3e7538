// Copyright (c) 2025 - Cowboy AI, Inc.
//! Booking Notifications
//!
//! Turns committed booking events into notifications and hands them to an
//! injected [`NotificationSender`]. No real delivery happens here: the senders
//! shipped with the crate write to the log or keep messages in memory.
//!
//! Senders are chosen by channel key through a [`SenderRegistry`] populated at
//! start-up:
//!
//! ```rust
//! use restaurant_booking::notification::SenderRegistry;
//!
//! let registry = SenderRegistry::with_defaults();
//! assert!(registry.create("log").is_ok());
//! assert!(registry.create("carrier-pigeon").is_err());
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::dispatch::EventHandler;
use crate::domain::{RestaurantId, TableNumber};
use crate::errors::{BookingError, BookingResult};
use crate::events::{Event, RestaurantEvent};

pub mod registry;
pub mod senders;

pub use registry::{SenderFactory, SenderRegistry};
pub use senders::{LogNotificationSender, RecordingNotificationSender};

/// What a notification is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    BookingConfirmed,
    BookingReleased,
}

/// Message handed to a sender
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub restaurant_id: RestaurantId,
    pub table: TableNumber,
    pub message: String,
}

impl Notification {
    /// Notification for a booking event, or None for events nobody is told about
    pub fn for_event(event: &Event) -> BookingResult<Option<Self>> {
        let decoded = RestaurantEvent::decode(event)?;

        let notification = match decoded {
            Some(RestaurantEvent::BookedTable(p)) => Self {
                kind: NotificationKind::BookingConfirmed,
                restaurant_id: event.originator_id().clone(),
                table: p.table,
                message: format!(
                    "Table {} at restaurant {} is booked",
                    p.table,
                    event.originator_id()
                ),
            },
            Some(RestaurantEvent::ReleasedTable(p)) => Self {
                kind: NotificationKind::BookingReleased,
                restaurant_id: event.originator_id().clone(),
                table: p.table,
                message: format!(
                    "Table {} at restaurant {} is free again",
                    p.table,
                    event.originator_id()
                ),
            },
            Some(RestaurantEvent::TableAdded(_)) | None => return Ok(None),
        };
        Ok(Some(notification))
    }
}

/// Notification delivery capability
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Channel key this sender serves
    fn channel(&self) -> &str;

    /// Deliver one notification
    async fn send(&self, notification: &Notification) -> BookingResult<()>;
}

/// Event handler notifying guests about bookings
pub struct BookingNotifier {
    sender: Arc<dyn NotificationSender>,
}

impl BookingNotifier {
    /// Event names this handler reacts to
    pub const EVENT_NAMES: [&'static str; 2] =
        [RestaurantEvent::BOOKED_TABLE, RestaurantEvent::RELEASED_TABLE];

    pub fn new(sender: Arc<dyn NotificationSender>) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl EventHandler for BookingNotifier {
    async fn handle(&self, event: &Event) -> BookingResult<()> {
        let Some(notification) = Notification::for_event(event)? else {
            return Ok(());
        };

        self.sender.send(&notification).await.map_err(|e| match e {
            BookingError::Notification(_) => e,
            other => BookingError::Notification(other.to_string()),
        })
    }
}
