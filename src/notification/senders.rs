// Copyright (c) 2025 - Cowboy AI, Inc.
//! Notification sender variants

use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};
use tracing::info;

use super::{Notification, NotificationSender};
use crate::errors::BookingResult;

/// Writes notifications to the tracing log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotificationSender;

impl LogNotificationSender {
    pub const CHANNEL: &'static str = "log";
}

#[async_trait]
impl NotificationSender for LogNotificationSender {
    fn channel(&self) -> &str {
        Self::CHANNEL
    }

    async fn send(&self, notification: &Notification) -> BookingResult<()> {
        info!(
            restaurant = %notification.restaurant_id,
            table = %notification.table,
            kind = ?notification.kind,
            "{}",
            notification.message
        );
        Ok(())
    }
}

/// Keeps every notification in memory
#[derive(Debug, Default)]
pub struct RecordingNotificationSender {
    sent: Mutex<Vec<Notification>>,
}

impl RecordingNotificationSender {
    pub const CHANNEL: &'static str = "memory";

    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything sent so far, in send order
    pub fn sent(&self) -> Vec<Notification> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl NotificationSender for RecordingNotificationSender {
    fn channel(&self) -> &str {
        Self::CHANNEL
    }

    async fn send(&self, notification: &Notification) -> BookingResult<()> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification.clone());
        Ok(())
    }
}
