// Copyright (c) 2025 - Cowboy AI, Inc.
//! Sender Registry
//!
//! Maps a channel key to a factory building the matching sender. Populated
//! once at start-up; the configured channel is looked up when wiring the
//! notifier.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::senders::{LogNotificationSender, RecordingNotificationSender};
use super::NotificationSender;
use crate::errors::{BookingError, BookingResult};

/// Constructor for a sender variant
pub type SenderFactory = fn() -> Arc<dyn NotificationSender>;

fn log_sender() -> Arc<dyn NotificationSender> {
    Arc::new(LogNotificationSender)
}

fn recording_sender() -> Arc<dyn NotificationSender> {
    Arc::new(RecordingNotificationSender::new())
}

/// Channel key → sender factory
#[derive(Debug, Clone, Default)]
pub struct SenderRegistry {
    factories: BTreeMap<String, SenderFactory>,
}

impl SenderRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the senders shipped in this crate
    pub fn with_defaults() -> Self {
        Self::new()
            .register(LogNotificationSender::CHANNEL, log_sender)
            .register(RecordingNotificationSender::CHANNEL, recording_sender)
    }

    /// Register (or replace) the factory for `channel`
    pub fn register(mut self, channel: impl Into<String>, factory: SenderFactory) -> Self {
        self.factories.insert(channel.into(), factory);
        self
    }

    /// Build the sender for `channel`
    pub fn create(&self, channel: &str) -> BookingResult<Arc<dyn NotificationSender>> {
        self.factories
            .get(channel)
            .map(|factory| factory())
            .ok_or_else(|| {
                BookingError::Configuration(format!(
                    "unknown notification channel '{}', expected one of: {}",
                    channel,
                    self.channels().join(", ")
                ))
            })
    }

    /// Registered channel keys, sorted
    pub fn channels(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_log_and_memory() {
        let registry = SenderRegistry::with_defaults();

        assert_eq!(registry.channels(), vec!["log", "memory"]);
        assert_eq!(registry.create("memory").unwrap().channel(), "memory");
    }

    #[test]
    fn test_unknown_channel_is_configuration_error() {
        let result = SenderRegistry::with_defaults().create("sms");

        match result {
            Err(BookingError::Configuration(message)) => {
                assert!(message.contains("sms"));
                assert!(message.contains("log, memory"));
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("unknown channel must not resolve"),
        }
    }

    #[test]
    fn test_register_extends_without_touching_lookup() {
        let registry = SenderRegistry::new().register("audit", log_sender);

        assert!(registry.create("audit").is_ok());
        assert!(registry.create("log").is_err());
    }
}
