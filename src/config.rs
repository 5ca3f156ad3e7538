// Copyright (c) 2025 - Cowboy AI, Inc.
//! Runtime configuration for wiring the booking components

use std::env;

use crate::errors::{BookingError, BookingResult};
use crate::notification::SenderRegistry;

/// Configuration for a booking process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfig {
    /// Notification channel key, resolved through [`SenderRegistry`]
    pub notification_channel: String,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
    /// Name reported in log output
    pub service_name: String,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            notification_channel: "log".to_string(),
            log_filter: "info".to_string(),
            service_name: "restaurant-booking".to_string(),
        }
    }
}

impl BookingConfig {
    pub const NOTIFICATION_CHANNEL_VAR: &'static str = "BOOKING_NOTIFICATION_CHANNEL";
    pub const LOG_FILTER_VAR: &'static str = "BOOKING_LOG";
    pub const SERVICE_NAME_VAR: &'static str = "BOOKING_SERVICE_NAME";

    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to [`Default`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &str, fallback: String| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or(fallback)
        };

        Self {
            notification_channel: read(Self::NOTIFICATION_CHANNEL_VAR, defaults.notification_channel),
            log_filter: read(Self::LOG_FILTER_VAR, defaults.log_filter),
            service_name: read(Self::SERVICE_NAME_VAR, defaults.service_name),
        }
    }

    /// Check the configured channel exists in `registry`
    pub fn validate(&self, registry: &SenderRegistry) -> BookingResult<()> {
        if self.service_name.is_empty() {
            return Err(BookingError::Configuration(
                "service name cannot be empty".to_string(),
            ));
        }
        registry.create(&self.notification_channel).map(|_| ())
    }
}
