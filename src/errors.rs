// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for booking operations outside the aggregate boundary

use thiserror::Error;

use crate::domain::DomainRuleViolation;

/// Errors that can occur while loading, saving or dispatching restaurants
#[derive(Debug, Error)]
pub enum BookingError {
    /// A command was rejected by the aggregate
    #[error("Domain rule violation: {0}")]
    Rule(#[from] DomainRuleViolation),

    /// Stream changed since the aggregate was loaded
    #[error("Concurrency conflict: expected version {expected}, got {actual}")]
    ConcurrencyConflict { expected: u64, actual: u64 },

    /// Event store error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Notification delivery error
    #[error("Notification error: {0}")]
    Notification(String),
}

/// Result type for booking operations
pub type BookingResult<T> = Result<T, BookingError>;

impl From<serde_json::Error> for BookingError {
    fn from(err: serde_json::Error) -> Self {
        BookingError::Serialization(err.to_string())
    }
}
