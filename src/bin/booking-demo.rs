// Copyright (c) 2025 - Cowboy AI, Inc.
//! Booking Demo
//!
//! Runs one restaurant through a booking round trip against the in-memory
//! store and prints what happened.
//!
//! Run with: cargo run --bin booking-demo
//!
//! Environment:
//! - `BOOKING_NOTIFICATION_CHANNEL` - `log` (default) or `memory`
//! - `BOOKING_LOG` - tracing filter directive (default `info`)

use anyhow::{Context, Result};
use chrono::Utc;
use restaurant_booking::{
    dispatch::HandlerRegistry,
    event_store::InMemoryEventStore,
    notification::{BookingNotifier, SenderRegistry},
    BookingConfig, RestaurantId, RestaurantRepository,
};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let config = BookingConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .context("invalid BOOKING_LOG filter")?,
        )
        .init();

    info!(service = %config.service_name, "starting booking demo");

    // Wire collaborators
    let senders = SenderRegistry::with_defaults();
    config
        .validate(&senders)
        .context("invalid booking configuration")?;
    let sender = senders.create(&config.notification_channel)?;
    info!(channel = sender.channel(), "notification sender selected");

    let dispatcher = HandlerRegistry::new().register_many(
        BookingNotifier::EVENT_NAMES,
        Arc::new(BookingNotifier::new(sender)),
    );
    let repository = RestaurantRepository::new(
        Arc::new(InMemoryEventStore::new()),
        Arc::new(dispatcher),
    );

    // Unknown restaurants load as absent
    let missing = RestaurantId::new("missing")?;
    let found = repository.get(&missing).await?;
    info!(restaurant = %missing, found = found.is_some(), "looked up restaurant");

    // Book the only table, then try again
    let id = RestaurantId::new("1")?;
    let mut restaurant = repository.get_or_new(&id).await?;

    let booked = restaurant.book_any_table(Utc::now())?;
    info!(event = booked.name(), originator = %booked.originator_id(), "table booked");

    match restaurant.book_any_table(Utc::now()) {
        Ok(event) => warn!(event = event.name(), "second booking unexpectedly accepted"),
        Err(violation) => info!(%violation, "second booking rejected"),
    }

    repository.save(&mut restaurant).await?;

    // Reload from history and keep going
    let mut reloaded = repository
        .get(&id)
        .await?
        .with_context(|| format!("restaurant {id} missing after save"))?;
    info!(
        version = reloaded.version(),
        free_tables = reloaded.floor_plan().free_count(),
        "reloaded restaurant"
    );

    reloaded.add_table(Utc::now())?;
    reloaded.book_any_table(Utc::now())?;
    reloaded.release_table(restaurant_booking::TableNumber::FIRST, Utc::now())?;
    repository.save(&mut reloaded).await?;

    info!(
        version = reloaded.version(),
        tables = reloaded.floor_plan().len(),
        free_tables = reloaded.floor_plan().free_count(),
        "done"
    );
    Ok(())
}
