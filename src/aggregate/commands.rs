// Copyright (c) 2025 - Cowboy AI, Inc.
//! Commands for the Restaurant Aggregate
//!
//! Commands express intent and can be rejected by booking rules. Events
//! express facts and cannot fail.
//!
//! # Time Handling
//!
//! Every command carries an explicit `timestamp`. Domain code never reads the
//! clock; the caller decides what "now" is.

use chrono::{DateTime, Utc};

use crate::domain::TableNumber;

/// Book a specific table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookTableCommand {
    /// Table to book
    pub table: TableNumber,

    /// Timestamp when command was issued
    pub timestamp: DateTime<Utc>,
}

/// Book the lowest-numbered free table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookAnyTableCommand {
    pub timestamp: DateTime<Utc>,
}

/// Free a booked table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseTableCommand {
    /// Table to release
    pub table: TableNumber,

    pub timestamp: DateTime<Utc>,
}

/// Add a table to the floor plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddTableCommand {
    pub timestamp: DateTime<Utc>,
}

/// Any command the restaurant accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestaurantCommand {
    BookTable(BookTableCommand),
    BookAnyTable(BookAnyTableCommand),
    ReleaseTable(ReleaseTableCommand),
    AddTable(AddTableCommand),
}

impl RestaurantCommand {
    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BookTable(_) => "book_table",
            Self::BookAnyTable(_) => "book_any_table",
            Self::ReleaseTable(_) => "release_table",
            Self::AddTable(_) => "add_table",
        }
    }
}

impl From<BookTableCommand> for RestaurantCommand {
    fn from(command: BookTableCommand) -> Self {
        Self::BookTable(command)
    }
}

impl From<BookAnyTableCommand> for RestaurantCommand {
    fn from(command: BookAnyTableCommand) -> Self {
        Self::BookAnyTable(command)
    }
}

impl From<ReleaseTableCommand> for RestaurantCommand {
    fn from(command: ReleaseTableCommand) -> Self {
        Self::ReleaseTable(command)
    }
}

impl From<AddTableCommand> for RestaurantCommand {
    fn from(command: AddTableCommand) -> Self {
        Self::AddTable(command)
    }
}
