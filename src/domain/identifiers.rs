// Copyright (c) 2025 - Cowboy AI, Inc.
//! Restaurant and Table Identifier Value Objects

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Identifier validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("Restaurant identifier is empty")]
    EmptyIdentifier,

    #[error("Restaurant identifier exceeds maximum length of 128 characters: {0}")]
    IdentifierTooLong(usize),

    #[error("Restaurant identifier has surrounding whitespace: {0:?}")]
    UntrimmedIdentifier(String),

    #[error("Table numbers start at 1")]
    ZeroTableNumber,
}

/// Stable identifier of a restaurant aggregate
///
/// Identifiers are opaque strings chosen by the caller (`"1"`, `"le-bistro"`).
/// Invariants:
/// - Non-empty
/// - At most 128 characters
/// - No leading or trailing whitespace
///
/// # Examples
///
/// ```rust
/// use restaurant_booking::domain::RestaurantId;
///
/// let id = RestaurantId::new("1").unwrap();
/// assert_eq!(id.as_str(), "1");
///
/// assert!(RestaurantId::new("").is_err());
/// assert!(RestaurantId::new(" 1").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RestaurantId(String);

impl RestaurantId {
    /// Maximum identifier length
    pub const MAX_LENGTH: usize = 128;

    /// Create a new identifier with validation
    pub fn new(id: impl Into<String>) -> Result<Self, ValueError> {
        let id = id.into();

        if id.is_empty() {
            return Err(ValueError::EmptyIdentifier);
        }

        if id.len() > Self::MAX_LENGTH {
            return Err(ValueError::IdentifierTooLong(id.len()));
        }

        if id.trim() != id {
            return Err(ValueError::UntrimmedIdentifier(id));
        }

        Ok(Self(id))
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RestaurantId {
    type Error = ValueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RestaurantId> for String {
    fn from(id: RestaurantId) -> Self {
        id.0
    }
}

/// Number of a table on the restaurant floor plan (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TableNumber(u32);

impl TableNumber {
    /// The table every restaurant opens with
    pub const FIRST: TableNumber = TableNumber(1);

    /// Create a table number, rejecting zero
    pub fn new(number: u32) -> Result<Self, ValueError> {
        if number == 0 {
            return Err(ValueError::ZeroTableNumber);
        }
        Ok(Self(number))
    }

    /// Raw table number
    pub fn get(self) -> u32 {
        self.0
    }

    /// The number following this one, or None past `u32::MAX`
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for TableNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for TableNumber {
    type Error = ValueError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TableNumber> for u32 {
    fn from(table: TableNumber) -> Self {
        table.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("1" ; "numeric")]
    #[test_case("le-bistro" ; "slug")]
    #[test_case("Chez Marie" ; "inner whitespace")]
    fn test_valid_restaurant_ids(raw: &str) {
        let id = RestaurantId::new(raw).unwrap();
        assert_eq!(id.as_str(), raw);
        assert_eq!(id.to_string(), raw);
    }

    #[test_case("", ValueError::EmptyIdentifier ; "empty")]
    #[test_case(" 1", ValueError::UntrimmedIdentifier(" 1".to_string()) ; "leading space")]
    #[test_case("1\n", ValueError::UntrimmedIdentifier("1\n".to_string()) ; "trailing newline")]
    fn test_invalid_restaurant_ids(raw: &str, expected: ValueError) {
        assert_eq!(RestaurantId::new(raw), Err(expected));
    }

    #[test]
    fn test_restaurant_id_too_long() {
        let raw = "x".repeat(RestaurantId::MAX_LENGTH + 1);
        assert_eq!(
            RestaurantId::new(raw),
            Err(ValueError::IdentifierTooLong(129))
        );
    }

    #[test]
    fn test_restaurant_id_serde_validates() {
        let id: RestaurantId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(id.as_str(), "42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");

        assert!(serde_json::from_str::<RestaurantId>("\"\"").is_err());
    }

    #[test]
    fn test_table_number_rejects_zero() {
        assert_eq!(TableNumber::new(0), Err(ValueError::ZeroTableNumber));
        assert!(serde_json::from_str::<TableNumber>("0").is_err());
    }

    #[test]
    fn test_table_number_next() {
        assert_eq!(TableNumber::FIRST.next(), Some(TableNumber::new(2).unwrap()));
        assert_eq!(TableNumber::FIRST.get(), 1);
        assert_eq!(TableNumber::new(u32::MAX).unwrap().next(), None);
    }
}
