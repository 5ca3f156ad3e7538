// Copyright (c) 2025 - Cowboy AI, Inc.
//! Floor Plan - the set of tables in a restaurant and their booking status

use std::collections::BTreeMap;

use super::identifiers::TableNumber;

/// Booking status of a single table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableStatus {
    /// Table can be booked
    Free,
    /// Table is taken
    Booked,
}

/// Immutable floor plan value
///
/// Tables are kept ordered by number so that "first free table" is stable
/// across replays. Transformations return a new plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorPlan {
    tables: BTreeMap<TableNumber, TableStatus>,
}

impl FloorPlan {
    /// Floor plan of a restaurant with no history: a single free table
    pub fn opening() -> Self {
        let mut tables = BTreeMap::new();
        tables.insert(TableNumber::FIRST, TableStatus::Free);
        Self { tables }
    }

    /// Status of a table, or None if it is not on the plan
    pub fn status(&self, table: TableNumber) -> Option<TableStatus> {
        self.tables.get(&table).copied()
    }

    pub fn contains(&self, table: TableNumber) -> bool {
        self.tables.contains_key(&table)
    }

    pub fn is_booked(&self, table: TableNumber) -> bool {
        self.status(table) == Some(TableStatus::Booked)
    }

    /// Lowest-numbered free table
    pub fn first_free(&self) -> Option<TableNumber> {
        self.tables
            .iter()
            .find(|(_, status)| **status == TableStatus::Free)
            .map(|(table, _)| *table)
    }

    /// Number the next added table will get
    ///
    /// None once the highest possible table number is taken.
    pub fn next_table_number(&self) -> Option<TableNumber> {
        match self.tables.keys().next_back() {
            Some(last) => last.next(),
            None => Some(TableNumber::FIRST),
        }
    }

    /// Total number of tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Number of free tables
    pub fn free_count(&self) -> usize {
        self.tables
            .values()
            .filter(|status| **status == TableStatus::Free)
            .count()
    }

    /// Iterate tables in number order
    pub fn iter(&self) -> impl Iterator<Item = (TableNumber, TableStatus)> + '_ {
        self.tables.iter().map(|(table, status)| (*table, *status))
    }

    /// New plan with `table` set to `status`
    ///
    /// Tables not on the plan are left out; replay never invents tables.
    pub fn with_status(&self, table: TableNumber, status: TableStatus) -> Self {
        let mut tables = self.tables.clone();
        if let Some(entry) = tables.get_mut(&table) {
            *entry = status;
        }
        Self { tables }
    }

    /// New plan with `table` added as free (no-op if already present)
    pub fn with_table(&self, table: TableNumber) -> Self {
        let mut tables = self.tables.clone();
        tables.entry(table).or_insert(TableStatus::Free);
        Self { tables }
    }
}

impl Default for FloorPlan {
    fn default() -> Self {
        Self::opening()
    }
}
