//! Helpers for tests that need a populated table.

use cardtable_types::{PlayerId, DEFAULT_HAND_SIZE};

use crate::Table;

/// Creates a table whose shuffles are reproducible.
pub fn seeded_table(seed: u64) -> Table {
    Table::new(DEFAULT_HAND_SIZE, Some(seed))
}

/// Registers `names` in order and returns their identifiers.
pub fn register_players(table: &Table, names: &[&str]) -> Vec<PlayerId> {
    names
        .iter()
        .map(|name| {
            table
                .register(name)
                .expect("registration should be open")
        })
        .collect()
}
