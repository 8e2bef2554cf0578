//! Shared helpers for the database unit tests.

use crate::database::Database;
use crate::UserId;

/// Opens a fresh in-memory store.
///
/// # Panics
///
/// Panics if the store cannot be opened.
#[must_use]
pub fn create_test_database() -> Database {
    Database::open_in_memory().unwrap()
}

/// Registers alice, bob and carol, in that order.
///
/// # Panics
///
/// Panics if any registration fails.
pub fn create_test_users(db: &Database) -> [UserId; 3] {
    ["alice", "bob", "carol"].map(|name| {
        db.add_user(name, &format!("{name}@example.com"))
            .unwrap()
    })
}
