//! Persistent storage for users, items and reservations.
//!
//! The store is a single `SQLite` connection guarded by a mutex. Every
//! operation is a method on [`Database`] taking `&self`, so one instance
//! can be shared between threads behind an `Arc`.
//!
//! # Examples
//!
//! ```no_run
//! use wishlist::database::{Database, DatabaseConfig};
//!
//! let db = Database::open(DatabaseConfig::new("/tmp/wishlist.db")).unwrap();
//!
//! let alice = db.add_user("alice", "alice@example.com").unwrap();
//! let bob = db.add_user("bob", "bob@example.com").unwrap();
//! let item = db.add_item("Tea pot", None, alice, None).unwrap();
//!
//! db.reserve(bob, item).unwrap();
//! for view in db.list_items(alice).unwrap() {
//!     println!("{} reserved={}", view.name, view.is_reserved);
//! }
//! ```

mod config;
mod connection;
mod items;
mod reservations;
mod schema;
mod users;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{default_data_dir, DatabaseConfig, DATABASE_FILE_NAME};
pub use connection::Database;
pub use schema::initialize_schema;
