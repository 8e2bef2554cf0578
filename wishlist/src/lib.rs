#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # wishlist
//!
//! Storage core for a shared gift wishlist.
//!
//! Users put items on the list; other users reserve items they intend to
//! buy. A reservation is visible to everybody except in one respect: the
//! creator of an item can see *that* it is reserved but never *by whom*.
//! Listings are therefore always projected for a viewer (see [`ItemView`]).
//!
//! ## Core Types
//!
//! - [`Database`] and [`DatabaseConfig`]: the thread-safe store
//! - [`User`], [`Item`] and [`ItemView`]: the data model
//! - [`ReservationState`], [`ReserveOutcome`] and [`ReleaseOutcome`]: reservation results
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use wishlist::Database;
//!
//! let db = Database::open_in_memory().unwrap();
//! let alice = db.add_user("alice", "alice@example.com").unwrap();
//! let bob = db.add_user("bob", "bob@example.com").unwrap();
//!
//! let item = db.add_item("Record player", None, alice, None).unwrap();
//! db.reserve(bob, item).unwrap();
//!
//! let seen_by_alice = &db.list_items(alice).unwrap()[0];
//! assert!(seen_by_alice.is_own && seen_by_alice.is_reserved);
//! assert!(!seen_by_alice.is_reserved_by_us);
//!
//! let seen_by_bob = &db.list_items(bob).unwrap()[0];
//! assert!(seen_by_bob.is_reserved_by_us);
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod item;
pub mod logging;
pub mod reservation;
pub mod user;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use item::{Item, ItemId, ItemView};
pub use logging::{init_logger, LogLevel, Logger};
pub use reservation::{ReleaseOutcome, ReservationState, ReserveOutcome};
pub use user::{User, UserId};
