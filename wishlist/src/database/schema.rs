//! Database schema definitions and SQL constants.
//!
//! Referential integrity lives here, in the DDL: uniqueness of user names
//! and emails and the two foreign keys from `items` into `users` are
//! enforced by `SQLite` itself. Application code never re-checks them.

use rusqlite::Connection;

use crate::error::Result;

/// Enables foreign key enforcement. `SQLite` keeps this per connection.
pub(super) const ENABLE_FOREIGN_KEYS: &str = "PRAGMA foreign_keys = ON";

/// SQL statement to create the users table.
pub(super) const CREATE_USERS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY,
        name TEXT UNIQUE NOT NULL,
        email TEXT UNIQUE NOT NULL
    )";

/// SQL statement to create the items table.
///
/// `link` stores the empty string for "no link". `reserved_by` is the only
/// nullable column; NULL means the item is unreserved.
pub(super) const CREATE_ITEMS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS items (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        link TEXT NOT NULL,
        created_by INTEGER NOT NULL,
        reserved_by INTEGER,
        FOREIGN KEY (reserved_by) REFERENCES users(id),
        FOREIGN KEY (created_by) REFERENCES users(id)
    )";

pub(super) const INSERT_USER: &str = "INSERT INTO users (name, email) VALUES (?1, ?2)";

pub(super) const SELECT_USER_BY_EMAIL: &str = "SELECT id, name, email FROM users WHERE email = ?1";

pub(super) const SELECT_USER_BY_ID: &str = "SELECT id, name, email FROM users WHERE id = ?1";

pub(super) const INSERT_ITEM: &str = r"
    INSERT INTO items (name, link, created_by, reserved_by)
    VALUES (?1, ?2, ?3, ?4)
";

/// Only the creator's delete matches a row.
pub(super) const DELETE_ITEM: &str = "DELETE FROM items WHERE id = ?1 AND created_by = ?2";

pub(super) const LIST_ITEMS: &str = r"
    SELECT id, name, link, created_by, reserved_by
    FROM items
    ORDER BY id
";

/// Shared by reserve (user id) and unreserve (NULL).
pub(super) const UPDATE_RESERVATION: &str = "UPDATE items SET reserved_by = ?1 WHERE id = ?2";

pub(super) const RESERVE_IF_FREE: &str =
    "UPDATE items SET reserved_by = ?1 WHERE id = ?2 AND reserved_by IS NULL";

pub(super) const RELEASE_IF_HELD: &str =
    "UPDATE items SET reserved_by = NULL WHERE id = ?1 AND reserved_by = ?2";

pub(super) const SELECT_RESERVATION: &str = "SELECT reserved_by FROM items WHERE id = ?1";

/// Creates both tables if they are missing.
///
/// Safe to run on every startup against an existing store.
///
/// # Errors
///
/// Returns an error if any statement fails to execute.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use wishlist::database::initialize_schema;
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// initialize_schema(&conn).unwrap();
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(ENABLE_FOREIGN_KEYS)?;
    conn.execute(CREATE_USERS_TABLE, [])?;
    conn.execute(CREATE_ITEMS_TABLE, [])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn test_initialize_schema_creates_tables() {
        let conn = create_test_connection();

        let tables: i32 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('users', 'items')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 2);
    }

    #[test]
    fn test_initialize_schema_is_idempotent() {
        let conn = create_test_connection();
        conn.execute(INSERT_USER, ["alice", "alice@example.com"])
            .unwrap();

        initialize_schema(&conn).unwrap();

        let users: i32 = conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .unwrap();
        assert_eq!(users, 1);
    }

    #[test]
    fn test_foreign_keys_enabled() {
        let conn = create_test_connection();
        let enabled: i32 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);

        let result = conn.execute(INSERT_ITEM, rusqlite::params!["x", "", 42, None::<i64>]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unique_email() {
        let conn = create_test_connection();
        conn.execute(INSERT_USER, ["alice", "same@example.com"])
            .unwrap();
        let result = conn.execute(INSERT_USER, ["bob", "same@example.com"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_reserved_by_nullable_link_required() {
        let conn = create_test_connection();
        conn.execute(INSERT_USER, ["alice", "alice@example.com"])
            .unwrap();

        conn.execute(INSERT_ITEM, rusqlite::params!["x", "", 1, None::<i64>])
            .unwrap();
        let result = conn.execute(
            INSERT_ITEM,
            rusqlite::params!["y", None::<String>, 1, None::<i64>],
        );
        assert!(result.is_err());
    }
}
