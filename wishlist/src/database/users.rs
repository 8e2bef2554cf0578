//! User repository.
//!
//! Registration and identity lookups used by the authentication layer.

use rusqlite::{params, OptionalExtension, Row};

use crate::error::Result;
use crate::{User, UserId};

use super::connection::Database;
use super::schema::{INSERT_USER, SELECT_USER_BY_EMAIL, SELECT_USER_BY_ID};

/// Expects row fields in this order: id, name, email
fn row_to_user(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
    })
}

impl Database {
    /// Registers a new user and returns the generated id.
    ///
    /// No format checking is done on either argument.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ConstraintViolation`] if the name or the
    /// email is already taken, or a database error if the insert fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use wishlist::Database;
    ///
    /// let db = Database::open_in_memory().unwrap();
    /// let id = db.add_user("alice", "alice@example.com").unwrap();
    ///
    /// let user = db.get_user_by_email("alice@example.com").unwrap().unwrap();
    /// assert_eq!(user.id, id);
    ///
    /// assert!(db.add_user("alice2", "alice@example.com").unwrap_err().is_constraint_violation());
    /// ```
    pub fn add_user(&self, name: &str, email: &str) -> Result<UserId> {
        let conn = self.lock();
        let id = conn
            .prepare_cached(INSERT_USER)?
            .insert(params![name, email])?;

        log::debug!("registered user {id} <{email}>");
        Ok(UserId::new(id))
    }

    /// Looks up a user by email.
    ///
    /// # Errors
    ///
    /// Returns an error only if the query itself fails; an unknown email
    /// yields `Ok(None)`.
    pub fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let conn = self.lock();
        let user = conn
            .prepare_cached(SELECT_USER_BY_EMAIL)?
            .query_row([email], row_to_user)
            .optional()?;
        Ok(user)
    }

    /// Looks up a user by id.
    ///
    /// # Errors
    ///
    /// Returns an error only if the query itself fails; an unknown id
    /// yields `Ok(None)`.
    pub fn get_user_by_id(&self, id: UserId) -> Result<Option<User>> {
        let conn = self.lock();
        let user = conn
            .prepare_cached(SELECT_USER_BY_ID)?
            .query_row([id], row_to_user)
            .optional()?;
        Ok(user)
    }
}
