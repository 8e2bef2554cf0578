//! Reservation engine.
//!
//! `reserve` and `unreserve` are unconditional single-statement updates:
//! `reserve` overwrites whoever held the item, and anybody may `unreserve`
//! any item. Authorization (only the holder may release) belongs to the
//! calling layer. Callers that need "first reservation wins" use
//! [`Database::reserve_if_free`], which does the check and the write under
//! one guard acquisition. [`Database::unreserve_if_held_by`] is the
//! matching release for callers that enforce holder-only unreserve.

use rusqlite::{params, OptionalExtension};

use crate::error::Result;
use crate::{ItemId, ReleaseOutcome, ReservationState, ReserveOutcome, UserId};

use super::connection::Database;
use super::schema::{RELEASE_IF_HELD, RESERVE_IF_FREE, SELECT_RESERVATION, UPDATE_RESERVATION};

impl Database {
    /// Reserves `item` for `user`, replacing any existing reservation.
    ///
    /// Returns `false` if no such item exists (nothing was changed).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ConstraintViolation`] if `user` does not
    /// exist, or a database error if the update fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use wishlist::Database;
    ///
    /// let db = Database::open_in_memory().unwrap();
    /// let alice = db.add_user("alice", "alice@example.com").unwrap();
    /// let bob = db.add_user("bob", "bob@example.com").unwrap();
    /// let carol = db.add_user("carol", "carol@example.com").unwrap();
    /// let item = db.add_item("Bike", None, alice, None).unwrap();
    ///
    /// db.reserve(bob, item).unwrap();
    /// db.reserve(carol, item).unwrap();
    /// assert_eq!(db.get_reservation_owner(item).unwrap(), Some(carol));
    /// ```
    pub fn reserve(&self, user: UserId, item: ItemId) -> Result<bool> {
        let conn = self.lock();
        let rows_affected = conn
            .prepare_cached(UPDATE_RESERVATION)?
            .execute(params![user, item])?;

        log::debug!("user {user} reserved item {item} ({rows_affected} row(s))");
        Ok(rows_affected > 0)
    }

    /// Clears the reservation on `item`, whoever held it.
    ///
    /// Unreserving an unreserved item is a successful no-op. Returns
    /// `false` only if no such item exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn unreserve(&self, item: ItemId) -> Result<bool> {
        let conn = self.lock();
        let rows_affected = conn
            .prepare_cached(UPDATE_RESERVATION)?
            .execute(params![None::<UserId>, item])?;

        log::debug!("released reservation on item {item} ({rows_affected} row(s))");
        Ok(rows_affected > 0)
    }

    /// Returns the user holding the reservation on `item`.
    ///
    /// `None` means either that the item is unreserved or that it does not
    /// exist; the two are indistinguishable here. Use
    /// [`Database::reservation_state`] to tell them apart.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_reservation_owner(&self, item: ItemId) -> Result<Option<UserId>> {
        Ok(self.reservation_state(item)?.owner())
    }

    /// Returns the reservation state of `item`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use wishlist::{Database, ItemId, ReservationState};
    ///
    /// let db = Database::open_in_memory().unwrap();
    /// let alice = db.add_user("alice", "alice@example.com").unwrap();
    /// let item = db.add_item("Bike", None, alice, None).unwrap();
    ///
    /// assert_eq!(db.reservation_state(item).unwrap(), ReservationState::Unreserved);
    /// assert_eq!(db.reservation_state(ItemId::new(999)).unwrap(), ReservationState::NotFound);
    /// ```
    pub fn reservation_state(&self, item: ItemId) -> Result<ReservationState> {
        let conn = self.lock();
        let row: Option<Option<UserId>> = conn
            .prepare_cached(SELECT_RESERVATION)?
            .query_row([item], |row| row.get(0))
            .optional()?;

        Ok(match row {
            None => ReservationState::NotFound,
            Some(None) => ReservationState::Unreserved,
            Some(Some(user)) => ReservationState::ReservedBy(user),
        })
    }

    /// Reserves `item` for `user` only if nobody holds it yet.
    ///
    /// The conditional update and the follow-up probe that tells a held
    /// item from a missing one run under the same guard acquisition, so
    /// exactly one of several concurrent callers can win.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ConstraintViolation`] if `user` does not
    /// exist, or a database error if a statement fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use wishlist::{Database, ReserveOutcome};
    ///
    /// let db = Database::open_in_memory().unwrap();
    /// let alice = db.add_user("alice", "alice@example.com").unwrap();
    /// let bob = db.add_user("bob", "bob@example.com").unwrap();
    /// let carol = db.add_user("carol", "carol@example.com").unwrap();
    /// let item = db.add_item("Bike", None, alice, None).unwrap();
    ///
    /// assert_eq!(db.reserve_if_free(bob, item).unwrap(), ReserveOutcome::Reserved);
    /// assert_eq!(db.reserve_if_free(carol, item).unwrap(), ReserveOutcome::AlreadyReserved);
    /// assert_eq!(db.get_reservation_owner(item).unwrap(), Some(bob));
    /// ```
    pub fn reserve_if_free(&self, user: UserId, item: ItemId) -> Result<ReserveOutcome> {
        let conn = self.lock();
        let rows_affected = conn
            .prepare_cached(RESERVE_IF_FREE)?
            .execute(params![user, item])?;

        if rows_affected > 0 {
            log::debug!("user {user} reserved free item {item}");
            return Ok(ReserveOutcome::Reserved);
        }

        let exists = conn
            .prepare_cached(SELECT_RESERVATION)?
            .query_row([item], |_| Ok(()))
            .optional()?
            .is_some();

        Ok(if exists {
            ReserveOutcome::AlreadyReserved
        } else {
            ReserveOutcome::ItemNotFound
        })
    }

    /// Clears the reservation on `item` only if `user` holds it.
    ///
    /// Like [`Database::reserve_if_free`], the conditional update and the
    /// probe explaining a miss share one guard acquisition, so a reservation
    /// taken by somebody else in the meantime is never cleared.
    ///
    /// # Errors
    ///
    /// Returns a database error if a statement fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use wishlist::{Database, ReleaseOutcome};
    ///
    /// let db = Database::open_in_memory().unwrap();
    /// let alice = db.add_user("alice", "alice@example.com").unwrap();
    /// let bob = db.add_user("bob", "bob@example.com").unwrap();
    /// let carol = db.add_user("carol", "carol@example.com").unwrap();
    /// let item = db.add_item("Bike", None, alice, Some(bob)).unwrap();
    ///
    /// assert_eq!(db.unreserve_if_held_by(carol, item).unwrap(), ReleaseOutcome::HeldByOther);
    /// assert_eq!(db.unreserve_if_held_by(bob, item).unwrap(), ReleaseOutcome::Released);
    /// assert_eq!(db.unreserve_if_held_by(bob, item).unwrap(), ReleaseOutcome::NotReserved);
    /// ```
    pub fn unreserve_if_held_by(&self, user: UserId, item: ItemId) -> Result<ReleaseOutcome> {
        let conn = self.lock();
        let rows_affected = conn
            .prepare_cached(RELEASE_IF_HELD)?
            .execute(params![item, user])?;

        if rows_affected > 0 {
            log::debug!("user {user} released item {item}");
            return Ok(ReleaseOutcome::Released);
        }

        let row: Option<Option<UserId>> = conn
            .prepare_cached(SELECT_RESERVATION)?
            .query_row([item], |row| row.get(0))
            .optional()?;

        Ok(match row {
            None => ReleaseOutcome::ItemNotFound,
            Some(None) => ReleaseOutcome::NotReserved,
            Some(Some(_)) => ReleaseOutcome::HeldByOther,
        })
    }
}
