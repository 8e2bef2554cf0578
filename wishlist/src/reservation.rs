//! Reservation state types.
//!
//! Each item carries at most one reservation. The store keeps it in a
//! single nullable column, so the state machine per item is just
//! `Unreserved` or `ReservedBy(user)`:
//!
//! ```text
//! Unreserved    --reserve(u)--> ReservedBy(u)
//! ReservedBy(u) --reserve(v)--> ReservedBy(v)   (overwrite)
//! ReservedBy(u) --unreserve---> Unreserved
//! Unreserved    --unreserve---> Unreserved      (no-op)
//! ```
//!
//! `reserve_if_free` and `unreserve_if_held_by` are the guarded variants:
//! the first only leaves `Unreserved`, the second only clears the caller's
//! own reservation.
//!
//! The operations themselves live on [`crate::Database`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::UserId;

/// Reservation state of an item, distinguishing a missing item from an
/// unreserved one.
///
/// # Examples
///
/// ```
/// use wishlist::{ReservationState, UserId};
///
/// let state = ReservationState::ReservedBy(UserId::new(4));
/// assert_eq!(state.owner(), Some(UserId::new(4)));
/// assert!(ReservationState::NotFound.owner().is_none());
/// assert!(ReservationState::Unreserved.owner().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "user_id", rename_all = "snake_case")]
pub enum ReservationState {
    /// No item with the given id exists.
    NotFound,
    /// The item exists and nobody has reserved it.
    Unreserved,
    /// The item is reserved by this user.
    ReservedBy(UserId),
}

impl ReservationState {
    /// Collapses the state to the reservation owner, if any.
    #[must_use]
    pub const fn owner(self) -> Option<UserId> {
        match self {
            Self::ReservedBy(user) => Some(user),
            Self::NotFound | Self::Unreserved => None,
        }
    }
}

impl fmt::Display for ReservationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not found"),
            Self::Unreserved => write!(f, "unreserved"),
            Self::ReservedBy(user) => write!(f, "reserved by user {user}"),
        }
    }
}

/// Result of a compare-and-set reservation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReserveOutcome {
    /// The item was free and is now reserved by the caller.
    Reserved,
    /// Somebody (possibly the caller) already holds the reservation.
    AlreadyReserved,
    /// No item with the given id exists.
    ItemNotFound,
}

impl fmt::Display for ReserveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reserved => write!(f, "reserved"),
            Self::AlreadyReserved => write!(f, "already reserved"),
            Self::ItemNotFound => write!(f, "item not found"),
        }
    }
}

/// Result of a holder-only release.
///
/// # Examples
///
/// ```
/// use wishlist::ReleaseOutcome;
///
/// assert_eq!(ReleaseOutcome::HeldByOther.to_string(), "held by another user");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseOutcome {
    /// The caller held the reservation and it is now cleared.
    Released,
    /// The item exists and nobody holds it.
    NotReserved,
    /// Another user holds the reservation; nothing was changed.
    HeldByOther,
    /// No item with the given id exists.
    ItemNotFound,
}

impl fmt::Display for ReleaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Released => write!(f, "released"),
            Self::NotReserved => write!(f, "not reserved"),
            Self::HeldByOther => write!(f, "held by another user"),
            Self::ItemNotFound => write!(f, "item not found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_display() {
        assert_eq!(ReservationState::NotFound.to_string(), "not found");
        assert_eq!(ReservationState::Unreserved.to_string(), "unreserved");
        assert_eq!(
            ReservationState::ReservedBy(UserId::new(9)).to_string(),
            "reserved by user 9"
        );
    }

    #[test]
    fn test_state_json() {
        let json = serde_json::to_value(ReservationState::ReservedBy(UserId::new(2))).unwrap();
        assert_eq!(json["state"], "reserved_by");
        assert_eq!(json["user_id"], 2);

        let json = serde_json::to_value(ReservationState::Unreserved).unwrap();
        assert_eq!(json["state"], "unreserved");
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(ReserveOutcome::Reserved.to_string(), "reserved");
        assert_eq!(ReserveOutcome::AlreadyReserved.to_string(), "already reserved");
        assert_eq!(ReserveOutcome::ItemNotFound.to_string(), "item not found");
    }

    #[test]
    fn test_release_outcome_json() {
        let json = serde_json::to_value(ReleaseOutcome::HeldByOther).unwrap();
        assert_eq!(json, "held_by_other");
        assert_eq!(ReleaseOutcome::NotReserved.to_string(), "not reserved");
    }
}
