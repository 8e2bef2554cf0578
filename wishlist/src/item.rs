//! Item types and the viewer-relative projection.
//!
//! An [`Item`] is the raw stored row. Callers never receive it directly from
//! listings; instead they get an [`ItemView`], which replaces the identity
//! of the reserving user with three booleans computed for one viewer. A
//! creator can therefore see *that* their item is reserved, never *by whom*.

use std::fmt;
use std::str::FromStr;

use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

use crate::UserId;

/// Store-generated identifier of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    /// Wraps a raw row id.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw row id.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl ToSql for ItemId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0))
    }
}

impl FromSql for ItemId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        i64::column_result(value).map(Self)
    }
}

/// A stored wishlist item.
///
/// `reserved_by` is `None` while the item is unreserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Store-generated identifier.
    pub id: ItemId,
    /// What is wished for.
    pub name: String,
    /// Optional shop or product link.
    pub link: Option<String>,
    /// The user who put the item on the list.
    pub created_by: UserId,
    /// The user currently holding the reservation, if any.
    pub reserved_by: Option<UserId>,
}

impl Item {
    /// Projects this item for `viewer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wishlist::{Item, ItemId, UserId};
    ///
    /// let creator = UserId::new(1);
    /// let buyer = UserId::new(2);
    /// let item = Item {
    ///     id: ItemId::new(10),
    ///     name: "Kettle".into(),
    ///     link: None,
    ///     created_by: creator,
    ///     reserved_by: Some(buyer),
    /// };
    ///
    /// let seen_by_creator = item.view_for(creator);
    /// assert!(seen_by_creator.is_own);
    /// assert!(seen_by_creator.is_reserved);
    /// assert!(!seen_by_creator.is_reserved_by_us);
    ///
    /// let seen_by_buyer = item.view_for(buyer);
    /// assert!(!seen_by_buyer.is_own);
    /// assert!(seen_by_buyer.is_reserved_by_us);
    /// ```
    #[must_use]
    pub fn view_for(&self, viewer: UserId) -> ItemView {
        ItemView {
            id: self.id,
            name: self.name.clone(),
            link: self.link.clone(),
            is_own: self.created_by == viewer,
            is_reserved: self.reserved_by.is_some(),
            is_reserved_by_us: self.reserved_by == Some(viewer),
        }
    }

    /// Consuming variant of [`Item::view_for`] used when materializing listings.
    #[must_use]
    pub fn into_view(self, viewer: UserId) -> ItemView {
        ItemView {
            is_own: self.created_by == viewer,
            is_reserved: self.reserved_by.is_some(),
            is_reserved_by_us: self.reserved_by == Some(viewer),
            id: self.id,
            name: self.name,
            link: self.link,
        }
    }
}

/// An item as seen by one viewer.
///
/// Deliberately carries no reserving-user identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemView {
    /// Store-generated identifier.
    pub id: ItemId,
    /// What is wished for.
    pub name: String,
    /// Optional shop or product link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// The viewer created this item.
    pub is_own: bool,
    /// Somebody holds a reservation on this item.
    pub is_reserved: bool,
    /// The viewer holds the reservation on this item.
    pub is_reserved_by_us: bool,
}


#[cfg(test)]
mod proptests;
