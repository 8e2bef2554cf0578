//! Item repository.
//!
//! Creation, creator-only deletion, and viewer-projected listing of items.

use rusqlite::{params, Row};

use crate::error::Result;
use crate::{Item, ItemId, ItemView, UserId};

use super::connection::Database;
use super::schema::{DELETE_ITEM, INSERT_ITEM, LIST_ITEMS};

/// Expects row fields in this order: id, name, link, `created_by`, `reserved_by`
fn row_to_item(row: &Row<'_>) -> rusqlite::Result<Item> {
    let link: String = row.get(2)?;
    Ok(Item {
        id: row.get(0)?,
        name: row.get(1)?,
        link: (!link.is_empty()).then_some(link),
        created_by: row.get(3)?,
        reserved_by: row.get(4)?,
    })
}

impl Database {
    /// Adds an item to the wishlist and returns the generated id.
    ///
    /// `initial_reserved_by` lets an item be created already reserved. An
    /// empty `link` is stored the same way as no link.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ConstraintViolation`] if `created_by` or
    /// `initial_reserved_by` does not reference an existing user.
    ///
    /// # Examples
    ///
    /// ```
    /// use wishlist::Database;
    ///
    /// let db = Database::open_in_memory().unwrap();
    /// let alice = db.add_user("alice", "alice@example.com").unwrap();
    /// let item = db
    ///     .add_item("Tea pot", Some("https://shop.example/teapot"), alice, None)
    ///     .unwrap();
    ///
    /// let listed = db.list_items(alice).unwrap();
    /// assert_eq!(listed[0].id, item);
    /// assert!(listed[0].is_own);
    /// ```
    pub fn add_item(
        &self,
        name: &str,
        link: Option<&str>,
        created_by: UserId,
        initial_reserved_by: Option<UserId>,
    ) -> Result<ItemId> {
        let conn = self.lock();
        let id = conn.prepare_cached(INSERT_ITEM)?.insert(params![
            name,
            link.unwrap_or_default(),
            created_by,
            initial_reserved_by,
        ])?;

        log::debug!("user {created_by} added item {id}");
        Ok(ItemId::new(id))
    }

    /// Deletes `item` if and only if `user` created it.
    ///
    /// Returns the number of rows removed: `1` on success, `0` when the
    /// item does not exist or belongs to somebody else. The second case is
    /// deliberately not an error; callers that need to tell "deleted" from
    /// "not yours / not there" check the count.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete statement fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use wishlist::Database;
    ///
    /// let db = Database::open_in_memory().unwrap();
    /// let alice = db.add_user("alice", "alice@example.com").unwrap();
    /// let bob = db.add_user("bob", "bob@example.com").unwrap();
    /// let item = db.add_item("Socks", None, alice, None).unwrap();
    ///
    /// assert_eq!(db.delete_item(bob, item).unwrap(), 0);
    /// assert_eq!(db.delete_item(alice, item).unwrap(), 1);
    /// assert_eq!(db.delete_item(alice, item).unwrap(), 0);
    /// ```
    pub fn delete_item(&self, user: UserId, item: ItemId) -> Result<usize> {
        let conn = self.lock();
        let rows_affected = conn
            .prepare_cached(DELETE_ITEM)?
            .execute(params![item, user])?;

        if rows_affected == 0 {
            log::debug!("user {user} deleted nothing for item {item}");
        } else {
            log::debug!("user {user} deleted item {item}");
        }
        Ok(rows_affected)
    }

    /// Lists every item, projected for `viewer`.
    ///
    /// The rows are fully collected before the guard is released, so the
    /// result is a consistent snapshot. Items come back in creation order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    pub fn list_items(&self, viewer: UserId) -> Result<Vec<ItemView>> {
        let conn = self.lock();
        let mut stmt = conn.prepare_cached(LIST_ITEMS)?;

        let items = stmt
            .query_map([], |row| row_to_item(row).map(|item| item.into_view(viewer)))?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, create_test_users};

    #[test]
    fn test_add_item_and_list() {
        let db = create_test_database();
        let [alice, _, _] = create_test_users(&db);

        let id = db
            .add_item("Kettle", Some("https://shop.example/kettle"), alice, None)
            .unwrap();

        let items = db.list_items(alice).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, id);
        assert_eq!(items[0].name, "Kettle");
        assert_eq!(items[0].link.as_deref(), Some("https://shop.example/kettle"));
    }

    #[test]
    fn test_missing_and_empty_link_read_back_as_none() {
        let db = create_test_database();
        let [alice, _, _] = create_test_users(&db);

        db.add_item("No link", None, alice, None).unwrap();
        db.add_item("Empty link", Some(""), alice, None).unwrap();

        let items = db.list_items(alice).unwrap();
        assert!(items.iter().all(|item| item.link.is_none()));
    }

    #[test]
    fn test_add_item_with_unknown_creator() {
        let db = create_test_database();
        let err = db
            .add_item("Orphan", None, UserId::new(404), None)
            .unwrap_err();
        assert!(err.is_constraint_violation());

        let count: i64 = db
            .with_connection(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM items", [], |row| row.get(0))?))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_add_item_with_unknown_initial_reservation() {
        let db = create_test_database();
        let [alice, _, _] = create_test_users(&db);

        let err = db
            .add_item("Gift", None, alice, Some(UserId::new(404)))
            .unwrap_err();
        assert!(err.is_constraint_violation());
    }

    #[test]
    fn test_add_item_already_reserved() {
        let db = create_test_database();
        let [alice, bob, _] = create_test_users(&db);

        let id = db.add_item("Gift", None, alice, Some(bob)).unwrap();

        assert_eq!(db.get_reservation_owner(id).unwrap(), Some(bob));
        let seen_by_bob = db.list_items(bob).unwrap();
        assert!(seen_by_bob[0].is_reserved_by_us);
    }

    #[test]
    fn test_is_own_relative_to_viewer() {
        let db = create_test_database();
        let [alice, bob, _] = create_test_users(&db);
        db.add_item("Lamp", None, alice, None).unwrap();

        assert!(db.list_items(alice).unwrap()[0].is_own);
        assert!(!db.list_items(bob).unwrap()[0].is_own);
    }

    #[test]
    fn test_delete_by_non_creator_is_noop() {
        let db = create_test_database();
        let [alice, bob, _] = create_test_users(&db);
        let id = db.add_item("Lamp", None, alice, None).unwrap();

        assert_eq!(db.delete_item(bob, id).unwrap(), 0);

        let items = db.list_items(alice).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, id);
    }

    #[test]
    fn test_delete_by_creator() {
        let db = create_test_database();
        let [alice, _, _] = create_test_users(&db);
        let keep = db.add_item("Keep", None, alice, None).unwrap();
        let gone = db.add_item("Gone", None, alice, None).unwrap();

        assert_eq!(db.delete_item(alice, gone).unwrap(), 1);

        let ids: Vec<_> = db.list_items(alice).unwrap().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![keep]);
    }

    #[test]
    fn test_delete_missing_item() {
        let db = create_test_database();
        let [alice, _, _] = create_test_users(&db);
        assert_eq!(db.delete_item(alice, ItemId::new(12345)).unwrap(), 0);
    }

    #[test]
    fn test_delete_reserved_item() {
        let db = create_test_database();
        let [alice, bob, _] = create_test_users(&db);
        let id = db.add_item("Lamp", None, alice, Some(bob)).unwrap();

        assert_eq!(db.delete_item(alice, id).unwrap(), 1);
        assert!(db.list_items(bob).unwrap().is_empty());
    }

    #[test]
    fn test_list_items_empty() {
        let db = create_test_database();
        let [alice, _, _] = create_test_users(&db);
        assert!(db.list_items(alice).unwrap().is_empty());
    }

    #[test]
    fn test_list_items_insertion_order() {
        let db = create_test_database();
        let [alice, bob, _] = create_test_users(&db);

        let first = db.add_item("First", None, alice, None).unwrap();
        let second = db.add_item("Second", None, bob, None).unwrap();
        let third = db.add_item("Third", None, alice, None).unwrap();

        let ids: Vec<_> = db.list_items(bob).unwrap().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![first, second, third]);
    }
}
