//! Delete-item command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, resolve_user, GlobalOptions};
use clap::Args;
use wishlist::ItemId;

/// Remove one of your own items from the wishlist.
#[derive(Args)]
pub struct DeleteItemCommand {
    /// Email of the user deleting the item
    #[arg(long = "as", value_name = "EMAIL", env = "WISHLIST_USER")]
    pub acting_user: String,

    /// Id of the item to delete
    #[arg(value_name = "ITEM_ID")]
    pub item: ItemId,
}

impl DeleteItemCommand {
    /// Execute the delete-item command.
    ///
    /// Deleting an item that does not exist or belongs to somebody else
    /// succeeds without changing anything; the output says so.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let user = resolve_user(&db, &self.acting_user)?;
        let deleted = db.delete_item(user.id, self.item)?;

        if deleted == 0 {
            println!("nothing deleted");
            global.report(&format!(
                "Item {} does not exist or was not created by {}",
                self.item, user.email
            ));
        } else {
            println!("deleted");
        }
        Ok(())
    }
}
