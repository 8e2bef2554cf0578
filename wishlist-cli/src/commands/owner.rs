//! Owner command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, resolve_user, GlobalOptions};
use clap::Args;
use wishlist::{ItemId, ReservationState};

/// Show who holds the reservation on an item.
///
/// The creator of an item is refused: who reserved a wish is hidden from
/// the person who made it.
#[derive(Args)]
pub struct OwnerCommand {
    /// Email of the user asking
    #[arg(long = "as", value_name = "EMAIL", env = "WISHLIST_USER")]
    pub acting_user: String,

    /// Id of the item
    #[arg(value_name = "ITEM_ID")]
    pub item: ItemId,

    /// Print the state as JSON
    #[arg(long)]
    pub json: bool,
}

impl OwnerCommand {
    /// Execute the owner command.
    ///
    /// Prints `unreserved` or the holder's id and email. Exits with
    /// status 1 if the item does not exist or belongs to the viewer.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let viewer = resolve_user(&db, &self.acting_user)?;
        let own_item = db
            .list_items(viewer.id)?
            .iter()
            .any(|view| view.id == self.item && view.is_own);
        if own_item {
            return Err(CliError::SemanticFailure(format!(
                "Item {} is on your own wishlist; who reserved it stays a surprise",
                self.item
            )));
        }

        let state = db.reservation_state(self.item)?;
        if state == ReservationState::NotFound {
            return Err(super::reserve::item_not_found(self.item));
        }

        if self.json {
            println!("{}", serde_json::to_string(&state)?);
            return Ok(());
        }

        match state.owner() {
            None => println!("unreserved"),
            Some(holder) => match db.get_user_by_id(holder)? {
                Some(user) => println!("{}\t{}", user.id, user.email),
                None => println!("{holder}"),
            },
        }
        Ok(())
    }
}
