//! Unreserve command implementation.

use super::reserve::item_not_found;
use crate::error::CliError;
use crate::utils::{load_configuration, open_database, resolve_user, GlobalOptions};
use clap::Args;
use wishlist::{ItemId, ReleaseOutcome};

/// Give up a reservation.
#[derive(Args)]
pub struct UnreserveCommand {
    /// Email of the user giving up the reservation
    #[arg(long = "as", value_name = "EMAIL", env = "WISHLIST_USER")]
    pub acting_user: String,

    /// Id of the reserved item
    #[arg(value_name = "ITEM_ID")]
    pub item: ItemId,

    /// Clear the reservation even if somebody else holds it
    #[arg(long)]
    pub force: bool,
}

impl UnreserveCommand {
    /// Execute the unreserve command.
    ///
    /// Without `--force` only the current holder may clear a reservation.
    /// Unreserving an item nobody holds succeeds.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let user = resolve_user(&db, &self.acting_user)?;

        if self.force {
            if !db.unreserve(self.item)? {
                return Err(item_not_found(self.item));
            }
        } else {
            match db.unreserve_if_held_by(user.id, self.item)? {
                ReleaseOutcome::Released => {}
                ReleaseOutcome::NotReserved => {
                    global.report(&format!("Item {} is not reserved", self.item));
                    return Ok(());
                }
                ReleaseOutcome::HeldByOther => {
                    return Err(CliError::SemanticFailure(format!(
                        "Item {} is reserved by somebody else (use --force to clear it)",
                        self.item
                    )));
                }
                ReleaseOutcome::ItemNotFound => return Err(item_not_found(self.item)),
            }
        }

        global.report(&format!("Released item {}", self.item));
        Ok(())
    }
}
