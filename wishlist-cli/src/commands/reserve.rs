//! Reserve command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, resolve_user, GlobalOptions};
use clap::Args;
use wishlist::{ItemId, ReserveOutcome};

/// Reserve an item you intend to buy.
#[derive(Args)]
pub struct ReserveCommand {
    /// Email of the user reserving the item
    #[arg(long = "as", value_name = "EMAIL", env = "WISHLIST_USER")]
    pub acting_user: String,

    /// Id of the item to reserve
    #[arg(value_name = "ITEM_ID")]
    pub item: ItemId,

    /// Fail instead of taking over an existing reservation
    #[arg(long)]
    pub if_free: bool,
}

impl ReserveCommand {
    /// Execute the reserve command.
    ///
    /// By default an existing reservation is replaced. With `--if-free`
    /// the command fails (exit code 1) when somebody already holds it.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let user = resolve_user(&db, &self.acting_user)?;

        if self.if_free {
            match db.reserve_if_free(user.id, self.item)? {
                ReserveOutcome::Reserved => {}
                ReserveOutcome::AlreadyReserved => {
                    return Err(CliError::SemanticFailure(format!(
                        "Item {} is already reserved",
                        self.item
                    )))
                }
                ReserveOutcome::ItemNotFound => return Err(item_not_found(self.item)),
            }
        } else if !db.reserve(user.id, self.item)? {
            return Err(item_not_found(self.item));
        }

        global.report(&format!("Reserved item {} for {}", self.item, user.email));
        Ok(())
    }
}

pub(crate) fn item_not_found(item: ItemId) -> CliError {
    CliError::SemanticFailure(format!("Item {item} not found"))
}
