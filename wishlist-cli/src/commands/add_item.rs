//! Add-item command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, resolve_user, GlobalOptions};
use clap::Args;

/// Put an item on the wishlist.
#[derive(Args)]
pub struct AddItemCommand {
    /// Email of the user adding the item
    #[arg(long = "as", value_name = "EMAIL", env = "WISHLIST_USER")]
    pub acting_user: String,

    /// What is wished for
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Shop or product link
    #[arg(long, value_name = "URL")]
    pub link: Option<String>,

    /// Create the item already reserved by this user
    #[arg(long, value_name = "EMAIL")]
    pub reserved_by: Option<String>,
}

impl AddItemCommand {
    /// Execute the add-item command.
    ///
    /// Prints the new item's id on stdout.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.name.trim().is_empty() {
            return Err(CliError::InvalidArguments("--name must not be empty".into()));
        }

        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let creator = resolve_user(&db, &self.acting_user)?;
        let holder = self
            .reserved_by
            .as_deref()
            .map(|email| resolve_user(&db, email))
            .transpose()?;

        let id = db.add_item(
            &self.name,
            self.link.as_deref(),
            creator.id,
            holder.as_ref().map(|user| user.id),
        )?;

        println!("{id}");
        global.report(&format!("Added item {id} for {}", creator.email));
        Ok(())
    }
}
