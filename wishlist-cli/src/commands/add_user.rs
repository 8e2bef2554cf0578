//! Add-user command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;

/// Register a new user.
#[derive(Args)]
pub struct AddUserCommand {
    /// Display name (must be unique)
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Email address used to identify the user (must be unique)
    #[arg(long, value_name = "EMAIL")]
    pub email: String,
}

impl AddUserCommand {
    /// Execute the add-user command.
    ///
    /// Prints the new user's id on stdout.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Err(CliError::InvalidArguments(
                "--name and --email must not be empty".into(),
            ));
        }

        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let id = db.add_user(&self.name, &self.email)?;

        println!("{id}");
        global.report(&format!("Registered {} <{}>", self.name, self.email));
        Ok(())
    }
}
