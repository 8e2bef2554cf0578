//! Verify command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;

/// Check the store for corruption and dangling user references.
#[derive(Args)]
pub struct VerifyCommand {}

impl VerifyCommand {
    /// Execute the verify command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        db.verify_integrity()?;
        db.close()?;

        global.report("Store is consistent");
        Ok(())
    }
}
