//! Show-user command implementation.

use std::io::Write;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, resolve_format, GlobalOptions, OutputFormat};
use clap::{ArgGroup, Args};
use wishlist::{User, UserId};

/// Look up a user by email or id.
#[derive(Args)]
#[command(group(ArgGroup::new("lookup").required(true).args(["email", "id"])))]
pub struct ShowUserCommand {
    /// Email address of the user
    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,

    /// Numeric id of the user
    #[arg(long, value_name = "ID")]
    pub id: Option<UserId>,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

impl ShowUserCommand {
    /// Execute the show-user command.
    ///
    /// Exits with status 1 if no such user exists.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let user = match (&self.email, self.id) {
            (Some(email), _) => db.get_user_by_email(email)?,
            (None, Some(id)) => db.get_user_by_id(id)?,
            (None, None) => {
                return Err(CliError::InvalidArguments(
                    "one of --email or --id is required".into(),
                ))
            }
        };

        let user = user.ok_or_else(|| CliError::SemanticFailure("No such user".into()))?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        match resolve_format(self.format, &config) {
            OutputFormat::Table => {
                writeln!(handle, "ID\tNAME\tEMAIL")?;
                writeln!(handle, "{}\t{}\t{}", user.id, user.name, user.email)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut handle, &user)?;
                writeln!(handle)?;
            }
            OutputFormat::Csv => write_csv(&mut handle, &user)?,
        }
        Ok(())
    }
}

fn write_csv(out: impl Write, user: &User) -> Result<(), CliError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.serialize(user)?;
    writer.flush()?;
    Ok(())
}
