//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, database management, user resolution
//! and output formatting.

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;
use wishlist::config::{self, ConfigBuilder};
use wishlist::{Config, Database, User};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the busy timeout (in milliseconds).
    pub busy_timeout: Option<u64>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

impl GlobalOptions {
    /// Prints a confirmation line to stderr unless `--quiet` was given.
    pub fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }
}

/// Output format for commands that print records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

impl From<config::OutputFormat> for OutputFormat {
    fn from(format: config::OutputFormat) -> Self {
        match format {
            config::OutputFormat::Table => Self::Table,
            config::OutputFormat::Json => Self::Json,
            config::OutputFormat::Csv => Self::Csv,
        }
    }
}

/// Picks the command-line format, then the configured one, then `table`.
pub fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.or_else(|| config.output_format.map(OutputFormat::from))
        .unwrap_or(OutputFormat::Table)
}

/// Resolve the data directory from global options.
///
/// `--data-dir` (or `WISHLIST_DATA_DIR`) wins; otherwise `~/.wishlist`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match global.data_dir {
        Some(ref dir) => Ok(dir.clone()),
        None => wishlist::database::default_data_dir().map_err(CliError::from),
    }
}

/// Load layered configuration for the resolved data directory.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (applied by [`open_database`])
/// 2. Environment variables
/// 3. `<data_dir>/config.yaml`
/// 4. Built-in defaults
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_dir(global)?;
    ConfigBuilder::new()
        .with_data_dir(&data_dir)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open database with configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let data_dir = resolve_data_dir(global)?;
    let mut db_config = config.database_config(&data_dir);

    if let Some(ms) = global.busy_timeout {
        db_config = db_config.with_busy_timeout(Duration::from_millis(ms));
    }

    if global.disable_autoinit || config.disable_autoinit.unwrap_or(false) {
        if !db_config.path.exists() {
            return Err(CliError::NoDataDirectory);
        }
        db_config = db_config.without_auto_create();
    }

    log::debug!("using store at {}", db_config.path.display());
    Database::open(db_config).map_err(CliError::from)
}

/// Look up the acting user by email.
///
/// # Errors
///
/// Returns a semantic failure (exit code 1) if nobody is registered
/// under `email`.
pub fn resolve_user(db: &Database, email: &str) -> Result<User, CliError> {
    db.get_user_by_email(email)?
        .ok_or_else(|| CliError::SemanticFailure(format!("No user registered as {email}")))
}
