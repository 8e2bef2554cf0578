//! Configuration schema definitions.
//!
//! The file is small on purpose: where the store lives, how long `SQLite`
//! may wait on a file lock, and how listings are printed.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Complete configuration structure, as read from `config.yaml`.
///
/// Every field is optional so that a partial file, the environment and the
/// command line can each fill in only what they know.
///
/// # Examples
///
/// ```
/// use wishlist::config::{Config, OutputFormat};
///
/// let config: Config = serde_yaml::from_str("output_format: json").unwrap();
/// assert_eq!(config.output_format, Some(OutputFormat::Json));
/// assert!(config.database.is_none());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Store location and connection settings.
    pub database: Option<DatabaseSection>,

    /// Disable automatic creation of the data directory and store.
    pub disable_autoinit: Option<bool>,

    /// Output format for the `list` command.
    pub output_format: Option<OutputFormat>,
}

/// The `database:` section of the configuration file.
///
/// # Examples
///
/// ```
/// use wishlist::config::Config;
///
/// let yaml = "database:\n  path: /srv/wishlist/store.db\n  busy_timeout_ms: 250\n";
/// let config: Config = serde_yaml::from_str(yaml).unwrap();
/// let db = config.database.unwrap();
/// assert_eq!(db.busy_timeout_ms, Some(250));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DatabaseSection {
    /// Explicit store file, overriding `<data_dir>/wishlist.db`.
    pub path: Option<PathBuf>,

    /// Milliseconds `SQLite` waits on a lock held by another process.
    pub busy_timeout_ms: Option<u64>,
}

/// Output format for listings.
///
/// # Examples
///
/// ```
/// use wishlist::config::OutputFormat;
///
/// let format: OutputFormat = "CSV".parse().unwrap();
/// assert_eq!(format, OutputFormat::Csv);
/// assert_eq!(format.to_string(), "csv");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(format!("invalid output format: {s}")),
        }
    }
}
