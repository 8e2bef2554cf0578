//! Environment variable handling for configuration overrides.
//!
//! Recognized variables:
//!
//! | Variable                    | Field                       |
//! |-----------------------------|-----------------------------|
//! | `WISHLIST_DATABASE_PATH`    | `database.path`             |
//! | `WISHLIST_BUSY_TIMEOUT_MS`  | `database.busy_timeout_ms`  |
//! | `WISHLIST_DISABLE_AUTOINIT` | `disable_autoinit`          |
//! | `WISHLIST_OUTPUT_FORMAT`    | `output_format`             |

use std::env;
use std::path::PathBuf;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use wishlist::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `WISHLIST_*` environment variable overrides to `config`.
    ///
    /// Values from the environment replace values from the file.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric timeout, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(path) = env::var("WISHLIST_DATABASE_PATH") {
            config.database.get_or_insert_with(Default::default).path = Some(PathBuf::from(path));
        }

        if let Ok(ms) = env::var("WISHLIST_BUSY_TIMEOUT_MS") {
            let ms: u64 = ms.trim().parse().map_err(|_| Error::Validation {
                field: "WISHLIST_BUSY_TIMEOUT_MS".into(),
                message: "Must be a non-negative integer".into(),
            })?;
            config.database.get_or_insert_with(Default::default).busy_timeout_ms = Some(ms);
        }

        if let Ok(val) = env::var("WISHLIST_DISABLE_AUTOINIT") {
            config.disable_autoinit = Some(Self::parse_bool("WISHLIST_DISABLE_AUTOINIT", &val)?);
        }

        if let Ok(format) = env::var("WISHLIST_OUTPUT_FORMAT") {
            config.output_format =
                Some(format.parse::<OutputFormat>().map_err(|message| Error::Validation {
                    field: "WISHLIST_OUTPUT_FORMAT".into(),
                    message,
                })?);
        }

        Ok(())
    }

    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
