//! Configuration validation.

use crate::config::schema::{Config, DatabaseSection};
use crate::error::{Error, Result};

/// Validates a loaded configuration.
///
/// # Examples
///
/// ```
/// use wishlist::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref database) = config.database {
            Self::validate_database(database)?;
        }
        Ok(())
    }

    fn validate_database(database: &DatabaseSection) -> Result<()> {
        if let Some(ref path) = database.path {
            if path.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "database.path".into(),
                    message: "Cannot be empty".into(),
                });
            }
            if path.is_dir() {
                return Err(Error::Validation {
                    field: "database.path".into(),
                    message: format!("{} is a directory", path.display()),
                });
            }
        }

        if database.busy_timeout_ms == Some(0) {
            return Err(Error::Validation {
                field: "database.busy_timeout_ms".into(),
                message: "Timeout must be greater than 0".into(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn with_database(path: Option<&str>, busy_timeout_ms: Option<u64>) -> Config {
        Config {
            database: Some(DatabaseSection {
                path: path.map(PathBuf::from),
                busy_timeout_ms,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_is_valid() {
        ConfigValidator::validate(&Config::default()).unwrap();
    }

    #[test]
    fn test_valid_database_section() {
        ConfigValidator::validate(&with_database(Some("/tmp/w.db"), Some(100))).unwrap();
        ConfigValidator::validate(&with_database(None, None)).unwrap();
    }

    #[test]
    fn test_empty_path_rejected() {
        let err = ConfigValidator::validate(&with_database(Some(""), None)).unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "database.path"));
    }

    #[test]
    fn test_directory_path_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = with_database(dir.path().to_str(), None);
        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = ConfigValidator::validate(&with_database(None, Some(0))).unwrap_err();
        assert!(err.to_string().contains("busy_timeout_ms"));
    }
}
