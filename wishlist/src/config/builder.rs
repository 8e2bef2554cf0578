//! Layered configuration assembly.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::database::{default_data_dir, DatabaseConfig, DATABASE_FILE_NAME};
use crate::error::Result;

/// Builds a [`Config`] from the data directory's file and the environment.
///
/// Later layers win: built-in defaults, then `<data_dir>/config.yaml`, then
/// `WISHLIST_*` variables.
///
/// # Examples
///
/// ```
/// use wishlist::config::ConfigBuilder;
///
/// let dir = tempfile::tempdir().unwrap();
/// let config = ConfigBuilder::new()
///     .with_data_dir(dir.path())
///     .skip_env()
///     .build()
///     .unwrap();
/// assert!(config.database.is_none());
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    skip_file: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Creates a builder that reads `~/.wishlist/config.yaml` and the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the configuration file from `data_dir` instead of the default.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(data_dir.as_ref().to_path_buf());
        self
    }

    /// Ignores the configuration file.
    #[must_use]
    pub const fn skip_file(mut self) -> Self {
        self.skip_file = true;
        self
    }

    /// Ignores `WISHLIST_*` environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Loads, overrides and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, an
    /// environment variable is malformed, or the result fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_file {
            Config::default()
        } else {
            let data_dir = match self.data_dir {
                Some(dir) => dir,
                None => default_data_dir()?,
            };
            ConfigLoader::load(&data_dir)?
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

impl Config {
    /// Connection settings for the store in `data_dir`.
    ///
    /// `database.path` replaces `<data_dir>/wishlist.db` when set, and
    /// `database.busy_timeout_ms` replaces the default busy timeout.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use wishlist::config::Config;
    ///
    /// let config = Config::default().database_config(Path::new("/data"));
    /// assert_eq!(config.path, Path::new("/data/wishlist.db"));
    /// ```
    #[must_use]
    pub fn database_config(&self, data_dir: &Path) -> DatabaseConfig {
        let section = self.database.as_ref();

        let path = section
            .and_then(|db| db.path.clone())
            .unwrap_or_else(|| data_dir.join(DATABASE_FILE_NAME));

        let mut config = DatabaseConfig::new(path);
        if let Some(ms) = section.and_then(|db| db.busy_timeout_ms) {
            config = config.with_busy_timeout(Duration::from_millis(ms));
        }
        config
    }
}
