//! Configuration system for wishlist.
//!
//! Configuration comes from three layers, highest precedence first:
//!
//! 1. Environment variables (`WISHLIST_*`)
//! 2. The YAML file `<data_dir>/config.yaml`
//! 3. Built-in defaults
//!
//! Command-line flags sit above all of these but are applied by the CLI.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//! use wishlist::config::ConfigBuilder;
//! use wishlist::Database;
//!
//! let data_dir = Path::new("/var/lib/wishlist");
//! let config = ConfigBuilder::new().with_data_dir(data_dir).build().unwrap();
//! let db = Database::open(config.database_config(data_dir)).unwrap();
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, CONFIG_FILE_NAME};
pub use schema::{Config, DatabaseSection, OutputFormat};
pub use validator::ConfigValidator;
