//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Fixtures for registering users and adding items

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the wishlist data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created; the CLI creates it on first use.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("wishlist-data");

        Self { temp_dir, data_dir }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// Variables that would leak configuration from the developer's shell
    /// are removed.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("wishlist").expect("Failed to find wishlist binary");
        for var in [
            "WISHLIST_DATA_DIR",
            "WISHLIST_USER",
            "WISHLIST_LOG_MODE",
            "WISHLIST_DATABASE_PATH",
            "WISHLIST_BUSY_TIMEOUT_MS",
            "WISHLIST_DISABLE_AUTOINIT",
            "WISHLIST_OUTPUT_FORMAT",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Path of the store file.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("wishlist.db")
    }

    /// Writes `contents` to `<data_dir>/config.yaml`.
    pub fn write_config(&self, contents: &str) -> &Path {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.data_dir.join("config.yaml"), contents)
            .expect("Failed to write config");
        &self.data_dir
    }

    /// Runs a command expected to succeed and returns its trimmed stdout.
    pub fn run_ok(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run wishlist");

        assert!(
            output.status.success(),
            "wishlist {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim()
            .to_string()
    }

    /// Registers `name` as `<name>@example.com` and returns the user id.
    pub fn add_user(&self, name: &str) -> i64 {
        let email = format!("{name}@example.com");
        self.run_ok(&["add-user", "--name", name, "--email", &email])
            .parse()
            .expect("add-user did not print an id")
    }

    /// Adds an item created by `<creator>@example.com` and returns its id.
    pub fn add_item(&self, creator: &str, name: &str) -> i64 {
        let email = format!("{creator}@example.com");
        self.run_ok(&["add-item", "--as", &email, "--name", name])
            .parse()
            .expect("add-item did not print an id")
    }

    /// Reserves `item` for `<user>@example.com`.
    pub fn reserve(&self, user: &str, item: i64) {
        let email = format!("{user}@example.com");
        self.run_ok(&["reserve", "--as", &email, &item.to_string()]);
    }

    /// Lists the wishlist as `<viewer>@example.com` and returns the parsed JSON.
    pub fn list_json(&self, viewer: &str) -> serde_json::Value {
        let email = format!("{viewer}@example.com");
        let stdout = self.run_ok(&["list", "--as", &email, "--format", "json"]);
        serde_json::from_str(&stdout).expect("list did not print JSON")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
