//! Common test utilities for integration tests.

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use wishlist::{Database, DatabaseConfig, UserId};

/// A file-backed store in a private temporary directory.
///
/// The directory lives as long as the fixture, so the store can be closed
/// and reopened within one test.
pub struct TestStore {
    dir: TempDir,
    pub db: Database,
}

impl TestStore {
    /// Opens a fresh store at `<tempdir>/wishlist.db`.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(DatabaseConfig::new(dir.path().join("wishlist.db"))).unwrap();
        Self { dir, db }
    }

    /// Path of the store file.
    pub fn path(&self) -> PathBuf {
        self.dir.path().join("wishlist.db")
    }

    /// The temporary data directory.
    #[allow(dead_code)]
    pub fn data_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Closes the store and opens it again from disk.
    #[allow(dead_code)]
    pub fn reopen(self) -> Self {
        let Self { dir, db } = self;
        db.close().unwrap();
        let db = Database::open(DatabaseConfig::new(dir.path().join("wishlist.db"))).unwrap();
        Self { dir, db }
    }

    /// Opens a second, independent connection to the same file.
    #[allow(dead_code)]
    pub fn second_handle(&self) -> Database {
        Database::open(DatabaseConfig::new(self.path())).unwrap()
    }

    /// Registers `name` with the address `<name>@example.com`.
    pub fn register(&self, name: &str) -> UserId {
        self.db
            .add_user(name, &format!("{name}@example.com"))
            .unwrap()
    }
}
