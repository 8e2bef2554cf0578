//! Database connection management and the connection guard.
//!
//! `SQLite` does not support safe concurrent writers on one connection
//! without external serialization, and the reservation operations rely on
//! each call being atomic with respect to every other call. The store
//! therefore owns exactly one connection behind one mutex. Every public
//! operation takes the lock once, runs one statement (plus, for listings,
//! full row materialization) and releases it when the guard drops.

use std::sync::{Mutex, MutexGuard, PoisonError};

use rusqlite::{Connection, OpenFlags};

use crate::error::{Error, Result};

use super::config::DatabaseConfig;
use super::schema::initialize_schema;

/// Number of prepared statements kept in the connection's statement cache.
const STATEMENT_CACHE_CAPACITY: usize = 16;

/// The wishlist store.
///
/// `Database` is `Send + Sync`; share it between request threads with an
/// `Arc`. All methods take `&self` and serialize on the internal guard.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use wishlist::database::{Database, DatabaseConfig};
///
/// let config = DatabaseConfig::new("/tmp/wishlist.db");
/// let db = Arc::new(Database::open(config).unwrap());
///
/// let worker = {
///     let db = Arc::clone(&db);
///     std::thread::spawn(move || db.get_user_by_email("alice@example.com"))
/// };
/// worker.join().unwrap().unwrap();
/// ```
#[derive(Debug)]
pub struct Database {
    conn: Mutex<Connection>,
    config: DatabaseConfig,
}

impl Database {
    /// Opens a database connection with the given configuration.
    ///
    /// This function will:
    /// - Create the parent directory if `auto_create` is enabled
    /// - Open the database with appropriate flags
    /// - Set WAL mode and the busy timeout
    /// - Enable foreign keys and create missing tables
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The database file cannot be opened
    /// - The parent directory cannot be created
    /// - PRAGMA settings cannot be applied
    /// - Schema initialization fails
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        if config.auto_create && !config.path.exists() {
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        // The guard is the only serialization; SQLite's own is redundant
        let flags = if config.auto_create {
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
        };

        let conn = Connection::open_with_flags(&config.path, flags)?;
        conn.busy_timeout(config.busy_timeout)?;

        // PRAGMA journal_mode returns a row, so it goes through query_row
        let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        conn.execute_batch("PRAGMA synchronous = NORMAL")?;
        initialize_schema(&conn)?;

        log::debug!("opened wishlist store at {}", config.path.display());
        Ok(Self::from_connection(conn, config))
    }

    /// Opens a private in-memory store with the schema applied.
    ///
    /// # Errors
    ///
    /// Returns an error if `SQLite` cannot allocate the database.
    ///
    /// # Examples
    ///
    /// ```
    /// use wishlist::Database;
    ///
    /// let db = Database::open_in_memory().unwrap();
    /// assert!(db.get_user_by_email("nobody@example.com").unwrap().is_none());
    /// ```
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self::from_connection(conn, DatabaseConfig::new(":memory:")))
    }

    fn from_connection(conn: Connection, config: DatabaseConfig) -> Self {
        conn.set_prepared_statement_cache_capacity(STATEMENT_CACHE_CAPACITY);
        Self {
            conn: Mutex::new(conn),
            config,
        }
    }

    /// Returns the configuration this store was opened with.
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Acquires the connection guard.
    ///
    /// A holder that panicked cannot have left a statement half-applied,
    /// so a poisoned lock is recovered rather than reported.
    pub(super) fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with exclusive access to the underlying connection.
    ///
    /// The guard is held for the whole closure, so everything `f` does is
    /// atomic with respect to every other store operation.
    ///
    /// # Errors
    ///
    /// Returns whatever `f` returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use wishlist::Database;
    ///
    /// let db = Database::open_in_memory().unwrap();
    /// let users: i64 = db
    ///     .with_connection(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?))
    ///     .unwrap();
    /// assert_eq!(users, 0);
    /// ```
    pub fn with_connection<T>(&self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        let conn = self.lock();
        f(&conn)
    }

    /// Verifies database integrity using `PRAGMA integrity_check` and
    /// `PRAGMA foreign_key_check`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DatabaseCorruption`] if either check reports a
    /// problem, or a database error if the checks cannot run.
    pub fn verify_integrity(&self) -> Result<()> {
        let conn = self.lock();

        let result: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
        if result != "ok" {
            return Err(Error::DatabaseCorruption {
                details: format!("Integrity check failed: {result}"),
            });
        }

        let mut stmt = conn.prepare("PRAGMA foreign_key_check")?;
        let dangling = stmt
            .query_map([], |row| {
                let table: String = row.get(0)?;
                let rowid: Option<i64> = row.get(1)?;
                Ok(format!("{table} row {}", rowid.unwrap_or_default()))
            })?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        if dangling.is_empty() {
            Ok(())
        } else {
            Err(Error::DatabaseCorruption {
                details: format!("Dangling user references: {}", dangling.join(", ")),
            })
        }
    }

    /// Closes the store, reporting any error `SQLite` raises on close.
    ///
    /// Dropping a `Database` also closes it, but silently.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be closed cleanly.
    pub fn close(self) -> Result<()> {
        let conn = self.conn.into_inner().unwrap_or_else(PoisonError::into_inner);
        conn.flush_prepared_statement_cache();
        conn.close().map_err(|(_, err)| Error::from(err))?;
        log::debug!("closed wishlist store at {}", self.config.path.display());
        Ok(())
    }
}
