//! SQLite-backed store.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use rusqlite::{params, Connection, OpenFlags};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::reservation::Reservation;

use super::migrations::check_schema_compatibility;
use super::record::StoredRecord;
use super::schema::{INSERT_RESERVATION, SELECT_ALL_RESERVATIONS};
use super::ReservationStore;

/// Default SQLite busy timeout.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

/// Stores reservations as JSON rows in an SQLite database.
///
/// The connection runs in WAL mode with a busy timeout so that several
/// processes can append to the same file.
///
/// # Examples
///
/// ```
/// use tripbook::store::{ReservationStore, SqliteStore};
///
/// let store = SqliteStore::open_in_memory().unwrap();
/// assert!(store.load_all().unwrap().is_empty());
/// ```
#[derive(Debug)]
pub struct SqliteStore {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl SqliteStore {
    /// Opens (creating if needed) the database at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageUnavailable`] if the parent directory cannot
    /// be created, [`Error::Database`] if the database cannot be opened or
    /// configured, and [`Error::UnsupportedSchemaVersion`] for a database
    /// written by an incompatible version.
    pub fn open(path: impl Into<PathBuf>, busy_timeout: Duration) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| Error::storage(parent, e))?;
        }

        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(&path, flags)?;

        let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        conn.execute_batch("PRAGMA synchronous = NORMAL")?;
        conn.busy_timeout(busy_timeout)?;
        check_schema_compatibility(&conn)?;

        log::debug!("opened SQLite store at {}", path.display());
        Ok(Self {
            conn: Mutex::new(conn),
            path: Some(path),
        })
    }

    /// Opens a private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Database`] if schema creation fails.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        check_schema_compatibility(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            path: None,
        })
    }

    /// Returns the database path, or `None` for an in-memory store.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn location(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(":memory:"))
    }
}

impl ReservationStore for SqliteStore {
    fn append(&self, reservation: &Reservation) -> Result<()> {
        let record = serde_json::to_string(&StoredRecord::from_reservation(reservation)?)?;
        let created_at = chrono::Utc::now().timestamp();

        let conn = self.conn.lock().unwrap_or_else(PoisonError::into_inner);
        conn.execute(
            INSERT_RESERVATION,
            params![reservation.kind().tag(), record, created_at],
        )?;
        log::debug!(
            "appended {} as row {}",
            reservation.kind(),
            conn.last_insert_rowid()
        );
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<StoredRecord>> {
        let conn = self.conn.lock().unwrap_or_else(PoisonError::into_inner);
        let mut stmt = conn.prepare(SELECT_ALL_RESERVATIONS)?;
        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        rows.into_iter()
            .map(|(id, text)| {
                let value: Value = serde_json::from_str(&text).map_err(|e| Error::CorruptStore {
                    path: self.location(),
                    details: format!("row {id}: {e}"),
                })?;
                StoredRecord::from_value(value).ok_or_else(|| Error::CorruptStore {
                    path: self.location(),
                    details: format!("row {id} is not a JSON object"),
                })
            })
            .collect()
    }
}
