//! Durable, append-only reservation storage.
//!
//! A [`ReservationStore`] appends validated reservations and hands every
//! record back, in insertion order, as a raw [`StoredRecord`]. Three backends
//! are provided:
//!
//! - [`JsonFileStore`]: one JSON array file (`trip.json` by default)
//! - [`SqliteStore`]: an SQLite database (`tripbook.db` by default)
//! - [`MemoryStore`]: a vector, for tests and embedding
//!
//! [`open_store`] picks the backend from a [`Config`].

mod json_file;
mod memory;
pub mod migrations;
mod record;
pub mod schema;
mod sqlite;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use record::{StoredRecord, DISCRIMINATOR};
pub use sqlite::{SqliteStore, DEFAULT_BUSY_TIMEOUT};

use crate::config::{Config, StorageBackend};
use crate::error::{Error, Result};
use crate::reservation::Reservation;

/// Name of the default data directory under the home directory.
pub const DATA_DIR_NAME: &str = ".tripbook";

/// Append-only durable collection of reservations.
pub trait ReservationStore: Send + Sync {
    /// Appends one reservation, creating the backing resource if needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageUnavailable`] or [`Error::Database`] if the
    /// store cannot be created, read or written, and
    /// [`Error::CorruptStore`] if existing contents cannot be parsed.
    fn append(&self, reservation: &Reservation) -> Result<()>;

    /// Returns every record in insertion order.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ReservationStore::append`].
    fn load_all(&self) -> Result<Vec<StoredRecord>>;
}

impl<S: ReservationStore + ?Sized> ReservationStore for Box<S> {
    fn append(&self, reservation: &Reservation) -> Result<()> {
        (**self).append(reservation)
    }

    fn load_all(&self) -> Result<Vec<StoredRecord>> {
        (**self).load_all()
    }
}

impl<S: ReservationStore + ?Sized> ReservationStore for Arc<S> {
    fn append(&self, reservation: &Reservation) -> Result<()> {
        (**self).append(reservation)
    }

    fn load_all(&self) -> Result<Vec<StoredRecord>> {
        (**self).load_all()
    }
}

/// Returns the default data directory, `~/.tripbook`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(DATA_DIR_NAME))
        .ok_or_else(|| Error::Validation {
            field: "home_directory".into(),
            message: "Cannot determine home directory".into(),
        })
}

/// Resolves where the configured store lives.
///
/// An absolute `store.path` is used as is. A relative one, or the backend's
/// default file name, is joined to `data_dir` (or [`default_data_dir`]).
///
/// # Errors
///
/// Returns an error if no data directory is given and the home directory
/// cannot be determined.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use tripbook::config::Config;
/// use tripbook::store::resolve_store_path;
///
/// let path = resolve_store_path(&Config::default(), Some(Path::new("/data"))).unwrap();
/// assert_eq!(path, Path::new("/data/trip.json"));
/// ```
pub fn resolve_store_path(config: &Config, data_dir: Option<&Path>) -> Result<PathBuf> {
    let configured = config.store.as_ref().and_then(|s| s.path.as_ref());
    if let Some(path) = configured.filter(|p| p.is_absolute()) {
        return Ok(path.clone());
    }

    let base = match data_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_data_dir()?,
    };
    let relative = configured.map_or_else(
        || PathBuf::from(config.store_backend().default_file_name()),
        Clone::clone,
    );
    Ok(base.join(relative))
}

/// Opens the store selected by `config`.
///
/// # Errors
///
/// Returns an error if the store path cannot be resolved or the SQLite
/// database cannot be opened.
pub fn open_store(config: &Config, data_dir: Option<&Path>) -> Result<Box<dyn ReservationStore>> {
    let path = resolve_store_path(config, data_dir)?;
    let backend = config.store_backend();
    log::debug!("using {backend} store at {}", path.display());

    match backend {
        StorageBackend::Json => Ok(Box::new(JsonFileStore::new(path))),
        StorageBackend::Sqlite => {
            let timeout = config
                .store
                .as_ref()
                .and_then(|s| s.busy_timeout_ms)
                .map_or(DEFAULT_BUSY_TIMEOUT, Duration::from_millis);
            Ok(Box::new(SqliteStore::open(path, timeout)?))
        }
    }
}
