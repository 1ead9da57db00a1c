//! Single-file JSON array store.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use fs4::fs_std::FileExt;
use serde_json::Value;
use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::reservation::Reservation;

use super::record::StoredRecord;
use super::ReservationStore;

/// Stores every reservation in one JSON array file.
///
/// Each append holds an exclusive advisory lock on a sibling `.<name>.lock`
/// file while it reads the whole array, pushes the new record, writes the
/// result to a fresh temporary file in the same directory and renames it
/// over the original. Writers in other processes, or other handles on the
/// same path, wait for the lock instead of overwriting each other. Readers
/// take no lock and always see a complete array.
///
/// # Examples
///
/// ```no_run
/// use tripbook::store::{JsonFileStore, ReservationStore};
///
/// let store = JsonFileStore::new("/tmp/trip.json");
/// let records = store.load_all().unwrap();
/// println!("{} reservations", records.len());
/// ```
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Creates a store backed by `path`. Nothing is touched until the first
    /// append.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the store, its lock file and temporary files.
    fn parent_dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }

    fn lock_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map_or_else(|| "trip.json".into(), |n| n.to_string_lossy().into_owned());
        self.path.with_file_name(format!(".{file_name}.lock"))
    }

    /// Opens the lock file and blocks until this process holds it
    /// exclusively. The lock is released when the returned file is dropped.
    fn acquire_file_lock(&self) -> Result<File> {
        let parent = self.parent_dir();
        fs::create_dir_all(parent).map_err(|e| Error::storage(parent, e))?;

        let lock_path = self.lock_path();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| Error::storage(&lock_path, e))?;
        file.lock_exclusive()
            .map_err(|e| Error::storage(&lock_path, e))?;
        Ok(file)
    }

    fn read_records(&self) -> Result<Vec<StoredRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path).map_err(|e| Error::storage(&self.path, e))?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let values: Vec<Value> =
            serde_json::from_str(&contents).map_err(|e| Error::CorruptStore {
                path: self.path.clone(),
                details: format!("not a JSON array: {e}"),
            })?;

        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                StoredRecord::from_value(value).ok_or_else(|| Error::CorruptStore {
                    path: self.path.clone(),
                    details: format!("entry {index} is not a JSON object"),
                })
            })
            .collect()
    }

    fn write_records(&self, records: &[StoredRecord]) -> Result<()> {
        let contents = serde_json::to_string_pretty(records)?;
        let parent = self.parent_dir();

        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| Error::storage(parent, e))?;
        tmp.write_all(contents.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| Error::storage(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| Error::storage(&self.path, e.error))?;
        Ok(())
    }
}

impl ReservationStore for JsonFileStore {
    fn append(&self, reservation: &Reservation) -> Result<()> {
        let record = StoredRecord::from_reservation(reservation)?;
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let _file_lock = self.acquire_file_lock()?;

        let mut records = self.read_records()?;
        records.push(record);
        self.write_records(&records)?;

        log::debug!(
            "appended {} to {} ({} records)",
            reservation.kind(),
            self.path.display(),
            records.len()
        );
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<StoredRecord>> {
        self.read_records()
    }
}
