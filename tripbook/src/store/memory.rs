//! In-process store.

use std::sync::{Mutex, PoisonError};

use crate::error::Result;
use crate::reservation::Reservation;

use super::record::StoredRecord;
use super::ReservationStore;

/// Keeps records in a vector. Nothing survives the process.
///
/// # Examples
///
/// ```
/// use tripbook::store::{MemoryStore, ReservationStore};
///
/// let store = MemoryStore::new();
/// assert!(store.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<StoredRecord>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with raw records.
    #[must_use]
    pub fn with_records(records: Vec<StoredRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReservationStore for MemoryStore {
    fn append(&self, reservation: &Reservation) -> Result<()> {
        let record = StoredRecord::from_reservation(reservation)?;
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<StoredRecord>> {
        Ok(self
            .records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }
}
