//! Error types for the tripbook library.
//!
//! This module provides the error hierarchy for reservation validation,
//! storage, and report aggregation, using `thiserror` for ergonomic error
//! handling.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Result type alias for operations that may fail with a tripbook error.
///
/// # Examples
///
/// ```
/// use tripbook::{Error, Result};
///
/// fn example_operation() -> Result<u64> {
///     Ok(425)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the tripbook library.
///
/// Validation failures (`InvalidDate`, `PastDate`, `InvalidRange`,
/// `InvalidDateTime`, `PastDateTime`, `Validation`) describe something the
/// caller must correct. The remaining variants describe storage or data
/// problems.
#[derive(Debug, Error)]
pub enum Error {
    /// A date string could not be parsed as `YYYY-MM-DD`.
    #[error("invalid date for '{field}': '{value}' (expected YYYY-MM-DD)")]
    InvalidDate {
        /// The field holding the date.
        field: String,
        /// The raw value supplied by the caller.
        value: String,
    },

    /// A date is not strictly after the current date.
    #[error("'{field}' must be a future date: {date} is not after {today}")]
    PastDate {
        /// The field holding the date.
        field: String,
        /// The parsed date.
        date: NaiveDate,
        /// The current date at validation time.
        today: NaiveDate,
    },

    /// A checkout date is not strictly after its check-in date.
    #[error("checkout date {checkout} must be after check-in date {checkin}")]
    InvalidRange {
        /// The check-in date.
        checkin: NaiveDate,
        /// The checkout date.
        checkout: NaiveDate,
    },

    /// A date and time pair could not be combined into a timestamp.
    #[error("invalid date and time '{date} {time}' (expected YYYY-MM-DD and HH:MM)")]
    InvalidDateTime {
        /// The raw date part.
        date: String,
        /// The raw time part.
        time: String,
    },

    /// A timestamp is not strictly after the current moment.
    #[error("reservation time must be in the future: {timestamp} is not after {now}")]
    PastDateTime {
        /// The combined timestamp.
        timestamp: NaiveDateTime,
        /// The current moment at validation time.
        now: NaiveDateTime,
    },

    /// A field failed a non-date validation rule.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A stored record carries a discriminator this library does not know.
    #[error(
        "unknown reservation type {} in record {index}",
        .tag.as_deref().unwrap_or("<missing>")
    )]
    UnknownReservationType {
        /// Position of the record in insertion order.
        index: usize,
        /// The discriminator found, if any.
        tag: Option<String>,
    },

    /// A stored record has a known discriminator but unusable fields.
    #[error("malformed {tag} record {index}: {reason}")]
    MalformedRecord {
        /// Position of the record in insertion order.
        index: usize,
        /// The record discriminator.
        tag: String,
        /// What was wrong with it.
        reason: String,
    },

    /// The backing storage could not be created, read, or written.
    #[error("storage unavailable at {}: {source}", .path.display())]
    StorageUnavailable {
        /// The storage location.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The backing storage exists but does not hold a reservation list.
    #[error("reservation store {} is corrupt: {details}", .path.display())]
    CorruptStore {
        /// The storage location.
        path: PathBuf,
        /// Details about the corruption.
        details: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A JSON serialization error occurred.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred outside the reservation store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if the error describes caller input that must be corrected.
    ///
    /// # Examples
    ///
    /// ```
    /// use tripbook::Error;
    ///
    /// let err = Error::InvalidDate { field: "date".into(), value: "tomorrow".into() };
    /// assert!(err.is_validation_failure());
    /// ```
    #[must_use]
    pub const fn is_validation_failure(&self) -> bool {
        matches!(
            self,
            Self::InvalidDate { .. }
                | Self::PastDate { .. }
                | Self::InvalidRange { .. }
                | Self::InvalidDateTime { .. }
                | Self::PastDateTime { .. }
                | Self::Validation { .. }
        )
    }

    /// Check if the error means the backing storage could not be used.
    #[must_use]
    pub const fn is_storage_unavailable(&self) -> bool {
        matches!(self, Self::StorageUnavailable { .. } | Self::Database(_))
    }

    pub(crate) fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StorageUnavailable {
            path: path.into(),
            source,
        }
    }
}
