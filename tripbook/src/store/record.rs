//! Raw stored records.
//!
//! Stores hand back records as untyped JSON objects so that the report
//! aggregator can tell an unknown discriminator apart from a malformed one.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::reservation::{Reservation, ReservationKind};

/// Name of the discriminator key in every stored record.
pub const DISCRIMINATOR: &str = "reservation_type";

/// One persisted reservation as a raw JSON object.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tripbook::store::StoredRecord;
///
/// let record = StoredRecord::from_value(json!({"reservation_type": "CarRental"})).unwrap();
/// assert_eq!(record.reservation_type(), Some("CarRental"));
/// assert!(record.to_reservation(0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredRecord(Map<String, Value>);

impl StoredRecord {
    /// Serializes a validated reservation with its discriminator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if serialization fails.
    pub fn from_reservation(reservation: &Reservation) -> Result<Self> {
        match serde_json::to_value(reservation)? {
            Value::Object(map) => Ok(Self(map)),
            other => Err(Error::Validation {
                field: DISCRIMINATOR.into(),
                message: format!("reservation serialized to a non-object: {other}"),
            }),
        }
    }

    /// Wraps a raw JSON value, returning `None` unless it is an object.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Returns the discriminator if it is present and a string.
    #[must_use]
    pub fn reservation_type(&self) -> Option<&str> {
        self.0.get(DISCRIMINATOR).and_then(Value::as_str)
    }

    /// Returns the underlying JSON object.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Converts the record back into a typed reservation.
    ///
    /// `index` is the record's position in insertion order and only feeds
    /// error messages.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownReservationType`] if the discriminator is missing or
    ///   names no known kind
    /// - [`Error::MalformedRecord`] if the discriminator is known but a field
    ///   is missing or ill-typed
    pub fn to_reservation(&self, index: usize) -> Result<Reservation> {
        let tag = match self.0.get(DISCRIMINATOR) {
            Some(Value::String(tag)) => tag,
            Some(other) => {
                return Err(Error::UnknownReservationType {
                    index,
                    tag: Some(other.to_string()),
                })
            }
            None => return Err(Error::UnknownReservationType { index, tag: None }),
        };

        if ReservationKind::from_tag(tag).is_none() {
            return Err(Error::UnknownReservationType {
                index,
                tag: Some(tag.clone()),
            });
        }

        serde_json::from_value(Value::Object(self.0.clone())).map_err(|e| Error::MalformedRecord {
            index,
            tag: tag.clone(),
            reason: e.to_string(),
        })
    }
}

impl From<StoredRecord> for Value {
    fn from(record: StoredRecord) -> Self {
        Self::Object(record.0)
    }
}
