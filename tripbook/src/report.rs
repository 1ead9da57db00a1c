//! Trip report aggregation.
//!
//! Turns the raw stored records into one chronological itinerary with a
//! total cost.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::reservation::{Reservation, DEFAULT_COMMENT};
use crate::store::{ReservationStore, StoredRecord};

/// One entry of the itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Human-readable description, e.g. `"Flight from La Paz to Sucre"`.
    pub name: String,
    /// The reservation comments or [`DEFAULT_COMMENT`].
    pub comment: String,
    /// The canonical date in serialized form.
    pub date: String,
    /// Cost in bolivianos.
    pub cost: u64,
}

impl Activity {
    fn from_reservation(reservation: &Reservation) -> Self {
        Self {
            name: reservation.describe(),
            comment: reservation
                .comments()
                .unwrap_or(DEFAULT_COMMENT)
                .to_string(),
            date: reservation.date_label(),
            cost: reservation.cost(),
        }
    }
}

/// A chronological itinerary with its total.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TripReport {
    /// Activities in ascending date order.
    pub activities: Vec<Activity>,
    /// Sum of all activity costs.
    pub total_cost: u64,
    /// Activity names in the same order as `activities`.
    pub activity_names: Vec<String>,
}

impl TripReport {
    /// Returns whether the report has no activities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

/// Builds a report from raw stored records.
///
/// Records are ordered by their canonical date (trip date, hotel check-in,
/// restaurant timestamp; plain dates count as midnight). Records with equal
/// dates keep their insertion order.
///
/// # Errors
///
/// Fails on the first record with an unknown or missing discriminator
/// ([`Error::UnknownReservationType`]), with malformed fields
/// ([`Error::MalformedRecord`]), or whose cost overflows the total.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tripbook::report::build_report;
/// use tripbook::store::StoredRecord;
///
/// let records: Vec<StoredRecord> = serde_json::from_value(json!([
///     {"reservation_type": "HotelReservation", "checkin_date": "2030-05-02",
///      "checkout_date": "2030-05-04", "city": "Sucre", "hotel_name": "Parador", "cost": 250},
///     {"reservation_type": "TripReservation", "trip_type": "flight", "departure": "La Paz",
///      "destination": "Sucre", "date": "2030-05-02", "cost": 100},
/// ])).unwrap();
///
/// let report = build_report(&records).unwrap();
/// assert_eq!(report.total_cost, 350);
/// assert_eq!(report.activity_names[0], "Hotel stay at Parador in Sucre");
/// ```
pub fn build_report(records: &[StoredRecord]) -> Result<TripReport> {
    let reservations = records
        .iter()
        .enumerate()
        .map(|(index, record)| record.to_reservation(index))
        .collect::<Result<Vec<_>>>()?;

    build_report_from_reservations(reservations)
}

/// Builds a report from already-typed reservations given in insertion
/// order.
///
/// # Errors
///
/// Returns [`Error::MalformedRecord`] naming the first reservation whose
/// cost pushes the total past `u64::MAX`.
pub fn build_report_from_reservations(mut reservations: Vec<Reservation>) -> Result<TripReport> {
    let total_cost = total_cost(&reservations)?;
    reservations.sort_by_key(Reservation::comparison_date);

    let activities: Vec<Activity> = reservations.iter().map(Activity::from_reservation).collect();
    let activity_names = activities.iter().map(|a| a.name.clone()).collect();

    Ok(TripReport {
        activities,
        total_cost,
        activity_names,
    })
}

fn total_cost(reservations: &[Reservation]) -> Result<u64> {
    reservations
        .iter()
        .enumerate()
        .try_fold(0u64, |total, (index, reservation)| {
            total
                .checked_add(reservation.cost())
                .ok_or_else(|| Error::MalformedRecord {
                    index,
                    tag: reservation.kind().tag().to_string(),
                    reason: format!("cost {} overflows the trip total", reservation.cost()),
                })
        })
}

/// Loads every record from `store` and builds the report.
///
/// # Errors
///
/// Returns storage errors from [`ReservationStore::load_all`] and the
/// errors of [`build_report`].
pub fn build_report_from_store(store: &dyn ReservationStore) -> Result<TripReport> {
    let records = store.load_all()?;
    log::debug!("building trip report from {} record(s)", records.len());
    build_report(&records)
}
