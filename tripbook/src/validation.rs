//! Reservation validators.
//!
//! One validator per reservation kind. Each takes the raw caller-supplied
//! strings and numbers plus a [`Clock`], checks the date and field rules, and
//! returns either a constructed [`Reservation`] or a typed [`Error`] naming
//! the field and constraint that failed. Validators never touch storage; see
//! [`crate::booking::BookingDesk`] for the validate-then-append flow.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::reservation::{
    HotelReservation, Reservation, RestaurantReservation, TripReservation, TripType,
};

#[cfg(test)]
mod proptests;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Validates a flight or bus reservation.
///
/// # Errors
///
/// - [`Error::InvalidDate`] if `date_str` is not `YYYY-MM-DD`
/// - [`Error::PastDate`] if the date is not strictly after today
/// - [`Error::Validation`] if the cost is negative or a place is empty
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tripbook::clock::FixedClock;
/// use tripbook::validation::validate_flight_or_bus;
/// use tripbook::{Error, TripType};
///
/// let clock = FixedClock::new(
///     NaiveDate::from_ymd_opt(2030, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap(),
/// );
///
/// let ok = validate_flight_or_bus(TripType::Flight, "2030-01-02", "La Paz", "Sucre", 900, &clock);
/// assert!(ok.is_ok());
///
/// let same_day =
///     validate_flight_or_bus(TripType::Bus, "2030-01-01", "La Paz", "Oruro", 5, &clock);
/// assert!(matches!(same_day, Err(Error::PastDate { .. })));
/// ```
pub fn validate_flight_or_bus(
    kind: TripType,
    date_str: &str,
    departure: &str,
    destination: &str,
    cost: i64,
    clock: &impl Clock,
) -> Result<Reservation> {
    let date = parse_date("date", date_str)?;
    ensure_future_date("date", date, clock)?;
    let cost = non_negative_cost(cost)?;

    let trip = TripReservation::new(kind, departure, destination, date, cost)?;
    Ok(trip.into())
}

/// Validates a hotel reservation.
///
/// The check-in date is checked before the range, so a past check-in is
/// reported as [`Error::PastDate`] whatever the checkout date is.
///
/// # Errors
///
/// - [`Error::InvalidDate`] if either date is not `YYYY-MM-DD`
/// - [`Error::PastDate`] if check-in is not strictly after today
/// - [`Error::InvalidRange`] if checkout is not strictly after check-in
/// - [`Error::Validation`] if the cost is negative or a name is empty
pub fn validate_hotel(
    checkin_str: &str,
    checkout_str: &str,
    hotel: &str,
    city: &str,
    cost: i64,
    clock: &impl Clock,
) -> Result<Reservation> {
    let checkin = parse_date("checkin_date", checkin_str)?;
    let checkout = parse_date("checkout_date", checkout_str)?;
    ensure_future_date("checkin_date", checkin, clock)?;

    if checkout <= checkin {
        return Err(Error::InvalidRange { checkin, checkout });
    }

    let cost = non_negative_cost(cost)?;
    let hotel = HotelReservation::new(checkin, checkout, city, hotel, cost)?;
    Ok(hotel.into())
}

/// Validates a restaurant reservation.
///
/// `time_str` accepts `HH:MM` or `HH:MM:SS`.
///
/// # Errors
///
/// - [`Error::InvalidDateTime`] if the date or time is malformed
/// - [`Error::PastDateTime`] if the timestamp is not strictly after now
/// - [`Error::Validation`] if the cost is negative or a name is empty
pub fn validate_restaurant(
    date_str: &str,
    time_str: &str,
    restaurant: &str,
    city: &str,
    dish: &str,
    cost: i64,
    clock: &impl Clock,
) -> Result<Reservation> {
    let timestamp = parse_date_time(date_str, time_str)?;
    let now = clock.now();
    if timestamp <= now {
        return Err(Error::PastDateTime { timestamp, now });
    }

    let cost = non_negative_cost(cost)?;
    let booking = RestaurantReservation::new(timestamp, restaurant, city, dish, cost)?;
    Ok(booking.into())
}

/// Parses a `YYYY-MM-DD` date.
pub(crate) fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| Error::InvalidDate {
        field: field.into(),
        value: value.to_string(),
    })
}

/// Combines a date and a time into one timestamp.
fn parse_date_time(date_str: &str, time_str: &str) -> Result<NaiveDateTime> {
    let invalid = || Error::InvalidDateTime {
        date: date_str.to_string(),
        time: time_str.to_string(),
    };

    let date = NaiveDate::parse_from_str(date_str.trim(), DATE_FORMAT).map_err(|_| invalid())?;
    let time = TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(time_str.trim(), format).ok())
        .ok_or_else(invalid)?;

    Ok(date.and_time(time))
}

fn ensure_future_date(field: &str, date: NaiveDate, clock: &impl Clock) -> Result<()> {
    let today = clock.today();
    if date > today {
        Ok(())
    } else {
        Err(Error::PastDate {
            field: field.into(),
            date,
            today,
        })
    }
}

fn non_negative_cost(cost: i64) -> Result<u64> {
    u64::try_from(cost).map_err(|_| Error::Validation {
        field: "cost".into(),
        message: format!("cost must not be negative (got {cost})"),
    })
}
