//! Property-based tests for the reservation validators.

use super::{validate_flight_or_bus, validate_hotel, validate_restaurant};
use crate::clock::FixedClock;
use crate::error::Error;
use crate::reservation::{Reservation, TripType};
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 6, 15).unwrap()
}

fn clock() -> FixedClock {
    FixedClock::new(today().and_hms_opt(10, 0, 0).unwrap())
}

fn format(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

// Strategy for trip kinds
fn trip_type_strategy() -> impl Strategy<Value = TripType> {
    prop_oneof![Just(TripType::Flight), Just(TripType::Bus)]
}

// Strategy for non-empty place names
fn place_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,12}( [A-Z][a-z]{2,10})?"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Every date strictly after today is accepted and tagged as a trip
    #[test]
    fn future_trip_dates_succeed(
        kind in trip_type_strategy(),
        days_ahead in 1i64..5000,
        from in place_strategy(),
        to in place_strategy(),
        cost in 0i64..1_000_000,
    ) {
        let date = today() + Duration::days(days_ahead);
        let reservation =
            validate_flight_or_bus(kind, &format(date), &from, &to, cost, &clock()).unwrap();

        let value = serde_json::to_value(&reservation).unwrap();
        let expected_kind = kind.to_string();
        let expected_date = format(date);
        prop_assert_eq!(value["reservation_type"].as_str(), Some("TripReservation"));
        prop_assert_eq!(value["trip_type"].as_str(), Some(expected_kind.as_str()));
        prop_assert_eq!(value["date"].as_str(), Some(expected_date.as_str()));
    }

    // Today and every earlier date is rejected as a past date
    #[test]
    fn non_future_trip_dates_fail(
        kind in trip_type_strategy(),
        days_back in 0i64..5000,
        from in place_strategy(),
        to in place_strategy(),
    ) {
        let date = today() - Duration::days(days_back);
        let result = validate_flight_or_bus(kind, &format(date), &from, &to, 10, &clock());
        let is_past_date = matches!(result, Err(Error::PastDate { .. }));
        prop_assert!(is_past_date);
    }

    // Checkout on or before check-in is always an invalid range
    #[test]
    fn hotel_checkout_not_after_checkin_fails(
        checkin_ahead in 1i64..2000,
        shorter_by in 0i64..400,
        hotel in place_strategy(),
        city in place_strategy(),
    ) {
        let checkin = today() + Duration::days(checkin_ahead);
        let checkout = checkin - Duration::days(shorter_by);
        let result =
            validate_hotel(&format(checkin), &format(checkout), &hotel, &city, 100, &clock());
        let is_invalid_range = matches!(result, Err(Error::InvalidRange { .. }));
        prop_assert!(is_invalid_range);
    }

    // A past check-in is reported as a past date whatever the checkout is
    #[test]
    fn hotel_past_checkin_fails_regardless_of_checkout(
        days_back in 0i64..2000,
        checkout_offset in -400i64..400,
        hotel in place_strategy(),
        city in place_strategy(),
    ) {
        let checkin = today() - Duration::days(days_back);
        let checkout = checkin + Duration::days(checkout_offset);
        let result =
            validate_hotel(&format(checkin), &format(checkout), &hotel, &city, 100, &clock());
        let is_past_date = matches!(result, Err(Error::PastDate { .. }));
        prop_assert!(is_past_date);
    }

    // Valid stays always keep both dates
    #[test]
    fn hotel_valid_stays_keep_dates(
        checkin_ahead in 1i64..2000,
        nights in 1i64..60,
    ) {
        let checkin = today() + Duration::days(checkin_ahead);
        let checkout = checkin + Duration::days(nights);
        let (start, end) = (format(checkin), format(checkout));
        let reservation = validate_hotel(&start, &end, "Hostal", "Tarija", 80, &clock()).unwrap();
        match reservation {
            Reservation::Hotel(hotel) => {
                prop_assert_eq!(hotel.checkin_date(), checkin);
                prop_assert_eq!(hotel.nights(), nights);
            }
            other => prop_assert!(false, "expected hotel, got {:?}", other),
        }
    }

    // Out-of-range clock values never parse
    #[test]
    fn restaurant_out_of_range_times_fail(hour in 24u32..100, minute in 0u32..100) {
        let time = format!("{hour:02}:{minute:02}");
        let result =
            validate_restaurant("2031-01-01", &time, "Gustu", "La Paz", "Trucha", 50, &clock());
        let is_invalid = matches!(result, Err(Error::InvalidDateTime { .. }));
        prop_assert!(is_invalid);
    }

    // Any valid timestamp at or before now is a past date-time
    #[test]
    fn restaurant_past_timestamps_fail(minutes_back in 0i64..100_000) {
        let moment = today().and_hms_opt(10, 0, 0).unwrap() - Duration::minutes(minutes_back);
        let date = moment.format("%Y-%m-%d").to_string();
        let time = moment.format("%H:%M").to_string();
        let result = validate_restaurant(&date, &time, "Gustu", "La Paz", "Trucha", 50, &clock());
        let is_past = matches!(result, Err(Error::PastDateTime { .. }));
        prop_assert!(is_past);
    }
}
