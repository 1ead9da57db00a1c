//! End-to-end tests of the booking desk against real stores.

mod common;

use common::{caller_priced, read_json_file, test_clock};
use tempfile::TempDir;
use tripbook::store::{JsonFileStore, ReservationStore, SqliteStore, DEFAULT_BUSY_TIMEOUT};
use tripbook::{
    BookingDesk, Error, HotelRequest, ReservationKind, RestaurantRequest, TripRequest, TripType,
};

#[test]
fn test_future_trip_is_stored_with_discriminator() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("trip.json");
    let desk = BookingDesk::with_clock(JsonFileStore::new(&path), caller_priced(), test_clock());

    let flight = desk
        .reserve_flight("2030-06-16", "La Paz", "Santa Cruz", 820)
        .unwrap();
    assert_eq!(flight.kind(), ReservationKind::Trip);

    let stored = read_json_file(&path);
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["reservation_type"], "TripReservation");
    assert_eq!(stored[0]["trip_type"], "flight");
    assert_eq!(stored[0]["date"], "2030-06-16");
    assert_eq!(stored[0]["cost"], 820);
    assert!(stored[0].get("comments").is_none());
}

#[test]
fn test_validation_failures_leave_store_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("trip.json");
    let desk = BookingDesk::with_clock(JsonFileStore::new(&path), caller_priced(), test_clock());

    let past = desk.reserve_bus("2030-06-15", "Oruro", "Potosí", 8).unwrap_err();
    assert!(matches!(past, Error::PastDate { .. }));

    let range = desk
        .reserve_hotel("2030-07-10", "2030-07-10", "Cesar's Plaza", "Cochabamba", 300)
        .unwrap_err();
    assert!(matches!(range, Error::InvalidRange { .. }));

    let time = desk
        .reserve_restaurant("2030-07-10", "25:99", "Casa de Campo", "Cochabamba", "Pique", 60)
        .unwrap_err();
    assert!(matches!(time, Error::InvalidDateTime { .. }));

    assert!(!path.exists());
}

#[test]
fn test_request_comments_are_persisted() {
    let dir = TempDir::new().unwrap();
    let store = SqliteStore::open(dir.path().join("tripbook.db"), DEFAULT_BUSY_TIMEOUT).unwrap();
    let desk = BookingDesk::with_clock(store, caller_priced(), test_clock());

    desk.reserve_trip(
        &TripRequest::new(TripType::Bus, "2030-06-20", "Sucre", "Potosí", 25)
            .with_comments("bring coca tea"),
    )
    .unwrap();
    desk.reserve_hotel_stay(
        &HotelRequest::new("2030-06-20", "2030-06-22", "Hotel Coloso", "Potosí", 410)
            .with_comments("   "),
    )
    .unwrap();
    desk.reserve_table(
        &RestaurantRequest::new("2030-06-21", "13:00", "La Casona", "Potosí", "Kalapurka", 55)
            .with_comments("vegetarian"),
    )
    .unwrap();

    let records = desk.store().load_all().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].as_map()["comments"], "bring coca tea");
    assert!(records[1].as_map().get("comments").is_none());
    assert_eq!(records[2].as_map()["reservation_time"], "2030-06-21T13:00:00");
}

#[test]
fn test_randomized_costs_stay_in_range_end_to_end() {
    let dir = TempDir::new().unwrap();
    let desk = BookingDesk::with_clock(
        JsonFileStore::new(dir.path().join("trip.json")),
        tripbook::Config::default(),
        test_clock(),
    )
    .with_seed(2030);

    for _ in 0..10 {
        desk.reserve_hotel("2030-08-01", "2030-08-03", "Casa Grande", "La Paz", 99_999)
            .unwrap();
    }

    for record in desk.store().load_all().unwrap() {
        let cost = record.as_map()["cost"].as_u64().unwrap();
        assert!((50..=500).contains(&cost), "hotel cost {cost} out of range");
    }
}
