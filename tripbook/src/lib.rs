#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # tripbook
//!
//! A library for recording travel reservations around Bolivia and
//! summarizing them as a trip report.
//!
//! Flights, bus trips, hotel stays and restaurant bookings are validated
//! against the current date, appended to a durable store, and later
//! aggregated into a chronological itinerary with a total cost.
//!
//! ## Core Types
//!
//! - [`Reservation`] and its variants: validated reservations
//! - [`BookingDesk`]: validate, price and persist in one call
//! - [`store::ReservationStore`]: JSON file, SQLite and in-memory backends
//! - [`TripReport`]: the aggregated itinerary
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use tripbook::clock::FixedClock;
//! use tripbook::store::MemoryStore;
//! use tripbook::{build_report_from_store, BookingDesk, Config};
//!
//! let clock = FixedClock::new(
//!     NaiveDate::from_ymd_opt(2030, 1, 1).unwrap().and_hms_opt(9, 0, 0).unwrap(),
//! );
//! let desk = BookingDesk::with_clock(MemoryStore::new(), Config::default(), clock);
//!
//! desk.reserve_restaurant("2030-01-03", "20:30", "Gustu", "La Paz", "Trucha", 75).unwrap();
//! desk.reserve_flight("2030-01-02", "Santa Cruz", "La Paz", 0).unwrap();
//!
//! let report = build_report_from_store(desk.store()).unwrap();
//! assert_eq!(report.activity_names[0], "Flight from Santa Cruz to La Paz");
//! assert_eq!(report.activities.len(), 2);
//! ```

pub mod booking;
pub mod clock;
pub mod config;
pub mod department;
pub mod error;
pub mod logging;
pub mod report;
pub mod reservation;
pub mod store;
pub mod validation;

// Re-export key types at crate root for convenience
pub use booking::{BookingDesk, HotelRequest, RestaurantRequest, TripRequest};
pub use config::{Config, ConfigBuilder};
pub use department::Department;
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use report::{build_report, build_report_from_store, Activity, TripReport};
pub use reservation::{
    HotelReservation, Reservation, ReservationKind, RestaurantReservation, TripReservation,
    TripType, ValidationError,
};
pub use validation::{validate_flight_or_bus, validate_hotel, validate_restaurant};
