//! CLI command implementations.
//!
//! - `reserve_trip`: Record a flight or bus trip
//! - `reserve_hotel`: Record a hotel stay
//! - `reserve_restaurant`: Record a restaurant booking
//! - `list`: List stored reservations
//! - `report`: Build the chronological trip report
//! - `departments`: List or check department names
//! - `validate`: Validate configuration file
//! - `show_store`: Show the resolved store backend and path
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod departments;
pub mod list;
pub mod report;
pub mod reserve_hotel;
pub mod reserve_restaurant;
pub mod reserve_trip;
pub mod show_store;
pub mod validate;

pub use completions::CompletionsCommand;
pub use departments::DepartmentsCommand;
pub use list::ListCommand;
pub use report::ReportCommand;
pub use reserve_hotel::ReserveHotelCommand;
pub use reserve_restaurant::ReserveRestaurantCommand;
pub use reserve_trip::{ReserveBusCommand, ReserveFlightCommand};
pub use show_store::ShowStoreCommand;
pub use validate::ValidateCommand;
