//! The booking desk: validate, price, persist.
//!
//! [`BookingDesk`] ties the pure validators to a [`ReservationStore`]. A
//! reservation is appended only after it validates; on any failure nothing
//! is written.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::clock::{Clock, SystemClock};
use crate::config::{Config, CostPolicy, PricedKind};
use crate::department::Department;
use crate::error::{Error, Result};
use crate::reservation::{Reservation, TripType, ValidationError};
use crate::store::ReservationStore;
use crate::validation::{validate_flight_or_bus, validate_hotel, validate_restaurant};

/// A flight or bus request as supplied by the caller.
///
/// # Examples
///
/// ```
/// use tripbook::booking::TripRequest;
/// use tripbook::TripType;
///
/// let request = TripRequest::new(TripType::Bus, "2031-02-01", "Oruro", "Potosí", 8)
///     .with_comments("window seat");
/// assert_eq!(request.comments.as_deref(), Some("window seat"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    /// Flight or bus.
    pub trip_type: TripType,
    /// Travel date, `YYYY-MM-DD`.
    pub date: String,
    /// Departure place.
    pub departure: String,
    /// Destination place.
    pub destination: String,
    /// Caller-supplied cost.
    pub cost: i64,
    /// Optional free text.
    pub comments: Option<String>,
}

impl TripRequest {
    /// Creates a request without comments.
    pub fn new(
        trip_type: TripType,
        date: impl Into<String>,
        departure: impl Into<String>,
        destination: impl Into<String>,
        cost: i64,
    ) -> Self {
        Self {
            trip_type,
            date: date.into(),
            departure: departure.into(),
            destination: destination.into(),
            cost,
            comments: None,
        }
    }

    /// Attaches comments.
    #[must_use]
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }
}

/// A hotel stay request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelRequest {
    /// Check-in date, `YYYY-MM-DD`.
    pub checkin_date: String,
    /// Checkout date, `YYYY-MM-DD`.
    pub checkout_date: String,
    /// Hotel name.
    pub hotel_name: String,
    /// City (department).
    pub city: String,
    /// Caller-supplied cost.
    pub cost: i64,
    /// Optional free text.
    pub comments: Option<String>,
}

impl HotelRequest {
    /// Creates a request without comments.
    pub fn new(
        checkin_date: impl Into<String>,
        checkout_date: impl Into<String>,
        hotel_name: impl Into<String>,
        city: impl Into<String>,
        cost: i64,
    ) -> Self {
        Self {
            checkin_date: checkin_date.into(),
            checkout_date: checkout_date.into(),
            hotel_name: hotel_name.into(),
            city: city.into(),
            cost,
            comments: None,
        }
    }

    /// Attaches comments.
    #[must_use]
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }
}

/// A restaurant booking request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantRequest {
    /// Date, `YYYY-MM-DD`.
    pub date: String,
    /// Time, `HH:MM` or `HH:MM:SS`.
    pub time: String,
    /// Restaurant name.
    pub restaurant: String,
    /// City (department).
    pub city: String,
    /// Requested dish.
    pub dish: String,
    /// Cost, always kept as given.
    pub cost: i64,
    /// Optional free text.
    pub comments: Option<String>,
}

impl RestaurantRequest {
    /// Creates a request without comments.
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        restaurant: impl Into<String>,
        city: impl Into<String>,
        dish: impl Into<String>,
        cost: i64,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            restaurant: restaurant.into(),
            city: city.into(),
            dish: dish.into(),
            cost,
            comments: None,
        }
    }

    /// Attaches comments.
    #[must_use]
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }
}

/// Validates reservations, applies the cost policy, and appends them to a
/// store.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tripbook::booking::BookingDesk;
/// use tripbook::clock::FixedClock;
/// use tripbook::config::{Config, CostPolicy, PricingConfig};
/// use tripbook::store::{MemoryStore, ReservationStore};
///
/// let config = Config {
///     pricing: Some(PricingConfig { policy: Some(CostPolicy::Caller), ..Default::default() }),
///     ..Default::default()
/// };
/// let clock = FixedClock::new(
///     NaiveDate::from_ymd_opt(2030, 1, 1).unwrap().and_hms_opt(8, 0, 0).unwrap(),
/// );
/// let desk = BookingDesk::with_clock(MemoryStore::new(), config, clock);
///
/// let flight = desk.reserve_flight("2030-02-10", "La Paz", "Cochabamba", 650).unwrap();
/// assert_eq!(flight.cost(), 650);
/// assert_eq!(desk.store().load_all().unwrap().len(), 1);
/// ```
#[derive(Debug)]
pub struct BookingDesk<S, C = SystemClock> {
    store: S,
    clock: C,
    config: Config,
    rng: Mutex<StdRng>,
}

impl<S: ReservationStore> BookingDesk<S> {
    /// Creates a desk using the system clock.
    pub fn new(store: S, config: Config) -> Self {
        Self::with_clock(store, config, SystemClock)
    }
}

impl<S: ReservationStore, C: Clock> BookingDesk<S, C> {
    /// Creates a desk with an explicit clock.
    pub fn with_clock(store: S, config: Config, clock: C) -> Self {
        Self {
            store,
            clock,
            config,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Seeds the random cost generator.
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            ..self
        }
    }

    /// Returns the underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the configuration in effect.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Validates and records a flight.
    ///
    /// # Errors
    ///
    /// Returns the validator's error, a department error when
    /// `strict_departments` is set, or a storage error.
    pub fn reserve_flight(
        &self,
        date: &str,
        departure: &str,
        destination: &str,
        cost: i64,
    ) -> Result<Reservation> {
        self.reserve_trip(&TripRequest::new(TripType::Flight, date, departure, destination, cost))
    }

    /// Validates and records a bus trip.
    ///
    /// # Errors
    ///
    /// See [`BookingDesk::reserve_flight`].
    pub fn reserve_bus(
        &self,
        date: &str,
        departure: &str,
        destination: &str,
        cost: i64,
    ) -> Result<Reservation> {
        self.reserve_trip(&TripRequest::new(TripType::Bus, date, departure, destination, cost))
    }

    /// Validates and records a hotel stay.
    ///
    /// # Errors
    ///
    /// See [`BookingDesk::reserve_flight`].
    pub fn reserve_hotel(
        &self,
        checkin_date: &str,
        checkout_date: &str,
        hotel_name: &str,
        city: &str,
        cost: i64,
    ) -> Result<Reservation> {
        self.reserve_hotel_stay(&HotelRequest::new(
            checkin_date,
            checkout_date,
            hotel_name,
            city,
            cost,
        ))
    }

    /// Validates and records a restaurant booking.
    ///
    /// # Errors
    ///
    /// See [`BookingDesk::reserve_flight`].
    pub fn reserve_restaurant(
        &self,
        date: &str,
        time: &str,
        restaurant: &str,
        city: &str,
        dish: &str,
        cost: i64,
    ) -> Result<Reservation> {
        self.reserve_table(&RestaurantRequest::new(date, time, restaurant, city, dish, cost))
    }

    /// Validates and records a trip request.
    ///
    /// # Errors
    ///
    /// See [`BookingDesk::reserve_flight`].
    pub fn reserve_trip(&self, request: &TripRequest) -> Result<Reservation> {
        let reservation = validate_flight_or_bus(
            request.trip_type,
            &request.date,
            &request.departure,
            &request.destination,
            request.cost,
            &self.clock,
        )?;
        self.commit(reservation, request.comments.clone())
    }

    /// Validates and records a hotel request.
    ///
    /// # Errors
    ///
    /// See [`BookingDesk::reserve_flight`].
    pub fn reserve_hotel_stay(&self, request: &HotelRequest) -> Result<Reservation> {
        let reservation = validate_hotel(
            &request.checkin_date,
            &request.checkout_date,
            &request.hotel_name,
            &request.city,
            request.cost,
            &self.clock,
        )?;
        self.commit(reservation, request.comments.clone())
    }

    /// Validates and records a restaurant request.
    ///
    /// # Errors
    ///
    /// See [`BookingDesk::reserve_flight`].
    pub fn reserve_table(&self, request: &RestaurantRequest) -> Result<Reservation> {
        let reservation = validate_restaurant(
            &request.date,
            &request.time,
            &request.restaurant,
            &request.city,
            &request.dish,
            request.cost,
            &self.clock,
        )?;
        self.commit(reservation, request.comments.clone())
    }

    fn commit(&self, reservation: Reservation, comments: Option<String>) -> Result<Reservation> {
        let mut reservation = reservation.with_comments(comments);

        if self.config.strict_departments() {
            Self::normalize_departments(&mut reservation)?;
        }
        self.apply_cost_policy(&mut reservation)?;

        self.store.append(&reservation)?;
        log::debug!(
            "recorded {} on {} for {}",
            reservation.describe(),
            reservation.date_label(),
            reservation.cost()
        );
        Ok(reservation)
    }

    fn normalize_departments(reservation: &mut Reservation) -> Result<()> {
        for (field, place) in reservation.places_mut() {
            let department: Department = place.parse().map_err(|e: ValidationError| {
                Error::Validation {
                    field: field.into(),
                    message: e.message,
                }
            })?;
            *place = department.name().to_string();
        }
        Ok(())
    }

    fn apply_cost_policy(&self, reservation: &mut Reservation) -> Result<()> {
        if self.config.cost_policy() != CostPolicy::Randomized {
            return Ok(());
        }
        let Some(kind) = PricedKind::of(reservation.kind(), reservation.trip_type()) else {
            return Ok(());
        };

        let range = self.config.cost_range(kind);
        if range.min > range.max {
            return Err(Error::Validation {
                field: format!("pricing.{kind}"),
                message: format!("min ({}) must not exceed max ({})", range.min, range.max),
            });
        }

        let cost = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen_range(range.min..=range.max);
        log::debug!(
            "randomized cost policy: {kind} cost {} replaced with {cost} (range {}..={})",
            reservation.cost(),
            range.min,
            range.max
        );
        reservation.set_cost(cost);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::{CostRange, PricingConfig};
    use crate::store::MemoryStore;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock::new(
            NaiveDate::from_ymd_opt(2030, 6, 15)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        )
    }

    fn config(policy: CostPolicy, strict: bool) -> Config {
        Config {
            pricing: Some(PricingConfig {
                policy: Some(policy),
                ..Default::default()
            }),
            strict_departments: Some(strict),
            ..Default::default()
        }
    }

    fn desk(policy: CostPolicy) -> BookingDesk<MemoryStore, FixedClock> {
        BookingDesk::with_clock(MemoryStore::new(), config(policy, false), clock())
    }

    #[test]
    fn test_caller_policy_keeps_cost() {
        let desk = desk(CostPolicy::Caller);
        let hotel = desk
            .reserve_hotel("2030-07-01", "2030-07-04", "Los Tajibos", "Santa Cruz", 1234)
            .unwrap();
        assert_eq!(hotel.cost(), 1234);
        assert_eq!(desk.store().len(), 1);
    }

    #[test]
    fn test_randomized_policy_uses_default_ranges() {
        let desk = desk(CostPolicy::Randomized).with_seed(7);
        for _ in 0..20 {
            let flight = desk.reserve_flight("2030-07-01", "La Paz", "Pando", 1).unwrap();
            assert!((200..=10_000).contains(&flight.cost()));
            let bus = desk.reserve_bus("2030-07-01", "La Paz", "Oruro", 5000).unwrap();
            assert!((2..=10).contains(&bus.cost()));
        }
    }

    #[test]
    fn test_randomized_policy_honors_configured_range() {
        let mut config = config(CostPolicy::Randomized, false);
        config.pricing.as_mut().unwrap().hotel = Some(CostRange { min: 99, max: 99 });
        let desk = BookingDesk::with_clock(MemoryStore::new(), config, clock());

        let hotel = desk
            .reserve_hotel("2030-07-01", "2030-07-02", "Rosario", "La Paz", 1)
            .unwrap();
        assert_eq!(hotel.cost(), 99);
    }

    #[test]
    fn test_restaurant_keeps_cost_under_randomized_policy() {
        let desk = desk(CostPolicy::Randomized);
        let dinner = desk
            .reserve_restaurant("2030-06-15", "20:00", "Gustu", "La Paz", "Llama", 310)
            .unwrap();
        assert_eq!(dinner.cost(), 310);
    }

    #[test]
    fn test_same_seed_same_costs() {
        let a = desk(CostPolicy::Randomized).with_seed(42);
        let b = desk(CostPolicy::Randomized).with_seed(42);
        for _ in 0..5 {
            let x = a.reserve_flight("2030-08-01", "Sucre", "Tarija", 0).unwrap();
            let y = b.reserve_flight("2030-08-01", "Sucre", "Tarija", 0).unwrap();
            assert_eq!(x.cost(), y.cost());
        }
    }

    #[test]
    fn test_failure_persists_nothing() {
        let desk = desk(CostPolicy::Caller);
        assert!(desk.reserve_flight("2030-06-15", "La Paz", "Beni", 10).is_err());
        assert!(desk
            .reserve_hotel("2030-07-02", "2030-07-01", "Rosario", "La Paz", 1)
            .is_err());
        assert!(desk
            .reserve_restaurant("2030-06-15", "25:99", "Gustu", "La Paz", "Llama", 1)
            .is_err());
        assert!(desk.store().is_empty());
    }

    #[test]
    fn test_comments_reach_the_store() {
        let desk = desk(CostPolicy::Caller);
        let request = TripRequest::new(TripType::Bus, "2030-09-09", "Tarija", "Sucre", 9)
            .with_comments("  overnight bus  ");
        desk.reserve_trip(&request).unwrap();

        let records = desk.store().load_all().unwrap();
        assert_eq!(records[0].as_map()["comments"], "overnight bus");
    }

    #[test]
    fn test_strict_departments_normalize_names() {
        let desk = BookingDesk::with_clock(
            MemoryStore::new(),
            config(CostPolicy::Caller, true),
            clock(),
        );
        let trip = desk.reserve_bus("2030-07-01", "potosi", "LA PAZ", 12).unwrap();
        assert_eq!(trip.describe(), "Bus from Potosí to La Paz");
    }

    #[test]
    fn test_strict_departments_reject_unknown_place() {
        let desk = BookingDesk::with_clock(
            MemoryStore::new(),
            config(CostPolicy::Caller, true),
            clock(),
        );
        let err = desk
            .reserve_hotel("2030-07-01", "2030-07-02", "Palacio de Sal", "Uyuni", 80)
            .unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "city"));
        assert!(desk.store().is_empty());
    }

    #[test]
    fn test_lenient_mode_accepts_any_place() {
        let desk = desk(CostPolicy::Caller);
        let trip = desk.reserve_flight("2030-07-01", "Lima", "Uyuni", 700).unwrap();
        assert_eq!(trip.describe(), "Flight from Lima to Uyuni");
    }
}
