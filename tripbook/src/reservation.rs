//! Reservation types for trips, hotel stays, and restaurant bookings.
//!
//! A [`Reservation`] is a tagged sum of three variants. On disk every variant
//! carries a `reservation_type` discriminator so that heterogeneous records
//! can be read back and aggregated.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Placeholder used by reports when a reservation carries no comments.
pub const DEFAULT_COMMENT: &str = "No additional comments";

/// Mode of transport for a trip reservation.
///
/// # Examples
///
/// ```
/// use tripbook::TripType;
///
/// assert_eq!("flight".parse::<TripType>().unwrap(), TripType::Flight);
/// assert_eq!(TripType::Bus.to_string(), "bus");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    /// A domestic flight.
    Flight,
    /// An intercity bus.
    Bus,
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flight => write!(f, "flight"),
            Self::Bus => write!(f, "bus"),
        }
    }
}

impl FromStr for TripType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "flight" => Ok(Self::Flight),
            "bus" => Ok(Self::Bus),
            _ => Err(ValidationError {
                field: "trip_type".into(),
                message: format!("unknown trip type '{s}' (expected flight or bus)"),
            }),
        }
    }
}

/// The three kinds of reservation, matching the stored discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservationKind {
    /// A flight or bus trip.
    Trip,
    /// A hotel stay.
    Hotel,
    /// A restaurant booking.
    Restaurant,
}

impl ReservationKind {
    /// Returns the discriminator written to storage.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Trip => "TripReservation",
            Self::Hotel => "HotelReservation",
            Self::Restaurant => "RestaurantReservation",
        }
    }

    /// Looks up a kind by its stored discriminator.
    ///
    /// # Examples
    ///
    /// ```
    /// use tripbook::ReservationKind;
    ///
    /// assert_eq!(ReservationKind::from_tag("HotelReservation"), Some(ReservationKind::Hotel));
    /// assert_eq!(ReservationKind::from_tag("CarRental"), None);
    /// ```
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        [Self::Trip, Self::Hotel, Self::Restaurant]
            .into_iter()
            .find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for ReservationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A flight or bus trip between two places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripReservation {
    trip_type: TripType,
    departure: String,
    destination: String,
    date: NaiveDate,
    cost: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    comments: Option<String>,
}

impl TripReservation {
    /// Creates a trip, checking the structural field rules.
    ///
    /// Date rules depend on the current date and are enforced by
    /// [`crate::validation::validate_flight_or_bus`].
    pub(crate) fn new(
        trip_type: TripType,
        departure: &str,
        destination: &str,
        date: NaiveDate,
        cost: u64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            trip_type,
            departure: required_text("departure", departure)?,
            destination: required_text("destination", destination)?,
            date,
            cost,
            comments: None,
        })
    }

    /// Returns the mode of transport.
    #[must_use]
    pub const fn trip_type(&self) -> TripType {
        self.trip_type
    }

    /// Returns the departure place.
    #[must_use]
    pub fn departure(&self) -> &str {
        &self.departure
    }

    /// Returns the destination place.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Returns the travel date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }
}

/// A hotel stay in one city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelReservation {
    checkin_date: NaiveDate,
    checkout_date: NaiveDate,
    city: String,
    hotel_name: String,
    cost: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    comments: Option<String>,
}

impl HotelReservation {
    pub(crate) fn new(
        checkin_date: NaiveDate,
        checkout_date: NaiveDate,
        city: &str,
        hotel_name: &str,
        cost: u64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            checkin_date,
            checkout_date,
            city: required_text("city", city)?,
            hotel_name: required_text("hotel_name", hotel_name)?,
            cost,
            comments: None,
        })
    }

    /// Returns the check-in date.
    #[must_use]
    pub const fn checkin_date(&self) -> NaiveDate {
        self.checkin_date
    }

    /// Returns the checkout date.
    #[must_use]
    pub const fn checkout_date(&self) -> NaiveDate {
        self.checkout_date
    }

    /// Returns the city (department).
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the hotel name.
    #[must_use]
    pub fn hotel_name(&self) -> &str {
        &self.hotel_name
    }

    /// Returns the number of nights booked.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.checkout_date - self.checkin_date).num_days()
    }
}

/// A restaurant booking at a specific moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantReservation {
    reservation_time: NaiveDateTime,
    restaurant: String,
    city: String,
    dish: String,
    cost: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    comments: Option<String>,
}

impl RestaurantReservation {
    pub(crate) fn new(
        reservation_time: NaiveDateTime,
        restaurant: &str,
        city: &str,
        dish: &str,
        cost: u64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            reservation_time,
            restaurant: required_text("restaurant", restaurant)?,
            city: required_text("city", city)?,
            dish: required_text("dish", dish)?,
            cost,
            comments: None,
        })
    }

    /// Returns the booked date and time.
    #[must_use]
    pub const fn reservation_time(&self) -> NaiveDateTime {
        self.reservation_time
    }

    /// Returns the restaurant name.
    #[must_use]
    pub fn restaurant(&self) -> &str {
        &self.restaurant
    }

    /// Returns the city (department).
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the requested dish.
    #[must_use]
    pub fn dish(&self) -> &str {
        &self.dish
    }
}

/// A validated reservation of any kind.
///
/// The serialized form is a flat object with a `reservation_type`
/// discriminator next to the variant fields.
///
/// # Examples
///
/// ```
/// use tripbook::{Reservation, ReservationKind};
///
/// let json = r#"{
///     "reservation_type": "HotelReservation",
///     "checkin_date": "2030-03-01",
///     "checkout_date": "2030-03-04",
///     "city": "Sucre",
///     "hotel_name": "Hostal Colonial",
///     "cost": 320
/// }"#;
/// let reservation: Reservation = serde_json::from_str(json).unwrap();
/// assert_eq!(reservation.kind(), ReservationKind::Hotel);
/// assert_eq!(reservation.cost(), 320);
/// assert_eq!(reservation.describe(), "Hotel stay at Hostal Colonial in Sucre");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reservation_type")]
pub enum Reservation {
    /// A flight or bus trip.
    #[serde(rename = "TripReservation")]
    Trip(TripReservation),
    /// A hotel stay.
    #[serde(rename = "HotelReservation")]
    Hotel(HotelReservation),
    /// A restaurant booking.
    #[serde(rename = "RestaurantReservation")]
    Restaurant(RestaurantReservation),
}

impl Reservation {
    /// Returns the reservation kind.
    #[must_use]
    pub const fn kind(&self) -> ReservationKind {
        match self {
            Self::Trip(_) => ReservationKind::Trip,
            Self::Hotel(_) => ReservationKind::Hotel,
            Self::Restaurant(_) => ReservationKind::Restaurant,
        }
    }

    /// Returns the cost in bolivianos.
    #[must_use]
    pub const fn cost(&self) -> u64 {
        match self {
            Self::Trip(r) => r.cost,
            Self::Hotel(r) => r.cost,
            Self::Restaurant(r) => r.cost,
        }
    }

    /// Returns the free-text comments, if any.
    #[must_use]
    pub fn comments(&self) -> Option<&str> {
        match self {
            Self::Trip(r) => r.comments.as_deref(),
            Self::Hotel(r) => r.comments.as_deref(),
            Self::Restaurant(r) => r.comments.as_deref(),
        }
    }

    /// Returns the canonical comparison date used for chronological sorting.
    ///
    /// Trips use their travel date and hotels their check-in date, both at
    /// midnight. Restaurants use the full reservation timestamp.
    #[must_use]
    pub fn comparison_date(&self) -> NaiveDateTime {
        match self {
            Self::Trip(r) => r.date.and_time(NaiveTime::MIN),
            Self::Hotel(r) => r.checkin_date.and_time(NaiveTime::MIN),
            Self::Restaurant(r) => r.reservation_time,
        }
    }

    /// Returns the canonical date in its serialized form
    /// (`YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`).
    #[must_use]
    pub fn date_label(&self) -> String {
        match self {
            Self::Trip(r) => r.date.format("%Y-%m-%d").to_string(),
            Self::Hotel(r) => r.checkin_date.format("%Y-%m-%d").to_string(),
            Self::Restaurant(r) => r.reservation_time.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }

    /// Returns a human-readable activity description.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Trip(r) => match r.trip_type {
                TripType::Flight => format!("Flight from {} to {}", r.departure, r.destination),
                TripType::Bus => format!("Bus from {} to {}", r.departure, r.destination),
            },
            Self::Hotel(r) => format!("Hotel stay at {} in {}", r.hotel_name, r.city),
            Self::Restaurant(r) => {
                format!("Restaurant reservation at {} in {}", r.restaurant, r.city)
            }
        }
    }

    /// Returns the mode of transport for trips.
    #[must_use]
    pub const fn trip_type(&self) -> Option<TripType> {
        match self {
            Self::Trip(r) => Some(r.trip_type),
            _ => None,
        }
    }

    /// Returns the place fields with their names, for normalization.
    pub(crate) fn places_mut(&mut self) -> Vec<(&'static str, &mut String)> {
        match self {
            Self::Trip(r) => vec![
                ("departure", &mut r.departure),
                ("destination", &mut r.destination),
            ],
            Self::Hotel(r) => vec![("city", &mut r.city)],
            Self::Restaurant(r) => vec![("city", &mut r.city)],
        }
    }

    /// Replaces the assigned cost.
    pub(crate) fn set_cost(&mut self, cost: u64) {
        match self {
            Self::Trip(r) => r.cost = cost,
            Self::Hotel(r) => r.cost = cost,
            Self::Restaurant(r) => r.cost = cost,
        }
    }

    /// Attaches comments; blank comments are dropped.
    #[must_use]
    pub(crate) fn with_comments(mut self, comments: Option<String>) -> Self {
        let comments = comments
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        match &mut self {
            Self::Trip(r) => r.comments = comments,
            Self::Hotel(r) => r.comments = comments,
            Self::Restaurant(r) => r.comments = comments,
        }
        self
    }
}

impl From<TripReservation> for Reservation {
    fn from(r: TripReservation) -> Self {
        Self::Trip(r)
    }
}

impl From<HotelReservation> for Reservation {
    fn from(r: HotelReservation) -> Self {
        Self::Hotel(r)
    }
}

impl From<RestaurantReservation> for Reservation {
    fn from(r: RestaurantReservation) -> Self {
        Self::Restaurant(r)
    }
}

/// Trims a text field and rejects it if nothing is left.
fn required_text(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError {
            field: field.into(),
            message: format!("{field} must be non-empty after trimming whitespace"),
        });
    }
    if trimmed.contains('\0') {
        return Err(ValidationError {
            field: field.into(),
            message: format!("{field} cannot contain null bytes"),
        });
    }
    Ok(trimmed.to_string())
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
