//! Configuration schema definitions.
//!
//! This module defines the configuration structure for tripbook: where
//! reservations are stored, how flight, bus and hotel costs are assigned,
//! whether places must be Bolivian departments, and how listings are printed.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::reservation::{ReservationKind, TripType};

/// Complete configuration structure.
///
/// Every field is optional so that several sources can be layered; see
/// [`crate::config::ConfigMerger`].
///
/// # Examples
///
/// ```
/// use tripbook::config::{Config, CostPolicy, PricingConfig};
///
/// let config = Config {
///     pricing: Some(PricingConfig {
///         policy: Some(CostPolicy::Caller),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// assert_eq!(config.cost_policy(), CostPolicy::Caller);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Reservation store settings.
    pub store: Option<StoreConfig>,

    /// Cost assignment settings.
    pub pricing: Option<PricingConfig>,

    /// Require cities, departures and destinations to be departments.
    pub strict_departments: Option<bool>,

    /// Output format for list and report commands.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Returns the configured storage backend, defaulting to JSON.
    #[must_use]
    pub fn store_backend(&self) -> StorageBackend {
        self.store
            .as_ref()
            .and_then(|s| s.backend)
            .unwrap_or_default()
    }

    /// Returns the configured cost policy, defaulting to randomized.
    #[must_use]
    pub fn cost_policy(&self) -> CostPolicy {
        self.pricing
            .as_ref()
            .and_then(|p| p.policy)
            .unwrap_or_default()
    }

    /// Returns the random cost range for `kind`, falling back to the
    /// built-in range.
    #[must_use]
    pub fn cost_range(&self, kind: PricedKind) -> CostRange {
        let configured = self.pricing.as_ref().and_then(|p| match kind {
            PricedKind::Flight => p.flight,
            PricedKind::Bus => p.bus,
            PricedKind::Hotel => p.hotel,
        });
        configured.unwrap_or_else(|| kind.default_range())
    }

    /// Returns whether places must name one of the nine departments.
    #[must_use]
    pub fn strict_departments(&self) -> bool {
        self.strict_departments.unwrap_or(false)
    }
}

/// Reservation store settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Which backend holds the reservations.
    pub backend: Option<StorageBackend>,

    /// Location of the store. Relative paths are resolved against the data
    /// directory.
    pub path: Option<PathBuf>,

    /// SQLite busy timeout in milliseconds.
    pub busy_timeout_ms: Option<u64>,
}

/// Storage backend selection.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// A single JSON array file.
    #[default]
    Json,
    /// An SQLite database.
    Sqlite,
}

impl StorageBackend {
    /// Default file name for this backend inside the data directory.
    #[must_use]
    pub const fn default_file_name(self) -> &'static str {
        match self {
            Self::Json => "trip.json",
            Self::Sqlite => "tripbook.db",
        }
    }
}

impl FromStr for StorageBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "sqlite" => Ok(Self::Sqlite),
            _ => Err(Error::Validation {
                field: "store.backend".into(),
                message: format!("unknown storage backend '{s}' (expected json or sqlite)"),
            }),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Sqlite => write!(f, "sqlite"),
        }
    }
}

/// Cost assignment settings.
///
/// # Examples
///
/// ```
/// use tripbook::config::{CostRange, PricingConfig};
///
/// let pricing = PricingConfig {
///     flight: Some(CostRange { min: 500, max: 2500 }),
///     ..Default::default()
/// };
/// assert!(pricing.bus.is_none());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PricingConfig {
    /// How the stored cost is chosen.
    pub policy: Option<CostPolicy>,

    /// Random range for flights.
    pub flight: Option<CostRange>,

    /// Random range for buses.
    pub bus: Option<CostRange>,

    /// Random range for hotel stays.
    pub hotel: Option<CostRange>,
}

/// How the stored cost of flights, buses and hotel stays is chosen.
///
/// Restaurant reservations always keep the caller-supplied cost.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CostPolicy {
    /// Substitute a uniformly random cost from the per-kind range.
    #[default]
    Randomized,
    /// Keep the cost supplied by the caller.
    Caller,
}

impl FromStr for CostPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "randomized" | "random" => Ok(Self::Randomized),
            "caller" => Ok(Self::Caller),
            _ => Err(Error::Validation {
                field: "pricing.policy".into(),
                message: format!("unknown cost policy '{s}' (expected randomized or caller)"),
            }),
        }
    }
}

impl fmt::Display for CostPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Randomized => write!(f, "randomized"),
            Self::Caller => write!(f, "caller"),
        }
    }
}

/// Inclusive cost range in bolivianos.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CostRange {
    /// Smallest cost.
    pub min: u64,
    /// Largest cost.
    pub max: u64,
}

/// Reservation kinds subject to the cost policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricedKind {
    /// Flights.
    Flight,
    /// Buses.
    Bus,
    /// Hotel stays.
    Hotel,
}

impl PricedKind {
    /// Built-in random range for this kind.
    #[must_use]
    pub const fn default_range(self) -> CostRange {
        match self {
            Self::Flight => CostRange { min: 200, max: 10_000 },
            Self::Bus => CostRange { min: 2, max: 10 },
            Self::Hotel => CostRange { min: 50, max: 500 },
        }
    }

    /// Maps a reservation to its priced kind, if it has one.
    #[must_use]
    pub fn of(kind: ReservationKind, trip_type: Option<TripType>) -> Option<Self> {
        match (kind, trip_type) {
            (ReservationKind::Trip, Some(TripType::Flight)) => Some(Self::Flight),
            (ReservationKind::Trip, Some(TripType::Bus)) => Some(Self::Bus),
            (ReservationKind::Hotel, _) => Some(Self::Hotel),
            _ => None,
        }
    }
}

impl fmt::Display for PricedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flight => write!(f, "flight"),
            Self::Bus => write!(f, "bus"),
            Self::Hotel => write!(f, "hotel"),
        }
    }
}

/// Output format for list and report commands.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table for humans.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
    /// Comma-separated values.
    Csv,
    /// Tab-separated values.
    Tsv,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            _ => Err(Error::Validation {
                field: "output_format".into(),
                message: format!("unknown output format '{s}' (expected table, json, csv or tsv)"),
            }),
        }
    }
}
