//! Sources of "now" for date validation.
//!
//! Validators compare caller dates against the current local date and time.
//! Taking the clock as a parameter keeps them deterministic under test.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Provides the current local date and time.
pub trait Clock {
    /// Returns the current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// Returns the current local date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// The system wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a given moment.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tripbook::clock::{Clock, FixedClock};
///
/// let moment = NaiveDate::from_ymd_opt(2030, 1, 15)
///     .unwrap()
///     .and_hms_opt(9, 30, 0)
///     .unwrap();
/// let clock = FixedClock::new(moment);
/// assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2030, 1, 15).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    /// Creates a clock that always reports `moment`.
    #[must_use]
    pub const fn new(moment: NaiveDateTime) -> Self {
        Self(moment)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
