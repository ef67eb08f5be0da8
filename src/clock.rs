//! Source of "today" for the ledger.
//!
//! Package default dates and the upper bound of fee queries both depend on
//! the current date, so the [`Airline`](crate::Airline) reads it through a
//! [`Clock`] that tests can pin.

use std::fmt::Debug;

use chrono::{Local, NaiveDate};

/// Provides the current calendar date.
pub trait Clock: Debug + Send + Sync {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// Reads the local system date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
///
/// # Example
///
/// ```
/// use airline_ledger::clock::{Clock, FixedClock};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
/// assert_eq!(FixedClock(date).today(), date);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
