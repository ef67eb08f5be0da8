//! Package model.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::clock::{Clock, SystemClock};
use crate::error::{LedgerError, LedgerResult};

use super::{Client, meets_min_length};

/// A package shipped for a client between two places on a given date.
///
/// The client is shared with the airline's registry rather than owned. A
/// package carries no fee of its own; the fee is resolved from the
/// airline's schedule when a report is produced.
#[derive(Debug, Clone)]
pub struct Package {
    origin: String,
    destination: String,
    client: Arc<Client>,
    date: NaiveDate,
}

impl Package {
    /// Creates a package.
    ///
    /// Checks run in a fixed order so the first violated rule is the one
    /// reported: origin length, destination length, then origin against
    /// destination. When `date` is `None` the package is dated with the
    /// local calendar date; use [`Package::with_clock`] to choose the clock.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use airline_ledger::models::{Client, Package};
    /// use chrono::NaiveDate;
    ///
    /// let client = Arc::new(Client::new("John Doe").unwrap());
    /// let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
    ///
    /// let package = Package::new("New York", "Los Angeles", client.clone(), Some(date)).unwrap();
    /// assert_eq!(package.origin(), "New York");
    /// assert_eq!(package.date(), date);
    ///
    /// assert!(Package::new("NY", "Los Angeles", client, Some(date)).is_err());
    /// ```
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        client: Arc<Client>,
        date: Option<NaiveDate>,
    ) -> LedgerResult<Self> {
        Self::with_clock(origin, destination, client, date, &SystemClock)
    }

    /// Creates a package, dating it with `clock` when `date` is `None`.
    pub fn with_clock(
        origin: impl Into<String>,
        destination: impl Into<String>,
        client: Arc<Client>,
        date: Option<NaiveDate>,
        clock: &dyn Clock,
    ) -> LedgerResult<Self> {
        let origin = origin.into();
        let destination = destination.into();

        if !meets_min_length(&origin) {
            return Err(LedgerError::InvalidOrigin { origin });
        }
        if !meets_min_length(&destination) {
            return Err(LedgerError::InvalidDestination { destination });
        }
        if origin == destination {
            return Err(LedgerError::SameOriginAndDestination { place: origin });
        }

        Ok(Self {
            origin,
            destination,
            client,
            date: date.unwrap_or_else(|| clock.today()),
        })
    }

    /// Returns where the package departs from.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Returns where the package is headed.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Returns the client the package was shipped for.
    pub fn client(&self) -> &Arc<Client> {
        &self.client
    }

    /// Returns the shipping date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} (from {})",
            self.origin, self.destination, self.client
        )
    }
}
