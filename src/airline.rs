//! The airline aggregate.
//!
//! An [`Airline`] owns the client registry, the package ledger and the fee
//! schedule. Clients and packages are only ever appended; fees may be set
//! or replaced for any date on or after the schedule's floor.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::config::{AirlineConfig, FeeScheduleConfig};
use crate::dates::{format_date, parse_date};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Client, Package, TransportationReport, meets_min_length};
use crate::schedule::{FeeEntry, FeeSchedule, IntoFee};

/// An airline tracking clients, packages and transportation fees.
///
/// # Example
///
/// ```
/// use airline_ledger::Airline;
///
/// let mut airline = Airline::new("Airline Name").unwrap();
/// let client = airline.add_client("John Doe").unwrap();
/// airline
///     .add_package("New York", "Los Angeles", client, Some("31/12/2023"))
///     .unwrap();
/// airline.add_transportation_fee("31/12/2023", 20).unwrap();
///
/// assert_eq!(
///     airline.get_total_transportation_report("31/12/2023").unwrap(),
///     "[DATE: 31/12/2023 | FEE: 20]\nTotal packages transported: 1\nTotal transportation fee charged: 20"
/// );
/// ```
#[derive(Debug)]
pub struct Airline {
    name: String,
    clients: Vec<Arc<Client>>,
    packages: Vec<Package>,
    transportation_fee: FeeSchedule,
    clock: Arc<dyn Clock>,
}

impl Airline {
    /// Creates an airline with the default fee schedule, reading "today"
    /// from the system clock.
    pub fn new(name: impl Into<String>) -> LedgerResult<Self> {
        Self::with_clock(name, Arc::new(SystemClock))
    }

    /// Creates an airline with the default fee schedule and the given clock.
    pub fn with_clock(name: impl Into<String>, clock: Arc<dyn Clock>) -> LedgerResult<Self> {
        Self::with_schedule(name, &FeeScheduleConfig::default(), clock)
    }

    /// Creates an airline whose schedule starts at the configured floor.
    pub fn with_schedule(
        name: impl Into<String>,
        schedule: &FeeScheduleConfig,
        clock: Arc<dyn Clock>,
    ) -> LedgerResult<Self> {
        let name = name.into();
        if !meets_min_length(&name) {
            return Err(LedgerError::InvalidAirlineName { name });
        }

        Ok(Self {
            name,
            clients: Vec::new(),
            packages: Vec::new(),
            transportation_fee: FeeSchedule::new(schedule),
            clock,
        })
    }

    /// Creates an airline from configuration, registering its initial fees.
    pub fn from_config(config: &AirlineConfig, clock: Arc<dyn Clock>) -> LedgerResult<Self> {
        let mut airline = Self::with_schedule(config.name.clone(), &config.schedule, clock)?;
        for entry in &config.fees {
            airline.transportation_fee.set(entry.date, entry.fee)?;
        }
        info!(
            airline = %airline.name,
            fees = airline.transportation_fee.len(),
            "Airline created from configuration"
        );
        Ok(airline)
    }

    /// Returns the airline's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the registered clients in registration order.
    pub fn clients(&self) -> &[Arc<Client>] {
        &self.clients
    }

    /// Returns the package ledger in insertion order.
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// Returns the fee schedule.
    pub fn fee_schedule(&self) -> &FeeSchedule {
        &self.transportation_fee
    }

    /// Returns today's date according to the airline's clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Finds a registered client by exact name.
    ///
    /// The first client registered under that name is returned.
    pub fn get_client(&self, name: &str) -> LedgerResult<Arc<Client>> {
        self.clients
            .iter()
            .find(|client| client.name() == name)
            .cloned()
            .ok_or_else(|| LedgerError::ClientNotFound {
                name: name.to_string(),
            })
    }

    /// Registers a client, or returns the one already registered under `name`.
    ///
    /// Repeated calls with the same name return the same shared client.
    pub fn add_client(&mut self, name: &str) -> LedgerResult<Arc<Client>> {
        if let Ok(existing) = self.get_client(name) {
            debug!(client = %name, "Client already registered");
            return Ok(existing);
        }

        let client = Arc::new(Client::new(name)?);
        self.clients.push(Arc::clone(&client));
        info!(client = %name, clients = self.clients.len(), "Client registered");
        Ok(client)
    }

    /// Appends a package to the ledger.
    ///
    /// `date` is a `dd/mm/yyyy` string; when it is absent or blank the
    /// package is dated today. Identical packages may be added repeatedly.
    pub fn add_package(
        &mut self,
        origin: impl Into<String>,
        destination: impl Into<String>,
        client: Arc<Client>,
        date: Option<&str>,
    ) -> LedgerResult<&Package> {
        let date = date
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(parse_date)
            .transpose()?;

        let package =
            Package::with_clock(origin, destination, client, date, self.clock.as_ref())?;
        info!(
            origin = %package.origin(),
            destination = %package.destination(),
            client = %package.client(),
            date = %format_date(package.date()),
            "Package added"
        );

        let index = self.packages.len();
        self.packages.push(package);
        Ok(&self.packages[index])
    }

    /// Sets the transportation fee effective from `date`.
    ///
    /// Checks, in order: `date` is `dd/mm/yyyy`, `date` is not before the
    /// floor date, and `fee` is an integer. Future dates are accepted. An
    /// existing fee for the same date is replaced. Returns the stored entry.
    pub fn add_transportation_fee<F: IntoFee>(
        &mut self,
        date: &str,
        fee: F,
    ) -> LedgerResult<FeeEntry> {
        let date = parse_date(date)?;
        let floor = self.transportation_fee.floor_date();
        if date < floor {
            return Err(LedgerError::DateBeforeMinimum { date, min: floor });
        }
        let fee = fee.into_fee()?;

        let previous = self.transportation_fee.set(date, fee)?;
        info!(
            date = %format_date(date),
            fee,
            previous = ?previous,
            "Transportation fee set"
        );
        Ok(FeeEntry {
            effective_date: date,
            fee,
        })
    }

    /// Returns the fee in effect on `date`.
    ///
    /// `date` must be `dd/mm/yyyy` and lie between the floor date and today,
    /// inclusive. The fee is the one registered for the latest date on or
    /// before `date`.
    pub fn get_transportation_fee(&self, date: &str) -> LedgerResult<i64> {
        let date = parse_date(date)?;
        Ok(self.resolve_fee(date)?.fee)
    }

    /// Builds the report for packages shipped on `date`.
    ///
    /// Fails under the same conditions as
    /// [`get_transportation_fee`](Self::get_transportation_fee).
    pub fn transportation_report(&self, date: &str) -> LedgerResult<TransportationReport> {
        let date = parse_date(date)?;
        let fee = self.resolve_fee(date)?.fee;
        let packages = self.packages.iter().filter(|p| p.date() == date).count();

        let report = TransportationReport::new(date, fee, packages);
        debug!(
            date = %format_date(date),
            fee,
            packages,
            total = %report.total,
            "Transportation report built"
        );
        Ok(report)
    }

    /// Renders the report for packages shipped on `date`.
    pub fn get_total_transportation_report(&self, date: &str) -> LedgerResult<String> {
        self.transportation_report(date).map(|report| report.to_string())
    }

    fn resolve_fee(&self, date: NaiveDate) -> LedgerResult<FeeEntry> {
        let min = self.transportation_fee.floor_date();
        let max = self.today();
        if date < min || date > max {
            return Err(LedgerError::DateOutOfRange { date, min, max });
        }

        let entry = self
            .transportation_fee
            .fee_on(date)
            .ok_or(LedgerError::DateBeforeMinimum { date, min })?;
        debug!(
            date = %format_date(date),
            effective_date = %format_date(entry.effective_date),
            fee = entry.fee,
            "Resolved transportation fee"
        );
        Ok(entry)
    }
}

impl fmt::Display for Airline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
