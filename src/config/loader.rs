//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the airline
//! configuration from a YAML file.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::airline::Airline;
use crate::clock::Clock;
use crate::error::{LedgerError, LedgerResult};

use super::types::AirlineConfig;

/// Loads and provides access to the airline configuration.
///
/// # File Format
///
/// ```text
/// name: Airline KiuSys-Challenge
/// schedule:
///   floor_date: 01/01/2000   # optional, dd/mm/yyyy
///   base_fee: 10             # optional
/// fees:                      # optional
///   - date: 31/12/2023
///     fee: 20
/// server:                    # optional
///   listen: 127.0.0.1:3000
///   log_level: info
/// ```
///
/// # Example
///
/// ```no_run
/// use airline_ledger::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/airline.yaml").unwrap();
/// println!("Loaded airline: {}", loader.config().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AirlineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the file cannot be read and
    /// `ConfigParseError` if it is not valid configuration YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> LedgerResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| LedgerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml(&content).map_err(|e| match e {
            LedgerError::ConfigParseError { message, .. } => LedgerError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        debug!(path = %path_str, airline = %loader.config.name, "Loaded configuration");
        Ok(loader)
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml(content: &str) -> LedgerResult<Self> {
        let config = serde_yaml::from_str::<AirlineConfig>(content).map_err(|e| {
            LedgerError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            }
        })?;
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AirlineConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AirlineConfig {
        self.config
    }

    /// Builds an airline from the loaded configuration.
    pub fn build_airline(&self, clock: Arc<dyn Clock>) -> LedgerResult<Airline> {
        Airline::from_config(&self.config, clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn config_path() -> &'static str {
        "./config/airline.yaml"
    }

    fn clock() -> Arc<dyn Clock> {
        Arc::new(FixedClock(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()))
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().name, "Airline KiuSys-Challenge");
        assert_eq!(loader.config().schedule.base_fee, 10);
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        match ConfigLoader::load("/nonexistent/airline.yaml") {
            Err(LedgerError::ConfigNotFound { path }) => {
                assert!(path.contains("airline.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_yaml_reports_parse_errors() {
        match ConfigLoader::from_yaml("schedule: [not, a, map]") {
            Err(LedgerError::ConfigParseError { path, message }) => {
                assert_eq!(path, "<inline>");
                assert!(!message.is_empty());
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_build_airline_applies_fees() {
        let loader = ConfigLoader::from_yaml(
            "name: Airline Name\nfees:\n  - date: 31/12/2023\n    fee: 20\n",
        )
        .unwrap();
        let airline = loader.build_airline(clock()).unwrap();

        assert_eq!(airline.name(), "Airline Name");
        assert_eq!(airline.get_transportation_fee("30/12/2023").unwrap(), 10);
        assert_eq!(airline.get_transportation_fee("31/12/2023").unwrap(), 20);
    }

    #[test]
    fn test_build_airline_rejects_short_name() {
        let loader = ConfigLoader::from_yaml("name: AN\n").unwrap();
        assert!(matches!(
            loader.build_airline(clock()),
            Err(LedgerError::InvalidAirlineName { .. })
        ));
    }

    #[test]
    fn test_shipped_configuration_builds() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let airline = loader.build_airline(clock()).unwrap();
        assert_eq!(airline.fee_schedule().floor_date().to_string(), "2000-01-01");
    }
}
