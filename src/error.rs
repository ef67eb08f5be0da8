//! Error types for the airline ledger.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every rejected construction, registration or query.

use chrono::NaiveDate;
use thiserror::Error;

use crate::dates::DATE_FORMAT;

/// The broad category an error falls into.
///
/// Callers that only care whether input was rejected or something was
/// missing can match on this instead of on individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input failed a validation rule.
    Validation,
    /// A lookup found nothing.
    NotFound,
    /// Configuration could not be read or parsed.
    Configuration,
}

/// The main error type for the airline ledger.
///
/// # Example
///
/// ```
/// use airline_ledger::error::{ErrorKind, LedgerError};
///
/// let error = LedgerError::ClientNotFound {
///     name: "Jane Roe".to_string(),
/// };
/// assert_eq!(error.to_string(), "Client does not exist: Jane Roe");
/// assert_eq!(error.kind(), ErrorKind::NotFound);
/// ```
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The airline name was too short.
    #[error("Invalid airline name '{name}': must be at least 3 characters long")]
    InvalidAirlineName {
        /// The rejected name.
        name: String,
    },

    /// The client name was too short.
    #[error("Invalid client name '{name}': must be at least 3 characters long")]
    InvalidClientName {
        /// The rejected name.
        name: String,
    },

    /// The package origin was too short.
    #[error("Invalid origin '{origin}': must be at least 3 characters long")]
    InvalidOrigin {
        /// The rejected origin.
        origin: String,
    },

    /// The package destination was too short.
    #[error("Invalid destination '{destination}': must be at least 3 characters long")]
    InvalidDestination {
        /// The rejected destination.
        destination: String,
    },

    /// The package origin and destination were the same place.
    #[error("Origin equals destination: '{place}'")]
    SameOriginAndDestination {
        /// The place given as both origin and destination.
        place: String,
    },

    /// A package referenced something that is not a registered client.
    #[error("Invalid client '{name}': packages must reference a registered client")]
    InvalidClient {
        /// The unresolved client reference.
        name: String,
    },

    /// A date string was not in `dd/mm/yyyy` form.
    #[error("Invalid date '{value}': expected format dd/mm/yyyy")]
    InvalidDateFormat {
        /// The rejected input.
        value: String,
    },

    /// A date fell before the fee schedule's floor date.
    #[error(
        "Date {} is before the minimum date {}",
        .date.format(DATE_FORMAT),
        .min.format(DATE_FORMAT)
    )]
    DateBeforeMinimum {
        /// The rejected date.
        date: NaiveDate,
        /// The floor date.
        min: NaiveDate,
    },

    /// A date fell outside the queryable window.
    #[error(
        "Date {} is out of range: must be between {} and {}",
        .date.format(DATE_FORMAT),
        .min.format(DATE_FORMAT),
        .max.format(DATE_FORMAT)
    )]
    DateOutOfRange {
        /// The rejected date.
        date: NaiveDate,
        /// The earliest accepted date.
        min: NaiveDate,
        /// The latest accepted date.
        max: NaiveDate,
    },

    /// A fee could not be read as an integer.
    #[error("Invalid transportation fee '{value}': must be an integer")]
    InvalidFee {
        /// The rejected input.
        value: String,
    },

    /// No client with the given name has been registered.
    #[error("Client does not exist: {name}")]
    ClientNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl LedgerError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::ClientNotFound { .. } => ErrorKind::NotFound,
            LedgerError::ConfigNotFound { .. } | LedgerError::ConfigParseError { .. } => {
                ErrorKind::Configuration
            }
            _ => ErrorKind::Validation,
        }
    }

    /// Returns true if this error rejected caller input.
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}

/// A type alias for Results that return LedgerError.
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_invalid_airline_name_displays_name() {
        let error = LedgerError::InvalidAirlineName {
            name: "AN".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid airline name 'AN': must be at least 3 characters long"
        );
    }

    #[test]
    fn test_invalid_origin_displays_origin() {
        let error = LedgerError::InvalidOrigin {
            origin: "NY".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid origin 'NY': must be at least 3 characters long"
        );
    }

    #[test]
    fn test_same_origin_and_destination_displays_place() {
        let error = LedgerError::SameOriginAndDestination {
            place: "New York".to_string(),
        };
        assert_eq!(error.to_string(), "Origin equals destination: 'New York'");
    }

    #[test]
    fn test_invalid_client_mentions_invalid_client() {
        let error = LedgerError::InvalidClient {
            name: "John Doe".to_string(),
        };
        assert!(error.to_string().contains("Invalid client 'John Doe'"));
    }

    #[test]
    fn test_date_errors_display_day_month_year() {
        let error = LedgerError::DateBeforeMinimum {
            date: date(1999, 12, 31),
            min: date(2000, 1, 1),
        };
        assert_eq!(
            error.to_string(),
            "Date 31/12/1999 is before the minimum date 01/01/2000"
        );

        let error = LedgerError::DateOutOfRange {
            date: date(2030, 5, 4),
            min: date(2000, 1, 1),
            max: date(2026, 10, 19),
        };
        assert_eq!(
            error.to_string(),
            "Date 04/05/2030 is out of range: must be between 01/01/2000 and 19/10/2026"
        );
    }

    #[test]
    fn test_invalid_fee_displays_value() {
        let error = LedgerError::InvalidFee {
            value: "twenty".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid transportation fee 'twenty': must be an integer"
        );
    }

    #[test]
    fn test_kind_classifies_variants() {
        assert_eq!(
            LedgerError::ClientNotFound {
                name: "x".to_string()
            }
            .kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            LedgerError::ConfigNotFound {
                path: "/x".to_string()
            }
            .kind(),
            ErrorKind::Configuration
        );
        let invalid = LedgerError::InvalidDateFormat {
            value: "2023-12-31".to_string(),
        };
        assert_eq!(invalid.kind(), ErrorKind::Validation);
        assert!(invalid.is_validation());
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<LedgerError>();
    }
}
