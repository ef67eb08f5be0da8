//! Airline Ledger
//!
//! This crate tracks an airline's clients, the packages shipped for them and
//! a date-indexed schedule of per-package transportation fees, and produces
//! a daily transportation report.

#![warn(missing_docs)]

pub mod airline;
pub mod api;
pub mod clock;
pub mod config;
pub mod dates;
pub mod error;
pub mod models;
pub mod schedule;

pub use airline::Airline;
pub use error::{ErrorKind, LedgerError, LedgerResult};
