//! Core data models for the airline ledger.
//!
//! Clients and packages are validated once, when they are built, and are
//! immutable afterwards.

mod client;
mod package;
mod report;

pub use client::Client;
pub use package::Package;
pub use report::TransportationReport;

/// The minimum number of characters in any name or place.
pub const MIN_NAME_LENGTH: usize = 3;

/// Returns true if `value` has at least [`MIN_NAME_LENGTH`] characters.
pub(crate) fn meets_min_length(value: &str) -> bool {
    value.chars().count() >= MIN_NAME_LENGTH
}
