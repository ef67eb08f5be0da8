//! Daily transportation report.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::dates::{day_month_year, format_date};

/// Summary of the packages transported on one date and what they were charged.
///
/// The report is computed on demand and never stored. `total` is always
/// `packages * fee`; it is an `i128` so the product of any package count and
/// any fee is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransportationReport {
    /// The reported date.
    #[serde(with = "day_month_year")]
    pub date: NaiveDate,
    /// The per-package fee in effect on that date.
    pub fee: i64,
    /// How many packages were shipped on that date.
    pub packages: usize,
    /// The total fee charged for those packages.
    pub total: i128,
}

impl TransportationReport {
    /// Builds a report, computing the total charge.
    pub fn new(date: NaiveDate, fee: i64, packages: usize) -> Self {
        // usize is at most 64 bits, so the product cannot overflow i128.
        let total = packages as i128 * i128::from(fee);
        Self {
            date,
            fee,
            packages,
            total,
        }
    }
}

impl fmt::Display for TransportationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[DATE: {} | FEE: {}]\nTotal packages transported: {}\nTotal transportation fee charged: {}",
            format_date(self.date),
            self.fee,
            self.packages,
            self.total
        )
    }
}
