//! Calendar date parsing and formatting.
//!
//! Dates cross every boundary of the ledger as `dd/mm/yyyy` strings and are
//! parsed into [`NaiveDate`] before any comparison, so ordering is always
//! chronological rather than lexicographic.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

use crate::error::{LedgerError, LedgerResult};

/// The `chrono` format string for `dd/mm/yyyy`.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// The default floor date of every fee schedule, 01/01/2000.
pub const DEFAULT_FLOOR_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2000, 1, 1) {
    Some(date) => date,
    None => panic!("invalid default floor date"),
};

/// Parses a `dd/mm/yyyy` string into a calendar date.
///
/// # Example
///
/// ```
/// use airline_ledger::dates::parse_date;
/// use chrono::NaiveDate;
///
/// let date = parse_date("31/12/2023").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
/// assert!(parse_date("2023-12-31").is_err());
/// ```
pub fn parse_date(value: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| LedgerError::InvalidDateFormat {
        value: value.to_string(),
    })
}

/// Formats a calendar date as `dd/mm/yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Returns [`DEFAULT_FLOOR_DATE`], for use as a serde default.
pub fn default_floor_date() -> NaiveDate {
    DEFAULT_FLOOR_DATE
}

/// Serde adapter reading and writing [`NaiveDate`] as `dd/mm/yyyy`.
///
/// Use with `#[serde(with = "crate::dates::day_month_year")]`.
pub mod day_month_year {
    use super::*;

    /// Serializes a date as `dd/mm/yyyy`.
    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_date(*date))
    }

    /// Deserializes a `dd/mm/yyyy` string into a date.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_date() {
        assert_eq!(
            parse_date("05/12/2023").unwrap(),
            NaiveDate::from_ymd_opt(2023, 12, 5).unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_iso_format() {
        match parse_date("2023-12-31") {
            Err(LedgerError::InvalidDateFormat { value }) => assert_eq!(value, "2023-12-31"),
            other => panic!("Expected InvalidDateFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert!(parse_date("31/02/2023").is_err());
        assert!(parse_date("00/01/2023").is_err());
        assert!(parse_date("12/13/2023").is_err());
        assert!(parse_date("").is_err());
        assert!(parse_date("not a date").is_err());
    }

    #[test]
    fn test_parsed_dates_order_chronologically() {
        // As strings, "31/01/2023" sorts after "05/12/2023".
        let early = parse_date("31/01/2023").unwrap();
        let late = parse_date("05/12/2023").unwrap();
        assert!(early < late);
    }

    #[test]
    fn test_format_date_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_date(date), "07/03/2024");
    }

    #[test]
    fn test_default_floor_date() {
        assert_eq!(format_date(DEFAULT_FLOOR_DATE), "01/01/2000");
        assert_eq!(default_floor_date(), DEFAULT_FLOOR_DATE);
    }

    #[test]
    fn test_day_month_year_serde() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrapper {
            #[serde(with = "day_month_year")]
            date: NaiveDate,
        }

        let wrapper: Wrapper = serde_json::from_str(r#"{"date":"31/12/2023"}"#).unwrap();
        assert_eq!(wrapper.date, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
        assert_eq!(
            serde_json::to_string(&wrapper).unwrap(),
            r#"{"date":"31/12/2023"}"#
        );
        assert!(serde_json::from_str::<Wrapper>(r#"{"date":"2023-12-31"}"#).is_err());
    }
}
