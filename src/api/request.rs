//! Request types for the airline ledger API.
//!
//! Dates arrive as raw `dd/mm/yyyy` strings and are validated by the
//! airline itself, so that HTTP callers see the same errors as library
//! callers.

use serde::{Deserialize, Serialize};

use crate::error::LedgerResult;
use crate::schedule::IntoFee;

/// Request body for `POST /clients`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRequest {
    /// The client's name.
    pub name: String,
}

/// Request body for `POST /packages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageRequest {
    /// Where the package departs from.
    pub origin: String,
    /// Where the package is headed.
    pub destination: String,
    /// Name of a registered client.
    pub client: String,
    /// Shipping date; today when omitted.
    #[serde(default)]
    pub date: Option<String>,
}

/// A fee as sent over the wire: either a JSON integer or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeeValue {
    /// A JSON integer.
    Integer(i64),
    /// Text that must parse as an integer.
    Text(String),
}

impl IntoFee for FeeValue {
    fn into_fee(self) -> LedgerResult<i64> {
        match self {
            FeeValue::Integer(fee) => Ok(fee),
            FeeValue::Text(raw) => raw.into_fee(),
        }
    }
}

/// Request body for `POST /fees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeRequest {
    /// The date the fee takes effect.
    pub date: String,
    /// The per-package fee.
    pub fee: FeeValue,
}

/// Query string for `GET /fees` and `GET /report`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateQuery {
    /// The date to look up.
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_package_request_without_date() {
        let json = r#"{
            "origin": "New York",
            "destination": "Los Angeles",
            "client": "John Doe"
        }"#;

        let request: PackageRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.origin, "New York");
        assert_eq!(request.client, "John Doe");
        assert!(request.date.is_none());
    }

    #[test]
    fn test_deserialize_fee_as_integer_or_text() {
        let request: FeeRequest =
            serde_json::from_str(r#"{"date": "31/12/2023", "fee": 20}"#).unwrap();
        assert_eq!(request.fee, FeeValue::Integer(20));

        let request: FeeRequest =
            serde_json::from_str(r#"{"date": "31/12/2023", "fee": "20"}"#).unwrap();
        assert_eq!(request.fee, FeeValue::Text("20".to_string()));
    }

    #[test]
    fn test_fee_value_conversion() {
        assert_eq!(FeeValue::Integer(7).into_fee().unwrap(), 7);
        assert_eq!(FeeValue::Text(" 8 ".to_string()).into_fee().unwrap(), 8);
        assert!(FeeValue::Text("eight".to_string()).into_fee().is_err());
    }

    #[test]
    fn test_fractional_fee_is_not_an_integer() {
        assert!(serde_json::from_str::<FeeRequest>(r#"{"date": "31/12/2023", "fee": 20.5}"#).is_err());
    }
}
