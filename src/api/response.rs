//! Response types for the airline ledger API.
//!
//! This module defines the success bodies, the error response structure
//! and the mapping from [`LedgerError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::dates::format_date;
use crate::error::{ErrorKind, LedgerError};
use crate::models::{Client, Package, TransportationReport};

/// A registered client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientResponse {
    /// The client's name.
    pub name: String,
}

impl From<&Client> for ClientResponse {
    fn from(client: &Client) -> Self {
        Self {
            name: client.name().to_string(),
        }
    }
}

/// A package in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageResponse {
    /// Where the package departs from.
    pub origin: String,
    /// Where the package is headed.
    pub destination: String,
    /// The client's name.
    pub client: String,
    /// Shipping date as `dd/mm/yyyy`.
    pub date: String,
}

impl From<&Package> for PackageResponse {
    fn from(package: &Package) -> Self {
        Self {
            origin: package.origin().to_string(),
            destination: package.destination().to_string(),
            client: package.client().name().to_string(),
            date: format_date(package.date()),
        }
    }
}

/// A fee for a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeResponse {
    /// The date as `dd/mm/yyyy`.
    pub date: String,
    /// The per-package fee.
    pub fee: i64,
}

/// A daily transportation report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    /// The structured figures.
    #[serde(flatten)]
    pub report: TransportationReport,
    /// The rendered report text.
    pub summary: String,
}

impl From<TransportationReport> for ReportResponse {
    fn from(report: TransportationReport) -> Self {
        Self {
            summary: report.to_string(),
            report,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<LedgerError> for ApiErrorResponse {
    fn from(error: LedgerError) -> Self {
        let message = error.to_string();
        match (&error, error.kind()) {
            (LedgerError::InvalidClient { .. }, _) => Self::bad_request(ApiError::with_details(
                "INVALID_CLIENT",
                message,
                "Register the client before adding packages for it",
            )),
            (_, ErrorKind::Validation) => Self::bad_request(ApiError::validation_error(message)),
            (_, ErrorKind::NotFound) => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("CLIENT_NOT_FOUND", message),
            },
            (_, ErrorKind::Configuration) => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_validation_error_maps_to_bad_request() {
        let response: ApiErrorResponse = LedgerError::InvalidOrigin {
            origin: "NY".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "VALIDATION_ERROR");
        assert!(response.error.message.contains("NY"));
    }

    #[test]
    fn test_client_not_found_maps_to_not_found() {
        let response: ApiErrorResponse = LedgerError::ClientNotFound {
            name: "Nobody".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.code, "CLIENT_NOT_FOUND");
    }

    #[test]
    fn test_invalid_client_has_its_own_code() {
        let response: ApiErrorResponse = LedgerError::InvalidClient {
            name: "Nobody".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "INVALID_CLIENT");
    }

    #[test]
    fn test_config_error_maps_to_internal_error() {
        let response: ApiErrorResponse = LedgerError::ConfigNotFound {
            path: "/missing".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_report_response_flattens_report() {
        let report =
            TransportationReport::new(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(), 10, 2);
        let json = serde_json::to_value(ReportResponse::from(report)).unwrap();

        assert_eq!(json["date"], "31/12/2023");
        assert_eq!(json["fee"], 10);
        assert_eq!(json["packages"], 2);
        assert_eq!(json["total"], 20);
        assert_eq!(
            json["summary"],
            "[DATE: 31/12/2023 | FEE: 10]\nTotal packages transported: 2\nTotal transportation fee charged: 20"
        );
    }
}
