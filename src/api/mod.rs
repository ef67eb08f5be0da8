//! HTTP API module for the airline ledger.
//!
//! This module exposes client registration, package registration, fee
//! management and daily reports as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ClientRequest, DateQuery, FeeRequest, FeeValue, PackageRequest};
pub use response::{
    ApiError, ApiErrorResponse, ClientResponse, FeeResponse, PackageResponse, ReportResponse,
};
pub use state::AppState;
