//! HTTP request handlers for the airline ledger API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::dates::format_date;
use crate::error::LedgerError;

use super::request::{ClientRequest, DateQuery, FeeRequest, PackageRequest};
use super::response::{
    ApiError, ApiErrorResponse, ClientResponse, FeeResponse, PackageResponse, ReportResponse,
};
use super::state::AppState;

type ApiResult<T> = Result<(StatusCode, Json<T>), ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/clients", post(add_client_handler))
        .route("/clients/:name", get(get_client_handler))
        .route("/packages", post(add_package_handler))
        .route("/fees", post(add_fee_handler).get(get_fee_handler))
        .route("/report", get(report_handler))
        .with_state(state)
}

/// Handler for POST /clients.
///
/// Returns 201 for a newly registered client and 200 when the name was
/// already registered.
async fn add_client_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClientRequest>, JsonRejection>,
) -> ApiResult<ClientResponse> {
    let correlation_id = Uuid::new_v4();
    let request = parse_json(payload, correlation_id)?;

    let mut airline = state.airline().await;
    let existed = airline.get_client(&request.name).is_ok();
    let client = airline
        .add_client(&request.name)
        .map_err(|err| reject(err, correlation_id))?;

    info!(correlation_id = %correlation_id, client = %client, existed, "Client request handled");
    let status = if existed {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };
    Ok((status, Json(ClientResponse::from(client.as_ref()))))
}

/// Handler for GET /clients/:name.
async fn get_client_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<ClientResponse> {
    let correlation_id = Uuid::new_v4();
    let airline = state.airline().await;
    let client = airline
        .get_client(&name)
        .map_err(|err| reject(err, correlation_id))?;
    Ok((StatusCode::OK, Json(ClientResponse::from(client.as_ref()))))
}

/// Handler for POST /packages.
///
/// The client is referenced by name and must already be registered.
async fn add_package_handler(
    State(state): State<AppState>,
    payload: Result<Json<PackageRequest>, JsonRejection>,
) -> ApiResult<PackageResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing package request");
    let request = parse_json(payload, correlation_id)?;

    let mut airline = state.airline().await;
    let client = airline.get_client(&request.client).map_err(|_| {
        reject(
            LedgerError::InvalidClient {
                name: request.client.clone(),
            },
            correlation_id,
        )
    })?;

    let package = airline
        .add_package(
            request.origin,
            request.destination,
            client,
            request.date.as_deref(),
        )
        .map_err(|err| reject(err, correlation_id))?;

    Ok((StatusCode::CREATED, Json(PackageResponse::from(package))))
}

/// Handler for POST /fees.
async fn add_fee_handler(
    State(state): State<AppState>,
    payload: Result<Json<FeeRequest>, JsonRejection>,
) -> ApiResult<FeeResponse> {
    let correlation_id = Uuid::new_v4();
    let request = parse_json(payload, correlation_id)?;

    let mut airline = state.airline().await;
    let entry = airline
        .add_transportation_fee(&request.date, request.fee)
        .map_err(|err| reject(err, correlation_id))?;

    Ok((
        StatusCode::OK,
        Json(FeeResponse {
            date: format_date(entry.effective_date),
            fee: entry.fee,
        }),
    ))
}

/// Handler for GET /fees?date=dd/mm/yyyy.
async fn get_fee_handler(
    State(state): State<AppState>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> ApiResult<FeeResponse> {
    let correlation_id = Uuid::new_v4();
    let Query(query) = parse_query(query, correlation_id)?;

    let airline = state.airline().await;
    let fee = airline
        .get_transportation_fee(&query.date)
        .map_err(|err| reject(err, correlation_id))?;

    Ok((
        StatusCode::OK,
        Json(FeeResponse {
            date: query.date,
            fee,
        }),
    ))
}

/// Handler for GET /report?date=dd/mm/yyyy.
async fn report_handler(
    State(state): State<AppState>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> ApiResult<ReportResponse> {
    let correlation_id = Uuid::new_v4();
    let Query(query) = parse_query(query, correlation_id)?;

    let airline = state.airline().await;
    let report = airline
        .transportation_report(&query.date)
        .map_err(|err| reject(err, correlation_id))?;

    info!(
        correlation_id = %correlation_id,
        date = %query.date,
        packages = report.packages,
        total = %report.total,
        "Report generated"
    );
    Ok((StatusCode::OK, Json(ReportResponse::from(report))))
}

/// Unwraps a JSON body, turning extractor rejections into API errors.
fn parse_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err(ApiErrorResponse::bad_request(error))
        }
    }
}

fn parse_query(
    query: Result<Query<DateQuery>, QueryRejection>,
    correlation_id: Uuid,
) -> Result<Query<DateQuery>, ApiErrorResponse> {
    query.map_err(|rejection| {
        warn!(
            correlation_id = %correlation_id,
            error = %rejection.body_text(),
            "Query string rejected"
        );
        ApiErrorResponse::bad_request(ApiError::validation_error(rejection.body_text()))
    })
}

fn reject(err: LedgerError, correlation_id: Uuid) -> ApiErrorResponse {
    if err.is_validation() {
        warn!(correlation_id = %correlation_id, error = %err, "Request rejected");
    } else {
        info!(correlation_id = %correlation_id, kind = ?err.kind(), error = %err, "Request failed");
    }
    err.into()
}
