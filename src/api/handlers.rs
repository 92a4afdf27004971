//! HTTP request handlers for the balance engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::report::generate_report;
use crate::sources::Sources;

use super::request::BalanceRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/balances", post(balances_handler))
        .with_state(state)
}

fn json_error(status: StatusCode, error: ApiError) -> axum::response::Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for POST /balances endpoint.
///
/// Accepts the report inputs and returns the balance report.
async fn balances_handler(
    State(state): State<AppState>,
    payload: Result<Json<BalanceRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing balance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
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
            return json_error(StatusCode::BAD_REQUEST, error);
        }
    };

    if let Err(error) = request.validate() {
        warn!(
            correlation_id = %correlation_id,
            error = %error.message,
            "Request validation failed"
        );
        return json_error(StatusCode::BAD_REQUEST, error);
    }

    let (window, employees, sort, source) = request.into_parts();
    match generate_report(
        Sources::from_single(&source),
        &employees,
        window,
        &sort,
        state.config().config(),
    ) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                report_id = %report.report_id,
                rows = report.rows.len(),
                duration_us = report.duration_us,
                "Balance report completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(report),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Balance report failed"
            );
            let api_error: ApiErrorResponse = err.into();
            json_error(api_error.status, api_error.error)
        }
    }
}
