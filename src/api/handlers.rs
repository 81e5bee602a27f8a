//! HTTP request handlers for the Overtime Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::OvertimeAggregator;
use crate::presentation::{SignStyle, format_minutes};

use super::request::OvertimeRequest;
use super::response::{ApiError, ApiErrorResponse, OvertimeResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/overtime", post(overtime_handler))
        .with_state(state)
}

/// Handler for POST /overtime endpoint.
///
/// Evaluates the posted records and returns the overtime summary.
async fn overtime_handler(
    State(state): State<AppState>,
    payload: Result<Json<OvertimeRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing overtime request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return rejection_response(correlation_id, rejection).into_response();
        }
    };

    let now = request.now.unwrap_or_else(|| state.clock().now());
    let policy = request.policy.unwrap_or(*state.policy());
    let style = if request.signed {
        SignStyle::Always
    } else {
        SignStyle::NegativeOnly
    };

    let start_time = Instant::now();
    let summary = OvertimeAggregator::new(policy).summarize(&request.records, now);

    info!(
        correlation_id = %correlation_id,
        records = request.records.len(),
        overtime_minutes = summary.overtime_minutes,
        warnings = summary.warnings.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Overtime calculated"
    );

    let body = OvertimeResponse {
        calculation_id: correlation_id,
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        formatted: format_minutes(summary.overtime_minutes, style),
        summary,
    };

    (StatusCode::OK, Json(body)).into_response()
}

/// Maps a JSON extraction failure to an error response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of what was wrong
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
        JsonRejection::MissingJsonContentType(_) => ApiError::missing_content_type(),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}
