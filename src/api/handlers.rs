//! HTTP request handlers for the overtime engine API.
//!
//! This module contains the handler functions for all API endpoints.
//! Handlers take one configuration snapshot per request; record appends go
//! through the store, which serializes them internally.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{build_submission, summarize, SubmissionInput};
use crate::models::DayType;

use super::request::{RecordsQuery, SubmitRecordRequest, SummaryQuery};
use super::response::{ApiError, ApiErrorResponse, SubmitRecordResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/day-type/:date", get(day_type_handler))
        .route("/records", post(submit_handler).get(records_handler))
        .route("/summary", get(summary_handler))
        .with_state(state)
}

/// Handler for `GET /day-type/{date}`.
///
/// Classification never fails: an unparseable date answers 200 with
/// `day_type: "unknown"` rather than an error status.
async fn day_type_handler(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> impl IntoResponse {
    let detail = state.resolver().describe(&date);
    if detail.day_type == DayType::Unknown {
        warn!(date = %date, "date could not be classified");
    }
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(detail),
    )
}

/// Handler for `POST /records`.
///
/// Runs the submission pipeline and appends the finished record. A
/// day-type mismatch is reported alongside the stored record as a soft
/// warning, never as an error.
async fn submit_handler(
    State(state): State<AppState>,
    payload: Result<Json<SubmitRecordRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing record submission");

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
                        ApiError::new("VALIDATION_ERROR", body_text)
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
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // One immutable snapshot for the whole submission.
    let config = state.config().snapshot();
    let input: SubmissionInput = request.into();
    let submitted_at = Local::now().naive_local();

    let submission = match build_submission(&input, state.resolver(), &config, submitted_at) {
        Ok(submission) => submission,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Submission rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    if let Err(err) = state.store().append(&submission.record) {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Record could not be stored"
        );
        let api_error: ApiErrorResponse = err.into();
        return api_error.into_response();
    }

    info!(
        correlation_id = %correlation_id,
        user = %submission.record.user,
        date = %submission.record.date,
        day_type = %submission.record.day_type,
        pay_amount = %submission.record.pay_amount,
        mismatch = submission.mismatch.is_some(),
        "Record stored"
    );

    let response: SubmitRecordResponse = submission.into();
    (
        StatusCode::CREATED,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for `GET /records`.
async fn records_handler(
    State(state): State<AppState>,
    Query(query): Query<RecordsQuery>,
) -> impl IntoResponse {
    let result = match &query.month {
        Some(month) => state.store().monthly(month),
        None => state.store().filtered(&query.to_filter()),
    };

    match result {
        Ok(records) => {
            let records = if query.month.is_some() {
                let filter = query.to_filter();
                records.into_iter().filter(|r| filter.matches(r)).collect()
            } else {
                records
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(records),
            )
                .into_response()
        }
        Err(err) => {
            warn!(error = %err, "Record query failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for `GET /summary`.
///
/// Defaults to the current month when none is given; an empty month
/// answers the explicit empty marker with 200.
async fn summary_handler(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> impl IntoResponse {
    let month = query
        .month
        .unwrap_or_else(|| Local::now().format("%Y-%m").to_string());

    match state.store().monthly(&month) {
        Ok(records) => {
            let summary = summarize(&month, &records);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(summary),
            )
                .into_response()
        }
        Err(err) => {
            warn!(error = %err, month = %month, "Summary query failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}
