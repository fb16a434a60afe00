//! HTTP request handlers for the wage calculator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{ParsedRates, shift_breakdown, totals_from_breakdown};
use crate::error::{EngineError, EngineResult};
use crate::persistence::{CalculatorState, PersistedState, StateStore};
use crate::report::{WagesReport, summary_lines};

use super::request::{CalculationRequest, ReportRequest};
use super::response::{ApiError, ApiErrorResponse, CalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/report", post(report_handler))
        .route(
            "/state",
            get(load_state_handler)
                .put(save_state_handler)
                .delete(clear_state_handler),
        );

    #[cfg(feature = "pdf")]
    let router = router.route("/report/pdf", post(report_pdf_handler));

    router.with_state(state)
}

/// Turns a body rejection into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::malformed_json(body_text)
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
    ApiErrorResponse::bad_request(error).into_response()
}

fn json_ok<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

/// Handler for POST /calculate endpoint.
///
/// Returns the weekly totals, the formatted summary and one row per
/// completed shift.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    let week = request.week();
    let rates = ParsedRates::parse(&request.rates);
    let shifts = shift_breakdown(week.days(), &rates);
    let totals = totals_from_breakdown(&shifts, &rates);
    let summary = summary_lines(&request.details, &totals, state.config().currency_symbol());

    info!(
        correlation_id = %correlation_id,
        shifts_count = shifts.len(),
        wages_after = %totals.wages_after_reconciliation,
        leftover = %totals.leftover,
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );

    json_ok(
        StatusCode::OK,
        CalculationResponse {
            calculation_id: correlation_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            totals,
            summary,
            shifts,
        },
    )
}

/// Handler for POST /report endpoint.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let report = build_report(&state, &request);
    info!(
        correlation_id = %correlation_id,
        rows = report.shifts.len(),
        "Report built"
    );
    json_ok(StatusCode::OK, report)
}

/// Handler for POST /report/pdf endpoint.
#[cfg(feature = "pdf")]
async fn report_pdf_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing PDF report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let report = build_report(&state, &request);
    match crate::report::render_pdf(&report) {
        Ok(bytes) => {
            let disposition = format!(
                "attachment; filename=\"{}\"",
                report.file_name().replace('"', "")
            );
            info!(
                correlation_id = %correlation_id,
                size_bytes = bytes.len(),
                "PDF report rendered"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "application/pdf".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                bytes,
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "PDF rendering failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn build_report(state: &AppState, request: &ReportRequest) -> WagesReport {
    WagesReport::build(
        state.config(),
        &request.details,
        request.week().days(),
        &request.rates,
    )
}

/// Runs a store operation on the blocking pool.
async fn with_store<T, F>(state: &AppState, op: F) -> EngineResult<T>
where
    T: Send + 'static,
    F: FnOnce(&dyn StateStore) -> EngineResult<T> + Send + 'static,
{
    let state = state.clone();
    tokio::task::spawn_blocking(move || op(state.store()))
        .await
        .unwrap_or_else(|err| {
            Err(EngineError::StateIo {
                path: "state store".to_string(),
                message: err.to_string(),
            })
        })
}

/// Handler for GET /state endpoint.
///
/// Returns a fresh form when nothing has been saved yet.
async fn load_state_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();

    match with_store(&state, |store| store.load()).await {
        Ok(saved) => {
            info!(
                correlation_id = %correlation_id,
                found = saved.is_some(),
                "Loaded calculator state"
            );
            let form = saved.unwrap_or_default();
            json_ok(StatusCode::OK, form.to_persisted())
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Failed to load state");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for PUT /state endpoint.
///
/// Responds with the saved form after normalization.
async fn save_state_handler(
    State(state): State<AppState>,
    payload: Result<Json<PersistedState>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let stored = match payload {
        Ok(Json(stored)) => stored,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let form = CalculatorState::from(stored);
    match with_store(&state, move |store| store.save(&form).map(|()| form)).await {
        Ok(form) => {
            info!(correlation_id = %correlation_id, "Saved calculator state");
            json_ok(StatusCode::OK, form.to_persisted())
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Failed to save state");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for DELETE /state endpoint.
async fn clear_state_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();

    match with_store(&state, |store| store.clear()).await {
        Ok(()) => {
            info!(correlation_id = %correlation_id, "Cleared calculator state");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Failed to clear state");
            ApiErrorResponse::from(err).into_response()
        }
    }
}
