//! HTTP request handlers for the leave pay compliance API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::analyse_payslip;
use crate::models::PayslipData;
use crate::payslip::normalize_extraction;

use super::request::{AnalysisRequest, NormaliseRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/analyse", post(analyse_handler))
        .route("/payslip/normalise", post(normalise_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: ApiErrorResponse) -> Response {
    json_response(error.status, error.error)
}

/// Maps a body that could not be read as JSON to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the problem
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

    json_response(StatusCode::BAD_REQUEST, error)
}

/// Handler for POST /analyse.
///
/// Converts the submitted form to payslip data and returns the full analysis
/// report.
async fn analyse_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing analysis request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let payslip = PayslipData::from(&request.payslip);
    let today = request.as_of.unwrap_or_else(|| Utc::now().date_naive());

    let start_time = Instant::now();
    match analyse_payslip(&payslip, state.config(), today) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                analysis_id = %report.analysis_id,
                entries_checked = report.totals.entries_checked,
                entries_non_compliant = report.totals.entries_non_compliant,
                total_shortfall = %report.totals.total_shortfall,
                warnings = report.audit_trace.warnings.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Analysis completed successfully"
            );
            json_response(StatusCode::OK, report)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Analysis failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /payslip/normalise.
///
/// Turns a payslip-reading model's reply into canonical payslip data, or
/// explains which field could not be read.
async fn normalise_handler(payload: Result<Json<NormaliseRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing normalise request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match normalize_extraction(&request.content) {
        Ok(payslip) => {
            info!(
                correlation_id = %correlation_id,
                has_payment = payslip.has_any_payment(),
                "Payslip normalised"
            );
            json_response(StatusCode::OK, payslip)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payslip could not be normalised"
            );
            error_response(err.into())
        }
    }
}
