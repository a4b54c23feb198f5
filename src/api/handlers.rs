//! HTTP request handlers for the leave accrual API.
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
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    accrual_as_of, days_since_as_of, leave_balance, overtime_for_month, parse_calendar_date,
    sort_by_date, total_meal_cost, total_overtime_minutes,
};
use crate::error::{EngineError, EngineResult};
use crate::formatting::{comma_format, format_hours_minutes};
use crate::models::{AccruedLeave, OvertimeEntry};

use super::request::{
    AccrualRequest, DaysSinceRequest, LeaveBalanceRequest, MealCostSummaryRequest,
    OvertimeSummaryRequest,
};
use super::response::{
    AccrualResponse, ApiError, ApiErrorResponse, DaysSinceResponse, LeaveBalanceResponse,
    MealCostSummaryResponse, OvertimeSummaryResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/accrual", post(accrual_handler))
        .route("/days-since", post(days_since_handler))
        .route("/leave-balance", post(leave_balance_handler))
        .route("/overtime/summary", post(overtime_summary_handler))
        .route("/meal-costs/summary", post(meal_cost_summary_handler))
        .with_state(state)
}

/// Handler for POST /accrual.
///
/// Returns the accrued leave and, when a hire date was supplied, the full
/// breakdown with its audit steps.
async fn accrual_handler(
    State(state): State<AppState>,
    payload: Result<Json<AccrualRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing accrual request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let outcome = resolve_reference_date(&state, request.reference_date.as_deref()).and_then(
        |reference_date| {
            let breakdown = accrual_as_of(&request.hire_date, reference_date, state.policy())?;
            Ok(AccrualResponse {
                reference_date,
                accrued_leave: breakdown
                    .as_ref()
                    .map(|result| result.accrued_leave)
                    .unwrap_or(AccruedLeave::ZERO),
                breakdown,
            })
        },
    );

    match outcome {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                reference_date = %response.reference_date,
                accrued_leave = %response.accrued_leave,
                duration_us = start_time.elapsed().as_micros(),
                "Accrual calculated"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /days-since.
async fn days_since_handler(
    State(state): State<AppState>,
    payload: Result<Json<DaysSinceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing days-since request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let outcome = resolve_reference_date(&state, request.reference_date.as_deref()).and_then(
        |reference_date| {
            let days = days_since_as_of(&request.date, reference_date)?;
            Ok(DaysSinceResponse {
                reference_date,
                days,
            })
        },
    );

    match outcome {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /leave-balance.
async fn leave_balance_handler(
    State(state): State<AppState>,
    payload: Result<Json<LeaveBalanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave balance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let LeaveBalanceRequest {
        hire_date,
        reference_date,
        mut deductions,
    } = request;

    let outcome = resolve_reference_date(&state, reference_date.as_deref()).and_then(
        |reference_date| {
            let accrued = accrual_as_of(&hire_date, reference_date, state.policy())?
                .map(|result| result.accrued_leave)
                .unwrap_or(AccruedLeave::ZERO);
            let balance = leave_balance(accrued, &deductions)?;
            sort_by_date(&mut deductions);
            Ok(LeaveBalanceResponse {
                reference_date,
                accrued: balance.accrued,
                used: balance.used,
                remaining: balance.remaining,
                deductions,
            })
        },
    );

    match outcome {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                deductions = response.deductions.len(),
                remaining = %response.remaining,
                "Leave balance calculated"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /overtime/summary.
async fn overtime_summary_handler(
    payload: Result<Json<OvertimeSummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing overtime summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match summarize_overtime(request) {
        Ok(response) => json_response(StatusCode::OK, response),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /meal-costs/summary.
async fn meal_cost_summary_handler(
    payload: Result<Json<MealCostSummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing meal cost summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match total_meal_cost(&request.entries) {
        Ok(total) => json_response(
            StatusCode::OK,
            MealCostSummaryResponse {
                entry_count: request.entries.len(),
                total: total.normalize(),
                formatted: comma_format(total),
            },
        ),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Totals the requested overtime, restricted to one month when asked.
fn summarize_overtime(request: OvertimeSummaryRequest) -> EngineResult<OvertimeSummaryResponse> {
    let selected: Vec<OvertimeEntry> = match request.month.as_deref() {
        Some(month) => overtime_for_month(&request.entries, month)?
            .into_iter()
            .cloned()
            .collect(),
        None => request.entries,
    };
    let total_minutes = total_overtime_minutes(&selected)?;

    Ok(OvertimeSummaryResponse {
        month: request.month,
        entry_count: selected.len(),
        total_minutes,
        formatted: format_hours_minutes(total_minutes),
    })
}

/// Parses the requested reference date, or asks the clock for today.
fn resolve_reference_date(state: &AppState, requested: Option<&str>) -> EngineResult<NaiveDate> {
    match requested {
        Some(date) if !date.trim().is_empty() => parse_calendar_date(date),
        _ => Ok(state.today()),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Converts a JSON extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
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
