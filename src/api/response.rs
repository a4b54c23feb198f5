//! Response types for the leave accrual API.
//!
//! This module defines the success bodies for each endpoint, the error
//! response structure, and the mapping from [`EngineError`] to HTTP status.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{AccrualResult, AccruedLeave, LeaveDeduction};

/// Response body for `POST /accrual`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccrualResponse {
    /// The "as of" date used.
    pub reference_date: NaiveDate,
    /// The accrued leave.
    pub accrued_leave: AccruedLeave,
    /// The full breakdown; absent when no hire date was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<AccrualResult>,
}

/// Response body for `POST /days-since`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaysSinceResponse {
    /// The "as of" date used.
    pub reference_date: NaiveDate,
    /// Whole days from the given date to the reference date.
    pub days: i64,
}

/// Response body for `POST /leave-balance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveBalanceResponse {
    /// The "as of" date used.
    pub reference_date: NaiveDate,
    /// Leave accrued as of the reference date.
    pub accrued: AccruedLeave,
    /// Sum of all deductions.
    pub used: Decimal,
    /// `accrued - used`.
    pub remaining: Decimal,
    /// The deductions, oldest first.
    pub deductions: Vec<LeaveDeduction>,
}

/// Response body for `POST /overtime/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvertimeSummaryResponse {
    /// The month summarized, if the request named one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    /// Records included in the total.
    pub entry_count: usize,
    /// Total overtime in minutes.
    pub total_minutes: u64,
    /// Total overtime as `"{h}h {m}m"`.
    pub formatted: String,
}

/// Response body for `POST /meal-costs/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealCostSummaryResponse {
    /// Records included in the total.
    pub entry_count: usize,
    /// Sum of all prices.
    pub total: Decimal,
    /// The total with thousands separators.
    pub formatted: String,
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

    /// Creates an invalid date error response.
    pub fn invalid_date(input: &str, reason: &str) -> Self {
        Self::with_details(
            "INVALID_DATE",
            format!("Invalid date: '{}'", input),
            format!("Dates must be calendar dates in YYYY-MM-DD format ({})", reason),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidDate { input, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::invalid_date(&input, &message),
            },
            EngineError::InvalidLedgerEntry { id, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_LEDGER_ENTRY",
                    format!("Invalid ledger entry '{}': {}", id, message),
                    "The ledger data contains invalid information",
                ),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidPolicy { field, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid leave policy",
                    format!("{}: {}", field, message),
                ),
            },
        }
    }
}
