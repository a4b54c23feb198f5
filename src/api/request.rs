//! Request types for the leave accrual API.
//!
//! Dates that the engine validates itself (hire and reference dates) arrive
//! as strings so that a malformed value is reported as `INVALID_DATE` rather
//! than a JSON error. Ledger records are typed.

use serde::{Deserialize, Serialize};

use crate::models::{LeaveDeduction, MealCostEntry, OvertimeEntry};

/// Request body for `POST /accrual`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccrualRequest {
    /// The hire date (`YYYY-MM-DD`); empty means "no hire date on file".
    #[serde(default)]
    pub hire_date: String,
    /// The "as of" date; today when absent.
    #[serde(default)]
    pub reference_date: Option<String>,
}

/// Request body for `POST /days-since`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaysSinceRequest {
    /// The start date (`YYYY-MM-DD`); empty yields 0 days.
    #[serde(default)]
    pub date: String,
    /// The "as of" date; today when absent.
    #[serde(default)]
    pub reference_date: Option<String>,
}

/// Request body for `POST /leave-balance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveBalanceRequest {
    /// The hire date (`YYYY-MM-DD`); empty means nothing accrued.
    #[serde(default)]
    pub hire_date: String,
    /// The "as of" date; today when absent.
    #[serde(default)]
    pub reference_date: Option<String>,
    /// Leave deductions recorded for the employee.
    #[serde(default)]
    pub deductions: Vec<LeaveDeduction>,
}

/// Request body for `POST /overtime/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvertimeSummaryRequest {
    /// Restrict the summary to one `YYYY-MM` month.
    #[serde(default)]
    pub month: Option<String>,
    /// Overtime records.
    #[serde(default)]
    pub entries: Vec<OvertimeEntry>,
}

/// Request body for `POST /meal-costs/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealCostSummaryRequest {
    /// Meal-cost records.
    #[serde(default)]
    pub entries: Vec<MealCostEntry>,
}
