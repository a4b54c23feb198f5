//! HTTP API module for the leave accrual engine.
//!
//! This module provides JSON endpoints for accrued leave, days since a date,
//! leave balances, and overtime and meal-cost summaries.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AccrualRequest, DaysSinceRequest, LeaveBalanceRequest, MealCostSummaryRequest,
    OvertimeSummaryRequest,
};
pub use response::{
    AccrualResponse, ApiError, DaysSinceResponse, LeaveBalanceResponse, MealCostSummaryResponse,
    OvertimeSummaryResponse,
};
pub use state::AppState;
