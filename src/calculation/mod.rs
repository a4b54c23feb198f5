//! Calculation logic for the leave accrual engine.
//!
//! This module contains day-granularity date arithmetic, the pro-rated
//! first-year grant, tenure classification, the tiered accrual formula, and
//! aggregates over leave, overtime and meal-cost ledgers.

mod accrual;
mod date_math;
mod ledger;
mod prorated_grant;
mod tenure_tier;

pub use accrual::{
    accrual_as_of, accrual_breakdown, accrue, compute_accrual, compute_accrual_with_policy,
};
pub use date_math::{
    MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR, day_difference, days_since, days_since_as_of,
    last_day_of_year, parse_calendar_date, year_boundary_count, year_length,
};
pub use ledger::{
    leave_balance, overtime_for_month, parse_month, sort_by_date, total_deductions,
    total_meal_cost, total_overtime_minutes, validate_overtime,
};
pub use prorated_grant::{ProratedGrantResult, calculate_prorated_grant};
pub use tenure_tier::{TenureClassification, classify_tenure, select_tier};
