//! Accrual result models for the leave accrual engine.
//!
//! This module contains the [`AccrualResult`] type and the structures that
//! explain how a value was reached: the [`TenureTier`] that applied and the
//! [`AuditStep`]s recorded along the way.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AccruedLeave;

/// The row of the accrual table that applied to a tenure.
///
/// # Example
///
/// ```
/// use leave_engine::models::TenureTier;
///
/// assert_eq!(TenureTier::FirstAnnualGrant.to_string(), "First annual grant");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenureTier {
    /// The reference date precedes the hire date; nothing has accrued.
    NotYetHired,
    /// Hire and reference dates are in the same calendar year.
    SameYearMonthly,
    /// Different calendar years, but less than a year of tenure.
    FirstYearMonthly,
    /// At least a year of tenure and fewer than two January 1sts crossed.
    FirstAnnualGrant,
    /// At least a year of tenure and exactly three January 1sts crossed.
    AnnualGrants,
    /// At least a year of tenure and two, or four or more, January 1sts
    /// crossed.
    MaturedGrants,
}

impl std::fmt::Display for TenureTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TenureTier::NotYetHired => write!(f, "Not yet hired"),
            TenureTier::SameYearMonthly => write!(f, "Same-year monthly"),
            TenureTier::FirstYearMonthly => write!(f, "First-year monthly"),
            TenureTier::FirstAnnualGrant => write!(f, "First annual grant"),
            TenureTier::AnnualGrants => write!(f, "Annual grants"),
            TenureTier::MaturedGrants => write!(f, "Matured grants"),
        }
    }
}

/// A single step in the audit trail recording an accrual decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete result of an accrual calculation.
///
/// Captures the inputs, every intermediate quantity of the policy, the tier
/// that applied, and the final accrued leave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualResult {
    /// The employee's hire date.
    pub hire_date: NaiveDate,
    /// The "as of" date of the calculation.
    pub reference_date: NaiveDate,
    /// Whole days from hire date to reference date.
    pub days_since_hire: i64,
    /// January 1sts within `[hire_date, reference_date]`.
    pub years_crossed: u32,
    /// Days left in the hire year, hire day included.
    pub days_to_year_end: i64,
    /// Length of the hire year in days.
    pub year_length: i64,
    /// Pro-rated share of the annual grant for the hire year.
    pub prorated_grant: Decimal,
    /// The tier that determined the formula.
    pub tier: TenureTier,
    /// The accrued leave as of `reference_date`.
    pub accrued_leave: AccruedLeave,
    /// Code of the policy the calculation ran under.
    pub policy_code: String,
    /// The decisions made during the calculation, in order.
    pub audit_steps: Vec<AuditStep>,
}
