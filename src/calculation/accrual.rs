//! Annual leave accrual.
//!
//! Combines the pro-rated first-year grant and the tenure classification
//! into the accrued leave for a (hire date, reference date) pair:
//!
//! | Tier | Accrual |
//! |---|---|
//! | Same-year monthly | `floor(days / 30)` |
//! | First-year monthly | `floor(days / 30) + prorated` |
//! | First annual grant | `11 + prorated` |
//! | Annual grants | `11 + prorated + 15 x (years_crossed - 1)` |
//! | Matured grants | `11 + prorated + 15 x (years_crossed - 2) + 16` |
//!
//! The constants are those of [`LeavePolicy::default`]. The engine never
//! reads the wall clock; callers supply the reference date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::LeavePolicy;
use crate::error::EngineResult;
use crate::models::{AccrualResult, AccruedLeave, AuditStep, TenureTier};

use super::date_math::parse_calendar_date;
use super::prorated_grant::{ProratedGrantResult, calculate_prorated_grant};
use super::tenure_tier::{TenureClassification, classify_tenure};

/// Computes the accrued leave with a full breakdown.
///
/// `policy` is assumed valid; see [`LeavePolicy::validate`].
///
/// # Panics
///
/// Panics if `policy.monthly_grant_period_days` is zero.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::accrue;
/// use leave_engine::config::LeavePolicy;
/// use leave_engine::models::TenureTier;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
/// let reference = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let result = accrue(hire, reference, &LeavePolicy::default());
///
/// assert_eq!(result.tier, TenureTier::FirstAnnualGrant);
/// assert_eq!(result.accrued_leave.to_string(), "23.6");
/// assert_eq!(result.audit_steps.len(), 3);
/// ```
pub fn accrue(
    hire_date: NaiveDate,
    reference_date: NaiveDate,
    policy: &LeavePolicy,
) -> AccrualResult {
    let prorated = calculate_prorated_grant(hire_date, policy, 1);
    let tenure = classify_tenure(hire_date, reference_date, policy, 2);
    let (days, formula_step) = apply_tier_formula(&tenure, &prorated, policy, 3);
    let accrued_leave = AccruedLeave::new(days);

    debug!(
        hire_date = %hire_date,
        reference_date = %reference_date,
        days_since_hire = tenure.days_since_hire,
        years_crossed = tenure.years_crossed,
        tier = %tenure.tier,
        accrued = %accrued_leave,
        "Computed leave accrual"
    );

    AccrualResult {
        hire_date,
        reference_date,
        days_since_hire: tenure.days_since_hire,
        years_crossed: tenure.years_crossed,
        days_to_year_end: prorated.days_to_year_end,
        year_length: prorated.year_length,
        prorated_grant: prorated.prorated,
        tier: tenure.tier,
        accrued_leave,
        policy_code: policy.metadata.code.clone(),
        audit_steps: vec![prorated.audit_step, tenure.audit_step, formula_step],
    }
}

/// Parses the boundary strings and computes the full breakdown.
///
/// Returns `Ok(None)` when `hire_date` is empty or whitespace: nothing is
/// accrued and there is nothing to explain. A non-empty string that is not a
/// `YYYY-MM-DD` date, in either argument, is an
/// [`EngineError::InvalidDate`](crate::error::EngineError::InvalidDate).
pub fn accrual_breakdown(
    hire_date: &str,
    reference_date: &str,
    policy: &LeavePolicy,
) -> EngineResult<Option<AccrualResult>> {
    let reference = parse_calendar_date(reference_date)?;
    accrual_as_of(hire_date, reference, policy)
}

/// Like [`accrual_breakdown`], for a reference date that is already typed.
///
/// An invalid `policy` is rejected with
/// [`EngineError::InvalidPolicy`](crate::error::EngineError::InvalidPolicy).
pub fn accrual_as_of(
    hire_date: &str,
    reference_date: NaiveDate,
    policy: &LeavePolicy,
) -> EngineResult<Option<AccrualResult>> {
    policy.validate()?;
    if hire_date.trim().is_empty() {
        debug!(reference_date = %reference_date, "No hire date supplied; nothing accrued");
        return Ok(None);
    }
    let hire = parse_calendar_date(hire_date)?;

    Ok(Some(accrue(hire, reference_date, policy)))
}

/// Computes the accrued leave under a specific policy.
pub fn compute_accrual_with_policy(
    hire_date: &str,
    reference_date: &str,
    policy: &LeavePolicy,
) -> EngineResult<AccruedLeave> {
    Ok(accrual_breakdown(hire_date, reference_date, policy)?
        .map(|result| result.accrued_leave)
        .unwrap_or(AccruedLeave::ZERO))
}

/// Computes the accrued leave under the default policy.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::compute_accrual;
///
/// assert_eq!(compute_accrual("2024-01-01", "2024-06-15").unwrap().to_string(), "5");
/// assert_eq!(compute_accrual("2023-03-01", "2024-03-01").unwrap().to_string(), "23.6");
/// assert!(compute_accrual("", "2024-06-15").unwrap().is_zero());
/// assert!(compute_accrual("2024-02-30", "2024-06-15").is_err());
/// ```
pub fn compute_accrual(hire_date: &str, reference_date: &str) -> EngineResult<AccruedLeave> {
    compute_accrual_with_policy(hire_date, reference_date, &LeavePolicy::default())
}

/// Applies the tier formula and records it as an audit step.
fn apply_tier_formula(
    tenure: &TenureClassification,
    prorated: &ProratedGrantResult,
    policy: &LeavePolicy,
    step_number: u32,
) -> (Decimal, AuditStep) {
    let monthly_days = tenure.days_since_hire.max(0) / policy.monthly_grant_period_days;
    let first_year = policy.first_year_grant_days;
    let annual = policy.annual_grant_days;
    let years = Decimal::from(tenure.years_crossed);

    let (days, reasoning) = match tenure.tier {
        TenureTier::NotYetHired => (Decimal::ZERO, "Nothing accrues before hire".to_string()),
        TenureTier::SameYearMonthly => (
            Decimal::from(monthly_days),
            format!(
                "floor({} / {}) = {}",
                tenure.days_since_hire, policy.monthly_grant_period_days, monthly_days
            ),
        ),
        TenureTier::FirstYearMonthly => {
            let granted = match policy.monthly_grant_cap {
                Some(cap) => monthly_days.min(cap),
                None => monthly_days,
            };
            let days = Decimal::from(granted) + prorated.prorated;
            (
                days,
                format!(
                    "floor({} / {}) = {} (granted {}) + {} = {}",
                    tenure.days_since_hire,
                    policy.monthly_grant_period_days,
                    monthly_days,
                    granted,
                    prorated.prorated,
                    days.normalize()
                ),
            )
        }
        TenureTier::FirstAnnualGrant => {
            let days = first_year + prorated.prorated;
            (
                days,
                format!(
                    "{} + {} = {}",
                    first_year.normalize(),
                    prorated.prorated,
                    days.normalize()
                ),
            )
        }
        TenureTier::AnnualGrants => {
            let days = first_year + prorated.prorated + annual * (years - Decimal::ONE);
            (
                days,
                format!(
                    "{} + {} + {} x ({} - 1) = {}",
                    first_year.normalize(),
                    prorated.prorated,
                    annual.normalize(),
                    tenure.years_crossed,
                    days.normalize()
                ),
            )
        }
        TenureTier::MaturedGrants => {
            let days = first_year
                + prorated.prorated
                + annual * (years - Decimal::TWO)
                + policy.step_up_days;
            (
                days,
                format!(
                    "{} + {} + {} x ({} - 2) + {} = {}",
                    first_year.normalize(),
                    prorated.prorated,
                    annual.normalize(),
                    tenure.years_crossed,
                    policy.step_up_days.normalize(),
                    days.normalize()
                ),
            )
        }
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "tier_formula".to_string(),
        rule_name: "Tier Accrual Formula".to_string(),
        input: serde_json::json!({
            "tier": tenure.tier,
            "days_since_hire": tenure.days_since_hire,
            "years_crossed": tenure.years_crossed,
            "prorated": prorated.prorated.to_string()
        }),
        output: serde_json::json!({
            "accrued_days": days.normalize().to_string()
        }),
        reasoning,
    };

    (days, audit_step)
}
