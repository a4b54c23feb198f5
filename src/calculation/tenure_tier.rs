//! Tenure classification.
//!
//! Decides which row of the accrual table applies to a (hire date,
//! reference date) pair, from the calendar years involved, the days of
//! tenure and the number of January 1sts crossed.

use chrono::{Datelike, NaiveDate};

use crate::config::LeavePolicy;
use crate::models::{AuditStep, TenureTier};

use super::date_math::{day_difference, year_boundary_count};

/// The tenure measurements and the tier they select.
#[derive(Debug, Clone)]
pub struct TenureClassification {
    /// Whole days from hire date to reference date.
    pub days_since_hire: i64,
    /// January 1sts within `[hire_date, reference_date]`.
    pub years_crossed: u32,
    /// The selected tier.
    pub tier: TenureTier,
    /// The audit step recording this classification.
    pub audit_step: AuditStep,
}

/// Selects the tier for the given measurements.
///
/// | Tier | Condition |
/// |---|---|
/// | [`TenureTier::NotYetHired`] | `days_since_hire < 0` |
/// | [`TenureTier::SameYearMonthly`] | hire year == reference year |
/// | [`TenureTier::FirstYearMonthly`] | `days_since_hire < threshold` |
/// | [`TenureTier::FirstAnnualGrant`] | `years_crossed < 2` |
/// | [`TenureTier::AnnualGrants`] | `2 < years_crossed < 4` |
/// | [`TenureTier::MaturedGrants`] | otherwise (`years_crossed == 2` or `>= 4`) |
///
/// Rows are tested top to bottom.
pub fn select_tier(
    same_calendar_year: bool,
    days_since_hire: i64,
    years_crossed: u32,
    first_year_threshold_days: i64,
) -> TenureTier {
    if days_since_hire < 0 {
        TenureTier::NotYetHired
    } else if same_calendar_year {
        TenureTier::SameYearMonthly
    } else if days_since_hire < first_year_threshold_days {
        TenureTier::FirstYearMonthly
    } else if years_crossed < 2 {
        TenureTier::FirstAnnualGrant
    } else if years_crossed > 2 && years_crossed < 4 {
        TenureTier::AnnualGrants
    } else {
        TenureTier::MaturedGrants
    }
}

/// Measures the tenure between `hire_date` and `reference_date` and
/// classifies it.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::classify_tenure;
/// use leave_engine::config::LeavePolicy;
/// use leave_engine::models::TenureTier;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
/// let reference = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let result = classify_tenure(hire, reference, &LeavePolicy::default(), 2);
///
/// assert_eq!(result.days_since_hire, 366);
/// assert_eq!(result.years_crossed, 1);
/// assert_eq!(result.tier, TenureTier::FirstAnnualGrant);
/// ```
pub fn classify_tenure(
    hire_date: NaiveDate,
    reference_date: NaiveDate,
    policy: &LeavePolicy,
    step_number: u32,
) -> TenureClassification {
    let days_since_hire = day_difference(hire_date, reference_date);
    let years_crossed = year_boundary_count(hire_date, reference_date);
    let same_calendar_year = hire_date.year() == reference_date.year();

    let tier = select_tier(
        same_calendar_year,
        days_since_hire,
        years_crossed,
        policy.first_year_threshold_days,
    );

    let reasoning = match tier {
        TenureTier::NotYetHired => format!(
            "Reference date {} is {} days before hire date {}",
            reference_date, -days_since_hire, hire_date
        ),
        TenureTier::SameYearMonthly => format!(
            "Hired and evaluated in {}; monthly grants only",
            hire_date.year()
        ),
        TenureTier::FirstYearMonthly => format!(
            "{} days of tenure is below {}; monthly grants plus pro-rated share",
            days_since_hire, policy.first_year_threshold_days
        ),
        _ => format!(
            "{} days of tenure with {} year boundaries crossed selects {}",
            days_since_hire, years_crossed, tier
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "tenure_classification".to_string(),
        rule_name: "Tenure Classification".to_string(),
        input: serde_json::json!({
            "hire_date": hire_date.to_string(),
            "reference_date": reference_date.to_string()
        }),
        output: serde_json::json!({
            "days_since_hire": days_since_hire,
            "years_crossed": years_crossed,
            "tier": tier
        }),
        reasoning,
    };

    TenureClassification {
        days_since_hire,
        years_crossed,
        tier,
        audit_step,
    }
}
