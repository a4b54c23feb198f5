//! Pro-rated first-year grant.
//!
//! An employee hired part-way through a calendar year earns the share of the
//! annual grant that corresponds to the part of the hire year they worked.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::LeavePolicy;
use crate::models::AuditStep;

use super::date_math::{day_difference, last_day_of_year, year_length};

/// The result of pro-rating the annual grant over the hire year.
#[derive(Debug, Clone)]
pub struct ProratedGrantResult {
    /// Days left in the hire year, hire day included.
    pub days_to_year_end: i64,
    /// Length of the hire year (365 or 366).
    pub year_length: i64,
    /// `days_to_year_end / year_length * annual_grant_days`, rounded to one
    /// decimal place.
    pub prorated: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Pro-rates the annual grant over the part of the hire year worked.
///
/// The fraction is rounded half away from zero to one decimal place.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::calculate_prorated_grant;
/// use leave_engine::config::LeavePolicy;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let hire = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
/// let result = calculate_prorated_grant(hire, &LeavePolicy::default(), 1);
/// assert_eq!(result.days_to_year_end, 306);
/// assert_eq!(result.year_length, 365);
/// assert_eq!(result.prorated, Decimal::new(126, 1)); // 12.6
/// ```
pub fn calculate_prorated_grant(
    hire_date: NaiveDate,
    policy: &LeavePolicy,
    step_number: u32,
) -> ProratedGrantResult {
    let year = hire_date.year();
    let days_to_year_end = day_difference(hire_date, last_day_of_year(year)) + 1;
    let year_length = year_length(year);

    let prorated = (Decimal::from(days_to_year_end) * policy.annual_grant_days
        / Decimal::from(year_length))
    .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
    .normalize();

    let audit_step = AuditStep {
        step_number,
        rule_id: "prorated_first_year_grant".to_string(),
        rule_name: "Pro-rated First-Year Grant".to_string(),
        input: serde_json::json!({
            "hire_date": hire_date.to_string(),
            "annual_grant_days": policy.annual_grant_days.normalize().to_string()
        }),
        output: serde_json::json!({
            "days_to_year_end": days_to_year_end,
            "year_length": year_length,
            "prorated": prorated.to_string()
        }),
        reasoning: format!(
            "{} / {} days x {} = {}",
            days_to_year_end,
            year_length,
            policy.annual_grant_days.normalize(),
            prorated
        ),
    };

    ProratedGrantResult {
        days_to_year_end,
        year_length,
        prorated,
        audit_step,
    }
}
