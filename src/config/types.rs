//! Configuration types for the leave accrual policy.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from `leave_policy.yaml`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata identifying a leave policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyMetadata {
    /// Short identifier for the policy (e.g., "statutory").
    pub code: String,
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
}

impl Default for PolicyMetadata {
    fn default() -> Self {
        Self {
            code: "statutory".to_string(),
            name: "Statutory Annual Leave".to_string(),
            version: "built-in".to_string(),
        }
    }
}

/// The tiered annual leave accrual policy.
///
/// The defaults are the business-rule constants of the accrual table:
///
/// | Field | Default |
/// |---|---|
/// | `monthly_grant_period_days` | 30 |
/// | `first_year_threshold_days` | 365 |
/// | `first_year_grant_days` | 11 |
/// | `annual_grant_days` | 15 |
/// | `step_up_days` | 16 |
/// | `monthly_grant_cap` | none |
///
/// # Example
///
/// ```
/// use leave_engine::config::LeavePolicy;
/// use rust_decimal::Decimal;
///
/// let policy = LeavePolicy::default();
/// assert_eq!(policy.annual_grant_days, Decimal::from(15));
/// assert!(policy.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeavePolicy {
    /// Identifying metadata.
    #[serde(default)]
    pub metadata: PolicyMetadata,
    /// Days of tenure that earn one monthly leave day.
    pub monthly_grant_period_days: i64,
    /// Tenure in days after which the first annual grant vests.
    pub first_year_threshold_days: i64,
    /// Monthly days credited once the first annual grant vests.
    pub first_year_grant_days: Decimal,
    /// Size of a full annual block grant (also the pro-rating base).
    pub annual_grant_days: Decimal,
    /// Extra days granted once the grant schedule matures.
    pub step_up_days: Decimal,
    /// Optional ceiling on monthly days earned in a first year that
    /// crosses a calendar year.
    #[serde(default)]
    pub monthly_grant_cap: Option<i64>,
}

impl Default for LeavePolicy {
    fn default() -> Self {
        Self {
            metadata: PolicyMetadata::default(),
            monthly_grant_period_days: 30,
            first_year_threshold_days: 365,
            first_year_grant_days: Decimal::from(11),
            annual_grant_days: Decimal::from(15),
            step_up_days: Decimal::from(16),
            monthly_grant_cap: None,
        }
    }
}

impl LeavePolicy {
    /// Returns the default policy with the monthly grant capped at the
    /// first-year grant (11 days).
    pub fn with_statutory_cap() -> Self {
        Self {
            monthly_grant_cap: Some(11),
            ..Self::default()
        }
    }

    /// Checks that every value can be used by the accrual engine.
    pub fn validate(&self) -> EngineResult<()> {
        let invalid = |field: &str, message: &str| EngineError::InvalidPolicy {
            field: field.to_string(),
            message: message.to_string(),
        };

        if self.monthly_grant_period_days <= 0 {
            return Err(invalid(
                "monthly_grant_period_days",
                "must be greater than zero",
            ));
        }
        if self.first_year_threshold_days <= 0 {
            return Err(invalid(
                "first_year_threshold_days",
                "must be greater than zero",
            ));
        }
        if self.first_year_grant_days.is_sign_negative() {
            return Err(invalid("first_year_grant_days", "must not be negative"));
        }
        if self.annual_grant_days.is_sign_negative() {
            return Err(invalid("annual_grant_days", "must not be negative"));
        }
        if self.step_up_days.is_sign_negative() {
            return Err(invalid("step_up_days", "must not be negative"));
        }
        if self.monthly_grant_cap.is_some_and(|cap| cap < 0) {
            return Err(invalid("monthly_grant_cap", "must not be negative"));
        }

        Ok(())
    }
}
