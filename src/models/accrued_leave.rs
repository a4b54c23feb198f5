//! Accrued leave amount.

use std::fmt;
use std::ops::Add;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A number of accrued leave days with at most one decimal digit.
///
/// Values are rounded half away from zero to one decimal place and
/// normalized on construction, so `23.60` and `23.6` are the same value
/// and display as `23.6`. Serializes as a decimal string.
///
/// # Example
///
/// ```
/// use leave_engine::models::AccruedLeave;
/// use rust_decimal::Decimal;
///
/// let leave = AccruedLeave::new(Decimal::new(12575, 3)); // 12.575
/// assert_eq!(leave.to_string(), "12.6");
/// assert_eq!(AccruedLeave::from_days(5).to_string(), "5");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccruedLeave(Decimal);

impl AccruedLeave {
    /// No accrued leave.
    pub const ZERO: AccruedLeave = AccruedLeave(Decimal::ZERO);

    /// Creates an accrued leave value, rounding to one decimal place.
    pub fn new(days: Decimal) -> Self {
        AccruedLeave(
            days.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
                .normalize(),
        )
    }

    /// Creates an accrued leave value from a whole number of days.
    pub fn from_days(days: i64) -> Self {
        AccruedLeave(Decimal::from(days))
    }

    /// Returns the number of days as a decimal.
    pub fn days(&self) -> Decimal {
        self.0
    }

    /// Returns true if nothing has accrued.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<AccruedLeave> for Decimal {
    fn from(leave: AccruedLeave) -> Self {
        leave.0
    }
}

impl Add for AccruedLeave {
    type Output = AccruedLeave;

    fn add(self, rhs: AccruedLeave) -> AccruedLeave {
        AccruedLeave::new(self.0 + rhs.0)
    }
}

impl fmt::Display for AccruedLeave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
