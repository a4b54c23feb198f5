//! Ledger records supplied by the caller.
//!
//! These are the per-user logs the surrounding application fetches from its
//! document store: annual-leave deductions, overtime and meal costs. The
//! engine only aggregates them; it never stores them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AccruedLeave;

/// A record that belongs to a calendar date.
pub trait Dated {
    /// The date of the record.
    fn date(&self) -> NaiveDate;
}

/// Annual leave taken (or otherwise deducted) on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveDeduction {
    /// The date the leave was taken.
    pub date: NaiveDate,
    /// Days deducted (may be fractional, e.g. a half day).
    pub deduction: Decimal,
    /// Free-form note.
    #[serde(default)]
    pub memo: String,
}

/// Overtime worked on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeEntry {
    /// Identifier of the record in the caller's store.
    pub id: String,
    /// The date the overtime was worked.
    pub date: NaiveDate,
    /// Whole hours of overtime.
    #[serde(default)]
    pub hours: u32,
    /// Additional minutes of overtime (0-59).
    #[serde(default)]
    pub minutes: u32,
    /// Free-form note.
    #[serde(default)]
    pub memo: String,
}

/// A meal cost incurred on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealCostEntry {
    /// Identifier of the record in the caller's store.
    pub id: String,
    /// The date of the meal.
    pub date: NaiveDate,
    /// Amount spent.
    pub price: Decimal,
    /// Free-form note.
    #[serde(default)]
    pub memo: String,
}

impl Dated for LeaveDeduction {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for OvertimeEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for MealCostEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Accrued leave set against the deductions recorded so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// Leave accrued as of the reference date.
    pub accrued: AccruedLeave,
    /// Sum of all deductions.
    pub used: Decimal,
    /// `accrued - used`; negative when leave is overdrawn.
    pub remaining: Decimal,
}
