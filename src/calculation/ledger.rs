//! Aggregates over caller-supplied ledger records.
//!
//! Leave deductions are set against accrued leave; overtime and meal costs
//! are summed for display. All functions are pure and take the records by
//! reference.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AccruedLeave, Dated, LeaveBalance, LeaveDeduction, MealCostEntry, OvertimeEntry};

/// Sorts records by date, oldest first. Records on the same date keep their
/// relative order.
pub fn sort_by_date<T: Dated>(entries: &mut [T]) {
    entries.sort_by_key(|entry| entry.date());
}

/// Sums the days deducted by `deductions`.
///
/// Negative deductions are rejected, as is a total too large to represent.
pub fn total_deductions(deductions: &[LeaveDeduction]) -> EngineResult<Decimal> {
    deductions.iter().try_fold(Decimal::ZERO, |sum, entry| {
        if entry.deduction.is_sign_negative() && !entry.deduction.is_zero() {
            return Err(EngineError::InvalidLedgerEntry {
                id: entry.date.to_string(),
                message: "deduction must not be negative".to_string(),
            });
        }
        sum.checked_add(entry.deduction)
            .ok_or_else(|| total_overflows(entry.date.to_string()))
    })
}

fn total_overflows(id: String) -> EngineError {
    EngineError::InvalidLedgerEntry {
        id,
        message: "total overflows".to_string(),
    }
}

/// Sets accrued leave against the deductions recorded so far.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::leave_balance;
/// use leave_engine::models::{AccruedLeave, LeaveDeduction};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let deductions = vec![LeaveDeduction {
///     date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
///     deduction: Decimal::new(15, 1),
///     memo: "half day + 1".to_string(),
/// }];
/// let balance = leave_balance(AccruedLeave::from_days(5), &deductions).unwrap();
/// assert_eq!(balance.remaining, Decimal::new(35, 1));
/// ```
pub fn leave_balance(
    accrued: AccruedLeave,
    deductions: &[LeaveDeduction],
) -> EngineResult<LeaveBalance> {
    let used = total_deductions(deductions)?;
    Ok(LeaveBalance {
        accrued,
        used: used.normalize(),
        remaining: (accrued.days() - used).normalize(),
    })
}

/// Checks that an overtime record has fewer than 60 minutes.
pub fn validate_overtime(entry: &OvertimeEntry) -> EngineResult<()> {
    if entry.minutes >= 60 {
        return Err(EngineError::InvalidLedgerEntry {
            id: entry.id.clone(),
            message: format!("minutes must be below 60, got {}", entry.minutes),
        });
    }
    Ok(())
}

/// Sums overtime as total minutes (`hours * 60 + minutes` per record).
pub fn total_overtime_minutes(entries: &[OvertimeEntry]) -> EngineResult<u64> {
    entries.iter().try_fold(0u64, |total, entry| {
        validate_overtime(entry)?;
        let minutes = u64::from(entry.hours) * 60 + u64::from(entry.minutes);
        total
            .checked_add(minutes)
            .ok_or_else(|| total_overflows(entry.id.clone()))
    })
}

/// Parses a `YYYY-MM` month key into the first day of that month.
pub fn parse_month(month: &str) -> EngineResult<NaiveDate> {
    let trimmed = month.trim();
    let invalid = || EngineError::InvalidDate {
        input: month.to_string(),
        message: "expected format YYYY-MM".to_string(),
    };

    let bytes = trimmed.as_bytes();
    if bytes.len() != 7 || bytes[4] != b'-' {
        return Err(invalid());
    }
    let year: i32 = trimmed[..4].parse().map_err(|_| invalid())?;
    let month_number: u32 = trimmed[5..].parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month_number, 1).ok_or_else(invalid)
}

/// Returns the overtime records that fall in the `YYYY-MM` month.
pub fn overtime_for_month<'a>(
    entries: &'a [OvertimeEntry],
    month: &str,
) -> EngineResult<Vec<&'a OvertimeEntry>> {
    let first = parse_month(month)?;
    Ok(entries
        .iter()
        .filter(|entry| entry.date.year() == first.year() && entry.date.month() == first.month())
        .collect())
}

/// Sums meal costs. Negative prices and totals too large to represent are
/// rejected.
pub fn total_meal_cost(entries: &[MealCostEntry]) -> EngineResult<Decimal> {
    entries.iter().try_fold(Decimal::ZERO, |total, entry| {
        if entry.price.is_sign_negative() && !entry.price.is_zero() {
            return Err(EngineError::InvalidLedgerEntry {
                id: entry.id.clone(),
                message: "price must not be negative".to_string(),
            });
        }
        total
            .checked_add(entry.price)
            .ok_or_else(|| total_overflows(entry.id.clone()))
    })
}
