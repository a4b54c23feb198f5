//! Core data models for the leave accrual engine.
//!
//! This module contains all the domain models used throughout the engine.

mod accrual_result;
mod accrued_leave;
mod ledger;

pub use accrual_result::{AccrualResult, AuditStep, TenureTier};
pub use accrued_leave::AccruedLeave;
pub use ledger::{Dated, LeaveBalance, LeaveDeduction, MealCostEntry, OvertimeEntry};
