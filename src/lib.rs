//! Annual Leave Accrual Engine
//!
//! This crate computes accrued annual leave from a hire date and a reference
//! date under a tiered policy: monthly grants in the first year, a pro-rated
//! share of the annual grant for the hire year, and escalating annual block
//! grants after that. It also aggregates the leave, overtime and meal-cost
//! ledgers that are displayed alongside the balance.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod clock;
pub mod config;
pub mod error;
pub mod formatting;
pub mod models;
pub mod telemetry;
