//! Sources of "today".
//!
//! The calculation modules never read the wall clock. Callers that need a
//! default reference date, such as the HTTP API, get it from a [`Clock`].

use chrono::NaiveDate;

/// Provides the current calendar date.
pub trait Clock: Send + Sync {
    /// Today's date.
    fn today(&self) -> NaiveDate;
}

/// The system clock, in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// A clock pinned to one date.
///
/// # Example
///
/// ```
/// use leave_engine::clock::{Clock, FixedClock};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// assert_eq!(FixedClock(date).today(), date);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
