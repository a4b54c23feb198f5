//! Day-granularity date arithmetic.
//!
//! All values here are [`NaiveDate`]s, so there is no time-of-day or
//! timezone component to drift: a day difference is always a whole number
//! of calendar days.

use chrono::{Datelike, NaiveDate};

use crate::error::{EngineError, EngineResult};

/// Earliest year accepted by [`parse_calendar_date`].
pub const MIN_SUPPORTED_YEAR: i32 = 1;

/// Latest year accepted by [`parse_calendar_date`].
pub const MAX_SUPPORTED_YEAR: i32 = 9999;

/// Parses a strict `YYYY-MM-DD` calendar date.
///
/// Surrounding whitespace is ignored. Anything else that is not a real
/// calendar date in the supported year range is rejected with
/// [`EngineError::InvalidDate`].
///
/// # Example
///
/// ```
/// use leave_engine::calculation::parse_calendar_date;
/// use chrono::NaiveDate;
///
/// let date = parse_calendar_date("2024-02-29").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
///
/// assert!(parse_calendar_date("2023-02-29").is_err());
/// assert!(parse_calendar_date("2024/02/29").is_err());
/// ```
pub fn parse_calendar_date(input: &str) -> EngineResult<NaiveDate> {
    let trimmed = input.trim();
    let invalid = |message: &str| EngineError::InvalidDate {
        input: input.to_string(),
        message: message.to_string(),
    };

    let bytes = trimmed.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !well_formed {
        return Err(invalid("expected format YYYY-MM-DD"));
    }

    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|e| invalid(&e.to_string()))?;

    if !(MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&date.year()) {
        return Err(invalid("year is outside the supported range"));
    }

    Ok(date)
}

/// Returns the number of whole days from `from` to `to`.
///
/// Negative when `to` precedes `from`, zero when they are the same day.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::day_difference;
/// use chrono::NaiveDate;
///
/// let jan_1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let jan_2 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
/// assert_eq!(day_difference(jan_1, jan_1), 0);
/// assert_eq!(day_difference(jan_1, jan_2), 1);
/// assert_eq!(day_difference(jan_2, jan_1), -1);
/// ```
pub fn day_difference(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Counts the January 1 dates that fall within `[from, to]`, endpoints
/// inclusive.
///
/// Returns 0 when `to` precedes `from`.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::year_boundary_count;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
/// let reference = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// assert_eq!(year_boundary_count(hire, reference), 1);
///
/// // A hire date on January 1 counts itself.
/// let new_year = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(year_boundary_count(new_year, new_year), 1);
/// ```
pub fn year_boundary_count(from: NaiveDate, to: NaiveDate) -> u32 {
    if to < from {
        return 0;
    }

    (from.year()..=to.year())
        .filter_map(|year| NaiveDate::from_ymd_opt(year, 1, 1))
        .filter(|new_year| *new_year >= from && *new_year <= to)
        .count() as u32
}

/// Returns December 31 of the given year.
///
/// # Panics
///
/// Panics if `year` is outside the range chrono can represent. Dates from
/// [`parse_calendar_date`] are always well inside it.
pub fn last_day_of_year(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 12, 31).expect("December 31 exists in every representable year")
}

/// Returns the number of days in `year` (365, or 366 for leap years).
///
/// Measured as the distance between consecutive December 31sts so that it
/// agrees with [`day_difference`] by construction.
pub fn year_length(year: i32) -> i64 {
    day_difference(last_day_of_year(year - 1), last_day_of_year(year))
}

/// Days elapsed from `date` to `reference_date`, both given as strings.
///
/// This is the string boundary used by display code for "days since hire".
/// The reference date is always validated. An empty `date` then yields 0;
/// any other malformed input is an [`EngineError::InvalidDate`].
///
/// # Example
///
/// ```
/// use leave_engine::calculation::days_since;
///
/// assert_eq!(days_since("2024-01-01", "2024-06-15").unwrap(), 166);
/// assert_eq!(days_since("", "2024-06-15").unwrap(), 0);
/// assert!(days_since("2024-01-01", "June").is_err());
/// ```
pub fn days_since(date: &str, reference_date: &str) -> EngineResult<i64> {
    days_since_as_of(date, parse_calendar_date(reference_date)?)
}

/// Like [`days_since`], for a reference date that is already typed.
pub fn days_since_as_of(date: &str, reference_date: NaiveDate) -> EngineResult<i64> {
    if date.trim().is_empty() {
        return Ok(0);
    }
    Ok(day_difference(parse_calendar_date(date)?, reference_date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_day_difference_same_day_is_zero() {
        assert_eq!(day_difference(date("2024-01-01"), date("2024-01-01")), 0);
    }

    #[test]
    fn test_day_difference_next_day_is_one() {
        assert_eq!(day_difference(date("2024-01-01"), date("2024-01-02")), 1);
    }

    #[test]
    fn test_day_difference_negative_when_reversed() {
        assert_eq!(day_difference(date("2024-03-01"), date("2024-02-28")), -2);
    }

    #[test]
    fn test_day_difference_across_leap_day() {
        assert_eq!(day_difference(date("2023-03-01"), date("2024-03-01")), 366);
        assert_eq!(day_difference(date("2022-03-01"), date("2023-03-01")), 365);
    }

    #[test]
    fn test_year_boundary_count_within_single_year() {
        assert_eq!(
            year_boundary_count(date("2024-02-01"), date("2024-12-31")),
            0
        );
    }

    #[test]
    fn test_year_boundary_count_includes_start_on_new_year() {
        assert_eq!(
            year_boundary_count(date("2024-01-01"), date("2024-06-15")),
            1
        );
    }

    #[test]
    fn test_year_boundary_count_includes_end_on_new_year() {
        assert_eq!(
            year_boundary_count(date("2023-12-31"), date("2024-01-01")),
            1
        );
        assert_eq!(
            year_boundary_count(date("2023-12-31"), date("2023-12-31")),
            0
        );
    }

    #[test]
    fn test_year_boundary_count_multiple_years() {
        assert_eq!(
            year_boundary_count(date("2020-01-01"), date("2024-01-01")),
            5
        );
        assert_eq!(
            year_boundary_count(date("2020-06-30"), date("2023-06-30")),
            3
        );
    }

    #[test]
    fn test_year_boundary_count_reversed_interval_is_zero() {
        assert_eq!(
            year_boundary_count(date("2024-06-01"), date("2020-06-01")),
            0
        );
    }

    #[test]
    fn test_last_day_of_year() {
        assert_eq!(last_day_of_year(2023), date("2023-12-31"));
    }

    #[test]
    fn test_year_length_leap_and_common() {
        assert_eq!(year_length(2024), 366);
        assert_eq!(year_length(2023), 365);
        assert_eq!(year_length(2000), 366);
        assert_eq!(year_length(1900), 365);
    }

    #[test]
    fn test_parse_accepts_surrounding_whitespace() {
        assert_eq!(parse_calendar_date(" 2024-06-15\n").unwrap(), date("2024-06-15"));
    }

    #[test]
    fn test_parse_rejects_malformed_inputs() {
        for input in ["", "2024-6-15", "15-06-2024", "2024-06-15T00:00:00", "abcd-ef-gh"] {
            match parse_calendar_date(input) {
                Err(EngineError::InvalidDate { input: rejected, .. }) => {
                    assert_eq!(rejected, input)
                }
                other => panic!("Expected InvalidDate for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert!(parse_calendar_date("2023-02-29").is_err());
        assert!(parse_calendar_date("2024-04-31").is_err());
        assert!(parse_calendar_date("2024-13-01").is_err());
        assert!(parse_calendar_date("0000-01-01").is_err());
    }

    #[test]
    fn test_days_since_empty_date_is_zero() {
        assert_eq!(days_since("   ", "2024-01-01").unwrap(), 0);
    }

    #[test]
    fn test_days_since_rejects_bad_reference() {
        assert!(matches!(
            days_since("2024-01-01", "2024-02-30"),
            Err(EngineError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_days_since_as_of_typed_reference() {
        let reference = date("2024-06-15");
        assert_eq!(days_since_as_of("2024-01-01", reference).unwrap(), 166);
        assert_eq!(days_since_as_of("2024-06-20", reference).unwrap(), -5);
        assert_eq!(days_since_as_of("", reference).unwrap(), 0);
        assert!(days_since_as_of("2024-02-30", reference).is_err());
    }

    #[test]
    fn test_days_since_validates_reference_even_for_empty_date() {
        assert!(days_since("", "not a date").is_err());
    }
}
