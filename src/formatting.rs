//! Display formatting for amounts and durations.

use rust_decimal::Decimal;

/// Formats a number with comma thousands separators.
///
/// Only the integer part is grouped; the fractional part is kept as is.
/// Negative values render as `"0"`.
///
/// # Example
///
/// ```
/// use leave_engine::formatting::comma_format;
/// use rust_decimal::Decimal;
///
/// assert_eq!(comma_format(Decimal::from(1234567)), "1,234,567");
/// assert_eq!(comma_format(Decimal::new(12345678, 4)), "1,234.5678");
/// assert_eq!(comma_format(Decimal::from(-5)), "0");
/// ```
pub fn comma_format(value: Decimal) -> String {
    if value.is_sign_negative() && !value.is_zero() {
        return "0".to_string();
    }

    let text = value.normalize().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{}.{}", grouped, fraction),
        None => grouped,
    }
}

/// Renders a number of minutes as `"{h}h {m}m"`.
///
/// # Example
///
/// ```
/// use leave_engine::formatting::format_hours_minutes;
///
/// assert_eq!(format_hours_minutes(255), "4h 15m");
/// assert_eq!(format_hours_minutes(0), "0h 0m");
/// ```
pub fn format_hours_minutes(total_minutes: u64) -> String {
    format!("{}h {}m", total_minutes / 60, total_minutes % 60)
}
