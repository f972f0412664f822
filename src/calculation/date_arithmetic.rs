//! Calendar month arithmetic.
//!
//! Adding months keeps the day of month where possible and clamps it to the
//! last day of the target month otherwise (Jan 31 + 1 month = Feb 28/29).

use chrono::{Datelike, NaiveDate};

/// Gregorian leap-year rule: divisible by 4, except centuries, except
/// centuries divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in a given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

/// Adds a number of calendar months to a date.
///
/// Negative values move backwards. The day is clamped to the last valid day
/// of the resulting month. Results beyond chrono's supported range saturate
/// to [`NaiveDate::MAX`] or [`NaiveDate::MIN`].
///
/// # Examples
///
/// ```
/// use pension_bridge::calculation::add_months;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// assert_eq!(add_months(date, 1), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert_eq!(add_months(date, 13), NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
/// assert_eq!(add_months(date, -2), NaiveDate::from_ymd_opt(2023, 11, 30).unwrap());
/// ```
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let zero_based = date.month0() as i64 + months as i64;
    let year = date.year() as i64 + zero_based.div_euclid(12);
    let month = zero_based.rem_euclid(12) as u32 + 1;

    let Ok(year) = i32::try_from(year) else {
        return if months >= 0 {
            NaiveDate::MAX
        } else {
            NaiveDate::MIN
        };
    };

    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(if months >= 0 {
        NaiveDate::MAX
    } else {
        NaiveDate::MIN
    })
}

/// Counts calendar months from `from` to `to`, ignoring the day of month.
///
/// Negative when `to` falls in an earlier month.
///
/// ```
/// use pension_bridge::calculation::months_between;
/// use chrono::NaiveDate;
///
/// let from = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let to = NaiveDate::from_ymd_opt(2031, 10, 1).unwrap();
/// assert_eq!(months_between(from, to), 60);
/// ```
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32)
}
