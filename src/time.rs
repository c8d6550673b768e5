//! Civil-date arithmetic for the sunrise equation.
//!
//! The algorithm only needs the proleptic Gregorian ordinal day of the
//! year plus a decomposition of fractional UTC hours into clock
//! components. No timezone database is involved: the request date is
//! interpreted as a UTC calendar date, and the same frame is used for
//! final date assembly.

use crate::math::floor;
use crate::{Error, Result};

/// Cumulative days before each month in a non-leap year.
const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Checks whether a year is a leap year in the Gregorian calendar.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Gets the number of days in a month (1-12).
///
/// Returns 0 for months outside 1-12; callers validate with
/// [`check_date`] first.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Validates a civil date's components.
///
/// # Errors
/// Returns `InvalidDate` if the month is outside 1-12 or the day does
/// not exist in the given month.
pub fn check_date(year: i32, month: u32, day: u32) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(Error::invalid_date("month must be between 1 and 12"));
    }
    if day < 1 || day > days_in_month(year, month) {
        return Err(Error::invalid_date("day is out of range for month"));
    }
    Ok(())
}

/// Computes the ordinal day of the year (1-365/366) for a valid date.
///
/// # Example
/// ```
/// # use solar_almanac::time::day_of_year;
/// assert_eq!(day_of_year(2023, 1, 1), 1);
/// assert_eq!(day_of_year(2023, 6, 21), 172);
/// assert_eq!(day_of_year(2024, 12, 31), 366);
/// ```
#[must_use]
pub const fn day_of_year(year: i32, month: u32, day: u32) -> u32 {
    let leap_shift = if month > 2 && is_leap_year(year) { 1 } else { 0 };
    DAYS_BEFORE_MONTH[(month - 1) as usize] + leap_shift + day
}

/// Splits fractional hours in [0, 24) into (hour, minute, seconds).
///
/// Seconds keep their fractional part; callers may truncate to whole
/// seconds when assembling a timestamp.
#[must_use]
pub fn split_hours(hours: f64) -> (u32, u32, f64) {
    let hour = floor(hours);
    let minutes = (hours - hour) * 60.0;
    let minute = floor(minutes);
    let seconds = (minutes - minute) * 60.0;
    (hour as u32, minute as u32, seconds)
}
