//! Jalali calendar arithmetic.
//!
//! Implements the 33-year-cycle algorithm with the observational break table
//! (Khayyam calendar reform lineage). Results match the reference
//! `moment-jalaali`/`jalaali-js` implementation for years -61..3177 AP.
//! Parsing and error-message concerns live elsewhere; this module is pure
//! year/month/day arithmetic on top of `chrono` day counts.

use chrono::{Datelike, Duration, NaiveDate};

use super::error::CalendarError;

/// Years in which the length of the leap cycle changes.
const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// Derived facts about a Jalali year.
#[derive(Debug)]
pub(crate) struct YearInfo {
    /// Position in the leap cycle; 0 means the year is leap, 1 means the
    /// previous year was leap.
    pub leap_cycle: i32,
    /// Gregorian year containing the first day of this Jalali year.
    pub gregorian_year: i32,
    /// Day of March on which this Jalali year begins.
    pub march_day: u32,
}

/// Computes leap status and the Gregorian date of 1 Farvardin for a year.
pub(crate) fn year_info(year: i32) -> Result<YearInfo, CalendarError> {
    if year < BREAKS[0] || year >= BREAKS[BREAKS.len() - 1] {
        return Err(CalendarError::YearOutOfRange(year));
    }

    let gregorian_year = year + 621;
    let mut leap_j = -14_i32;
    let mut previous_break = BREAKS[0];
    let mut jump = 0_i32;

    // Accumulate leap days up to the cycle segment containing `year`.
    for &current_break in &BREAKS[1..] {
        jump = current_break - previous_break;
        if year < current_break {
            break;
        }
        leap_j += jump / 33 * 8 + (jump % 33) / 4;
        previous_break = current_break;
    }

    let mut n = year - previous_break;
    leap_j += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }

    let leap_g = gregorian_year / 4 - (gregorian_year / 100 + 1) * 3 / 4 - 150;
    let march = 20 + leap_j - leap_g;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut leap_cycle = ((n + 1) % 33 - 1) % 4;
    if leap_cycle == -1 {
        leap_cycle = 4;
    }

    let march_day =
        u32::try_from(march).map_err(|_| CalendarError::YearOutOfRange(year))?;

    Ok(YearInfo {
        leap_cycle,
        gregorian_year,
        march_day,
    })
}

/// Returns true if the Jalali year is a leap year.
///
/// Years outside the supported range are reported as non-leap.
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    matches!(year_info(year), Ok(info) if info.leap_cycle == 0)
}

/// Returns the number of days in a Jalali month, or `None` for an invalid
/// month number.
///
/// Months 1-6 have 31 days, months 7-11 have 30, and month 12 has 29 in a
/// common year or 30 in a leap year.
#[must_use]
pub const fn days_in_month(month: u32, leap: bool) -> Option<u32> {
    match month {
        1..=6 => Some(31),
        7..=11 => Some(30),
        12 => Some(if leap { 30 } else { 29 }),
        _ => None,
    }
}

/// Converts a Jalali year/month/day triple to a Gregorian date.
pub(crate) fn jalali_to_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    let info = year_info(year)?;

    let invalid = CalendarError::InvalidDate { year, month, day };
    let Some(max_day) = days_in_month(month, info.leap_cycle == 0) else {
        return Err(invalid);
    };
    if day == 0 || day > max_day {
        return Err(invalid);
    }

    let first_of_year = NaiveDate::from_ymd_opt(info.gregorian_year, 3, info.march_day)
        .ok_or(CalendarError::YearOutOfRange(year))?;

    let month = i64::from(month);
    let offset = (month - 1) * 31 - (month / 7) * (month - 7) + i64::from(day) - 1;
    first_of_year
        .checked_add_signed(Duration::days(offset))
        .ok_or(invalid)
}

/// Converts a Gregorian date to a Jalali year/month/day triple.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn date_to_jalali(date: NaiveDate) -> Result<(i32, u32, u32), CalendarError> {
    let gregorian_year = date.year();
    let year = gregorian_year - 621;
    let info = year_info(year)?;

    let first_of_year = NaiveDate::from_ymd_opt(gregorian_year, 3, info.march_day)
        .ok_or(CalendarError::YearOutOfRange(year))?;
    let mut k = (date - first_of_year).num_days();

    if k >= 0 {
        if k <= 185 {
            // Farvardin through Shahrivar, 31 days each.
            return Ok((year, 1 + (k / 31) as u32, (k % 31 + 1) as u32));
        }
        k -= 186;
        return Ok((year, 7 + (k / 30) as u32, (k % 30 + 1) as u32));
    }

    // Before 1 Farvardin: the date belongs to the previous Jalali year.
    k += 179;
    if info.leap_cycle == 1 {
        k += 1;
    }
    Ok((year - 1, 7 + (k / 30) as u32, (k % 30 + 1) as u32))
}
