//! Staged validation of user-typed Jalali dates.

use serde::Serialize;

use super::arith::is_leap_year;
use super::convert::JalaliDate;

/// Lower bound of the accepted year range.
///
/// A sanity bound for birthdate-style inputs, not a calendar limit.
const MIN_YEAR: i32 = 1300;
/// Upper bound of the accepted year range.
const MAX_YEAR: i32 = 1450;

/// Outcome of validating a typed Jalali date.
///
/// The error message is shown to the end user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateValidation {
    /// Whether the input is a valid Jalali date.
    pub is_valid: bool,
    /// Human-readable reason for the first failing stage, if any.
    pub error: Option<String>,
}

impl DateValidation {
    fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Splits `YYYY/M/D` into numeric parts, enforcing a 4-digit year and 1-2
/// digit month/day of ASCII digits only.
fn parse_parts(input: &str) -> Option<(i32, u32, u32)> {
    let mut parts = input.split('/');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let all_digits =
        |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());
    if year.len() != 4 || month.len() > 2 || day.len() > 2 {
        return None;
    }
    if !all_digits(year) || !all_digits(month) || !all_digits(day) {
        return None;
    }

    Some((year.parse().ok()?, month.parse().ok()?, day.parse().ok()?))
}

/// Validates a typed Jalali date string, producing a human-readable reason
/// for the first failing stage.
///
/// Stages short-circuit in a fixed priority order: presence, length, format,
/// year range, month range, day lower bound, month-conditioned day count
/// (leap-year aware for Esfand), then a final construction check. Only ASCII
/// digits are accepted; callers must pre-normalize localized digit glyphs.
#[must_use]
pub fn validate_jalali_date(input: &str) -> DateValidation {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return DateValidation::invalid("Date is required");
    }

    // Characters, not bytes: short multi-byte input is incomplete, not malformed.
    if trimmed.chars().count() < 10 {
        return DateValidation::invalid("Please enter complete date (YYYY/MM/DD)");
    }

    let Some((year, month, day)) = parse_parts(trimmed) else {
        return DateValidation::invalid("Date format should be YYYY/MM/DD");
    };

    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return DateValidation::invalid(format!(
            "Year should be between {MIN_YEAR}-{MAX_YEAR} (Persian calendar)"
        ));
    }

    if !(1..=12).contains(&month) {
        return DateValidation::invalid("Month should be between 1-12");
    }

    if day < 1 {
        return DateValidation::invalid("Day should be at least 1");
    }

    if month <= 6 && day > 31 {
        return DateValidation::invalid(format!("Month {month} can have maximum 31 days"));
    }

    if (7..=11).contains(&month) && day > 30 {
        return DateValidation::invalid(format!("Month {month} can have maximum 30 days"));
    }

    if month == 12 {
        let leap = is_leap_year(year);
        if !leap && day > 29 {
            return DateValidation::invalid(format!(
                "Month 12 in year {year} can have maximum 29 days (non-leap year)"
            ));
        }
        if leap && day > 30 {
            return DateValidation::invalid(format!(
                "Month 12 in year {year} can have maximum 30 days (leap year)"
            ));
        }
    }

    // Residual failures the staged checks cannot see.
    if JalaliDate::new(year, month, day).to_gregorian().is_err() {
        return DateValidation::invalid("Invalid date - please check your input");
    }

    DateValidation::valid()
}
