//! Gregorian/Jalali conversion types and entry points.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::arith;
use super::error::CalendarError;

/// Jalali month display names, index 0 = Farvardin. Not localizable.
pub const JALALI_MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Returns the twelve Jalali month names, index 0 = Farvardin.
#[must_use]
pub const fn month_names() -> [&'static str; 12] {
    JALALI_MONTH_NAMES
}

/// Returns the display name for a Jalali month number (1-12).
#[must_use]
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    JALALI_MONTH_NAMES.get(index).copied()
}

/// A Jalali calendar date.
///
/// Transient display/input representation only; the canonical stored form of
/// every date is Gregorian ISO 8601.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JalaliDate {
    /// Jalali year.
    pub year: i32,
    /// Jalali month (1-12).
    pub month: u32,
    /// Jalali day of month.
    pub day: u32,
}

impl JalaliDate {
    /// Creates a Jalali date without validating it.
    ///
    /// Validation happens on conversion; see [`JalaliDate::to_gregorian`].
    #[must_use]
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Converts a Gregorian date to its Jalali equivalent.
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, CalendarError> {
        let (year, month, day) = arith::date_to_jalali(date)?;
        Ok(Self::new(year, month, day))
    }

    /// Converts this date to Gregorian, validating it in the process.
    pub fn to_gregorian(self) -> Result<NaiveDate, CalendarError> {
        arith::jalali_to_date(self.year, self.month, self.day)
    }

    /// Returns the display name of this date's month.
    #[must_use]
    pub fn month_name(self) -> Option<&'static str> {
        month_name(self.month)
    }
}

impl std::fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

impl std::str::FromStr for JalaliDate {
    type Err = CalendarError;

    /// Parses a `YYYY/MM/DD` Jalali string; 1-2 digit month and day are
    /// accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || CalendarError::Parse(s.to_string());

        let mut parts = s.split('/');
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(parse_err());
        };

        let year: i32 = year.trim().parse().map_err(|_| parse_err())?;
        let month: u32 = month.trim().parse().map_err(|_| parse_err())?;
        let day: u32 = day.trim().parse().map_err(|_| parse_err())?;

        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(parse_err());
        }

        Ok(Self::new(year, month, day))
    }
}

/// Formats a Gregorian date as a Jalali `YYYY/MM/DD` string.
///
/// Returns an empty string if the date cannot be represented; never panics.
#[must_use]
pub fn gregorian_to_jalali(date: NaiveDate) -> String {
    match JalaliDate::from_gregorian(date) {
        Ok(jalali) => jalali.to_string(),
        Err(err) => {
            tracing::warn!(%date, %err, "failed to convert Gregorian date to Jalali");
            String::new()
        }
    }
}

/// Parses a `YYYY/MM/DD` Jalali string and converts it to a Gregorian date.
///
/// Returns `None` on any parse or range failure; never panics.
#[must_use]
pub fn jalali_to_gregorian(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let jalali: JalaliDate = trimmed.parse().ok()?;
    match jalali.to_gregorian() {
        Ok(date) => Some(date),
        Err(err) => {
            tracing::debug!(input = trimmed, %err, "failed to convert Jalali date to Gregorian");
            None
        }
    }
}

/// Parses a Gregorian ISO 8601 date or datetime string.
#[must_use]
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(datetime.date());
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(datetime.date_naive());
    }
    None
}

/// Formats a Gregorian ISO date/datetime string as Jalali `YYYY/MM/DD`.
///
/// Returns an empty string on unparseable input; never panics.
#[must_use]
pub fn format_date_jalali(value: &str) -> String {
    parse_iso_date(value).map_or_else(String::new, gregorian_to_jalali)
}

/// Formats a Gregorian ISO date/datetime string as Jalali `DD MonthName YYYY`.
///
/// Returns an empty string on unparseable input; never panics.
#[must_use]
pub fn format_date_jalali_long(value: &str) -> String {
    let Some(date) = parse_iso_date(value) else {
        return String::new();
    };
    match JalaliDate::from_gregorian(date) {
        Ok(jalali) => match jalali.month_name() {
            Some(name) => format!("{:02} {} {}", jalali.day, name, jalali.year),
            None => String::new(),
        },
        Err(err) => {
            tracing::warn!(%date, %err, "failed to convert Gregorian date to Jalali");
            String::new()
        }
    }
}

/// Returns today's date as a Jalali `YYYY/MM/DD` string.
#[must_use]
pub fn today_jalali() -> String {
    gregorian_to_jalali(Local::now().date_naive())
}
