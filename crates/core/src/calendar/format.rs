//! Gregorian display formatting helpers.
//!
//! Display strings use `YYYY/MM/DD`; API/database strings use `YYYY-MM-DD`.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};

/// Formats a date as `YYYY/MM/DD` for display.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}

/// Formats a date as `YYYY-MM-DD` for API/database usage.
#[must_use]
pub fn format_date_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Formats a datetime as `YYYY/MM/DD HH:MM` for display.
#[must_use]
pub fn format_date_time(datetime: NaiveDateTime) -> String {
    datetime.format("%Y/%m/%d %H:%M").to_string()
}

/// Returns today's date in `YYYY/MM/DD` format.
#[must_use]
pub fn today() -> String {
    format_date(Local::now().date_naive())
}

/// Returns today's date in `YYYY-MM-DD` format.
#[must_use]
pub fn today_iso() -> String {
    format_date_iso(Local::now().date_naive())
}

/// Returns the date `days` days ago in `YYYY/MM/DD` format.
#[must_use]
pub fn days_ago(days: i64) -> String {
    format_date(Local::now().date_naive() - Duration::days(days))
}

/// Returns the date `days` days ago in `YYYY-MM-DD` format.
#[must_use]
pub fn days_ago_iso(days: i64) -> String {
    format_date_iso(Local::now().date_naive() - Duration::days(days))
}
