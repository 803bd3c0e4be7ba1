//! Jalali (Persian) calendar conversion and validation.
//!
//! Dates are stored and exchanged with the API as Gregorian ISO 8601; the
//! Jalali calendar is only a display/input representation. This module
//! implements:
//! - Calendar arithmetic (leap years, month lengths, day-number conversion)
//! - Bidirectional Gregorian/Jalali conversion
//! - Staged validation of user-typed Jalali dates
//! - Incremental input formatting for date fields
//!
//! The conversion entry points never panic and never return an error outward:
//! failures are communicated through empty strings, `None`, or a structured
//! validation outcome.

pub mod arith;
pub mod convert;
pub mod error;
pub mod format;
pub mod input;
pub mod validate;

#[cfg(test)]
mod convert_props;

pub use arith::{days_in_month, is_leap_year};
pub use convert::{
    JALALI_MONTH_NAMES, JalaliDate, format_date_jalali, format_date_jalali_long,
    gregorian_to_jalali, jalali_to_gregorian, month_name, month_names, parse_iso_date,
    today_jalali,
};
pub use error::CalendarError;
pub use format::{
    days_ago, days_ago_iso, format_date, format_date_iso, format_date_time, today, today_iso,
};
pub use input::format_jalali_date_input;
pub use validate::{DateValidation, validate_jalali_date};
