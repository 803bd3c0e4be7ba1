//! Calendar error types.

use thiserror::Error;

/// Errors raised by calendar arithmetic and parsing.
///
/// These never cross the public conversion API; the soft entry points map
/// them to neutral return values and log the cause.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// The Jalali year falls outside the supported break table.
    #[error("Jalali year {0} is outside the supported range")]
    YearOutOfRange(i32),

    /// The year/month/day triple does not name a real Jalali date.
    #[error("Invalid Jalali date: {year}/{month}/{day}")]
    InvalidDate {
        /// Jalali year.
        year: i32,
        /// Jalali month.
        month: u32,
        /// Jalali day.
        day: u32,
    },

    /// The input string is not a Jalali date.
    #[error("Cannot parse '{0}' as a Jalali date")]
    Parse(String),
}
