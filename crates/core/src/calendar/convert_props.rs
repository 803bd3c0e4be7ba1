//! Property-based tests for calendar conversion round-trips.

use chrono::NaiveDate;
use proptest::prelude::*;

use super::arith::{days_in_month, is_leap_year};
use super::convert::{JalaliDate, gregorian_to_jalali, jalali_to_gregorian};
use super::input::format_jalali_date_input;
use super::validate::validate_jalali_date;

/// Strategy for Gregorian dates roughly covering years 1700-2800.
fn gregorian_date() -> impl Strategy<Value = NaiveDate> {
    (625_000i32..1_020_000).prop_map(|days| {
        NaiveDate::from_num_days_from_ce_opt(days).expect("days in supported range")
    })
}

/// Strategy for valid Jalali dates in the birthdate-style year range.
fn jalali_date() -> impl Strategy<Value = JalaliDate> {
    (1300i32..=1450, 1u32..=12).prop_flat_map(|(year, month)| {
        let max_day = days_in_month(month, is_leap_year(year)).expect("month in range");
        (1u32..=max_day).prop_map(move |day| JalaliDate::new(year, month, day))
    })
}

proptest! {
    /// For any Gregorian date, converting to Jalali and back reproduces the
    /// same calendar day.
    #[test]
    fn prop_gregorian_roundtrip(date in gregorian_date()) {
        let formatted = gregorian_to_jalali(date);
        prop_assert!(!formatted.is_empty());
        prop_assert_eq!(jalali_to_gregorian(&formatted), Some(date));
    }

    /// For any valid Jalali date, converting to Gregorian and back
    /// reproduces the same triple.
    #[test]
    fn prop_jalali_roundtrip(jalali in jalali_date()) {
        let date = jalali.to_gregorian().expect("valid by construction");
        prop_assert_eq!(JalaliDate::from_gregorian(date).expect("in range"), jalali);
    }

    /// Every valid Jalali date formats to a string the validator accepts.
    #[test]
    fn prop_valid_dates_pass_validation(jalali in jalali_date()) {
        let result = validate_jalali_date(&jalali.to_string());
        prop_assert!(result.is_valid, "{}: {:?}", jalali, result.error);
    }

    /// The day offset between consecutive Jalali days is always one.
    #[test]
    fn prop_conversion_is_monotonic(jalali in jalali_date()) {
        let date = jalali.to_gregorian().expect("valid by construction");
        let next = date.succ_opt().expect("not at the end of time");
        let next_jalali = JalaliDate::from_gregorian(next).expect("in range");
        let roundtrip = next_jalali.to_gregorian().expect("valid");
        prop_assert_eq!(roundtrip, next);
    }

    /// The incremental formatter emits only digits and slashes, capped at
    /// the full `YYYY/MM/DD` width.
    #[test]
    fn prop_input_formatter_shape(input in ".{0,32}") {
        let formatted = format_jalali_date_input(&input);
        prop_assert!(formatted.len() <= 10);
        prop_assert!(formatted.chars().all(|c| c.is_ascii_digit() || c == '/'));
        // Re-formatting is a no-op.
        let reformatted = format_jalali_date_input(&formatted);
        prop_assert_eq!(reformatted, formatted);
    }
}
