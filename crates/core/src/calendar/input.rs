//! Incremental formatting for Jalali date input fields.

/// Reformats a date field's raw text as the user types.
///
/// Strips everything that is not an ASCII digit, keeps at most 8 digits
/// (`YYYYMMDD`), and re-inserts slashes after the year and month. Pure string
/// transform; no validation is performed.
#[must_use]
pub fn format_jalali_date_input(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(char::is_ascii_digit)
        .take(8)
        .collect();

    // Digits are ASCII, so byte slicing is safe here.
    match digits.len() {
        0..=4 => digits,
        5..=6 => format!("{}/{}", &digits[..4], &digits[4..]),
        _ => format!("{}/{}/{}", &digits[..4], &digits[4..6], &digits[6..]),
    }
}
