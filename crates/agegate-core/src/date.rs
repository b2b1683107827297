//! Birthdate entry formatting and validation.
//!
//! The entry field accepts free-form keystrokes and is rebuilt on every
//! input through [`format_input`], so the buffer only ever holds a partial
//! or complete `DD/MM/YYYY` string. A completed entry is judged by
//! [`BirthDate::parse`]: a fixed-width shape check first, then per-field
//! range checks.
//!
//! The day range is 1..=31 regardless of month. Month length and leap years
//! are intentionally not cross-checked; `31/02/2000` is accepted.

use thiserror::Error;

/// Maximum digits a date entry can hold (`DDMMYYYY`).
pub const MAX_DIGITS: usize = 8;

/// Lowest accepted birth year.
pub const MIN_YEAR: u16 = 1900;

/// Highest accepted day of month, independent of month.
const MAX_DAY: u8 = 31;

/// Highest accepted month.
const MAX_MONTH: u8 = 12;

/// Byte length of a complete `DD/MM/YYYY` entry.
const COMPLETE_LEN: usize = 10;

/// Errors from parsing a date entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateError {
    /// Entry is not a complete zero-padded `DD/MM/YYYY` string.
    #[error("not a complete DD/MM/YYYY date")]
    Malformed,

    /// Month outside 1..=12.
    #[error("month {0} out of range 1..=12")]
    MonthOutOfRange(u8),

    /// Day outside 1..=31.
    #[error("day {0} out of range 1..=31")]
    DayOutOfRange(u8),

    /// Year outside 1900..=current year.
    #[error("year {year} out of range 1900..={max}")]
    YearOutOfRange {
        /// Year that was entered.
        year: u16,
        /// Upper bound in effect (the current year).
        max: u16,
    },
}

/// A parsed, range-checked birthdate.
///
/// Day is only checked against the constant 31; construction through
/// [`BirthDate::parse`] does not reject impossible calendar dates like
/// February 31st.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDate {
    /// Day of month, 1..=31.
    pub day: u8,
    /// Month, 1..=12.
    pub month: u8,
    /// Year, 1900..=current year.
    pub year: u16,
}

impl BirthDate {
    /// Parse and range-check a completed `DD/MM/YYYY` entry.
    ///
    /// The shape check runs first: anything that is not exactly ten bytes of
    /// zero-padded digits and separators fails as [`DateError::Malformed`]
    /// before any range check. Range checks run in month, day, year order and
    /// report the first violation.
    pub fn parse(entry: &str, current_year: u16) -> Result<Self, DateError> {
        let bytes = entry.as_bytes();
        if bytes.len() != COMPLETE_LEN || bytes[2] != b'/' || bytes[5] != b'/' {
            return Err(DateError::Malformed);
        }

        let day = parse_field(&bytes[0..2]).ok_or(DateError::Malformed)?;
        let month = parse_field(&bytes[3..5]).ok_or(DateError::Malformed)?;
        let year = parse_field(&bytes[6..10]).ok_or(DateError::Malformed)?;

        if !(1..=u16::from(MAX_MONTH)).contains(&month) {
            return Err(DateError::MonthOutOfRange(month as u8));
        }
        if !(1..=u16::from(MAX_DAY)).contains(&day) {
            return Err(DateError::DayOutOfRange(day as u8));
        }
        if !(MIN_YEAR..=current_year).contains(&year) {
            return Err(DateError::YearOutOfRange { year, max: current_year });
        }

        Ok(Self { day: day as u8, month: month as u8, year })
    }
}

/// Parse a fixed-width run of ASCII digits. `None` if any byte is not a digit.
fn parse_field(bytes: &[u8]) -> Option<u16> {
    bytes.iter().try_fold(0u16, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + u16::from(b - b'0'))
    })
}

/// Whether a completed entry is a plausible birthdate.
///
/// Plain-boolean contract over [`BirthDate::parse`]: any shape or range
/// failure is `false`, never an error to the caller.
pub fn is_valid(entry: &str, current_year: u16) -> bool {
    BirthDate::parse(entry, current_year).is_ok()
}

/// Normalize raw field input into a (partial) `DD/MM/YYYY` entry.
///
/// Strips every non-digit, keeps the first [`MAX_DIGITS`] digits, and
/// reinserts the separators after the second and fourth digit. Idempotent:
/// feeding the output back in reproduces it exactly, so the field can be
/// rebuilt from its own value on every keystroke.
pub fn format_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).take(MAX_DIGITS).collect();

    match digits.len() {
        0..=1 => digits,
        2..=3 => format!("{}/{}", &digits[0..2], &digits[2..]),
        _ => format!("{}/{}/{}", &digits[0..2], &digits[2..4], &digits[4..]),
    }
}
