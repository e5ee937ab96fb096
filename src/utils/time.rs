//! Time utilities: recognizing and parsing the `H:MM` / `HH:MM` cells of a shift table.

use crate::errors::{AppError, AppResult};
use crate::utils::digits::parse_digits;
use chrono::NaiveTime;
use regex::Regex;
use std::sync::LazyLock;

// OCR sometimes splits the colon from its digits ("10 : 00") or emits full-width digits.
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})\s*:\s*(\d{2})$").expect("valid time regex"));

/// True when the whole (trimmed) string is a 1-2 digit hour and a 2 digit minute.
pub fn is_time_str(t: &str) -> bool {
    TIME_RE.is_match(t.trim())
}

/// Drop every whitespace character, so "10 : 00" is stored as "10:00".
pub fn compact(t: &str) -> String {
    t.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Parse a shift time. `24:00` is the table's notation for midnight and
/// becomes `00:00`; anything else out of range is rejected.
pub fn parse_time(t: &str) -> AppResult<NaiveTime> {
    let raw = compact(t);
    let caps = TIME_RE
        .captures(&raw)
        .ok_or_else(|| AppError::InvalidTime(t.to_string()))?;

    let mut hour =
        parse_digits(&caps[1]).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;
    let minute =
        parse_digits(&caps[2]).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;

    if hour == 24 && minute == 0 {
        hour = 0;
    }

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Format an optional time, substituting `placeholder` when absent.
pub fn format_optional_time(t: Option<NaiveTime>, placeholder: &str) -> String {
    t.map(format_time)
        .unwrap_or_else(|| placeholder.to_string())
}
