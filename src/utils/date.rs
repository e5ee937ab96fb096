use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Shift tables carry no year; the processing year is assumed.
pub fn current_year() -> i32 {
    today().year()
}

/// Build a calendar date from the month/day printed in a table header.
pub fn month_day(year: i32, month: u32, day: u32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| AppError::InvalidDate(format!("{year}-{month:02}-{day:02}")))
}

pub fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Short `MM/DD` form used in reply summaries.
pub fn format_month_day(d: NaiveDate) -> String {
    d.format("%m/%d").to_string()
}
