//! Turns the raw fields gathered by the assembler into a typed [`ShiftRecord`].

use crate::errors::AppResult;
use crate::models::{PartialRecord, ShiftRecord};
use crate::utils::time::parse_time;
use chrono::NaiveDate;

/// Build a record on `date`. Holiday records keep no times, so their time
/// fields are not validated at all.
pub fn build_record(partial: &PartialRecord, date: NaiveDate) -> AppResult<ShiftRecord> {
    let mut record = ShiftRecord::new(date);
    record.name = partial.name.clone();
    record.role = partial.role.clone();
    record.is_holiday = partial.is_holiday;

    if !partial.is_holiday {
        record.start_time = partial.start_time.as_deref().map(parse_time).transpose()?;
        record.end_time = partial.end_time.as_deref().map(parse_time).transpose()?;
    }

    Ok(record)
}
