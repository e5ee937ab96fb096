// src/export/model.rs

use crate::models::ShiftRecord;
use serde::Serialize;

/// Flat, string-only view of a record for CSV / JSON / table output.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ShiftExport {
    pub date: String,
    pub name: String,
    pub role: String,
    pub start_time: String,
    pub end_time: String,
    pub is_holiday: bool,
    pub memo: String,
}

impl From<&ShiftRecord> for ShiftExport {
    fn from(r: &ShiftRecord) -> Self {
        Self {
            date: r.date_str(),
            name: r.name.clone().unwrap_or_default(),
            role: r.role.clone().unwrap_or_default(),
            start_time: r.start_str().unwrap_or_default(),
            end_time: r.end_str().unwrap_or_default(),
            is_holiday: r.is_holiday,
            memo: r.memo.clone().unwrap_or_default(),
        }
    }
}

/// Header for CSV / table output
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "date",
        "name",
        "role",
        "start_time",
        "end_time",
        "is_holiday",
        "memo",
    ]
}

pub(crate) fn export_to_row(e: &ShiftExport) -> Vec<String> {
    vec![
        e.date.clone(),
        e.name.clone(),
        e.role.clone(),
        e.start_time.clone(),
        e.end_time.clone(),
        e.is_holiday.to_string(),
        e.memo.clone(),
    ]
}
