use crate::utils::date::format_date;
use crate::utils::time::format_time;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One row recovered from a shift table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    pub date: NaiveDate, // table date, shared by every record of one input
    #[serde(with = "hhmm")]
    pub start_time: Option<NaiveTime>,
    #[serde(with = "hhmm")]
    pub end_time: Option<NaiveTime>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub memo: Option<String>,
    pub is_holiday: bool, // times are meaningless when set
}

impl ShiftRecord {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            start_time: None,
            end_time: None,
            name: None,
            role: None,
            memo: None,
            is_holiday: false,
        }
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    pub fn date_str(&self) -> String {
        format_date(self.date)
    }

    pub fn start_str(&self) -> Option<String> {
        self.start_time.map(format_time)
    }

    pub fn end_str(&self) -> Option<String> {
        self.end_time.map(format_time)
    }

    /// A calendar entry can only be created for a working day with both times known.
    pub fn is_schedulable(&self) -> bool {
        !self.is_holiday && self.start_time.is_some() && self.end_time.is_some()
    }

    /// Start/end of the shift on the table date. An end at or before the
    /// start belongs to the following day (e.g. 16:00 → 0:00); `None` when
    /// that day is past the last representable date.
    pub fn window(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        if !self.is_schedulable() {
            return None;
        }
        let start = self.date.and_time(self.start_time?);
        let mut end = self.date.and_time(self.end_time?);
        if end <= start {
            end = end.checked_add_signed(TimeDelta::days(1))?;
        }
        Some((start, end))
    }
}

/// `Option<NaiveTime>` as `"HH:MM"` / `null`.
mod hhmm {
    use super::*;

    pub fn serialize<S: Serializer>(t: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
        match t {
            Some(t) => s.serialize_some(&format_time(*t)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        raw.map(|r| crate::utils::time::parse_time(&r).map_err(serde::de::Error::custom))
            .transpose()
    }
}
