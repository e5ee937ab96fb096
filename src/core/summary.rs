//! Caller-side views of parsed records: the chat reply listing every row and
//! the title/description a calendar entry would carry.

use crate::models::ShiftRecord;
use crate::utils::date::format_month_day;
use crate::utils::time::format_optional_time;

pub const SUMMARY_HEADER: &str = "シフト情報を解析しました:";
pub const MAX_SUMMARY_CHARS: usize = 4800;
const TRUNCATED_SUFFIX: &str = "\n...(長すぎるため省略)";
const UNKNOWN_TIME: &str = "未定";

/// One reply line for `record`.
pub fn summary_line(record: &ShiftRecord) -> String {
    let date = format_month_day(record.date);
    let name = record.name.as_deref().unwrap_or("");

    if record.is_holiday {
        return format!("- {date}: {name} 休み").trim().to_string();
    }

    let start = format_optional_time(record.start_time, UNKNOWN_TIME);
    let end = format_optional_time(record.end_time, UNKNOWN_TIME);
    let name = record
        .name
        .as_deref()
        .map(|n| format!("{n} "))
        .unwrap_or_default();
    let role = record
        .role
        .as_deref()
        .map(|r| format!("({r})"))
        .unwrap_or_default();
    let memo = record
        .memo
        .as_deref()
        .map(|m| format!(" [{m}]"))
        .unwrap_or_default();

    format!("- {date}: {name}{start}～{end} {role}{memo}")
        .trim()
        .to_string()
}

/// Full reply text, or `None` when there is nothing to report.
pub fn summarize(records: &[ShiftRecord]) -> Option<String> {
    if records.is_empty() {
        return None;
    }

    let lines: Vec<String> = std::iter::once(SUMMARY_HEADER.to_string())
        .chain(records.iter().map(summary_line))
        .collect();
    let text = lines.join("\n");

    if text.chars().count() > MAX_SUMMARY_CHARS {
        let head: String = text.chars().take(MAX_SUMMARY_CHARS).collect();
        Some(format!("{head}{TRUNCATED_SUFFIX}"))
    } else {
        Some(text)
    }
}

/// Calendar entry title: `アルバイト: <name> (<role>)`.
pub fn event_title(record: &ShiftRecord) -> String {
    let mut title = format!("アルバイト: {}", record.name.as_deref().unwrap_or("シフト"));
    if let Some(role) = &record.role {
        title.push_str(&format!(" ({role})"));
    }
    title
}

/// Calendar entry description, one labelled line per known field.
pub fn event_description(record: &ShiftRecord) -> String {
    [
        ("氏名", record.name.as_deref()),
        ("担当", record.role.as_deref()),
        ("メモ", record.memo.as_deref()),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| format!("{label}: {v}")))
    .collect::<Vec<_>>()
    .join("\n")
}
