use serde::Serialize;

/// Label assigned to one trimmed OCR line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineKind {
    Name,
    Role,
    Time,
    DateHeader,
    Holiday,
    Header,
    RowNumber,
    Unclassified,
}

impl LineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineKind::Name => "name",
            LineKind::Role => "role",
            LineKind::Time => "time",
            LineKind::DateHeader => "date-header",
            LineKind::Holiday => "holiday",
            LineKind::Header => "header",
            LineKind::RowNumber => "row-number",
            LineKind::Unclassified => "unclassified",
        }
    }
}
