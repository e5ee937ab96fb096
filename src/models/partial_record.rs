/// Fields accumulated by the assembler for the row currently being read.
/// Times are kept as raw (whitespace-free) text; the validator types them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialRecord {
    pub name: Option<String>,
    pub role: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub is_holiday: bool,
}

impl PartialRecord {
    pub fn with_name(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn has_start(&self) -> bool {
        self.start_time.is_some()
    }

    /// Whether the record is worth emitting when the input runs out or a
    /// boundary forces it out.
    pub fn is_flushable(&self) -> bool {
        self.has_start() || self.is_holiday
    }
}
