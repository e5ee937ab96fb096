//! Entry point of the shift table parser: OCR text in, shift records out.
//!
//! Parsing is two pure passes over the trimmed, non-empty lines: the table
//! date is resolved first, then the assembler runs with that date fixed.
//! No state survives between calls.

use crate::core::assembler::Assembler;
use crate::core::classifier::Classifier;
use crate::core::date_resolver::resolve_table_date;
use crate::models::ShiftRecord;
use crate::utils::date::current_year;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct ShiftParser {
    classifier: Classifier,
    year: i32,
}

impl Default for ShiftParser {
    fn default() -> Self {
        Self::new(Classifier::default())
    }
}

impl ShiftParser {
    /// Parser assuming the current year for the table date.
    pub fn new(classifier: Classifier) -> Self {
        Self {
            classifier,
            year: current_year(),
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Parse one OCR text blob. Without a resolvable table date the result
    /// is empty; invalid rows are dropped individually.
    pub fn parse(&self, text: &str) -> Vec<ShiftRecord> {
        let lines = split_lines(text);

        let Some(date) = resolve_table_date(&self.classifier, &lines, self.year) else {
            return Vec::new();
        };

        let mut assembler = Assembler::new(&self.classifier, date);
        for line in &lines {
            assembler.feed(line);
        }
        let records = assembler.finish();

        if records.is_empty() && !lines.is_empty() {
            warn!("no shifts were parsed from the text");
        }
        records
    }
}

/// Trimmed, non-empty lines of `text`.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

/// Parse with the default keyword sets and the current year.
pub fn parse_shift_text(text: &str) -> Vec<ShiftRecord> {
    ShiftParser::default().parse(text)
}
