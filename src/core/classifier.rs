//! Line classification heuristics for OCR'd shift tables.
//!
//! Every category is exposed as an independent predicate: the assembler
//! tries several interpretations of the same line depending on which field
//! it expects next, so a single exclusive label is not enough.
//! [`Classifier::classify`] still provides one label for display.

use crate::config::Config;
use crate::models::LineKind;
use crate::utils::digits::parse_digits;
use crate::utils::time::is_time_str;
use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_ROLE_KEYWORDS: &[&str] = &["ホール", "フロント"];
pub const DEFAULT_HOLIDAY_KEYWORDS: &[&str] = &["休み", "休業"];
pub const DEFAULT_HEADER_KEYWORDS: &[&str] = &["区別", "氏名", "担当", "開始", "終了"];
pub const DEFAULT_TITLE_KEYWORDS: &[&str] = &["シフト表"];

// Full-width punctuation, kana, full-width forms and CJK ideographs.
static WIDE_ONLY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\x{3000}-\x{303F}\x{3040}-\x{309F}\x{30A0}-\x{30FF}\x{FF00}-\x{FFEF}\x{4E00}-\x{9FAF}]+$")
        .expect("valid wide-character regex")
});
static DATE_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2})\s*月\s*(\d{1,2})\s*日?").expect("valid date header regex")
});
static ROW_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}$").expect("valid row number regex"));
static DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d").expect("valid digit regex"));

const DATE_WORDS: &[char] = &['月', '日'];

#[derive(Debug, Clone)]
pub struct Classifier {
    role_keywords: Vec<String>,
    holiday_keywords: Vec<String>,
    header_keywords: Vec<String>,
    title_keywords: Vec<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            role_keywords: owned(DEFAULT_ROLE_KEYWORDS),
            holiday_keywords: owned(DEFAULT_HOLIDAY_KEYWORDS),
            header_keywords: owned(DEFAULT_HEADER_KEYWORDS),
            title_keywords: owned(DEFAULT_TITLE_KEYWORDS),
        }
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn contains_any(line: &str, keywords: &[String]) -> bool {
    keywords
        .iter()
        .any(|kw| !kw.is_empty() && line.contains(kw.as_str()))
}

impl Classifier {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            role_keywords: cfg.role_keywords.clone(),
            holiday_keywords: cfg.holiday_keywords.clone(),
            header_keywords: cfg.header_keywords.clone(),
            title_keywords: cfg.title_keywords.clone(),
        }
    }

    /// Add a duty label to the role keyword set.
    pub fn with_role(mut self, keyword: impl Into<String>) -> Self {
        self.role_keywords.push(keyword.into());
        self
    }

    /// Person names in these tables are written in kana/kanji. ASCII names
    /// are deliberately not recognized. Role labels are katakana too, so a
    /// line carrying a role keyword is never a name.
    pub fn is_name(&self, line: &str) -> bool {
        line.chars().count() >= 2
            && !DIGIT_RE.is_match(line)
            && !line.contains(':')
            && !line.contains(DATE_WORDS)
            && WIDE_ONLY_RE.is_match(line)
            && !self.is_role(line)
            && !self.is_bare_holiday(line)
    }

    pub fn is_role(&self, line: &str) -> bool {
        contains_any(line, &self.role_keywords)
    }

    pub fn is_time(&self, line: &str) -> bool {
        is_time_str(line)
    }

    pub fn is_date_header(&self, line: &str) -> bool {
        DATE_HEADER_RE.is_match(line)
    }

    pub fn is_holiday(&self, line: &str) -> bool {
        contains_any(line, &self.holiday_keywords)
    }

    /// Column titles and the sheet title.
    pub fn is_header(&self, line: &str) -> bool {
        contains_any(line, &self.title_keywords) || contains_any(line, &self.header_keywords)
    }

    /// Spreadsheet row numbers OCR'd as standalone lines.
    pub fn is_row_number(&self, line: &str) -> bool {
        ROW_NUMBER_RE.is_match(line)
    }

    /// Lines dropped before field handling; they also bound a record.
    pub fn is_noise(&self, line: &str) -> bool {
        self.is_header(line) || self.is_row_number(line)
    }

    /// A line made of holiday keywords only ("休み") marks the previous name,
    /// it is not a name itself.
    fn is_bare_holiday(&self, line: &str) -> bool {
        let mut rest = line.to_string();
        for kw in self.holiday_keywords.iter().filter(|kw| !kw.is_empty()) {
            rest = rest.replace(kw.as_str(), "");
        }
        rest.len() < line.len() && rest.trim().is_empty()
    }

    /// Single label, first match wins: name, role, time, date header,
    /// holiday, header, row number. The assembler does not use it; it checks
    /// noise first and then asks the predicates it needs, so a column title
    /// like "氏名" is labelled a name here but still dropped during assembly.
    pub fn classify(&self, line: &str) -> LineKind {
        if self.is_name(line) {
            LineKind::Name
        } else if self.is_role(line) {
            LineKind::Role
        } else if self.is_time(line) {
            LineKind::Time
        } else if self.is_date_header(line) {
            LineKind::DateHeader
        } else if self.is_holiday(line) {
            LineKind::Holiday
        } else if self.is_header(line) {
            LineKind::Header
        } else if self.is_row_number(line) {
            LineKind::RowNumber
        } else {
            LineKind::Unclassified
        }
    }

    /// Month and day of the first date header found in `line`.
    pub fn date_header_parts(&self, line: &str) -> Option<(u32, u32)> {
        let caps = DATE_HEADER_RE.captures(line)?;
        let month = parse_digits(&caps[1])?;
        let day = parse_digits(&caps[2])?;
        Some((month, day))
    }
}
