//! Second pass: rebuild table rows from the flattened OCR line sequence.
//!
//! OCR reads the table column by column and row by row with gaps, stray
//! header cells and row numbers in between. The assembler keeps a cursor on
//! the field it expects next (name → role → start → end) and falls back
//! forgivingly when something else shows up. A line a state cannot use may
//! be handed to another state's handler in the same step instead of
//! duplicating that handler's rules.

use crate::core::classifier::Classifier;
use crate::core::validator::build_record;
use crate::models::{PartialRecord, ShiftRecord};
use crate::utils::time::compact;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// Field the assembler expects on the next line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    Name,
    Role,
    Start,
    End,
}

impl Expect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Expect::Name => "name",
            Expect::Role => "role",
            Expect::Start => "start_time",
            Expect::End => "end_time",
        }
    }
}

enum Step {
    Consumed,
    Retry(Expect),
}

pub struct Assembler<'a> {
    classifier: &'a Classifier,
    date: NaiveDate,
    expect: Expect,
    current: PartialRecord,
    records: Vec<ShiftRecord>,
}

impl<'a> Assembler<'a> {
    pub fn new(classifier: &'a Classifier, date: NaiveDate) -> Self {
        Self {
            classifier,
            date,
            expect: Expect::Name,
            current: PartialRecord::default(),
            records: Vec::new(),
        }
    }

    pub fn expecting(&self) -> Expect {
        self.expect
    }

    pub fn current(&self) -> &PartialRecord {
        &self.current
    }

    pub fn records(&self) -> &[ShiftRecord] {
        &self.records
    }

    /// Feed one trimmed, non-empty line.
    pub fn feed(&mut self, line: &str) {
        debug!(line, expecting = self.expect.as_str(), "processing line");

        if self.classifier.is_noise(line) {
            if self.current.has_start() {
                self.flush("header or row number");
            }
            debug!(line, "skipping header/row-number line");
            return;
        }

        // Retries only go Role → Start and End → Name, neither of which retries again.
        let mut state = self.expect;
        while let Step::Retry(next) = self.step(state, line) {
            state = next;
        }

        // Holiday rows never carry times: a named holiday is complete as soon as it is marked.
        if self.current.is_holiday && self.current.name.is_some() {
            self.flush("holiday");
        }
    }

    /// End of input: keep the row in progress only if it has a start time or is a holiday.
    pub fn finish(mut self) -> Vec<ShiftRecord> {
        if self.current.is_flushable() {
            self.flush("end of input");
        } else if !self.current.is_empty() {
            debug!(record = ?self.current, "discarding leftover record without start time");
        }
        self.records
    }

    fn step(&mut self, state: Expect, line: &str) -> Step {
        match state {
            Expect::Name => self.on_name(line),
            Expect::Role => self.on_role(line),
            Expect::Start => self.on_start(line),
            Expect::End => self.on_end(line),
        }
    }

    fn on_name(&mut self, line: &str) -> Step {
        let c = self.classifier;
        if c.is_name(line) {
            self.begin_person(line);
        } else if c.is_role(line) {
            self.current.role = Some(line.to_string());
            self.expect = Expect::Start;
        } else if c.is_time(line) {
            self.current.start_time = Some(compact(line));
            self.expect = Expect::End;
        } else {
            debug!(line, "expecting name, line ignored");
        }
        Step::Consumed
    }

    fn on_role(&mut self, line: &str) -> Step {
        let c = self.classifier;
        if c.is_role(line) {
            self.current.role = Some(line.to_string());
            self.expect = Expect::Start;
        } else if c.is_time(line) {
            self.current.start_time = Some(compact(line));
            self.expect = Expect::End;
        } else if c.is_name(line) {
            // TODO: emit name/role-only rows as incomplete records once callers
            // can tell them apart.
            if let Some(prev) = &self.current.name {
                warn!(
                    previous = %prev,
                    next = line,
                    "new name before any time, dropping previous person"
                );
            }
            self.begin_person(line);
        } else {
            debug!(line, "expecting role, trying the line as a start time");
            self.expect = Expect::Start;
            return Step::Retry(Expect::Start);
        }
        Step::Consumed
    }

    fn on_start(&mut self, line: &str) -> Step {
        let c = self.classifier;
        if c.is_time(line) {
            self.current.start_time = Some(compact(line));
            self.expect = Expect::End;
        } else if c.is_name(line) {
            if self.current.is_flushable() {
                self.flush("new name found");
            } else if let Some(prev) = &self.current.name {
                warn!(previous = %prev, "name had no start time, dropping it");
            }
            self.begin_person(line);
        } else if self.current.name.is_some()
            && !self.current.has_start()
            && !self.current.is_holiday
            && c.is_holiday(line)
        {
            self.current.is_holiday = true;
            self.flush("holiday marker");
        } else {
            debug!(line, "expecting start time, line ignored");
        }
        Step::Consumed
    }

    fn on_end(&mut self, line: &str) -> Step {
        let c = self.classifier;
        if c.is_time(line) {
            self.current.end_time = Some(compact(line));
            self.flush("end time found");
            Step::Consumed
        } else if c.is_name(line) || c.is_role(line) {
            warn!(
                record = ?self.current,
                next = line,
                "end time missing, saving record without it"
            );
            self.flush("next record started");
            Step::Retry(Expect::Name)
        } else {
            debug!(line, "expecting end time, finalizing record");
            if self.current.has_start() {
                self.flush("unexpected line");
            } else {
                self.reset();
            }
            Step::Consumed
        }
    }

    fn begin_person(&mut self, name: &str) {
        self.current = PartialRecord::with_name(name);
        self.current.is_holiday = self.classifier.is_holiday(name);
        self.expect = Expect::Role;
    }

    fn reset(&mut self) {
        self.current = PartialRecord::default();
        self.expect = Expect::Name;
    }

    fn flush(&mut self, reason: &str) {
        let partial = std::mem::take(&mut self.current);
        self.reset();

        match build_record(&partial, self.date) {
            Ok(record) => {
                info!(reason, record = ?record, "parsed shift record");
                self.records.push(record);
            }
            Err(e) => warn!(reason, record = ?partial, error = %e, "dropping invalid record"),
        }
    }
}
