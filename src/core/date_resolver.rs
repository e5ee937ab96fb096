//! First pass over the OCR lines: find the single date the whole table refers to.

use crate::core::classifier::Classifier;
use crate::utils::date::month_day;
use chrono::NaiveDate;
use tracing::{info, warn};

/// Return the first month/day header that forms a valid date in `year`.
///
/// Headers with an impossible month/day are logged and skipped; later
/// headers are never consulted once one has resolved.
pub fn resolve_table_date<S: AsRef<str>>(
    classifier: &Classifier,
    lines: &[S],
    year: i32,
) -> Option<NaiveDate> {
    for line in lines {
        let line: &str = line.as_ref();
        let Some((month, day)) = classifier.date_header_parts(line) else {
            continue;
        };

        match month_day(year, month, day) {
            Ok(date) => {
                info!(%date, line, "table date found");
                return Some(date);
            }
            Err(e) => warn!(line, error = %e, "date-like header is not a calendar date"),
        }
    }

    warn!("could not determine the table date; no shifts will be parsed");
    None
}
