//! Date handling for research run stamps

use chrono::NaiveDate;

/// Format carried by research run `date` fields, e.g. "Feb 2026".
pub const RUN_DATE_FORMAT: &str = "%b %Y";

/// Parse a run date stamp to the first day of its month. Returns `None`
/// for anything that doesn't match [`RUN_DATE_FORMAT`].
pub fn parse_run_date(stamp: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("1 {stamp}"), "%d %b %Y").ok()
}
