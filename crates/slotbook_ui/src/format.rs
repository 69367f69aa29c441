// --- File: crates/slotbook_ui/src/format.rs ---
//! Date and time formatting. All values are rendered in UTC.

use chrono::{DateTime, NaiveDate, Utc};

/// 12-hour clock time, e.g. `9:05 AM`.
pub fn format_time(instant: &DateTime<Utc>) -> String {
    instant.format("%-I:%M %p").to_string()
}

/// Long date, e.g. `Tuesday, March 5, 2024`.
pub fn format_date(instant: &DateTime<Utc>) -> String {
    instant.format("%A, %B %-d, %Y").to_string()
}

/// `YYYY-MM-DD`, the format of the date picker and the API's `date` query.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
