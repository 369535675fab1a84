//! Canonical date strings shared by slot submissions and date state.
//!
//! DESIGN
//! ======
//! Every date that leaves the UI (request payloads, availability queries,
//! shared date state) goes through [`format_date`], so the whole client agrees
//! on a single `YYYY-MM-DD` representation.

#[cfg(test)]
#[path = "date_format_test.rs"]
mod date_format_test;

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const CANONICAL: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Format `date` as its canonical `YYYY-MM-DD` string.
pub fn format_date(date: Date) -> String {
    date.format(CANONICAL).unwrap_or_else(|_| {
        format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
    })
}

/// Parse the value emitted by a date input.
///
/// A cleared picker emits the empty string, which maps to `None` like any
/// other value that is not a canonical date.
pub fn parse_date_input(raw: &str) -> Option<Date> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Date::parse(trimmed, CANONICAL).ok()
}

/// Today's calendar date in UTC.
pub fn today() -> Date {
    time::OffsetDateTime::now_utc().date()
}
