//! Date parsing/formatting for form inputs and the voyage table.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// `<input type="date">` value format.
const INPUT_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Timestamp format used by the voyage table columns.
const TABLE_TIMESTAMP: &[BorrowedFormatItem<'_>] =
    format_description!("[day].[month].[year] [hour]:[minute]");

/// Parse a `YYYY-MM-DD` string from a date input; `None` when incomplete.
#[must_use]
pub fn parse_input_date(value: &str) -> Option<Date> {
    Date::parse(value, INPUT_DATE).ok()
}

/// Render a date back into `<input type="date">` form.
#[must_use]
pub fn format_input_date(date: Date) -> String {
    date.format(INPUT_DATE).unwrap_or_default()
}

/// Render a wire timestamp for the voyage table (`dd.MM.yyyy HH:mm`).
#[must_use]
pub fn table_timestamp(timestamp: OffsetDateTime) -> String {
    timestamp.format(TABLE_TIMESTAMP).unwrap_or_default()
}
