//! Merge a clock-time string into a calendar date.
//!
//! DESIGN
//! ======
//! The time field yields `"HH:MM"` strings while the date picker yields a
//! calendar date; the wire wants one timestamp. Fragments that are absent,
//! unparseable, or out of range resolve to zero instead of erroring, so a
//! half-typed time never aborts the submit pipeline. The draft validator
//! rejects malformed times before anything user-visible depends on this
//! leniency.

#[cfg(test)]
#[path = "time_merge_test.rs"]
mod time_merge_test;

use time::{Date, PrimitiveDateTime, Time};

/// Combine `time` (`H:M[:S]`) with `date`'s year/month/day into a timestamp.
///
/// Missing or malformed fragments become `0`; this function never fails and
/// does not touch `date`'s calendar components.
#[must_use]
pub fn merge_time_and_date(time: &str, date: Date) -> PrimitiveDateTime {
    let mut parts = time.split(':');
    let hour = fragment(parts.next(), 23);
    let minute = fragment(parts.next(), 59);
    let second = fragment(parts.next(), 59);

    // Each fragment is already range-checked, so construction cannot fail.
    let time_of_day = Time::from_hms(hour, minute, second).unwrap_or(Time::MIDNIGHT);
    PrimitiveDateTime::new(date, time_of_day)
}

fn fragment(part: Option<&str>, max: u8) -> u8 {
    part.and_then(|p| p.trim().parse::<u8>().ok())
        .filter(|value| *value <= max)
        .unwrap_or(0)
}
