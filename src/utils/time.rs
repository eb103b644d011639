//! Time utilities: parsing HH:MM and elapsed-second arithmetic.

use chrono::{NaiveDateTime, NaiveTime};

pub const SECONDS_PER_DAY: i64 = 86_400;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Seconds from `start` to `end`, folded into `0..86400`.
///
/// A negative difference wraps around the clock, the same way a
/// wall-clock reading taken "before" the start of a day counts up to the
/// next occurrence of that time.
pub fn elapsed_seconds(start: NaiveDateTime, end: NaiveDateTime) -> u64 {
    (end - start).num_seconds().rem_euclid(SECONDS_PER_DAY) as u64
}
