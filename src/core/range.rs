//! Locates the index bounds of a date range inside a sorted log.

use crate::models::entry::LogEntry;
use chrono::NaiveDate;

/// First index with `date >= target` when scanning forward, or last index
/// with `date <= target` when scanning in reverse.
pub fn find_boundary(entries: &[LogEntry], target: NaiveDate, reverse: bool) -> Option<usize> {
    if reverse {
        entries.iter().rposition(|e| e.date <= target)
    } else {
        entries.iter().position(|e| e.date >= target)
    }
}

pub fn date_begins(entries: &[LogEntry], date_from: NaiveDate) -> Option<usize> {
    find_boundary(entries, date_from, false)
}

pub fn date_ends(entries: &[LogEntry], date_to: NaiveDate) -> Option<usize> {
    find_boundary(entries, date_to, true)
}

/// Inclusive `(begin, end)` indices of the entries in `[date_from, date_to]`,
/// or `None` when no entry falls inside the range.
pub fn locate(entries: &[LogEntry], date_from: NaiveDate, date_to: NaiveDate) -> Option<(usize, usize)> {
    let begin = date_begins(entries, date_from)?;
    let end = date_ends(entries, date_to)?;
    (end >= begin).then_some((begin, end))
}
