//! Flat work/slack totals over a date range.

use crate::core::range::locate;
use crate::models::entry::LogEntry;
use crate::utils::time::elapsed_seconds;
use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, warn};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stats {
    pub work_time: Vec<u64>,
    pub slack_time: Vec<u64>,
    pub today_work_time: Option<u64>,
}

impl Stats {
    pub fn total_work(&self) -> u64 {
        self.work_time.iter().sum()
    }

    pub fn total_slack(&self) -> u64 {
        self.slack_time.iter().sum()
    }
}

/// One counted gap between two same-day entries.
///
/// Classification and grouping come from `closing`, the entry that ends
/// the interval.
#[derive(Debug, Clone, Copy)]
pub struct Interval<'a> {
    pub opening: &'a LogEntry,
    pub closing: &'a LogEntry,
    pub seconds: u64,
}

/// Walks consecutive pairs in `[begin, end]`, skipping pairs that cross a
/// day boundary.
pub fn intervals(entries: &[LogEntry], begin: usize, end: usize) -> Vec<Interval<'_>> {
    entries[begin..=end]
        .windows(2)
        .filter(|w| w[0].date == w[1].date)
        .map(|w| {
            if w[1].time < w[0].time {
                warn!(
                    date = %w[1].date_str(),
                    from = %w[0].time_str(),
                    to = %w[1].time_str(),
                    "entries out of order, interval wraps around the clock"
                );
            }
            Interval {
                opening: &w[0],
                closing: &w[1],
                seconds: elapsed_seconds(w[0].timestamp(), w[1].timestamp()),
            }
        })
        .collect()
}

/// Computes work and slack interval durations for `[date_from, date_to]`.
///
/// With `is_today`, also reports seconds elapsed from the first entry of
/// the range until `now`.
pub fn calculate_stats(
    entries: &[LogEntry],
    date_from: NaiveDate,
    date_to: NaiveDate,
    is_today: bool,
    now: NaiveDateTime,
) -> Stats {
    let Some((begin, end)) = locate(entries, date_from, date_to) else {
        debug!(%date_from, %date_to, "no entries in range");
        return Stats::default();
    };

    let mut stats = Stats::default();
    for iv in intervals(entries, begin, end) {
        if iv.closing.is_slack {
            stats.slack_time.push(iv.seconds);
        } else {
            stats.work_time.push(iv.seconds);
        }
    }

    if is_today {
        stats.today_work_time = Some(elapsed_seconds(entries[begin].timestamp(), now));
    }

    debug!(
        begin,
        end,
        work = stats.total_work(),
        slack = stats.total_slack(),
        "stats computed"
    );
    stats
}
