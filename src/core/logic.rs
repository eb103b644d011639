use crate::core::query::{DateRange, RangeQuery};
use crate::core::report::{Report, calculate_report};
use crate::core::stats::{Stats, calculate_stats};
use crate::core::store::LogStore;
use crate::errors::AppResult;
use crate::models::entry::LogEntry;
use chrono::NaiveDateTime;

/// Everything the `stats` command prints for one range.
#[derive(Debug, Clone)]
pub struct Summary {
    pub range: DateRange,
    pub stats: Stats,
    pub report: Option<Report>,
}

pub struct Core;

impl Core {
    /// Reads the log once and runs the requested engines over it.
    pub fn summarize(
        store: &LogStore,
        query: RangeQuery,
        now: NaiveDateTime,
        with_report: bool,
    ) -> AppResult<Summary> {
        let range = query.resolve(now)?;
        let entries = store.read_entries()?;
        Ok(Self::summarize_entries(&entries, range, now, with_report))
    }

    pub fn summarize_entries(
        entries: &[LogEntry],
        range: DateRange,
        now: NaiveDateTime,
        with_report: bool,
    ) -> Summary {
        let stats = calculate_stats(entries, range.from, range.to, range.is_today, now);
        let report = with_report.then(|| calculate_report(entries, range.from, range.to));
        Summary {
            range,
            stats,
            report,
        }
    }
}
