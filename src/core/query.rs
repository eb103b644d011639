//! Range queries: which days a `stats` invocation covers.

use crate::errors::{AppError, AppResult};
use crate::utils::date::{month_bounds, previous_month, week_bounds};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

const MONTH_RANGE_MSG: &str = "Month must be in range from 1 to 12";
const MONTH_FORMAT_MSG: &str = "Argument in form of YYYY-MM is expected, e.g. 2015-9";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeQuery {
    Today,
    Yesterday,
    Day(NaiveDate),
    Week(NaiveDate),
    LastWeek,
    Month(i32, u32),
    LastMonth,
    From(NaiveDate, Option<NaiveDate>),
}

/// A resolved, inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub is_today: bool,
}

impl DateRange {
    fn days(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from,
            to,
            is_today: false,
        }
    }
}

impl RangeQuery {
    pub fn resolve(self, now: NaiveDateTime) -> AppResult<DateRange> {
        let today = now.date();
        let range = match self {
            RangeQuery::Today => DateRange {
                from: today,
                to: today,
                is_today: true,
            },
            RangeQuery::Yesterday => {
                let y = today - Duration::days(1);
                DateRange::days(y, y)
            }
            RangeQuery::Day(d) => DateRange::days(d, d),
            RangeQuery::Week(d) => {
                let (mon, sun) = week_bounds(d);
                DateRange::days(mon, sun)
            }
            RangeQuery::LastWeek => {
                let (mon, sun) = week_bounds(today - Duration::weeks(1));
                DateRange::days(mon, sun)
            }
            RangeQuery::Month(y, m) => {
                let (first, last) =
                    month_bounds(y, m).ok_or_else(|| AppError::InvalidMonth(MONTH_RANGE_MSG.into()))?;
                DateRange::days(first, last)
            }
            RangeQuery::LastMonth => {
                let (y, m) = previous_month(today);
                let (first, last) =
                    month_bounds(y, m).ok_or_else(|| AppError::InvalidMonth(MONTH_RANGE_MSG.into()))?;
                DateRange::days(first, last)
            }
            RangeQuery::From(from, to) => DateRange::days(from, to.unwrap_or(today)),
        };
        Ok(range)
    }
}

/// Parses a `--month` argument: `M` (current year), `YYYY-M` or `YYYY-MM`.
pub fn parse_month_arg(arg: &str, current_year: i32) -> AppResult<(i32, u32)> {
    let arg = arg.trim();

    let (year, month) = if let Ok(month) = arg.parse::<i64>() {
        (current_year, month)
    } else {
        let parts: Vec<&str> = arg.split('-').collect();
        let [year, month] = parts.as_slice() else {
            return Err(AppError::InvalidMonth(MONTH_FORMAT_MSG.into()));
        };
        match (year.parse::<i32>(), month.parse::<i64>()) {
            (Ok(y), Ok(m)) => (y, m),
            _ => return Err(AppError::InvalidMonth(MONTH_FORMAT_MSG.into())),
        }
    };

    if !(1..=12).contains(&month) {
        return Err(AppError::InvalidMonth(MONTH_RANGE_MSG.into()));
    }
    Ok((year, month as u32))
}

/// Convenience for callers holding a `now` timestamp.
pub fn parse_month_for(arg: &str, now: NaiveDateTime) -> AppResult<RangeQuery> {
    let (y, m) = parse_month_arg(arg, now.year())?;
    Ok(RangeQuery::Month(y, m))
}
