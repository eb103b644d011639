use crate::AppContext;
use crate::cli::parser::{Commands, StatsArgs};
use crate::core::logic::Core;
use crate::core::query::{RangeQuery, parse_month_for};
use crate::errors::{AppError, AppResult};
use crate::ui::report::{render_report, render_stats, render_today};
use crate::utils::date::parse_date;
use chrono::{NaiveDate, NaiveDateTime};

/// Handle the `stats` subcommand
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Stats(args) = cmd {
        let query = to_query(args, ctx.now)?;
        let summary = Core::summarize(&ctx.store, query, ctx.now, args.report)?;

        match &summary.report {
            Some(report) => print!("{}", render_report(report, &summary.stats, args.color)),
            None => print!("{}", render_stats(&summary.stats)),
        }
        if let Some(today) = render_today(summary.stats.today_work_time) {
            print!("{}", today);
        }
    }
    Ok(())
}

/// Maps the mutually exclusive range flags onto a [`RangeQuery`].
pub fn to_query(args: &StatsArgs, now: NaiveDateTime) -> AppResult<RangeQuery> {
    let query = if args.yesterday {
        RangeQuery::Yesterday
    } else if let Some(d) = &args.day {
        RangeQuery::Day(date_arg(d)?)
    } else if let Some(d) = &args.week {
        RangeQuery::Week(date_arg(d)?)
    } else if args.last_week {
        RangeQuery::LastWeek
    } else if let Some(m) = &args.month {
        parse_month_for(m, now)?
    } else if args.last_month {
        RangeQuery::LastMonth
    } else if let Some(from) = &args.from {
        let to = args.to.as_deref().map(date_arg).transpose()?;
        RangeQuery::From(date_arg(from)?, to)
    } else {
        RangeQuery::Today
    };
    Ok(query)
}

fn date_arg(s: &str) -> AppResult<NaiveDate> {
    parse_date(s.trim()).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}
