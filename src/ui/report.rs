//! Text rendering of stats and reports.

use crate::core::report::{Report, ReportTable};
use crate::core::stats::Stats;
use crate::utils::colors::{Colorizer, Role};
use crate::utils::formatting::{padded_hm, percentage, short_hm};

const REPORT_WIDTH: usize = 80;

/// `Work: HHh MMm` and `Slack: HHh MMm`, one per line.
pub fn render_stats(stats: &Stats) -> String {
    format!(
        "Work: {}\nSlack: {}\n",
        padded_hm(stats.total_work()),
        padded_hm(stats.total_slack())
    )
}

/// The trailing "Today working for" block, only when there is time to show.
pub fn render_today(today_work_time: Option<u64>) -> Option<String> {
    match today_work_time {
        Some(secs) if secs > 0 => Some(format!("\nToday working for: {}\n", padded_hm(secs))),
        _ => None,
    }
}

pub fn render_report(report: &Report, stats: &Stats, colorize: bool) -> String {
    let c = Colorizer::new(colorize);
    let work_total = stats.total_work();
    let slack_total = stats.total_slack();

    let mut out = String::new();
    out.push_str(&c.paint(Role::WorkHeader, &header("WORK", work_total)));
    out.push('\n');
    out.push_str(&render_table(&report.work, work_total, &c));
    out.push('\n');
    out.push_str(&c.paint(Role::SlackHeader, &header("SLACK", slack_total)));
    out.push('\n');
    out.push_str(&render_table(&report.slack, slack_total, &c));
    out.push('\n');
    out
}

fn header(title: &str, seconds: u64) -> String {
    let label = format!(" {} {} ", title, short_hm(seconds));
    format!("{:-^width$}", label, width = REPORT_WIDTH)
}

/// Project blocks separated by a blank line. Each block is the project
/// line followed by one indented line per message.
fn render_table(table: &ReportTable, total: u64, c: &Colorizer) -> String {
    table
        .projects()
        .map(|(project, totals)| {
            let mut block = format!(
                "{}: {} ({})\n",
                c.paint(Role::ProjectName, project),
                short_hm(totals.total()),
                percentage(totals.total(), total)
            );
            for (message, secs) in totals.messages() {
                block.push_str(&format!("    {:>7}", short_hm(secs)));
                if message.is_empty() {
                    block.push('\n');
                } else {
                    block.push_str(&format!(": {}\n", c.paint(Role::Message, message)));
                }
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n")
}
