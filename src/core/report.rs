//! Per-project, per-message breakdown of work and slack time.

use crate::core::range::locate;
use crate::core::stats::intervals;
use crate::models::entry::LogEntry;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

/// Message totals of one project, kept in first-seen order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProjectTotals {
    messages: Vec<(String, u64)>,
}

impl ProjectTotals {
    /// Adds `seconds` to `message`, inserting it at the end if unseen.
    pub fn add(&mut self, message: &str, seconds: u64) {
        match self.messages.iter_mut().find(|(m, _)| m == message) {
            Some((_, total)) => *total += seconds,
            None => self.messages.push((message.to_string(), seconds)),
        }
    }

    pub fn get(&self, message: &str) -> Option<u64> {
        self.messages
            .iter()
            .find(|(m, _)| m == message)
            .map(|(_, s)| *s)
    }

    pub fn messages(&self) -> impl Iterator<Item = (&str, u64)> {
        self.messages.iter().map(|(m, s)| (m.as_str(), *s))
    }

    pub fn total(&self) -> u64 {
        self.messages.iter().map(|(_, s)| s).sum()
    }
}

/// Project → message → seconds. Projects iterate in ascending order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportTable {
    projects: BTreeMap<String, ProjectTotals>,
}

impl ReportTable {
    pub fn add(&mut self, project: &str, message: &str, seconds: u64) {
        self.projects
            .entry(project.to_string())
            .or_default()
            .add(message, seconds);
    }

    pub fn project(&self, name: &str) -> Option<&ProjectTotals> {
        self.projects.get(name)
    }

    pub fn projects(&self) -> impl Iterator<Item = (&str, &ProjectTotals)> {
        self.projects.iter().map(|(p, t)| (p.as_str(), t))
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.projects.values().map(ProjectTotals::total).sum()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    pub work: ReportTable,
    pub slack: ReportTable,
}

/// Groups every same-day interval in `[date_from, date_to]` under the
/// closing entry's project and message.
pub fn calculate_report(entries: &[LogEntry], date_from: NaiveDate, date_to: NaiveDate) -> Report {
    let mut report = Report::default();
    let Some((begin, end)) = locate(entries, date_from, date_to) else {
        debug!(%date_from, %date_to, "no entries in range");
        return report;
    };

    for iv in intervals(entries, begin, end) {
        let project = iv.closing.project_key();
        let message = iv.closing.message_key();
        let table = if iv.closing.is_slack {
            &mut report.slack
        } else {
            &mut report.work
        };
        table.add(&project, &message, iv.seconds);
    }

    report
}
