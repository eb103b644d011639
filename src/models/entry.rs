use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Project assigned to free-text lines that carry no explicit project.
pub const DEFAULT_PROJECT: &str = "Other";

/// Suffix marking an entry as slack (non-work).
pub const SLACK_MARKER: &str = "**";

/// One parsed line of the time log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub date: NaiveDate,  // ⇔ "YYYY-MM-DD"
    pub time: NaiveTime,  // ⇔ "HH:MM"
    pub project: String,  // raw, marker still attached
    pub message: String,  // raw, marker still attached, may be empty
    pub is_slack: bool,
}

impl LogEntry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Project name as used for grouping: trimmed, slack marker removed.
    pub fn project_key(&self) -> String {
        strip_marker(&self.project)
    }

    /// Message as used for grouping: trimmed, slack marker removed.
    pub fn message_key(&self) -> String {
        strip_marker(&self.message)
    }
}

/// Strips surrounding whitespace and any trailing `*` run.
pub fn strip_marker(s: &str) -> String {
    s.trim().trim_end_matches('*').trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_marker_removes_stars_and_whitespace() {
        assert_eq!(strip_marker("  Breakfast **"), "Breakfast");
        assert_eq!(strip_marker("watch YouTube**"), "watch YouTube");
        assert_eq!(strip_marker("plain"), "plain");
        assert_eq!(strip_marker(""), "");
    }

    #[test]
    fn keys_strip_marker_but_raw_fields_keep_it() {
        let e = LogEntry {
            date: NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
            time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            project: "Slack".into(),
            message: "watch YouTube**".into(),
            is_slack: true,
        };
        assert_eq!(e.message, "watch YouTube**");
        assert_eq!(e.message_key(), "watch YouTube");
        assert_eq!(e.date_str(), "2015-01-01");
        assert_eq!(e.time_str(), "09:30");
    }
}
