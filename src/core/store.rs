//! Flat-file log store: one timestamped entry per line, a blank line
//! before the first entry of each day, `#` comment lines ignored.

use crate::core::grammar::parse_line;
use crate::errors::{AppError, AppResult};
use crate::models::entry::LogEntry;
use crate::utils::date::{DATETIME_FORMAT, parse_date};
use chrono::NaiveDateTime;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns every line that is neither blank nor a comment, in file order.
    pub fn read_lines(&self) -> AppResult<Vec<String>> {
        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => AppError::LogFileNotFound(self.path.clone()),
            _ => AppError::Io(e),
        })?;

        let lines: Vec<String> = content
            .lines()
            .filter(|l| is_entry_line(l))
            .map(str::to_string)
            .collect();

        debug!(path = %self.path.display(), lines = lines.len(), "read log file");
        Ok(lines)
    }

    /// Reads and parses the whole log.
    pub fn read_entries(&self) -> AppResult<Vec<LogEntry>> {
        self.read_lines()?.iter().map(|l| parse_line(l)).collect()
    }

    /// Appends `message` stamped with `now`.
    ///
    /// A blank separator line goes in front when the last entry in the
    /// file belongs to another day. Parent directories are created as
    /// needed. There is no locking: concurrent appenders may interleave.
    pub fn append(&self, message: &str, now: NaiveDateTime) -> AppResult<String> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let existing = match fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };

        let stamp = now.format(DATETIME_FORMAT).to_string();
        let line = if message.is_empty() {
            stamp
        } else {
            format!("{} {}", stamp, message)
        };

        let mut out = String::new();
        if !existing.is_empty() && !existing.ends_with('\n') {
            out.push('\n');
        }
        if is_another_day(&existing, now) {
            out.push('\n');
        }
        out.push_str(&line);
        out.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(out.as_bytes())?;

        debug!(path = %self.path.display(), %line, "appended entry");
        Ok(line)
    }
}

fn is_entry_line(line: &str) -> bool {
    !(line.trim().is_empty() || line.starts_with('#'))
}

/// True when the last entry line of `content` carries a date other than
/// `now`'s. An empty log has no previous day.
fn is_another_day(content: &str, now: NaiveDateTime) -> bool {
    let Some(last) = content.lines().rev().find(|l| is_entry_line(l)) else {
        return false;
    };
    let last_date = last.split_whitespace().next().and_then(parse_date);
    last_date != Some(now.date())
}
