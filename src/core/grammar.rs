//! Line grammar: `YYYY-MM-DD HH:MM [project: ]message[**]`.

use crate::errors::{AppError, AppResult};
use crate::models::entry::{DEFAULT_PROJECT, LogEntry, SLACK_MARKER};
use crate::utils::{date::parse_date, time::parse_time};

/// Parses one raw log line into a [`LogEntry`].
///
/// Fails on lines with fewer than two tokens or with an unparsable
/// date/time token.
pub fn parse_line(raw: &str) -> AppResult<LogEntry> {
    let line = raw.trim();
    let (date_tok, rest) = split_word(line);
    let (time_tok, rest) = split_word(rest);

    if date_tok.is_empty() || time_tok.is_empty() {
        return Err(AppError::InvalidLine(line.to_string()));
    }

    let date = parse_date(date_tok).ok_or_else(|| AppError::InvalidDate(date_tok.to_string()))?;
    let time = parse_time(time_tok).ok_or_else(|| AppError::InvalidTime(time_tok.to_string()))?;

    let (project, message) = parse_message(rest);
    let project = strip_newline(project).to_string();
    let message = strip_newline(message).to_string();
    let is_slack = is_slack(&project, &message);

    Ok(LogEntry {
        date,
        time,
        project,
        message,
        is_slack,
    })
}

/// Splits the free-text part of a line into `(project, message)`.
pub fn parse_message(rest: &str) -> (&str, &str) {
    if let Some((head, tail)) = rest.split_once(": ") {
        return (head, tail);
    }

    let (first, second) = split_word(rest);
    if first.is_empty() {
        (DEFAULT_PROJECT, "")
    } else if second.is_empty() {
        (rest, "")
    } else if first.to_lowercase().starts_with("eq-") {
        (first, second)
    } else {
        (DEFAULT_PROJECT, rest)
    }
}

pub fn is_slack(project: &str, message: &str) -> bool {
    project.ends_with(SLACK_MARKER) || message.ends_with(SLACK_MARKER)
}

/// Splits off the first whitespace-delimited word; the remainder has its
/// leading whitespace removed.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(idx) => (&s[..idx], s[idx..].trim_start()),
        None => (s, ""),
    }
}

fn strip_newline(s: &str) -> &str {
    s.strip_suffix('\n').unwrap_or(s)
}
