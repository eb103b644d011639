//! Formatting utilities used for CLI outputs.

/// Splits seconds into whole hours and minutes; leftover seconds are dropped.
pub fn hours_minutes(seconds: u64) -> (u64, u64) {
    (seconds / 3600, seconds % 3600 / 60)
}

/// `02h 05m`, used by the flat stats lines.
pub fn padded_hm(seconds: u64) -> String {
    let (h, m) = hours_minutes(seconds);
    format!("{:02}h {:02}m", h, m)
}

/// `2h 5m`, used by the report.
pub fn short_hm(seconds: u64) -> String {
    let (h, m) = hours_minutes(seconds);
    format!("{}h {}m", h, m)
}

/// Share of `part` in `total` as `55.88%`; zero total renders `0.00%`.
pub fn percentage(part: u64, total: u64) -> String {
    if total == 0 {
        return "0.00%".to_string();
    }
    format!("{:.2}%", part as f64 / total as f64 * 100.0)
}
