use predicates::str::contains;

mod common;
use common::Sandbox;

const DAY_ONE: &str = "Work: 02h 50m\nSlack: 01h 10m";
const BOTH_DAYS: &str = "Work: 06h 00m\nSlack: 02h 40m";

#[test]
fn test_stats_today_default() {
    let sb = Sandbox::fixture();
    assert_eq!(
        sb.stats("2015-01-01 12:15", &[]),
        "Work: 02h 50m\nSlack: 01h 10m\n\nToday working for: 04h 15m"
    );
    assert_eq!(
        sb.stats("2015-01-01 12:15", &["--today"]),
        "Work: 02h 50m\nSlack: 01h 10m\n\nToday working for: 04h 15m"
    );
}

#[test]
fn test_stats_yesterday() {
    let sb = Sandbox::fixture();
    assert_eq!(sb.stats("2015-01-02 00:00", &["--yesterday"]), DAY_ONE);
    assert_eq!(sb.stats("2015-01-02 00:00", &["-y"]), DAY_ONE);
}

#[test]
fn test_stats_day() {
    let sb = Sandbox::fixture();
    assert_eq!(sb.stats("2015-01-01 00:00", &["--day", "2015-01-01"]), DAY_ONE);
    assert_eq!(sb.stats("2015-01-01 00:00", &["-d", "2015-01-01"]), DAY_ONE);
}

#[test]
fn test_stats_two_line_log() {
    let sb = Sandbox::with_log(
        "2015-01-01 09:00 start project\n2015-01-01 10:15 second message\n",
    );
    assert_eq!(
        sb.stats("2015-03-01 00:00", &["--day", "2015-01-01"]),
        "Work: 01h 15m\nSlack: 00h 00m"
    );
}

#[test]
fn test_stats_week() {
    let sb = Sandbox::fixture();
    assert_eq!(sb.stats("2015-02-05 00:00", &["--week", "2015-01-02"]), BOTH_DAYS);
}

#[test]
fn test_stats_last_week() {
    let sb = Sandbox::fixture();
    assert_eq!(sb.stats("2015-01-05 00:00", &["--last-week"]), BOTH_DAYS);
}

#[test]
fn test_stats_month_forms_agree() {
    let sb = Sandbox::fixture();
    for arg in ["1", "2015-1", "2015-01"] {
        assert_eq!(sb.stats("2015-01-05 00:00", &["--month", arg]), BOTH_DAYS);
    }
}

#[test]
fn test_stats_last_month() {
    let sb = Sandbox::fixture();
    assert_eq!(sb.stats("2015-02-05 00:00", &["--last-month"]), BOTH_DAYS);
}

#[test]
fn test_stats_from() {
    let sb = Sandbox::fixture();
    let expected = "Work: 03h 10m\nSlack: 01h 30m";
    assert_eq!(sb.stats("2015-01-05 00:00", &["--from", "2015-01-02"]), expected);
    assert_eq!(sb.stats("2015-01-05 00:00", &["-f", "2015-01-02"]), expected);
}

#[test]
fn test_stats_from_to() {
    let sb = Sandbox::fixture();
    assert_eq!(
        sb.stats("2015-01-05 00:00", &["--from", "2015-01-01", "--to", "2015-01-03"]),
        BOTH_DAYS
    );
    assert_eq!(
        sb.stats("2015-01-05 00:00", &["-f", "2015-01-01", "-t", "2015-01-02"]),
        BOTH_DAYS
    );
}

#[test]
fn test_stats_outside_history_is_zero() {
    let sb = Sandbox::fixture();
    let zero = "Work: 00h 00m\nSlack: 00h 00m";
    assert_eq!(sb.stats("2016-01-05 00:00", &["--month", "2015-06"]), zero);
    assert_eq!(sb.stats("2016-01-05 00:00", &["--day", "2014-12-31"]), zero);
    assert_eq!(sb.stats("2016-01-05 10:00", &[]), zero);
}

#[test]
fn test_stats_report() {
    let sb = Sandbox::fixture();
    let expected = "\
--------------------------------- WORK 2h 50m ----------------------------------
Django: 1h 35m (55.88%)
     1h 35m: read documentation

Timeflow: 1h 15m (44.12%)
     1h 15m: start project

--------------------------------- SLACK 1h 10m ---------------------------------
Other: 0h 45m (64.29%)
     0h 45m: Breakfast

Slack: 0h 25m (35.71%)
     0h 25m: watch YouTube


Today working for: 16h 00m";
    assert_eq!(sb.stats("2015-01-01 00:00", &["--report"]), expected);
}

#[test]
fn test_stats_report_never_shows_marker() {
    let sb = Sandbox::fixture();
    let out = sb.stats("2015-01-05 00:00", &["-r", "--week", "2015-01-01"]);
    assert!(!out.contains("**"));
    assert!(out.contains("Other: 2h 15m ("));
    assert!(out.contains("\n      1h 0m: Lunch\n"));
    assert!(out.contains("\n     0h 30m: Coffee\n"));
}

#[test]
fn test_stats_colorized_report() {
    let sb = Sandbox::fixture();
    sb.tf("2015-01-05 00:00")
        .args(["stats", "-r", "-c", "-d", "2015-01-01"])
        .assert()
        .success()
        .stdout(contains("\x1b["))
        .stdout(contains("Django"));
}

#[test]
fn test_stats_invalid_month() {
    let sb = Sandbox::fixture();
    sb.tf("2015-01-05 00:00")
        .args(["stats", "--month", "13"])
        .assert()
        .failure()
        .stderr(contains("Month must be in range from 1 to 12"));

    sb.tf("2015-01-05 00:00")
        .args(["stats", "--month", "jan"])
        .assert()
        .failure()
        .stderr(contains("Argument in form of YYYY-MM is expected"));
}

#[test]
fn test_stats_conflicting_ranges_rejected() {
    let sb = Sandbox::fixture();
    sb.tf("2015-01-05 00:00")
        .args(["stats", "--yesterday", "--day", "2015-01-01"])
        .assert()
        .failure();

    sb.tf("2015-01-05 00:00")
        .args(["stats", "--to", "2015-01-01"])
        .assert()
        .failure();
}

#[test]
fn test_stats_missing_log_file_fails() {
    let sb = Sandbox::empty();
    sb.tf("2015-01-05 00:00")
        .arg("stats")
        .assert()
        .failure()
        .stderr(contains("Log file not found"));
}

#[test]
fn test_stats_malformed_line_fails() {
    let sb = Sandbox::with_log("2015-01-01 09:00 ok\ngarbage\n");
    sb.tf("2015-01-05 00:00")
        .args(["stats", "-d", "2015-01-01"])
        .assert()
        .failure();
}
