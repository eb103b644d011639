#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Two logged days: 2015-01-01 (work 2h50m, slack 1h10m) and
/// 2015-01-02 (work 3h10m, slack 1h30m).
pub const FIXTURE: &str = "\
# timeflow test log
2015-01-01 08:00 Arrived
2015-01-01 08:45 Breakfast **
2015-01-01 10:00 Timeflow: start project
2015-01-01 10:25 Slack: watch YouTube**
2015-01-01 11:00 Django: read documentation
2015-01-01 12:00 Django: read documentation

2015-01-02 09:00 Arrived
2015-01-02 09:30 Coffee **
2015-01-02 11:00 Timeflow: write tests
2015-01-02 12:00 Lunch **
2015-01-02 13:40 Timeflow: write docs
";

/// Isolated sandbox: its own HOME and a log file path inside it.
pub struct Sandbox {
    pub dir: TempDir,
    pub log: PathBuf,
}

impl Sandbox {
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let log = dir.path().join("timelog.txt");
        Self { dir, log }
    }

    pub fn with_log(content: &str) -> Self {
        let sb = Self::empty();
        fs::write(&sb.log, content).expect("write fixture");
        sb
    }

    pub fn fixture() -> Self {
        Self::with_log(FIXTURE)
    }

    pub fn home(&self) -> &Path {
        self.dir.path()
    }

    pub fn read_log(&self) -> String {
        fs::read_to_string(&self.log).expect("read log")
    }

    /// Binary invocation pinned to `now`, using this sandbox's log file.
    pub fn tf(&self, now: &str) -> Command {
        let mut cmd = cargo_bin_cmd!("timeflow");
        cmd.env("HOME", self.home())
            .env_remove("TIMEFLOW_LOG_FILE")
            .env_remove("TIMEFLOW_LOG")
            .env_remove("EDITOR")
            .args(["--file", self.log.to_str().expect("utf-8 path"), "--now", now]);
        cmd
    }

    /// Runs `stats` with `args` and returns trimmed stdout.
    pub fn stats(&self, now: &str, args: &[&str]) -> String {
        let out = self
            .tf(now)
            .arg("stats")
            .args(args)
            .output()
            .expect("run timeflow");
        assert!(out.status.success(), "stats {:?} failed: {:?}", args, out);
        String::from_utf8(out.stdout).expect("utf-8").trim().to_string()
    }
}
