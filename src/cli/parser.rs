use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for timeflow
#[derive(Parser, Debug)]
#[command(
    name = "timeflow",
    version = env!("CARGO_PKG_VERSION"),
    about = "Small CLI time logger: log what you did, see where the time went",
    long_about = None
)]
pub struct Cli {
    /// Override the log file path
    #[arg(global = true, long = "file", value_name = "PATH")]
    pub file: Option<String>,

    /// Pin the current time (YYYY-MM-DD HH:MM), used by tests
    #[arg(global = true, long = "now", hide = true, value_name = "DATETIME")]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create timelog message
    Log {
        /// Message that will be logged
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        message: Vec<String>,
    },

    /// Edit timelog file
    Edit {
        #[arg(short = 'e', long = "editor", help = "Explicitly set editor")]
        editor: Option<String>,
    },

    /// Show how much time was spent working or slacking
    Stats(StatsArgs),

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file location")]
        path: bool,
    },
}

#[derive(Args, Debug, Default)]
#[command(group(
    clap::ArgGroup::new("range")
        .args(["today", "yesterday", "day", "week", "last_week", "month", "last_month", "from"])
        .multiple(false)
))]
pub struct StatsArgs {
    #[arg(long, help = "Show today's work times (default)")]
    pub today: bool,

    #[arg(short = 'y', long, help = "Show yesterday's work times")]
    pub yesterday: bool,

    #[arg(short = 'd', long, value_name = "YYYY-MM-DD", help = "Show specific day's work times")]
    pub day: Option<String>,

    #[arg(long, value_name = "YYYY-MM-DD", help = "Show specific week's work times")]
    pub week: Option<String>,

    #[arg(long = "last-week", help = "Show last week's work times")]
    pub last_week: bool,

    #[arg(long, value_name = "M|YYYY-M", help = "Show specific month's work times")]
    pub month: Option<String>,

    #[arg(long = "last-month", help = "Show last month's work times")]
    pub last_month: bool,

    #[arg(short = 'f', long = "from", value_name = "YYYY-MM-DD", help = "Show work times from specific date")]
    pub from: Option<String>,

    #[arg(
        short = 't',
        long = "to",
        value_name = "YYYY-MM-DD",
        requires = "from",
        help = "Show work times up to specific date"
    )]
    pub to: Option<String>,

    #[arg(short = 'r', long, help = "Show stats in report form")]
    pub report: bool,

    #[arg(short = 'c', long, help = "Colorize stats report")]
    pub color: bool,
}
