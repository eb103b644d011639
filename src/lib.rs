//! timeflow library root.
//! Exposes the CLI parser, the high-level run() function, and the core
//! parsing and time-accounting modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use chrono::NaiveDateTime;
use clap::Parser;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::store::LogStore;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{now, parse_datetime};

/// Everything a command handler needs for one invocation.
pub struct AppContext {
    pub config: Config,
    pub store: LogStore,
    pub now: NaiveDateTime,
}

impl AppContext {
    pub fn new(cli: &Cli, config: Config) -> AppResult<Self> {
        let now = match &cli.now {
            Some(s) => parse_datetime(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => now(),
        };
        let store = LogStore::new(config.resolve_log_file(cli.file.as_deref()));
        Ok(Self { config, store, now })
    }
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &AppContext) -> AppResult<()> {
    match &cli.command {
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, ctx),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, ctx),
        Commands::Stats(_) => cli::commands::stats::handle(&cli.command, ctx),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    logging::init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let ctx = AppContext::new(&cli, config)?;

    tracing::debug!(log_file = %ctx.store.path().display(), now = %ctx.now, "starting");
    dispatch(&cli, &ctx)
}
