//! Unified application error type.
//! All modules (core, cli, config, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Log file not found: {}", .0.display())]
    LogFileNotFound(PathBuf),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Malformed log line: {0:?}")]
    InvalidLine(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("{0}")]
    InvalidMonth(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // External editor
    // ---------------------------
    #[error("Editor error: {0}")]
    Editor(String),
}

pub type AppResult<T> = Result<T, AppError>;
