//! Unified application error type.
//! Core (geometry, aggregator), view builder, config and CLI all return
//! AppError so the binary has a single place to report failures.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Calendar errors
    // ---------------------------
    #[error("Invalid month: {0} (expected 1..=12)")]
    InvalidMonth(u32),

    #[error("Year {0} is outside the supported date range")]
    YearOutOfRange(i32),

    #[error("Invalid date format: '{0}' (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),

    #[error("Month not found: {0}")]
    MonthNotFound(u32),

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    // ---------------------------
    // Config / runtime errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Logger initialization failed: {0}")]
    Logger(String),
}

pub type AppResult<T> = Result<T, AppError>;
