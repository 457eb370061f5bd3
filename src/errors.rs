//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid block: {0} (expected one of A-G)")]
    InvalidBlock(String),

    #[error("Invalid day: {0}")]
    InvalidDay(String),

    // ---------------------------
    // Session / schedule errors
    // ---------------------------
    #[error("No classes loaded: import a CSV file first")]
    NoPoolLoaded,

    #[error("No saved schedule found")]
    NoSavedSchedule,

    #[error("File not loaded: {0}")]
    UnknownFile(String),

    #[error("No class with NRC {0}")]
    UnknownNrc(String),

    #[error("No section {1} for NRC {0}")]
    UnknownSection(String, String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;
