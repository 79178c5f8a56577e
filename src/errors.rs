//! Unified application error type.
//! All modules (db, core, api, cli) return AppError to keep the error
//! handling consistent; the HTTP layer maps each variant to a status code.

use axum::http::StatusCode;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Identity
    // ---------------------------
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Employee ID not found in user metadata")]
    MissingEmployeeId,

    #[error("Unknown employee: {0}")]
    UnknownEmployee(String),

    // ---------------------------
    // Parsing / input errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid day of week: {0}")]
    InvalidDay(String),

    #[error("Invalid overtime type: {0}")]
    InvalidOvertimeType(String),

    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Unknown project: {0}")]
    UnknownProject(i64),

    // ---------------------------
    // Tracking session state
    // ---------------------------
    #[error("No active overtime session found")]
    NoActiveSession,

    #[error("An overtime session is already active. End the current session before starting a new one.")]
    SessionAlreadyActive,

    #[error("Overtime can only be started outside office hours")]
    InsideOfficeHours,

    #[error("Session is already paused")]
    AlreadyPaused,

    #[error("Session is not paused")]
    NotPaused,

    #[error("No active break found")]
    NoActiveBreak,

    #[error("Session is paused. Resume it before ending.")]
    EndWhilePaused,

    // ---------------------------
    // Ledger
    // ---------------------------
    #[error("Overtime entry not found: {0}")]
    EntryNotFound(i64),

    #[error("Overtime entry {0} has already been reviewed")]
    AlreadyReviewed(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// HTTP status used when the error leaves the service boundary.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,

            AppError::NoActiveSession | AppError::EntryNotFound(_) => StatusCode::NOT_FOUND,

            AppError::MissingEmployeeId
            | AppError::UnknownEmployee(_)
            | AppError::InvalidDate(_)
            | AppError::InvalidTime(_)
            | AppError::InvalidDay(_)
            | AppError::InvalidOvertimeType(_)
            | AppError::InvalidAction(_)
            | AppError::InvalidBody(_)
            | AppError::UnknownProject(_)
            | AppError::SessionAlreadyActive
            | AppError::InsideOfficeHours
            | AppError::AlreadyPaused
            | AppError::NotPaused
            | AppError::NoActiveBreak
            | AppError::EndWhilePaused
            | AppError::AlreadyReviewed(_) => StatusCode::BAD_REQUEST,

            AppError::Io(_)
            | AppError::Db(_)
            | AppError::Migration(_)
            | AppError::Config(_)
            | AppError::ConfigLoad
            | AppError::ConfigSave
            | AppError::Export(_)
            | AppError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// True when a rusqlite error is a UNIQUE constraint violation.
pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

pub type AppResult<T> = Result<T, AppError>;
