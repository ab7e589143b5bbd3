//! Unified application error type.
//! Engine, stores, config and CLI all return AppError so callers can match
//! on the attendance failures (schedule, transition, justification, malformed
//! event) without unwrapping layers of wrappers.

use crate::models::record_status::RecordStatus;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Attendance engine
    // ---------------------------
    #[error("No schedule found for employee '{employee_id}' on {date} and no company default")]
    ScheduleNotFound { employee_id: String, date: String },

    #[error("Event {event_id} is {status} and cannot change state")]
    InvalidTransition {
        event_id: String,
        status: RecordStatus,
    },

    #[error("A justification is required for this change")]
    MissingJustification,

    #[error("Malformed event {event_id}: {reason}")]
    MalformedEvent { event_id: String, reason: String },

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Event id already in use: {0}")]
    DuplicateEvent(String),

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

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid event kind: {0}")]
    InvalidEventKind(String),

    #[error("Invalid capture method: {0}")]
    InvalidCaptureMethod(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
