//! Unified application error type.
//! Everything around the calculator (store, workflow, export, cli) returns
//! AppError so error handling stays consistent. The calculator itself never
//! fails: missing or malformed clock data degrades to zero/empty values.

use crate::models::status::RequestStatus;
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
    // Data file
    // ---------------------------
    #[error("Data file error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request not found: {0}")]
    RequestNotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    // ---------------------------
    // Workflow errors
    // ---------------------------
    #[error("Request {code} cannot move from {from} to {to}")]
    InvalidTransition {
        code: String,
        from: RequestStatus,
        to: RequestStatus,
    },

    #[error("Request {0} is not approved: clock events are not accepted")]
    NotApproved(String),

    #[error("Request {code} has no work day on {date}")]
    WorkDayNotFound { code: String, date: String },

    #[error("{event} already registered at {time} (use --force to overwrite)")]
    AlreadyClocked { event: String, time: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Export cancelled: existing file not overwritten")]
    ExportCancelled,
}

pub type AppResult<T> = Result<T, AppError>;
