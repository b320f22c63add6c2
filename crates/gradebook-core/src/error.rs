//! Error types and exit codes for gradebook
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data/store error (missing store, unknown class, duplicate record, etc.)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the gradebook CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error - missing store, unknown record (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<rusqlite::Error> for GradebookError {
    fn from(err: rusqlite::Error) -> Self {
        GradebookError::Other(err.to_string())
    }
}

/// Errors that can occur during gradebook operations
#[derive(Error, Debug)]
pub enum GradebookError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data/store errors (exit code 3)
    #[error("store not found (searched from {search_root:?})")]
    StoreNotFound { search_root: PathBuf },

    #[error("invalid store: {reason}")]
    InvalidStore { reason: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl GradebookError {
    /// Create an error for a failed database operation
    pub fn db_operation(operation: &str, error: impl std::fmt::Display) -> Self {
        GradebookError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GradebookError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a record that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        GradebookError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a record that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        GradebookError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            GradebookError::UnknownFormat(_)
            | GradebookError::UsageError(_)
            | GradebookError::InvalidValue { .. } => ExitCode::Usage,

            // Data/store errors
            GradebookError::StoreNotFound { .. }
            | GradebookError::InvalidStore { .. }
            | GradebookError::NotFound { .. }
            | GradebookError::AlreadyExists { .. } => ExitCode::Data,

            // Generic failures
            GradebookError::Io(_)
            | GradebookError::Json(_)
            | GradebookError::Toml(_)
            | GradebookError::FailedOperation { .. }
            | GradebookError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GradebookError::UnknownFormat(_) => "unknown_format",
            GradebookError::UsageError(_) => "usage_error",
            GradebookError::StoreNotFound { .. } => "store_not_found",
            GradebookError::InvalidStore { .. } => "invalid_store",
            GradebookError::NotFound { .. } => "not_found",
            GradebookError::AlreadyExists { .. } => "already_exists",
            GradebookError::InvalidValue { .. } => "invalid_value",
            GradebookError::Io(_) => "io_error",
            GradebookError::Json(_) => "json_error",
            GradebookError::Toml(_) => "toml_error",
            GradebookError::FailedOperation { .. } => "failed_operation",
            GradebookError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for gradebook operations
pub type Result<T> = std::result::Result<T, GradebookError>;
