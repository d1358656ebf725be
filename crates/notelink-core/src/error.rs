//! Error types and exit codes for notelink
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid config values)
//! - 3: Data error (missing vault or document)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing vault or document (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during notelink operations
#[derive(Error, Debug)]
pub enum NotelinkError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("vault not found: {path:?}")]
    VaultNotFound { path: PathBuf },

    #[error("document not found: {id}")]
    DocumentNotFound { id: String },

    // Generic failures (exit code 1)
    /// A document could not be read. Batch operations skip the document.
    #[error("failed to read document {id}: {reason}")]
    ReadFailure { id: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl NotelinkError {
    /// Create an error for a document that could not be read
    pub fn read_failure(id: &str, error: impl std::fmt::Display) -> Self {
        NotelinkError::ReadFailure {
            id: id.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        NotelinkError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            NotelinkError::UnknownFormat(_)
            | NotelinkError::UsageError(_)
            | NotelinkError::InvalidValue { .. } => ExitCode::Usage,

            NotelinkError::VaultNotFound { .. } | NotelinkError::DocumentNotFound { .. } => {
                ExitCode::Data
            }

            NotelinkError::ReadFailure { .. }
            | NotelinkError::Io(_)
            | NotelinkError::Json(_)
            | NotelinkError::Toml(_)
            | NotelinkError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            NotelinkError::UnknownFormat(_) => "unknown_format",
            NotelinkError::UsageError(_) => "usage_error",
            NotelinkError::InvalidValue { .. } => "invalid_value",
            NotelinkError::VaultNotFound { .. } => "vault_not_found",
            NotelinkError::DocumentNotFound { .. } => "document_not_found",
            NotelinkError::ReadFailure { .. } => "read_failure",
            NotelinkError::Io(_) => "io_error",
            NotelinkError::Json(_) => "json_error",
            NotelinkError::Toml(_) => "toml_error",
            NotelinkError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
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

/// Result type alias for notelink operations
pub type Result<T> = std::result::Result<T, NotelinkError>;
