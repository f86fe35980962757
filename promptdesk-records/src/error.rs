//! Error types for record loading

use promptdesk_common::{ErrorSeverity, Severity};
use std::path::PathBuf;
use thiserror::Error;

/// Result type for record operations
pub type Result<T> = std::result::Result<T, RecordsError>;

/// Errors that can occur while loading or decoding records
#[derive(Debug, Error)]
pub enum RecordsError {
    /// Snapshot file does not exist
    #[error("Snapshot file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML decoding failed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File extension is neither JSON nor YAML
    #[error("Unsupported snapshot format: '{format}' (expected json, yaml or yml)")]
    UnsupportedFormat { format: String },
}

impl Severity for RecordsError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RecordsError::FileNotFound { .. } => ErrorSeverity::Critical,
            RecordsError::Io(_) => ErrorSeverity::Critical,
            RecordsError::Json(_) => ErrorSeverity::Error,
            RecordsError::Yaml(_) => ErrorSeverity::Error,
            RecordsError::UnsupportedFormat { .. } => ErrorSeverity::Error,
        }
    }
}
