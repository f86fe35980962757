//! Error types for build generation

use promptdesk_common::{ErrorSeverity, Severity};
use promptdesk_records::RecordsError;
use thiserror::Error;

/// Result type for builder operations
pub type Result<T> = std::result::Result<T, BuilderError>;

/// Errors raised while resolving a selection against stored records
///
/// Rendering itself cannot fail; these only come from looking records up.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// The selected template does not exist
    #[error("Template not found: {id}")]
    TemplateNotFound { id: String },

    /// A selected module, change, test or standard does not exist
    #[error("{kind} not found: {id}")]
    RecordNotFound { kind: &'static str, id: String },

    /// Reading records failed
    #[error(transparent)]
    Records(#[from] RecordsError),
}

impl BuilderError {
    pub(crate) fn missing(kind: &'static str, id: &str) -> Self {
        BuilderError::RecordNotFound {
            kind,
            id: id.to_string(),
        }
    }
}

impl Severity for BuilderError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            BuilderError::TemplateNotFound { .. } => ErrorSeverity::Error,
            BuilderError::RecordNotFound { .. } => ErrorSeverity::Error,
            BuilderError::Records(err) => err.severity(),
        }
    }
}
