//! Error severity shared across the PromptDesk crates
//!
//! Each crate defines its own `thiserror` enum and implements [`Severity`]
//! for it, so the CLI can pick a log level without knowing every error type.

/// Severity levels for error classification
///
/// - **Warning**: Potential issue but the operation can proceed.
/// - **Error**: The operation failed but the process can continue.
/// - **Critical**: Nothing useful can happen until the problem is fixed.
///
/// # Examples
///
/// ```rust
/// use promptdesk_common::ErrorSeverity;
///
/// let missing_snapshot = ErrorSeverity::Critical;
/// let bad_record = ErrorSeverity::Error;
/// assert_ne!(missing_snapshot, bad_record);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Potential issue but operation can proceed
    Warning,
    /// Operation failed but the caller can continue
    Error,
    /// Cannot continue, requires attention
    Critical,
}

/// Trait for error types that have severity levels
///
/// All PromptDesk error types implement this trait so the CLI can pick an
/// appropriate log level when reporting them.
///
/// # Example
///
/// ```rust
/// use promptdesk_common::{ErrorSeverity, Severity};
///
/// #[derive(Debug)]
/// enum MyError {
///     Missing,
///     Empty,
/// }
///
/// impl Severity for MyError {
///     fn severity(&self) -> ErrorSeverity {
///         match self {
///             MyError::Missing => ErrorSeverity::Error,
///             MyError::Empty => ErrorSeverity::Warning,
///         }
///     }
/// }
///
/// assert_eq!(MyError::Empty.severity(), ErrorSeverity::Warning);
/// ```
pub trait Severity {
    /// Get the severity level of this error
    fn severity(&self) -> ErrorSeverity;
}
