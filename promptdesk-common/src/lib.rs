//! # PromptDesk Common
//!
//! Foundational types and helpers shared by every PromptDesk crate.
//!
//! ## Modules
//!
//! - [`error`] - Severity classification implemented by every crate's error type
//! - [`logging`] - Formatting helpers for tracing output
//! - [`utils`] - Line handling, ordered unions and id generation

pub mod error;
pub mod logging;
pub mod utils;

// Re-export severity types for convenience
pub use error::{ErrorSeverity, Severity};

// Re-export the log wrapper for convenience
pub use logging::Pretty;

// Re-export the utilities used across the workspace
pub use utils::ids::generate_id;
pub use utils::lines::{from_lines, line_count, split_by_lines, to_lines, DEFAULT_MAX_LINES};
pub use utils::ordered::OrderedUnion;

/// Project id that marks records belonging to the shared global library.
pub const GLOBAL_PROJECT_ID: &str = "global";
