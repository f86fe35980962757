//! # Common Utility Functions
//!
//! Small pure helpers used throughout the PromptDesk crates.
//!
//! - [`lines`] - Multi-line text conversion and line-boundary splitting
//! - [`ordered`] - Insertion-ordered set union for cross-reference lists
//! - [`ids`] - Prefixed ULID identifiers for new records

pub mod ids;
pub mod lines;
pub mod ordered;
