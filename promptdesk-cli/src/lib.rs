//! PromptDesk command-line interface.
//!
//! Commands:
//! - `promptdesk build`: render a document from a template and selected records
//! - `promptdesk match`: list the standards that apply to a project
//! - `promptdesk blocks`: list a template's blocks
//!
//! Every command reads a snapshot file (JSON or YAML) exported from the
//! records store and prints to stdout.

pub mod blocks;
pub mod build;
pub mod cli;
pub mod context;
pub mod standards;

pub use cli::{BuildArgs, Cli, Commands};
pub use context::CliContext;
