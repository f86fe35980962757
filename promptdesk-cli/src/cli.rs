//! CLI definition for the PromptDesk command-line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use promptdesk_config::Locale;

/// PromptDesk - assemble development prompts from project records
///
/// Reads a snapshot of projects, modules, changes, test records, standards
/// and templates, and renders markdown documents ready to paste into an
/// assistant.
#[derive(Parser, Debug)]
#[command(name = "promptdesk")]
#[command(version)]
#[command(about = "Assemble development prompts from project records")]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Read configuration from this file instead of the discovered ones
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the configured output language (en, zh)
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a document from a template and selected records
    Build(BuildArgs),
    /// List standards that apply to a project
    Match {
        /// Snapshot file (JSON or YAML)
        #[arg(short, long)]
        snapshot: PathBuf,
        /// Project id
        #[arg(short, long)]
        project: String,
    },
    /// List a template's blocks
    Blocks {
        /// Snapshot file (JSON or YAML)
        #[arg(short, long)]
        snapshot: PathBuf,
        /// Template id
        #[arg(short, long)]
        template: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// Snapshot file (JSON or YAML)
    #[arg(short, long)]
    pub snapshot: PathBuf,

    /// Template id
    #[arg(short, long)]
    pub template: String,

    /// Module id
    #[arg(short, long)]
    pub module: Option<String>,

    /// Change id (repeatable)
    #[arg(long = "change", value_name = "ID")]
    pub changes: Vec<String>,

    /// Test record id (repeatable)
    #[arg(long = "test", value_name = "ID")]
    pub tests: Vec<String>,

    /// Standard id (repeatable)
    #[arg(long = "standard", value_name = "ID")]
    pub standards: Vec<String>,

    /// Print only this block's markdown
    #[arg(long, value_name = "KEY", conflicts_with = "json")]
    pub block: Option<String>,

    /// Print blocks, the build record and the export plan as JSON
    #[arg(long)]
    pub json: bool,
}
