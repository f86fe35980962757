//! PromptDesk CLI entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use std::io::Write;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use promptdesk::{blocks, build, standards};
use promptdesk::{Cli, CliContext, Commands};
use promptdesk_builder::BuilderError;
use promptdesk_common::{ErrorSeverity, Severity};
use promptdesk_config::ConfigError;
use promptdesk_records::RecordsError;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing with appropriate level
    let filter = if cli.debug {
        EnvFilter::new("promptdesk=debug,promptdesk_builder=debug,promptdesk_records=debug,promptdesk_standards=debug,promptdesk_config=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let result = run(cli);
    if let Err(e) = &result {
        log_failure(e);
    }
    std::process::exit(result_to_exit(result));
}

/// Severity of the first PromptDesk error in the chain
fn severity_of(error: &anyhow::Error) -> Option<ErrorSeverity> {
    error.chain().find_map(|cause| {
        if let Some(e) = cause.downcast_ref::<RecordsError>() {
            Some(e.severity())
        } else if let Some(e) = cause.downcast_ref::<BuilderError>() {
            Some(e.severity())
        } else {
            cause.downcast_ref::<ConfigError>().map(|e| e.severity())
        }
    })
}

fn log_failure(error: &anyhow::Error) {
    match severity_of(error) {
        Some(ErrorSeverity::Critical) => tracing::error!("critical failure: {:#}", error),
        Some(ErrorSeverity::Warning) => tracing::warn!("{:#}", error),
        _ => tracing::debug!("command failed: {:?}", error),
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = CliContext::load(cli.config.as_deref(), cli.locale)?;

    let output = match &cli.command {
        Commands::Build(args) => build::run_build(&ctx, args)?,
        Commands::Match { snapshot, project } => standards::run_match(&ctx, snapshot, project)?,
        Commands::Blocks { snapshot, template } => blocks::run_blocks(snapshot, template)?,
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Convert a `Result<(), E: Display>` to an exit code.
fn result_to_exit<E: std::fmt::Display>(result: Result<(), E>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}
