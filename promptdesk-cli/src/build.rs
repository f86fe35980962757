//! `promptdesk build` - render a document from selected records

use crate::cli::BuildArgs;
use crate::context::CliContext;
use anyhow::{anyhow, Result};
use chrono::Utc;
use promptdesk_builder::{generate_build, plan_export, BuildSelection, ExportPart, GeneratedBuild};
use promptdesk_records::{BlockKey, Snapshot};
use serde::Serialize;

/// JSON document printed by `build --json`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BuildOutput {
    #[serde(flatten)]
    build: GeneratedBuild,
    export_plan: Vec<ExportPart>,
}

impl From<&BuildArgs> for BuildSelection {
    fn from(args: &BuildArgs) -> Self {
        let selection = BuildSelection::new(args.template.clone())
            .with_changes(args.changes.clone())
            .with_tests(args.tests.clone())
            .with_standards(args.standards.clone());
        match &args.module {
            Some(module) => selection.with_module(module.clone()),
            None => selection,
        }
    }
}

/// Run the build command and return the text to print
pub fn run_build(ctx: &CliContext, args: &BuildArgs) -> Result<String> {
    let snapshot = Snapshot::load(&args.snapshot)?;
    let selection = BuildSelection::from(args);
    let input = selection.resolve(&snapshot, &ctx.config.global_project_id)?;

    let generated = generate_build(&selection, &input, &ctx.labels, Utc::now());

    if let Some(key) = &args.block {
        let key = BlockKey::from(key.as_str());
        let block = generated
            .result
            .block(&key)
            .ok_or_else(|| anyhow!("Template '{}' has no block '{}'", args.template, key))?;
        if !block.enabled {
            tracing::warn!("Block '{}' is disabled; nothing to print", key);
        }
        return Ok(block.markdown.clone());
    }

    if args.json {
        let export_plan = plan_export(
            &ctx.config.export_stem,
            &generated.result.merged_markdown,
            ctx.config.max_lines_per_part,
        );
        let output = BuildOutput {
            build: generated,
            export_plan,
        };
        return Ok(serde_json::to_string_pretty(&output)? + "\n");
    }

    Ok(generated.result.merged_markdown)
}
