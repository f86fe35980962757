//! `promptdesk match` - list the standards that apply to a project

use crate::context::CliContext;
use anyhow::{anyhow, Result};
use comfy_table::{presets::UTF8_FULL, Table};
use promptdesk_records::Snapshot;
use promptdesk_standards::matching_standards;
use std::path::Path;

/// Run the match command and return the text to print
///
/// Considers the project's own standards followed by the global library.
pub fn run_match(ctx: &CliContext, snapshot: &Path, project_id: &str) -> Result<String> {
    let snapshot = Snapshot::load(snapshot)?;
    let project = snapshot
        .project(project_id)
        .ok_or_else(|| anyhow!("Project not found: {}", project_id))?;

    let mut candidates = snapshot.standards_for_project(project_id);
    if project_id != ctx.config.global_project_id {
        candidates.extend(snapshot.global_standards(&ctx.config.global_project_id));
    }

    let matched = matching_standards(&candidates, Some(project));
    if matched.is_empty() {
        return Ok(format!("No standards apply to {}.\n", project.name));
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Id", "Title", "Scope", "Level", "Source"]);
    for standard in &matched {
        let source = if standard.project_id == ctx.config.global_project_id {
            "global"
        } else {
            "project"
        };
        table.add_row(vec![
            standard.id.clone(),
            standard.title.clone(),
            standard.scope.map(|s| s.to_string()).unwrap_or_default(),
            standard.level.map(|l| l.to_string()).unwrap_or_default(),
            source.to_string(),
        ]);
    }

    Ok(format!(
        "{table}\n\n{} standard(s) apply to {}\n",
        matched.len(),
        project.name
    ))
}
