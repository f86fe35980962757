//! `promptdesk blocks` - show a template's layout

use anyhow::{anyhow, Result};
use comfy_table::{presets::UTF8_FULL, Table};
use promptdesk_records::Snapshot;
use std::path::Path;

/// Run the blocks command and return the text to print
pub fn run_blocks(snapshot: &Path, template_id: &str) -> Result<String> {
    let snapshot = Snapshot::load(snapshot)?;
    let template = snapshot
        .template(template_id)
        .ok_or_else(|| anyhow!("Template not found: {}", template_id))?;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Key", "Title", "Enabled"]);
    for (idx, block) in template.blocks.iter().enumerate() {
        table.add_row(vec![
            (idx + 1).to_string(),
            block.key.to_string(),
            block.title.clone(),
            if block.enabled { "yes" } else { "no" }.to_string(),
        ]);
    }

    Ok(format!("{table}\n\n{} block(s) in {}\n", template.blocks.len(), template.title))
}
