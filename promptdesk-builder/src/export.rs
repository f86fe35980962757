//! File naming for markdown exports
//!
//! Large documents are exported in line-bounded parts so each file stays
//! small enough to paste into a chat window.

use promptdesk_common::{line_count, split_by_lines};
use promptdesk_records::BlockKey;
use serde::Serialize;

/// One file of an export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPart {
    pub file_name: String,
    pub content: String,
}

/// Plan the files for exporting `content`
///
/// A single part is named `<stem>.md`; several parts are named
/// `<stem>.part-<n>.md` numbered from 1.
pub fn plan_export(stem: &str, content: &str, max_lines: usize) -> Vec<ExportPart> {
    let parts = split_by_lines(content, max_lines);
    tracing::debug!(
        "Export of {} lines split into {} part(s) of at most {}",
        line_count(content),
        parts.len(),
        max_lines
    );
    if parts.len() == 1 {
        return parts
            .into_iter()
            .map(|content| ExportPart {
                file_name: format!("{}.md", stem),
                content,
            })
            .collect();
    }

    parts
        .into_iter()
        .enumerate()
        .map(|(idx, content)| ExportPart {
            file_name: format!("{}.part-{}.md", stem, idx + 1),
            content,
        })
        .collect()
}

/// File name for exporting a single block
pub fn block_file_name(key: &BlockKey) -> String {
    format!("block-{}.md", key)
}
