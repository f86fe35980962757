//! Reusable prompts and their revision history

use chrono::{DateTime, Utc};
use promptdesk_common::generate_id;
use serde::{Deserialize, Serialize};

/// One recorded change to a prompt's content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PromptRevision {
    pub rev_id: String,
    pub content: String,
    /// Why the prompt was revised
    pub reason: String,
    /// The failure pattern the revision is meant to prevent
    pub expected_avoid: String,
    pub created_at: i64,
}

/// A stored prompt; `revisions` is newest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Prompt {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub tags: Vec<String>,
    pub content: String,
    pub revisions: Vec<PromptRevision>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Prompt {
    /// Create a prompt with no revisions
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    /// Record a revision and make its content current
    ///
    /// The new revision is placed first. Reason and expected-avoid text are
    /// trimmed; the content is stored as given.
    pub fn add_revision(
        &mut self,
        content: impl Into<String>,
        reason: &str,
        expected_avoid: &str,
        now: DateTime<Utc>,
    ) -> &PromptRevision {
        let content = content.into();
        let timestamp = now.timestamp_millis();
        let revision = PromptRevision {
            rev_id: generate_id("rev"),
            content: content.clone(),
            reason: reason.trim().to_string(),
            expected_avoid: expected_avoid.trim().to_string(),
            created_at: timestamp,
        };

        tracing::debug!(prompt = %self.id, rev = %revision.rev_id, "adding prompt revision");

        self.revisions.insert(0, revision);
        self.content = content;
        self.updated_at = timestamp;
        &self.revisions[0]
    }

    /// The `n` most recent revisions
    pub fn recent_revisions(&self, n: usize) -> &[PromptRevision] {
        &self.revisions[..n.min(self.revisions.len())]
    }
}
