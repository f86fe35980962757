//! Render a template and selected records into markdown
//!
//! Rendering is a pure function of its input: no I/O, no clock, no
//! failure. Every enabled block becomes
//! `"## " + title + "\n\n" + body + "\n"`; disabled blocks keep their slot in
//! the per-block output with empty markdown and are left out of the merged
//! document.

use crate::labels::Labels;
use promptdesk_common::OrderedUnion;
use promptdesk_records::{Block, BlockKey, Change, Module, Standard, Template, TestRecord};
use promptdesk_standards::{dedupe_by_id, is_prompting_must, prompting_must};
use serde::Serialize;

/// Everything a document is built from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildInput {
    pub template: Template,
    pub module: Option<Module>,
    pub changes: Vec<Change>,
    pub tests: Vec<TestRecord>,
    /// Standards the author picked
    pub standards: Vec<Standard>,
    /// The shared library; its mandatory prompting rules are always included
    pub global_standards: Vec<Standard>,
}

impl BuildInput {
    /// Start an input from a template with nothing selected
    pub fn new(template: Template) -> Self {
        Self {
            template,
            ..Self::default()
        }
    }

    pub fn with_module(mut self, module: Module) -> Self {
        self.module = Some(module);
        self
    }

    pub fn with_changes(mut self, changes: Vec<Change>) -> Self {
        self.changes = changes;
        self
    }

    pub fn with_tests(mut self, tests: Vec<TestRecord>) -> Self {
        self.tests = tests;
        self
    }

    pub fn with_standards(mut self, standards: Vec<Standard>) -> Self {
        self.standards = standards;
        self
    }

    pub fn with_global_standards(mut self, global_standards: Vec<Standard>) -> Self {
        self.global_standards = global_standards;
        self
    }

    /// Selected standards followed by the global prompting/must ones, deduplicated by id
    pub fn effective_standards(&self) -> Vec<Standard> {
        dedupe_by_id(
            self.standards
                .iter()
                .cloned()
                .chain(prompting_must(&self.global_standards)),
        )
    }
}

/// Output for one template block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockResult {
    pub key: BlockKey,
    pub title: String,
    pub enabled: bool,
    /// Empty when the block is disabled
    pub markdown: String,
}

/// Per-block output plus the merged document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildResult {
    pub blocks: Vec<BlockResult>,
    pub merged_markdown: String,
}

impl BuildResult {
    /// Find a block result by key
    pub fn block(&self, key: &BlockKey) -> Option<&BlockResult> {
        self.blocks.iter().find(|block| &block.key == key)
    }
}

/// Render `input` into per-block markdown and a merged document
pub fn build_markdown(input: &BuildInput, labels: &Labels) -> BuildResult {
    let standards = input.effective_standards();

    tracing::debug!(
        template = %input.template.id,
        module = input.module.as_ref().map(|m| m.id.as_str()).unwrap_or("-"),
        changes = input.changes.len(),
        tests = input.tests.len(),
        standards = standards.len(),
        "building markdown"
    );

    let renderer = Renderer {
        input,
        standards: &standards,
        labels,
    };

    let blocks: Vec<BlockResult> = input
        .template
        .blocks
        .iter()
        .map(|block| renderer.render(block))
        .collect();

    let mut merged_markdown = blocks
        .iter()
        .filter(|block| block.enabled)
        .map(|block| block.markdown.trim())
        .collect::<Vec<_>>()
        .join("\n\n");
    merged_markdown.push('\n');

    BuildResult {
        blocks,
        merged_markdown,
    }
}

/// Bullet list, one `- item` per non-empty entry
fn md_list(items: &[String], labels: &Labels) -> String {
    let lines: Vec<String> = items
        .iter()
        .filter(|item| !item.is_empty())
        .map(|item| format!("- {}", item))
        .collect();
    if lines.is_empty() {
        return labels.empty_list.to_string();
    }
    lines.join("\n")
}

fn or_none<'a>(value: Option<&'a str>, labels: &'a Labels) -> &'a str {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => labels.none,
    }
}

fn mark(flag: bool) -> &'static str {
    if flag {
        "✅"
    } else {
        "❌"
    }
}

struct Renderer<'a> {
    input: &'a BuildInput,
    standards: &'a [Standard],
    labels: &'a Labels,
}

impl Renderer<'_> {
    fn render(&self, block: &Block) -> BlockResult {
        if !block.enabled {
            return BlockResult {
                key: block.key.clone(),
                title: block.title.clone(),
                enabled: false,
                markdown: String::new(),
            };
        }

        let body = self.body(block);
        tracing::trace!(key = %block.key, bytes = body.len(), "rendered block");

        BlockResult {
            key: block.key.clone(),
            title: block.title.clone(),
            enabled: true,
            markdown: format!("## {}\n\n{}\n", block.title, body),
        }
    }

    fn body(&self, block: &Block) -> String {
        let labels = self.labels;
        match &block.key {
            BlockKey::Background => format!("{}\n\n{}", block.content, labels.goal_line)
                .trim()
                .to_string(),
            BlockKey::RelatedModules => self.related_modules(),
            BlockKey::RelatedRefs => self.related_refs(&block.content),
            BlockKey::ChangeSummary => non_empty_or(self.change_summary(), labels.no_changes),
            BlockKey::DbChecklist => non_empty_or(self.db_checklist(), labels.no_db_changes),
            BlockKey::TestFeedback => non_empty_or(self.test_feedback(), labels.no_tests),
            BlockKey::Standards => {
                let summary = non_empty_or(self.standards_summary(), labels.no_standards);
                format!("{}\n\n{}", block.content, summary).trim().to_string()
            }
            BlockKey::Requirements => self.requirements(&block.content),
            BlockKey::Custom(_) => block.content.clone(),
        }
    }

    fn related_modules(&self) -> String {
        let labels = self.labels;
        match &self.input.module {
            Some(module) => format!(
                "{}{}\n{}{}",
                labels.current_module,
                module.name,
                labels.module_description,
                or_none(module.description.as_deref(), labels)
            ),
            None => labels.no_module.to_string(),
        }
    }

    fn merged_refs(
        &self,
        from_module: fn(&Module) -> &[String],
        from_change: fn(&Change) -> &[String],
    ) -> Vec<String> {
        let mut union = OrderedUnion::new();
        if let Some(module) = &self.input.module {
            union.extend(from_module(module));
        }
        for change in &self.input.changes {
            union.extend(from_change(change));
        }
        union.into_vec()
    }

    fn related_refs(&self, content: &str) -> String {
        let labels = self.labels;
        let files = self.merged_refs(|m| m.related_files.as_slice(), |c| c.affected_files.as_slice());
        let fields = self.merged_refs(|m| m.related_fields.as_slice(), |c| c.affected_fields.as_slice());
        let apis = self.merged_refs(|m| m.related_apis.as_slice(), |c| c.affected_apis.as_slice());

        format!(
            "{}\n\n{}\n{}\n{}\n\n{}\n{}\n\n{}\n{}",
            content,
            labels.merged_refs_heading,
            labels.related_files,
            md_list(&files, labels),
            labels.related_fields,
            md_list(&fields, labels),
            labels.related_apis,
            md_list(&apis, labels),
        )
        .trim()
        .to_string()
    }

    fn change_summary(&self) -> String {
        let labels = self.labels;
        self.input
            .changes
            .iter()
            .map(|change| {
                format!(
                    "### {}\n\n{}\n{}\n\n{}\n{}",
                    change.title,
                    labels.change_summary,
                    md_list(&change.summary_items, labels),
                    labels.change_solved,
                    md_list(&change.problems_solved_items, labels),
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn db_checklist(&self) -> String {
        let labels = self.labels;
        self.input
            .changes
            .iter()
            .filter(|change| change.change_type.touches_schema())
            .map(|change| {
                let checklist = change.db_checklist.clone().unwrap_or_default();
                let junction = if checklist.is_junction_table {
                    labels.junction_yes
                } else {
                    labels.junction_no
                };
                format!(
                    "### {}\n\n- create_time: {}\n- update_time: {}\n- create_by: {}\n- update_by: {}\n- {}: {}\n- {}: {}",
                    change.title,
                    mark(checklist.has_create_time),
                    mark(checklist.has_update_time),
                    mark(checklist.has_create_by),
                    mark(checklist.has_update_by),
                    labels.junction_table,
                    junction,
                    labels.notes,
                    or_none(checklist.notes.as_deref(), labels),
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn test_feedback(&self) -> String {
        let labels = self.labels;
        self.input
            .tests
            .iter()
            .map(|test| {
                let feedback = if test.feedback_raw.is_empty() {
                    labels.empty_list.to_string()
                } else {
                    format!("\n> {}", test.feedback_raw.split('\n').collect::<Vec<_>>().join("\n> "))
                };
                format!(
                    "### {}\n\n{}{}\n{}\n{}\n\n{}\n{}",
                    test.title,
                    labels.conclusion,
                    test.conclusion,
                    labels.feedback,
                    feedback,
                    labels.follow_ups,
                    md_list(&test.follow_up_actions, labels),
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn checklist_section(&self, items: &[String]) -> String {
        if items.is_empty() {
            return String::new();
        }
        format!("\n\n{}\n{}", self.labels.checklist, md_list(items, self.labels))
    }

    fn standard_heading(&self, standard: &Standard) -> String {
        let labels = self.labels;
        let decorations: Vec<String> = [
            standard.scope.map(|scope| format!("[{}]", scope)),
            standard
                .level
                .map(|level| format!("{}{}{}", labels.level_open, level, labels.level_close)),
        ]
        .into_iter()
        .flatten()
        .collect();

        format!("### {} {}", standard.title, decorations.join(labels.decoration_separator))
            .trim_end()
            .to_string()
    }

    fn standards_summary(&self) -> String {
        let labels = self.labels;
        self.standards
            .iter()
            .map(|standard| {
                let summary = if standard.summary.is_empty() {
                    labels.none
                } else {
                    standard.summary.as_str()
                };
                format!(
                    "{}\n\n{}{}{}",
                    self.standard_heading(standard),
                    labels.standard_summary,
                    summary,
                    self.checklist_section(&standard.checklist_items),
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn requirements(&self, content: &str) -> String {
        let labels = self.labels;
        let base = if content.trim().is_empty() {
            labels.requirements_placeholder
        } else {
            content
        };

        let must: Vec<String> = self
            .standards
            .iter()
            .filter(|standard| is_prompting_must(standard))
            .map(|standard| {
                let body = standard.body();
                let body = if body.is_empty() { labels.no_body } else { body.as_str() };
                format!(
                    "#### {}\n\n{}{}",
                    standard.title,
                    body,
                    self.checklist_section(&standard.checklist_items),
                )
            })
            .collect();

        if must.is_empty() {
            return base.trim().to_string();
        }

        format!(
            "{}\n\n{}\n\n{}",
            base,
            labels.requirements_auto_heading,
            must.join("\n\n")
        )
        .trim()
        .to_string()
    }
}

fn non_empty_or(text: String, placeholder: &str) -> String {
    if text.is_empty() {
        placeholder.to_string()
    } else {
        text
    }
}
