//! End-to-end document building over realistic selections

use chrono::{TimeZone, Utc};
use promptdesk_builder::{
    build_markdown, generate_build, BuildInput, BuildSelection, BuilderError, Labels,
};
use promptdesk_records::{
    Block, BlockKey, Change, ChangeType, DbChecklist, Module, Snapshot, Standard, StandardLevel,
    StandardScope, Template,
};
use rstest::rstest;

fn default_template() -> Template {
    Template::new("tpl", "Default").with_blocks(Template::default_blocks())
}

fn global_prompting() -> Standard {
    Standard::new("std_g", "Reply format")
        .with_project("global")
        .with_scope(StandardScope::Prompting)
        .with_level(StandardLevel::Must)
        .with_chunks(&["Use markdown headings.", "Never omit tests."])
}

fn full_input() -> BuildInput {
    BuildInput::new(default_template())
        .with_module(
            Module::new("mod_1", "Orders")
                .with_description("Order lifecycle")
                .with_refs(&["a.ts", "b.ts"], &["orders.id"], &[]),
        )
        .with_changes(vec![
            Change::new("chg_1", "Checkout", ChangeType::Feature)
                .with_items(&["one-page checkout"], &["double charge"])
                .with_refs(&["b.ts", "c.ts", "c.ts"], &[], &["/api/checkout"]),
            Change::new("chg_2", "Orders table", ChangeType::CreateTable)
                .with_refs(&["d.sql", "a.ts"], &["orders.status"], &[]),
        ])
        .with_global_standards(vec![global_prompting()])
}

fn body(markdown: &str, title: &str) -> String {
    markdown
        .strip_prefix(&format!("## {}\n\n", title))
        .and_then(|rest| rest.strip_suffix('\n'))
        .unwrap()
        .to_string()
}

#[rstest]
#[case(Labels::english())]
#[case(Labels::chinese())]
fn test_block_results_follow_template_order(#[case] labels: Labels) {
    let mut input = full_input();
    input.template.blocks[2].enabled = false;
    input.template.blocks.push(Block::new("appendix", "Appendix").disabled());

    let result = build_markdown(&input, &labels);

    assert_eq!(result.blocks.len(), input.template.blocks.len());
    for (block, rendered) in input.template.blocks.iter().zip(&result.blocks) {
        assert_eq!(block.key, rendered.key);
        assert_eq!(block.title, rendered.title);
        assert_eq!(block.enabled, rendered.enabled);
        assert_eq!(rendered.markdown.is_empty(), !rendered.enabled);
    }
}

#[test]
fn test_merged_markdown_is_trimmed_enabled_blocks() {
    let mut input = full_input();
    input.template.blocks[0].enabled = false;
    let result = build_markdown(&input, &Labels::english());

    let expected = result
        .blocks
        .iter()
        .filter(|b| b.enabled)
        .map(|b| b.markdown.trim())
        .collect::<Vec<_>>()
        .join("\n\n")
        + "\n";
    assert_eq!(result.merged_markdown, expected);
    assert!(!result.merged_markdown.ends_with("\n\n"));
    assert!(!result.merged_markdown.contains("## 1. Background"));
}

#[test]
fn test_related_refs_union_order() {
    let result = build_markdown(&full_input(), &Labels::english());
    let refs = result.block(&BlockKey::RelatedRefs).unwrap();

    assert_eq!(
        body(&refs.markdown, &refs.title),
        "#### Merged references (module + changes)\n\
         **Related files:**\n- a.ts\n- b.ts\n- c.ts\n- d.sql\n\n\
         **Related fields:**\n- orders.id\n- orders.status\n\n\
         **Related APIs:**\n- /api/checkout"
    );
}

#[test]
fn test_db_checklist_only_for_schema_changes() {
    let mut input = full_input();
    input.changes[1].db_checklist = Some(DbChecklist {
        has_update_time: true,
        ..DbChecklist::default()
    });
    let result = build_markdown(&input, &Labels::english());
    let block = result.block(&BlockKey::DbChecklist).unwrap();

    assert_eq!(block.markdown.matches("### ").count(), 1);
    assert!(block.markdown.contains("### Orders table"));
    assert!(block.markdown.contains("- create_time: ❌"));
    assert!(block.markdown.contains("- update_time: ✅"));
    assert!(!block.markdown.contains("Checkout"));
}

#[test]
fn test_requirements_always_gets_global_prompting_must() {
    let labels = Labels::english();
    let result = build_markdown(&full_input(), &labels);
    let block = result.block(&BlockKey::Requirements).unwrap();

    assert_eq!(
        body(&block.markdown, &block.title),
        format!(
            "{}\n\n{}\n\n#### Reply format\n\nUse markdown headings.\nNever omit tests.",
            labels.requirements_placeholder, labels.requirements_auto_heading
        )
    );
}

#[test]
fn test_global_standard_listed_once_when_also_selected() {
    let mut input = full_input();
    let mut selected = global_prompting();
    selected.summary = "selected copy".to_string();
    input.standards = vec![selected];

    let result = build_markdown(&input, &Labels::english());
    let standards = result.block(&BlockKey::Standards).unwrap();
    assert_eq!(standards.markdown.matches("### Reply format").count(), 1);
    let requirements = result.block(&BlockKey::Requirements).unwrap();
    assert_eq!(requirements.markdown.matches("#### Reply format").count(), 1);
    // the global record replaces the selected one in place
    assert!(standards.markdown.contains("**Summary:** (none)"));
}

#[test]
fn test_requirements_without_prompting_standards_has_no_auto_section() {
    let mut input = full_input();
    input.global_standards.clear();
    input.standards = vec![Standard::new("s", "Naming").with_scope(StandardScope::Naming)];
    let labels = Labels::english();

    let result = build_markdown(&input, &labels);
    let block = result.block(&BlockKey::Requirements).unwrap();
    assert_eq!(body(&block.markdown, &block.title), labels.requirements_placeholder);
}

#[test]
fn test_deterministic() {
    let input = full_input();
    let labels = Labels::chinese();
    assert_eq!(build_markdown(&input, &labels), build_markdown(&input, &labels));
}

#[test]
fn test_chinese_document_wording() {
    let template = Template::new("tpl", "T").with_blocks(vec![
        Block::new("changeSummary", "4. 变更摘要"),
        Block::new("standards", "7. 规范").with_content("请遵守："),
        Block::new("dbChecklist", "5. DB 检查"),
    ]);
    let input = BuildInput::new(template)
        .with_changes(vec![
            Change::new("c", "加索引", ChangeType::Fix).with_items_text("订单查询加索引\n  \n", ""),
        ])
        .with_standards(vec![Standard::new("s", "命名")
            .with_scope(StandardScope::Naming)
            .with_level(StandardLevel::Must)
            .with_summary("驼峰")
            .with_checklist(&["变量", ""])]);

    let result = build_markdown(&input, &Labels::chinese());
    assert_eq!(
        result.merged_markdown,
        "## 4. 变更摘要\n\n### 加索引\n\n**摘要：**\n- 订单查询加索引\n\n**解决：**\n-（无）\n\n\
         ## 7. 规范\n\n请遵守：\n\n### 命名 [naming]（must）\n\n**摘要：** 驼峰\n\n**Checklist：**\n- 变量\n\n\
         ## 5. DB 检查\n\n-（未选择 DB 相关变更）\n"
    );
}

const SNAPSHOT: &str = r#"{
  "modules": [{"id": "mod_1", "projectId": "p", "name": "Orders"}],
  "changes": [
    {"id": "chg_1", "projectId": "p", "title": "First", "type": "feature"},
    {"id": "chg_2", "projectId": "p", "title": "Second", "type": "fix"}
  ],
  "standards": [
    {"id": "std_g", "projectId": "global", "title": "Reply format",
     "scope": "prompting", "level": "must"}
  ],
  "templates": [
    {"id": "tpl_1", "projectId": "p", "title": "Default",
     "blocks": [{"key": "changeSummary", "title": "Changes", "enabled": true, "content": ""}]}
  ]
}"#;

#[test]
fn test_resolve_keeps_selection_order() {
    let snapshot = Snapshot::from_json(SNAPSHOT).unwrap();
    let selection = BuildSelection::new("tpl_1")
        .with_module("mod_1")
        .with_changes(vec!["chg_2".into(), "chg_1".into()]);

    let input = selection.resolve(&snapshot, "global").unwrap();
    assert_eq!(input.module.as_ref().unwrap().name, "Orders");
    let titles: Vec<&str> = input.changes.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Second", "First"]);
    assert_eq!(input.global_standards.len(), 1);
}

#[test]
fn test_resolve_reports_missing_records() {
    let snapshot = Snapshot::from_json(SNAPSHOT).unwrap();

    let err = BuildSelection::new("tpl_x").resolve(&snapshot, "global").unwrap_err();
    assert!(matches!(err, BuilderError::TemplateNotFound { ref id } if id == "tpl_x"));

    let err = BuildSelection::new("tpl_1")
        .with_tests(vec!["tst_9".into()])
        .resolve(&snapshot, "global")
        .unwrap_err();
    assert!(matches!(err, BuilderError::RecordNotFound { kind: "Test", ref id } if id == "tst_9"));
    assert_eq!(err.to_string(), "Test not found: tst_9");
}

#[test]
fn test_generate_build_record() {
    let snapshot = Snapshot::from_json(SNAPSHOT).unwrap();
    let selection = BuildSelection::new("tpl_1").with_changes(vec!["chg_1".into()]);
    let input = selection.resolve(&snapshot, "global").unwrap();
    let now = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).single().unwrap();

    let generated = generate_build(&selection, &input, &Labels::english(), now);

    let record = &generated.record;
    assert!(record.id.starts_with("bld_"));
    assert_eq!(record.title, "build-2024-03-09 14:05:07");
    assert_eq!(record.project_id, "p");
    assert_eq!(record.template_id.as_deref(), Some("tpl_1"));
    assert_eq!(record.change_ids, vec!["chg_1"]);
    assert!(record.standard_ids.is_empty());
    assert_eq!(record.output_markdown, generated.result.merged_markdown);
    assert_eq!(record.created_at, now.timestamp_millis());
}
