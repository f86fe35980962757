//! Fixed wording used when rendering documents
//!
//! Everything the builder writes that is not author content comes from a
//! [`Labels`] catalog, so the same records can be rendered in either
//! supported language.

use promptdesk_config::Locale;

/// Placeholders, captions and headings for one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Inline "nothing here" marker
    pub none: &'static str,
    /// Rendering of an empty bullet list
    pub empty_list: &'static str,
    /// Fixed bullet appended to the background block
    pub goal_line: &'static str,

    pub current_module: &'static str,
    pub module_description: &'static str,
    pub no_module: &'static str,

    pub merged_refs_heading: &'static str,
    pub related_files: &'static str,
    pub related_fields: &'static str,
    pub related_apis: &'static str,

    pub change_summary: &'static str,
    pub change_solved: &'static str,
    pub no_changes: &'static str,

    pub junction_table: &'static str,
    pub junction_yes: &'static str,
    pub junction_no: &'static str,
    pub notes: &'static str,
    pub no_db_changes: &'static str,

    pub conclusion: &'static str,
    pub feedback: &'static str,
    pub follow_ups: &'static str,
    pub no_tests: &'static str,

    pub standard_summary: &'static str,
    pub checklist: &'static str,
    /// Wraps the level in a standard heading
    pub level_open: &'static str,
    pub level_close: &'static str,
    /// Placed between the scope and level decorations
    pub decoration_separator: &'static str,
    pub no_standards: &'static str,

    pub requirements_placeholder: &'static str,
    pub requirements_auto_heading: &'static str,
    pub no_body: &'static str,
}

impl Labels {
    /// English catalog
    pub fn english() -> Self {
        Self {
            none: "(none)",
            empty_list: "- (none)",
            goal_line: "- Goal: produce a copy-ready development prompt and change notes (v1).",

            current_module: "- Current module: ",
            module_description: "- Description: ",
            no_module: "- (no module selected)",

            merged_refs_heading: "#### Merged references (module + changes)",
            related_files: "**Related files:**",
            related_fields: "**Related fields:**",
            related_apis: "**Related APIs:**",

            change_summary: "**Summary:**",
            change_solved: "**Solved:**",
            no_changes: "- (no changes selected)",

            junction_table: "Junction table",
            junction_yes: "yes (relaxed)",
            junction_no: "no",
            notes: "Notes",
            no_db_changes: "- (no DB changes selected)",

            conclusion: "- Conclusion: ",
            feedback: "- Raw feedback:",
            follow_ups: "- Follow-up actions:",
            no_tests: "- (no test records selected)",

            standard_summary: "**Summary:** ",
            checklist: "**Checklist:**",
            level_open: "(",
            level_close: ")",
            decoration_separator: " ",
            no_standards: "- (no standards selected)",

            requirements_placeholder:
                "- (no output requirements yet; configure them in the template)",
            requirements_auto_heading:
                "### Auto-appended: output standards (scope=prompting, level=must)",
            no_body: "(no body)",
        }
    }

    /// Chinese catalog
    pub fn chinese() -> Self {
        Self {
            none: "（无）",
            empty_list: "-（无）",
            goal_line: "- 目标：整理并输出一份可复制的开发提示词与变更说明（v1）。",

            current_module: "- 当前模块：",
            module_description: "- 描述：",
            no_module: "-（未选择模块）",

            merged_refs_heading: "#### 合并引用（模块级 + 变更级）",
            related_files: "**相关文件：**",
            related_fields: "**相关字段：**",
            related_apis: "**相关接口：**",

            change_summary: "**摘要：**",
            change_solved: "**解决：**",
            no_changes: "-（未选择变更）",

            junction_table: "中间表",
            junction_yes: "是（放宽）",
            junction_no: "否",
            notes: "备注",
            no_db_changes: "-（未选择 DB 相关变更）",

            conclusion: "- 结论：",
            feedback: "- 反馈原文：",
            follow_ups: "- 后续动作：",
            no_tests: "-（未选择测试记录）",

            standard_summary: "**摘要：** ",
            checklist: "**Checklist：**",
            level_open: "（",
            level_close: "）",
            decoration_separator: "",
            no_standards: "-（未选择规范）",

            requirements_placeholder: "-（未填写输出要求，可在模板中配置）",
            requirements_auto_heading: "### 自动追加：输出规范（scope=prompting, level=must）",
            no_body: "（无正文）",
        }
    }

    /// Catalog for a configured locale
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self::english(),
            Locale::Zh => Self::chinese(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::english()
    }
}
