//! Decide whether a standard applies to a project's architecture

use promptdesk_records::{AppliesTo, Project, Standard};

/// Whether `standard` applies to `project`
///
/// A standard without an applicability filter applies everywhere, and with
/// no project to compare against every standard applies. Otherwise all five
/// dimensions must pass: frontend framework, backend framework, language,
/// DB type and API style. A dimension with an empty rule list passes. A
/// non-empty list passes only when the project's attribute equals one of
/// the entries, compared case-insensitively; a missing attribute fails.
/// For the language dimension either the frontend or the backend language
/// may satisfy the list.
pub fn standard_matches_project(standard: &Standard, project: Option<&Project>) -> bool {
    let (Some(applies_to), Some(project)) = (standard.applies_to.as_ref(), project) else {
        return true;
    };

    applies_to_project(applies_to, project)
}

fn applies_to_project(applies_to: &AppliesTo, project: &Project) -> bool {
    let frontend = allowed(project.frontend_framework.as_deref(), &applies_to.frontend_frameworks);
    let backend = allowed(project.backend_framework.as_deref(), &applies_to.backend_frameworks);
    let language = applies_to.languages.is_empty()
        || allowed(project.frontend_language.as_deref(), &applies_to.languages)
        || allowed(project.backend_language.as_deref(), &applies_to.languages);
    let db = allowed(project.db_type.as_deref(), &applies_to.db_types);
    let api = allowed(project.api_style.as_deref(), &applies_to.api_styles);

    frontend && backend && language && db && api
}

fn allowed(value: Option<&str>, rules: &[String]) -> bool {
    if rules.is_empty() {
        return true;
    }
    let Some(value) = value else {
        return false;
    };
    let value = value.to_lowercase();
    rules.iter().any(|rule| rule.to_lowercase() == value)
}

/// Standards from `standards` that apply to `project`, in input order
pub fn matching_standards<'a>(
    standards: &'a [Standard],
    project: Option<&Project>,
) -> Vec<&'a Standard> {
    let matched: Vec<&Standard> = standards
        .iter()
        .filter(|standard| standard_matches_project(standard, project))
        .collect();

    tracing::debug!(
        "{} of {} standards apply to project {}",
        matched.len(),
        standards.len(),
        project.map(|p| p.id.as_str()).unwrap_or("<none>")
    );
    matched
}
