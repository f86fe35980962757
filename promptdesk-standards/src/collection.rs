//! Operations over collections of standards

use crate::filter::StandardFilter;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use promptdesk_common::{generate_id, split_by_lines};
use promptdesk_records::{Standard, StandardScope};
use std::collections::HashSet;

/// Whether a standard is a mandatory prompting rule
pub fn is_prompting_must(standard: &Standard) -> bool {
    StandardFilter::prompting_must().matches(standard)
}

/// Mandatory prompting rules from `standards`, in input order
pub fn prompting_must(standards: &[Standard]) -> Vec<Standard> {
    StandardFilter::prompting_must()
        .apply(standards)
        .into_iter()
        .cloned()
        .collect()
}

/// Remove duplicate ids
///
/// Each id keeps the position of its first occurrence and the value of its
/// last one.
pub fn dedupe_by_id<I>(standards: I) -> Vec<Standard>
where
    I: IntoIterator<Item = Standard>,
{
    let mut by_id: IndexMap<String, Standard> = IndexMap::new();
    for standard in standards {
        by_id.insert(standard.id.clone(), standard);
    }
    by_id.into_values().collect()
}

/// Result of copying global standards into a project
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CopyOutcome {
    /// New project-owned records, ready to store
    pub inserted: Vec<Standard>,
    /// Selected global standards the project already had
    pub skipped: usize,
}

fn copy_key(standard: &Standard) -> String {
    let scope = standard.scope.map(StandardScope::as_str).unwrap_or("");
    format!("{}__{}", scope, standard.title.trim())
}

/// Copy global standards into a project
///
/// With a non-empty `scopes` only global standards in those scopes are
/// considered (unscoped counts as general). A standard is skipped when the
/// project already has one with the same scope and trimmed title. Copies
/// get fresh ids, the target project id and `now` as both timestamps.
pub fn copy_global_standards_to_project(
    global: &[Standard],
    existing: &[Standard],
    project_id: &str,
    scopes: &[StandardScope],
    now: DateTime<Utc>,
) -> CopyOutcome {
    let mut taken: HashSet<String> = existing.iter().map(copy_key).collect();
    let selected = StandardFilter::by_scopes(scopes.to_vec()).apply(global);
    let timestamp = now.timestamp_millis();

    let mut inserted = Vec::new();
    for standard in &selected {
        if !taken.insert(copy_key(standard)) {
            continue;
        }
        inserted.push(Standard {
            id: generate_id("std"),
            project_id: project_id.to_string(),
            created_at: timestamp,
            updated_at: timestamp,
            ..(*standard).clone()
        });
    }

    let outcome = CopyOutcome {
        skipped: selected.len() - inserted.len(),
        inserted,
    };
    tracing::info!(
        "Copied {} global standards into {} ({} already present)",
        outcome.inserted.len(),
        project_id,
        outcome.skipped
    );
    outcome
}

/// Split a standard's body into stored chunks of at most `max_lines` lines
///
/// A blank body produces no chunks.
pub fn chunk_content(body: &str, max_lines: usize) -> Vec<String> {
    if body.trim().is_empty() {
        return Vec::new();
    }
    split_by_lines(body, max_lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use promptdesk_records::StandardLevel;

    fn now() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).single().unwrap()
    }

    fn prompting(id: &str, level: StandardLevel) -> Standard {
        Standard::new(id, id)
            .with_scope(StandardScope::Prompting)
            .with_level(level)
    }

    #[test]
    fn test_prompting_must_filters() {
        let standards = vec![
            prompting("a", StandardLevel::Must),
            prompting("b", StandardLevel::Optional),
            Standard::new("c", "c").with_level(StandardLevel::Must),
            prompting("d", StandardLevel::Must),
        ];
        let ids: Vec<String> = prompting_must(&standards).into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["a", "d"]);
        assert!(is_prompting_must(&standards[0]));
        assert!(!is_prompting_must(&standards[2]));
    }

    #[test]
    fn test_dedupe_keeps_first_position_last_value() {
        let deduped = dedupe_by_id(vec![
            Standard::new("x", "first x"),
            Standard::new("y", "y"),
            Standard::new("x", "second x"),
        ]);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].id, "x");
        assert_eq!(deduped[0].title, "second x");
        assert_eq!(deduped[1].id, "y");
    }

    #[test]
    fn test_copy_skips_existing_scope_title() {
        let global = vec![
            Standard::new("g1", "Naming ")
                .with_project("global")
                .with_scope(StandardScope::Naming),
            Standard::new("g2", "Audit columns")
                .with_project("global")
                .with_scope(StandardScope::Db),
        ];
        let existing = vec![Standard::new("p1", "Naming")
            .with_project("proj")
            .with_scope(StandardScope::Naming)];

        let outcome = copy_global_standards_to_project(&global, &existing, "proj", &[], now());

        assert_eq!(outcome.skipped, 1);
        assert_eq!(outcome.inserted.len(), 1);
        let copy = &outcome.inserted[0];
        assert_eq!(copy.title, "Audit columns");
        assert_eq!(copy.project_id, "proj");
        assert_ne!(copy.id, "g2");
        assert!(copy.id.starts_with("std_"));
        assert_eq!(copy.created_at, 1_700_000_000_000);
    }

    #[test]
    fn test_copy_with_scopes_treats_unscoped_as_general() {
        let global = vec![
            Standard::new("g1", "Plain").with_project("global"),
            Standard::new("g2", "Api").with_scope(StandardScope::Api),
        ];
        let outcome =
            copy_global_standards_to_project(&global, &[], "proj", &[StandardScope::General], now());
        assert_eq!(outcome.inserted.len(), 1);
        assert_eq!(outcome.inserted[0].title, "Plain");
        assert_eq!(outcome.skipped, 0);
    }

    #[test]
    fn test_copy_dedupes_within_global_set() {
        let global = vec![Standard::new("g1", "Same"), Standard::new("g2", "Same")];
        let outcome = copy_global_standards_to_project(&global, &[], "proj", &[], now());
        assert_eq!(outcome.inserted.len(), 1);
        assert_eq!(outcome.skipped, 1);
    }

    #[test]
    fn test_chunk_content() {
        assert!(chunk_content("  \n ", 500).is_empty());
        assert_eq!(chunk_content("one\ntwo", 500), vec!["one\ntwo"]);
        assert_eq!(chunk_content("a\nb\nc", 2), vec!["a\nb", "c"]);
    }
}
