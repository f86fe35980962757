//! Multi-line text helpers
//!
//! Author-entered bullet lists are edited as one line per item, and long
//! documents are exported in line-bounded parts. Both directions live here.

/// Default number of lines per exported part and per stored body chunk.
pub const DEFAULT_MAX_LINES: usize = 500;

/// Convert free text into list items: one per line, trimmed, blanks dropped.
pub fn to_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join list items back into free text, one item per line.
pub fn from_lines<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| item.as_ref())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Number of `\n`-separated lines in `content` (an empty string has one).
pub fn line_count(content: &str) -> usize {
    content.split('\n').count()
}

/// Split `content` into parts of at most `max_lines` lines.
///
/// Splitting happens strictly on `\n` boundaries. When the content has no
/// more than `max_lines` lines the single part is the input itself. Joining
/// the parts with `\n` reproduces the input exactly. A `max_lines` of zero
/// is treated as one.
pub fn split_by_lines(content: &str, max_lines: usize) -> Vec<String> {
    let max_lines = max_lines.max(1);
    let lines: Vec<&str> = content.split('\n').collect();
    if lines.len() <= max_lines {
        return vec![content.to_string()];
    }

    lines
        .chunks(max_lines)
        .map(|chunk| chunk.join("\n"))
        .collect()
}
