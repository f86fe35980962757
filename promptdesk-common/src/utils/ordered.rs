//! Insertion-ordered set union
//!
//! Reference lists (files, fields, APIs) gathered from a module and from
//! several changes are merged so that each entry appears once, at the
//! position where it was first seen.

use indexmap::IndexSet;

/// Accumulates strings in first-seen order, ignoring exact duplicates.
#[derive(Debug, Clone, Default)]
pub struct OrderedUnion {
    items: IndexSet<String>,
}

impl OrderedUnion {
    /// Create an empty union
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every item not already present, preserving order
    pub fn extend<I, S>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for item in items {
            let item = item.as_ref();
            if !self.items.contains(item) {
                self.items.insert(item.to_string());
            }
        }
        self
    }

    /// Number of distinct items collected
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing has been collected
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the union, returning items in first-seen order
    pub fn into_vec(self) -> Vec<String> {
        self.items.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_preserves_first_seen_order() {
        let mut union = OrderedUnion::new();
        union
            .extend(["src/a.rs", "src/b.rs"])
            .extend(["src/c.rs", "src/a.rs"]);
        assert_eq!(union.into_vec(), vec!["src/a.rs", "src/b.rs", "src/c.rs"]);
    }

    #[test]
    fn test_union_is_case_sensitive() {
        let mut union = OrderedUnion::new();
        union.extend(["User.id", "user.id"]);
        assert_eq!(union.len(), 2);
    }
}
