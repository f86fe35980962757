//! Record identifier generation

use ulid::Ulid;

/// Generate a new record id of the form `<prefix>_<ULID>`.
///
/// ULIDs sort by creation time, so ids generated later compare greater.
///
/// ```rust
/// let id = promptdesk_common::generate_id("bld");
/// assert!(id.starts_with("bld_"));
/// ```
pub fn generate_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Ulid::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_prefix_and_length() {
        let id = generate_id("rev");
        assert!(id.starts_with("rev_"));
        assert_eq!(id.len(), "rev_".len() + 26);
    }

    #[test]
    fn test_generate_id_unique() {
        assert_ne!(generate_id("std"), generate_id("std"));
    }
}
