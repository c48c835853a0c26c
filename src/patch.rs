//! Patch specification and in-memory substitution
//!
//! A [`PatchSpec`] is an immutable `(expected, replacement)` pair. Applying it
//! to a string is pure: it either produces the rewritten text or reports that
//! the expected text is absent. File I/O lives in [`crate::patcher`].

use serde::Deserialize;

use crate::error::{Result, TextpatchError};

/// How many occurrences of the expected text are replaced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplaceMode {
    /// Replace every occurrence
    #[default]
    All,
    /// Replace only the first occurrence
    First,
}

/// The (expected, replacement) pair defining a single substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchSpec {
    expected: String,
    replacement: String,
}

/// Rewritten text along with match counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub content: String,
    /// Occurrences of the expected text in the original
    pub occurrences: usize,
    /// Occurrences actually replaced
    pub replaced: usize,
}

impl PatchSpec {
    /// Create a patch spec; `expected` must be non-empty
    pub fn new(expected: impl Into<String>, replacement: impl Into<String>) -> Result<Self> {
        let expected = expected.into();
        if expected.is_empty() {
            return Err(TextpatchError::EmptyPattern);
        }

        Ok(Self {
            expected,
            replacement: replacement.into(),
        })
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Count non-overlapping occurrences of the expected text
    pub fn count_in(&self, content: &str) -> usize {
        content.matches(self.expected.as_str()).count()
    }

    /// Substitute the expected text in `content`
    ///
    /// Returns `None` when the expected text does not occur.
    pub fn apply_to(&self, content: &str, mode: ReplaceMode) -> Option<Substitution> {
        let occurrences = self.count_in(content);
        if occurrences == 0 {
            return None;
        }

        let (content, replaced) = match mode {
            ReplaceMode::All => (
                content.replace(self.expected.as_str(), &self.replacement),
                occurrences,
            ),
            ReplaceMode::First => (
                content.replacen(self.expected.as_str(), &self.replacement, 1),
                1,
            ),
        };

        Some(Substitution {
            content,
            occurrences,
            replaced,
        })
    }
}

impl std::fmt::Display for ReplaceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplaceMode::All => write!(f, "all"),
            ReplaceMode::First => write!(f, "first"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn spec(expected: &str, replacement: &str) -> PatchSpec {
        PatchSpec::new(expected, replacement).unwrap()
    }

    #[test]
    fn test_empty_expected_rejected() {
        let result = PatchSpec::new("", "anything");
        assert!(matches!(result, Err(TextpatchError::EmptyPattern)));
    }

    #[test]
    fn test_empty_replacement_allowed() {
        let spec = spec("B\n", "");
        let sub = spec.apply_to("A\nB\nC\n", ReplaceMode::All).unwrap();
        assert_eq!(sub.content, "A\nC\n");
    }

    #[test]
    fn test_single_occurrence_expands_section() {
        let spec = spec("B\n", "B2\nB3\n");
        let sub = spec.apply_to("A\nB\nC\n", ReplaceMode::All).unwrap();
        assert_eq!(sub.content, "A\nB2\nB3\nC\n");
        assert_eq!(sub.occurrences, 1);
        assert_eq!(sub.replaced, 1);
    }

    #[test]
    fn test_absent_expected_returns_none() {
        let spec = spec("X\n", "Y\n");
        assert!(spec.apply_to("A\nB\nC\n", ReplaceMode::All).is_none());
        assert!(spec.apply_to("A\nB\nC\n", ReplaceMode::First).is_none());
    }

    #[test]
    fn test_all_mode_replaces_every_occurrence() {
        let spec = spec("B", "Z");
        let sub = spec.apply_to("ABCB", ReplaceMode::All).unwrap();
        assert_eq!(sub.content, "AZCZ");
        assert_eq!(sub.occurrences, 2);
        assert_eq!(sub.replaced, 2);
    }

    #[test]
    fn test_first_mode_replaces_first_occurrence_only() {
        let spec = spec("B", "Z");
        let sub = spec.apply_to("ABCB", ReplaceMode::First).unwrap();
        assert_eq!(sub.content, "AZCB");
        assert_eq!(sub.occurrences, 2);
        assert_eq!(sub.replaced, 1);
    }

    #[test]
    fn test_literal_not_regex() {
        let spec = spec("a.*b", "X");
        assert!(spec.apply_to("aXXb", ReplaceMode::All).is_none());
        let sub = spec.apply_to("[a.*b]", ReplaceMode::All).unwrap();
        assert_eq!(sub.content, "[X]");
    }

    #[test]
    fn test_replacement_containing_expected_is_not_rescanned() {
        let spec = spec("ab", "abab");
        let sub = spec.apply_to("ab-ab", ReplaceMode::All).unwrap();
        assert_eq!(sub.content, "abab-abab");
        assert_eq!(sub.replaced, 2);
    }

    #[test]
    fn test_surrounding_bytes_untouched() {
        let original = "    key: \"value\"\n  other: ü\n";
        let spec = spec("\"value\"", "\"v2\"");
        let sub = spec.apply_to(original, ReplaceMode::All).unwrap();
        assert_eq!(sub.content, "    key: \"v2\"\n  other: ü\n");
    }

    #[test]
    fn test_second_application_finds_nothing() {
        let spec = spec("B\n", "B2\nB3\n");
        let first = spec.apply_to("A\nB\nC\n", ReplaceMode::All).unwrap();
        assert!(spec.apply_to(&first.content, ReplaceMode::All).is_none());
    }

    #[test]
    fn test_count_non_overlapping() {
        let spec = spec("aa", "b");
        assert_eq!(spec.count_in("aaaa"), 2);
        assert_eq!(spec.count_in("aaa"), 1);
    }

    #[test]
    fn test_replace_mode_yaml_names() {
        let mode: ReplaceMode = serde_yaml::from_str("first").unwrap();
        assert_eq!(mode, ReplaceMode::First);
        assert_eq!(ReplaceMode::default(), ReplaceMode::All);
        assert_eq!(ReplaceMode::All.to_string(), "all");
    }
}
