//! Option-label matching for combobox filtering.
//!
//! Four matching strategies are recognized, identified externally by the
//! strings `contains`, `fuzzy`, `startsWith`, and `startsWithPerTerm`. All
//! matching is case-insensitive: pattern and label are lowercased before
//! comparison.

use std::fmt;
use std::str::FromStr;

/// How a typed filter pattern is matched against option labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMethod {
    /// Substring match.
    Contains,
    /// Subsequence match: pattern characters appear in order, not
    /// necessarily contiguously.
    #[default]
    Fuzzy,
    /// Prefix match.
    StartsWith,
    /// Prefix of the whole label or of any whitespace-delimited term in it.
    StartsWithPerTerm,
}

/// The recognized method names, in their external spelling.
pub const FILTER_METHOD_NAMES: [&str; 4] = ["contains", "fuzzy", "startsWith", "startsWithPerTerm"];

/// Error returned by [`FilterMethod::from_str`] for an unrecognized name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter method {value:?} (expected one of contains, fuzzy, startsWith, startsWithPerTerm)")]
pub struct ParseFilterMethodError {
    /// The rejected input.
    pub value: String,
}

impl FilterMethod {
    /// The method's external name.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterMethod::Contains => "contains",
            FilterMethod::Fuzzy => "fuzzy",
            FilterMethod::StartsWith => "startsWith",
            FilterMethod::StartsWithPerTerm => "startsWithPerTerm",
        }
    }

    /// Parse a method name, degrading to [`FilterMethod::Fuzzy`] on failure.
    ///
    /// An unrecognized name is never an error: the default is substituted and
    /// a warning is logged naming the rejected value and the accepted set.
    pub fn parse_lossy(s: &str) -> Self {
        s.parse().unwrap_or_else(|err: ParseFilterMethodError| {
            log::warn!("{err}; falling back to \"fuzzy\"");
            FilterMethod::Fuzzy
        })
    }

    /// Whether `label` matches `pattern` under this method.
    ///
    /// An empty pattern matches everything.
    pub fn matches(self, pattern: &str, label: &str) -> bool {
        if pattern.is_empty() {
            return true;
        }
        let pattern = pattern.to_lowercase();
        let label = label.to_lowercase();
        match self {
            FilterMethod::Contains => label.contains(&pattern),
            FilterMethod::StartsWith => label.starts_with(&pattern),
            FilterMethod::StartsWithPerTerm => {
                label.starts_with(&pattern)
                    || label.split_whitespace().any(|term| term.starts_with(&pattern))
            }
            FilterMethod::Fuzzy => is_subsequence(&pattern, &label),
        }
    }
}

impl FromStr for FilterMethod {
    type Err = ParseFilterMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contains" => Ok(FilterMethod::Contains),
            "fuzzy" => Ok(FilterMethod::Fuzzy),
            "startsWith" => Ok(FilterMethod::StartsWith),
            "startsWithPerTerm" => Ok(FilterMethod::StartsWithPerTerm),
            other => Err(ParseFilterMethodError {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for FilterMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True when every char of `pattern` appears in `text` in order.
fn is_subsequence(pattern: &str, text: &str) -> bool {
    let mut chars = text.chars();
    pattern.chars().all(|p| chars.any(|c| c == p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_substring() {
        assert!(FilterMethod::Contains.matches("ab", "xaby"));
        assert!(!FilterMethod::Contains.matches("ab", "ayb"));
    }

    #[test]
    fn starts_with_is_prefix() {
        assert!(FilterMethod::StartsWith.matches("ab", "abc"));
        assert!(!FilterMethod::StartsWith.matches("ab", "xab"));
    }

    #[test]
    fn starts_with_per_term_matches_inner_terms() {
        assert!(FilterMethod::StartsWithPerTerm.matches("bar", "foo bar"));
        assert!(!FilterMethod::StartsWithPerTerm.matches("bar", "foobar"));
        // Also matches as a plain prefix of the whole label
        assert!(FilterMethod::StartsWithPerTerm.matches("foo", "foo bar"));
    }

    #[test]
    fn fuzzy_is_ordered_subsequence() {
        assert!(FilterMethod::Fuzzy.matches("ac", "abc"));
        assert!(FilterMethod::Fuzzy.matches("ac", "axxc"));
        assert!(!FilterMethod::Fuzzy.matches("ca", "abc"));
    }

    #[test]
    fn matching_ignores_case() {
        assert!(FilterMethod::Contains.matches("AB", "xaby"));
        assert!(FilterMethod::StartsWith.matches("ab", "ABC"));
        assert!(FilterMethod::Fuzzy.matches("AC", "abc"));
    }

    #[test]
    fn empty_pattern_matches_everything() {
        for method in [
            FilterMethod::Contains,
            FilterMethod::Fuzzy,
            FilterMethod::StartsWith,
            FilterMethod::StartsWithPerTerm,
        ] {
            assert!(method.matches("", "anything"));
            assert!(method.matches("", ""));
        }
    }

    #[test]
    fn parse_recognizes_all_names() {
        for name in FILTER_METHOD_NAMES {
            let method: FilterMethod = name.parse().unwrap();
            assert_eq!(method.as_str(), name);
        }
    }

    #[test]
    fn parse_rejects_unknown_name() {
        let err = "regex".parse::<FilterMethod>().unwrap_err();
        assert_eq!(err.value, "regex");
        let msg = err.to_string();
        assert!(msg.contains("regex"));
        assert!(msg.contains("startsWithPerTerm"));
    }

    #[test]
    fn parse_lossy_falls_back_to_fuzzy() {
        assert_eq!(FilterMethod::parse_lossy("regex"), FilterMethod::Fuzzy);
        assert_eq!(FilterMethod::parse_lossy("contains"), FilterMethod::Contains);
    }

    #[test]
    fn default_is_fuzzy() {
        assert_eq!(FilterMethod::default(), FilterMethod::Fuzzy);
    }
}
