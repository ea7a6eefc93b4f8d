//! Style pattern compilation and matching.
//!
//! A style pattern is always matched against the *whole* value: the source is
//! wrapped as `^(?:SOURCE)$` before compilation, so a pattern that only covers
//! a substring reports [`MatchResult::NoMatch`].

use regex::{Regex, RegexBuilder};
use std::ops::Range;

/// Upper bound for the compiled program of a single style pattern.
///
/// Patterns are recompiled on every source change and come from markup, so a
/// runaway repetition must fail compilation instead of eating memory.
const COMPILED_SIZE_LIMIT: usize = 1 << 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The source is not a valid regular expression.
    Syntax(String),
    /// The compiled pattern exceeds [`COMPILED_SIZE_LIMIT`].
    TooLarge,
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternError::Syntax(msg) => write!(f, "invalid style pattern: {msg}"),
            PatternError::TooLarge => write!(f, "style pattern exceeds the compiled size limit"),
        }
    }
}

impl std::error::Error for PatternError {}

impl From<regex::Error> for PatternError {
    fn from(err: regex::Error) -> Self {
        match err {
            regex::Error::CompiledTooBig(_) => PatternError::TooLarge,
            other => PatternError::Syntax(other.to_string()),
        }
    }
}

/// Outcome of matching a value against a [`StylePattern`].
///
/// `Groups[i - 1]` holds the byte range of capture group `i`; `None` marks a
/// group that did not participate (e.g. the untaken side of an alternation).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchResult {
    NoMatch,
    Groups(Vec<Option<Range<usize>>>),
}

impl MatchResult {
    #[inline]
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Groups(_))
    }
}

/// A compiled, whole-string-anchored style pattern.
#[derive(Clone, Debug)]
pub struct StylePattern {
    source: String,
    regex: Regex,
}

impl StylePattern {
    /// Compile `source` as an anchored pattern.
    pub fn compile(source: &str) -> Result<Self, PatternError> {
        let anchored = format!("^(?:{source})$");
        let regex = RegexBuilder::new(&anchored)
            .size_limit(COMPILED_SIZE_LIMIT)
            .build()?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// Compile `source`, degrading to `None` on failure.
    ///
    /// A broken pattern means "no highlighting", never an error surfaced to
    /// the user, so the failure is only logged.
    pub fn try_compile(source: &str) -> Option<Self> {
        match Self::compile(source) {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                log::debug!(
                    target: "richinput.pattern",
                    "ignoring style pattern {source:?}: {err}"
                );
                None
            }
        }
    }

    /// The pattern source as written, without the anchoring wrapper.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of capturing groups, not counting the implicit whole-match group.
    pub fn group_count(&self) -> usize {
        self.regex.captures_len().saturating_sub(1)
    }

    /// Returns `true` if the pattern matches the entire value.
    pub fn is_full_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    /// Match `value` and report the offsets of every capture group.
    pub fn match_groups(&self, value: &str) -> MatchResult {
        let Some(caps) = self.regex.captures(value) else {
            return MatchResult::NoMatch;
        };
        let groups = caps
            .iter()
            .skip(1)
            .map(|m| m.map(|m| m.range()))
            .collect();
        MatchResult::Groups(groups)
    }
}

impl PartialEq for StylePattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for StylePattern {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_both_ends() {
        let p = StylePattern::compile(r"\d+").unwrap();
        assert!(p.is_full_match("123"));
        assert!(!p.is_full_match("abc123"));
        assert!(!p.is_full_match("123abc"));
        assert_eq!(p.match_groups("x1"), MatchResult::NoMatch);
    }

    #[test]
    fn alternation_anchors_as_a_whole() {
        // Without the non-capturing wrapper `^a|b$` would match "ax".
        let p = StylePattern::compile("a|b").unwrap();
        assert!(!p.is_full_match("ax"));
        assert!(!p.is_full_match("xb"));
        assert!(p.is_full_match("b"));
    }

    #[test]
    fn reports_non_participating_groups_as_none() {
        let p = StylePattern::compile("(a)|(b)").unwrap();
        assert_eq!(p.group_count(), 2);
        assert_eq!(
            p.match_groups("a"),
            MatchResult::Groups(vec![Some(0..1), None])
        );
    }

    #[test]
    fn reports_zero_length_groups() {
        let p = StylePattern::compile("(x*)(y)").unwrap();
        assert_eq!(
            p.match_groups("y"),
            MatchResult::Groups(vec![Some(0..0), Some(0..1)])
        );
    }

    #[test]
    fn group_offsets_are_bytes_on_char_boundaries() {
        let p = StylePattern::compile("(€+)(.)").unwrap();
        let MatchResult::Groups(groups) = p.match_groups("€€b") else {
            panic!("expected a match");
        };
        assert_eq!(groups, vec![Some(0..6), Some(6..7)]);
    }

    #[test]
    fn invalid_source_is_a_syntax_error() {
        let err = StylePattern::compile("(unclosed").unwrap_err();
        assert!(matches!(err, PatternError::Syntax(_)));
        assert!(StylePattern::try_compile("(unclosed").is_none());
    }

    #[test]
    fn oversized_source_is_rejected() {
        let err = StylePattern::compile(r"(\w{1000}){1000}").unwrap_err();
        assert_eq!(err, PatternError::TooLarge);
    }

    #[test]
    fn empty_source_matches_only_empty_value() {
        let p = StylePattern::compile("").unwrap();
        assert_eq!(p.group_count(), 0);
        assert!(p.is_full_match(""));
        assert!(!p.is_full_match("a"));
    }

    #[test]
    fn equality_follows_source() {
        let a = StylePattern::compile("(a)").unwrap();
        let b = StylePattern::compile("(a)").unwrap();
        let c = StylePattern::compile("(b)").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.source(), "(a)");
    }
}
