//! Route matching logic.
//!
//! # Responsibilities
//! - Normalize navigable paths according to `MatchOptions`
//! - Match a path exactly against a registered pattern
//!
//! # Design Decisions
//! - Exact literal matching by default (case-sensitive, strict trailing slash)
//! - Normalization is applied to both the pattern and the candidate
//! - No patterns with parameters or wildcards

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// How a trailing slash on a non-root path is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingSlash {
    /// `/simulation/` and `/simulation` are different paths.
    #[default]
    Strict,
    /// A single trailing slash is ignored.
    Ignore,
}

/// Options controlling path comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    pub case_sensitive: bool,
    pub trailing_slash: TrailingSlash,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            trailing_slash: TrailingSlash::Strict,
        }
    }
}

impl MatchOptions {
    /// Canonical form of `path` under these options.
    pub fn normalize<'a>(&self, path: &'a str) -> Cow<'a, str> {
        let trimmed = match self.trailing_slash {
            TrailingSlash::Ignore if path.len() > 1 && path.ends_with('/') => {
                &path[..path.len() - 1]
            }
            _ => path,
        };

        if self.case_sensitive {
            Cow::Borrowed(trimmed)
        } else {
            Cow::Owned(trimmed.to_lowercase())
        }
    }
}

/// Trait for matching navigable paths against a condition.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// Matches one literal path.
#[derive(Debug, Clone)]
pub struct ExactPathMatcher {
    pattern: String,
    options: MatchOptions,
}

impl ExactPathMatcher {
    /// Create a new exact matcher. The pattern is stored normalized.
    pub fn new(pattern: &str, options: MatchOptions) -> Self {
        Self {
            pattern: options.normalize(pattern).into_owned(),
            options,
        }
    }

    /// The normalized pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Matcher for ExactPathMatcher {
    fn matches(&self, path: &str) -> bool {
        self.options.normalize(path) == self.pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_matcher_default() {
        let matcher = ExactPathMatcher::new("/simulation", MatchOptions::default());

        assert!(matcher.matches("/simulation"));
        assert!(!matcher.matches("/simulation/"));
        assert!(!matcher.matches("/Simulation"));
        assert!(!matcher.matches("/simulation/run"));
        assert!(!matcher.matches("/"));
    }

    #[test]
    fn test_lenient_options() {
        let options = MatchOptions {
            case_sensitive: false,
            trailing_slash: TrailingSlash::Ignore,
        };
        let matcher = ExactPathMatcher::new("/Simulation", options);

        assert_eq!(matcher.pattern(), "/simulation");
        assert!(matcher.matches("/simulation/"));
        assert!(matcher.matches("/SIMULATION"));
        assert!(!matcher.matches("/simulation//"));
    }

    #[test]
    fn test_root_keeps_its_slash() {
        let options = MatchOptions {
            case_sensitive: true,
            trailing_slash: TrailingSlash::Ignore,
        };
        let root = ExactPathMatcher::new("/", options);
        assert!(root.matches("/"));
        assert!(!root.matches(""));
    }
}
