//! Route lookup.
//!
//! # Responsibilities
//! - Store route entries built at startup
//! - Look up the entry for a navigable path
//! - Return the matched entry or an explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (shared via Arc without locks)
//! - O(n) scan over each entry's matcher; tables hold a few paths
//! - Conflicts are rejected while building, so lookup never has to choose
//!   between entries and registration order is irrelevant

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::RouteConfig;
use crate::routing::location::is_canonical_path;
use crate::routing::matcher::{ExactPathMatcher, MatchOptions, Matcher};
use crate::routing::RouteError;
use crate::ui::{ComponentRegistry, Page};

/// A path paired with the page rendered when it is active.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    path: String,
    page: Arc<dyn Page>,
    matcher: ExactPathMatcher,
}

impl RouteEntry {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn page(&self) -> &Arc<dyn Page> {
        &self.page
    }

    pub fn matches(&self, path: &str) -> bool {
        self.matcher.matches(path)
    }
}

/// Serializable view of a route entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub path: String,
    pub page: String,
}

/// Result of a route lookup.
#[derive(Debug)]
pub enum RouteMatch<'a> {
    Matched(&'a RouteEntry),
    NoMatch,
}

impl<'a> RouteMatch<'a> {
    pub fn entry(&self) -> Option<&'a RouteEntry> {
        match self {
            RouteMatch::Matched(entry) => Some(entry),
            RouteMatch::NoMatch => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, RouteMatch::Matched(_))
    }
}

/// Immutable route table.
#[derive(Debug)]
pub struct Router {
    entries: Vec<RouteEntry>,
    options: MatchOptions,
}

impl Router {
    pub fn builder(options: MatchOptions) -> RouterBuilder {
        RouterBuilder {
            options,
            entries: Vec::new(),
        }
    }

    /// Build a router from configured routes, resolving page names in `registry`.
    pub fn from_config(
        routes: &[RouteConfig],
        options: MatchOptions,
        registry: &ComponentRegistry,
    ) -> Result<Self, RouteError> {
        let mut builder = Self::builder(options);
        for route in routes {
            let page = registry
                .get(&route.page)
                .ok_or_else(|| RouteError::UnknownPage {
                    path: route.path.clone(),
                    page: route.page.clone(),
                })?;
            builder = builder.route(&route.path, page)?;
        }
        Ok(builder.build())
    }

    /// Look up the entry for `path`.
    pub fn resolve(&self, path: &str) -> RouteMatch<'_> {
        match self.entries.iter().find(|e| e.matches(path)) {
            Some(entry) => RouteMatch::Matched(entry),
            None => RouteMatch::NoMatch,
        }
    }

    /// Entries in registration order.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// All paths that render the named page.
    pub fn paths_for(&self, page: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.page.name() == page)
            .map(|e| e.path.as_str())
            .collect()
    }

    pub fn summaries(&self) -> Vec<RouteSummary> {
        self.entries
            .iter()
            .map(|e| RouteSummary {
                path: e.path.clone(),
                page: e.page.name().to_string(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collects route entries and freezes them into a [`Router`].
#[derive(Debug)]
pub struct RouterBuilder {
    options: MatchOptions,
    entries: Vec<RouteEntry>,
}

impl RouterBuilder {
    /// Register `path` for `page`.
    ///
    /// Re-registering a path for the same page is a no-op; registering it for
    /// a different page is a conflict. Paths must be absolute and already
    /// percent-encoded, otherwise no location could ever match them.
    pub fn route(mut self, path: &str, page: Arc<dyn Page>) -> Result<Self, RouteError> {
        if !is_canonical_path(path) {
            return Err(RouteError::InvalidPath(path.to_string()));
        }

        let matcher = ExactPathMatcher::new(path, self.options);
        let existing = self
            .entries
            .iter()
            .find(|e| e.matcher.pattern() == matcher.pattern());
        if let Some(existing) = existing {
            if existing.page.name() == page.name() {
                tracing::debug!(path = %path, page = page.name(), "Duplicate route ignored");
                return Ok(self);
            }
            return Err(RouteError::Conflict {
                path: path.to_string(),
                existing: existing.page.name().to_string(),
                requested: page.name().to_string(),
            });
        }

        self.entries.push(RouteEntry {
            path: path.to_string(),
            matcher,
            page,
        });
        Ok(self)
    }

    pub fn build(self) -> Router {
        Router {
            entries: self.entries,
            options: self.options,
        }
    }
}
