//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation (URL, relative or absolute)
//!     → location.rs (parse path, query, fragment)
//!     → router.rs (find the entry whose matcher accepts the path)
//!     → matcher.rs (normalization + exact comparison)
//!     → Return: matched RouteEntry or NoMatch
//!
//! Route Compilation (at startup):
//!     RouteConfig[]
//!     → Resolve page names in the ComponentRegistry
//!     → Reject non-canonical and conflicting paths
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Exact matching only, no parameters or wildcards
//! - Deterministic: same input always matches the same entry
//! - Several paths may share one page

pub mod location;
pub mod matcher;
pub mod router;

pub use location::{canonical_path, is_canonical_path, Location};
pub use matcher::{MatchOptions, Matcher, TrailingSlash};
pub use router::{RouteEntry, RouteMatch, RouteSummary, Router, RouterBuilder};

use thiserror::Error;

/// Errors raised while building the route table or parsing locations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("route path `{0}` must start with '/' and be percent-encoded without query or fragment")]
    InvalidPath(String),

    #[error("route `{path}` already maps to page `{existing}`, cannot map it to `{requested}`")]
    Conflict {
        path: String,
        existing: String,
        requested: String,
    },

    #[error("route `{path}` refers to unknown page `{page}`")]
    UnknownPage { path: String, page: String },

    #[error("invalid location `{input}`: {reason}")]
    InvalidLocation { input: String, reason: String },
}
