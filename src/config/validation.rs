//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (routes reference registered pages)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Detect conflicting routes
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Conflicts are judged under the configured match options
//! - Runs before config is accepted into the system

use std::collections::HashMap;
use std::net::SocketAddr;

use crate::config::schema::ShellConfig;
use crate::routing::is_canonical_path;
use crate::ui::ComponentRegistry;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Paths under this prefix belong to the harness, not the route table.
pub const INTROSPECTION_PREFIX: &str = "/__shell";

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyRouteTable,
    InvalidRoutePath(String),
    ReservedRoutePath(String),
    UnknownPage { path: String, page: String },
    ConflictingRoute { path: String, pages: (String, String) },
    InvalidNavLink(String),
    InvalidBindAddress(String),
    InvalidMetricsAddress(String),
    ZeroTimeout,
    UnknownLogLevel(String),
    InvalidStaticPrefix(String),
    StaticPrefixShadowsRoute(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyRouteTable => write!(f, "route table is empty"),
            ValidationError::InvalidRoutePath(p) => write!(
                f,
                "route path `{}` must start with '/' and be percent-encoded without query or fragment",
                p
            ),
            ValidationError::ReservedRoutePath(p) => {
                write!(f, "route path `{}` is reserved for {}", p, INTROSPECTION_PREFIX)
            }
            ValidationError::UnknownPage { path, page } => {
                write!(f, "route `{}` refers to unknown page `{}`", path, page)
            }
            ValidationError::ConflictingRoute { path, pages } => write!(
                f,
                "route `{}` maps to both `{}` and `{}`",
                path, pages.0, pages.1
            ),
            ValidationError::InvalidNavLink(h) => write!(f, "nav link `{}` must start with '/'", h),
            ValidationError::InvalidBindAddress(a) => write!(f, "invalid bind address `{}`", a),
            ValidationError::InvalidMetricsAddress(a) => write!(f, "invalid metrics address `{}`", a),
            ValidationError::ZeroTimeout => write!(f, "request timeout must be greater than zero"),
            ValidationError::UnknownLogLevel(l) => write!(f, "unknown log level `{}`", l),
            ValidationError::InvalidStaticPrefix(p) => {
                write!(f, "static prefix `{}` must start with '/' and not be '/'", p)
            }
            ValidationError::StaticPrefixShadowsRoute(p) => {
                write!(f, "static prefix shadows route `{}`", p)
            }
        }
    }
}

/// Validate `config` against the pages known to `registry`.
pub fn validate_config(
    config: &ShellConfig,
    registry: &ComponentRegistry,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.routes.is_empty() {
        errors.push(ValidationError::EmptyRouteTable);
    }

    let options = config.routing.match_options();
    let mut seen: HashMap<String, &str> = HashMap::new();
    for route in &config.routes {
        if !is_canonical_path(&route.path) {
            errors.push(ValidationError::InvalidRoutePath(route.path.clone()));
            continue;
        }
        if route.path == INTROSPECTION_PREFIX
            || route.path.starts_with(&format!("{}/", INTROSPECTION_PREFIX))
        {
            errors.push(ValidationError::ReservedRoutePath(route.path.clone()));
        }
        if !registry.contains(&route.page) {
            errors.push(ValidationError::UnknownPage {
                path: route.path.clone(),
                page: route.page.clone(),
            });
        }
        let key = options.normalize(&route.path).into_owned();
        match seen.get(&key) {
            Some(existing) if *existing != route.page => {
                errors.push(ValidationError::ConflictingRoute {
                    path: route.path.clone(),
                    pages: (existing.to_string(), route.page.clone()),
                });
            }
            Some(_) => {}
            None => {
                seen.insert(key, &route.page);
            }
        }
    }

    for link in &config.layout.nav {
        if !link.href.starts_with('/') {
            errors.push(ValidationError::InvalidNavLink(link.href.clone()));
        }
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if config.static_files.enabled {
        let prefix = config.static_files.url_prefix.as_str();
        if !prefix.starts_with('/') || prefix == "/" {
            errors.push(ValidationError::InvalidStaticPrefix(prefix.to_string()));
        } else {
            let nested = format!("{}/", prefix.trim_end_matches('/'));
            for route in &config.routes {
                if route.path == prefix || route.path.starts_with(&nested) {
                    errors.push(ValidationError::StaticPrefixShadowsRoute(route.path.clone()));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
