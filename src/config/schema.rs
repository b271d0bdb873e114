//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the shell.
//! All types derive Serde traits for deserialization from config files.
//! An empty file yields the stock console: `/` and `/simulation` both
//! rendering the simulation page inside the basic layout.

use serde::{Deserialize, Serialize};

use crate::routing::{MatchOptions, TrailingSlash};

/// Root configuration for the shell.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Route table mapping paths to page names.
    pub routes: Vec<RouteConfig>,

    /// Matching and fallback behavior.
    pub routing: RoutingConfig,

    /// Layout shell chrome.
    pub layout: LayoutConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Static asset serving.
    pub static_files: StaticFilesConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            routes: default_routes(),
            routing: RoutingConfig::default(),
            layout: LayoutConfig::default(),
            timeouts: TimeoutConfig::default(),
            observability: ObservabilityConfig::default(),
            static_files: StaticFilesConfig::default(),
        }
    }
}

fn default_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig {
            path: "/".to_string(),
            page: "simulation".to_string(),
        },
        RouteConfig {
            path: "/simulation".to_string(),
            page: "simulation".to_string(),
        },
    ]
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// One route table entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Literal path, must start with '/'.
    pub path: String,

    /// Registered page name.
    pub page: String,
}

/// What the content slot shows when no route matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackMode {
    /// Leave the slot empty; the layout still renders.
    #[default]
    Empty,
    /// Render the not-found page and answer HTTP 404.
    NotFound,
}

/// Route matching configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Compare paths case-sensitively.
    pub case_sensitive: bool,

    /// Trailing slash handling for non-root paths.
    pub trailing_slash: TrailingSlash,

    /// Behavior for unmatched paths.
    pub fallback: FallbackMode,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            trailing_slash: TrailingSlash::Strict,
            fallback: FallbackMode::Empty,
        }
    }
}

impl RoutingConfig {
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            case_sensitive: self.case_sensitive,
            trailing_slash: self.trailing_slash,
        }
    }
}

/// Layout shell configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Brand title shown in the header and the document title.
    pub title: String,

    /// Header navigation links.
    pub nav: Vec<NavLinkConfig>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            title: "Generative Agents".to_string(),
            nav: vec![NavLinkConfig {
                label: "Simulation".to_string(),
                href: "/simulation".to_string(),
            }],
        }
    }
}

/// A navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NavLinkConfig {
    pub label: String,
    pub href: String,
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

/// Static asset configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Serve files from `dir`.
    pub enabled: bool,

    /// Directory on disk.
    pub dir: String,

    /// URL prefix the directory is mounted at.
    pub url_prefix: String,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dir: "frontend/static".to_string(),
            url_prefix: "/static".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_yields_stock_routes() {
        let config: ShellConfig = toml::from_str("").unwrap();

        let paths: Vec<_> = config.routes.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/simulation"]);
        assert!(config.routes.iter().all(|r| r.page == "simulation"));
        assert_eq!(config.routing.fallback, FallbackMode::Empty);
        assert_eq!(config.routing.match_options(), MatchOptions::default());
    }

    #[test]
    fn test_partial_sections() {
        let config: ShellConfig = toml::from_str(
            r#"
            [routing]
            fallback = "not_found"
            trailing_slash = "ignore"

            [[routes]]
            path = "/"
            page = "simulation"

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.routes.len(), 1);
        assert_eq!(config.routing.fallback, FallbackMode::NotFound);
        assert_eq!(config.routing.trailing_slash, TrailingSlash::Ignore);
        assert!(config.routing.case_sensitive);
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.observability.log_level, "info");
        assert_eq!(config.layout.title, "Generative Agents");
    }
}
