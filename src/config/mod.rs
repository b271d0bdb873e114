//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks against the page registry)
//!     → ShellConfig (validated, immutable)
//!     → Application built once at startup
//! ```
//!
//! # Design Decisions
//! - Config is read once; the route table it produces never changes at runtime
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    FallbackMode, LayoutConfig, ListenerConfig, LogFormat, NavLinkConfig, ObservabilityConfig,
    RouteConfig, RoutingConfig, ShellConfig, StaticFilesConfig, TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
