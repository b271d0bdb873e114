//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration (or fall back to defaults)
//! - Build the application once
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Command-line overrides are applied before validation
//! - Nothing here logs: configuration is loaded before the subscriber exists

use std::path::Path;
use std::sync::Arc;

use crate::app::Application;
use crate::config::{load_config, validate_config, ConfigError, ShellConfig};
use crate::error::ShellError;
use crate::ui::ComponentRegistry;

/// Load configuration from `path`, or defaults when no path is given, then
/// apply `bind_override`.
pub fn load(path: Option<&Path>, bind_override: Option<&str>) -> Result<ShellConfig, ShellError> {
    let registry = ComponentRegistry::builtin();
    let mut config = match path {
        Some(p) => load_config(p, &registry)?,
        None => ShellConfig::default(),
    };

    if let Some(bind) = bind_override {
        config.listener.bind_address = bind.to_string();
        validate_config(&config, &registry).map_err(ConfigError::Validation)?;
    }

    Ok(config)
}

/// Where the configuration came from, for the startup log.
pub fn config_source(path: Option<&Path>) -> String {
    match path {
        Some(p) => p.display().to_string(),
        None => "defaults".to_string(),
    }
}

/// Build the shared application.
pub fn build_application(config: &ShellConfig) -> Result<Arc<Application>, ShellError> {
    Ok(Arc::new(Application::from_config(config)?))
}
