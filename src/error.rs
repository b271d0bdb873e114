//! Crate-level error type.

use thiserror::Error;

use crate::config::ConfigError;
use crate::routing::RouteError;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("route table error: {0}")]
    Route(#[from] RouteError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("metrics exporter error: {0}")]
    Metrics(String),

    #[error("logging already initialized")]
    LoggingInit,
}

pub type Result<T> = std::result::Result<T, ShellError>;
