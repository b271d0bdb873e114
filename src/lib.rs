//! Simulation console shell.
//!
//! Route table bootstrap for the generative agents console: a static,
//! order-independent map from URL paths to pages, rendered inside one
//! persistent layout shell, plus the HTTP harness that serves it.

pub mod app;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod ui;

pub use app::{Application, MountedApp};
pub use config::ShellConfig;
pub use error::ShellError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
