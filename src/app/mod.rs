//! Application root and navigation.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     ShellConfig → Application (router + layout shell) → Arc
//!
//! Navigation (in-process):
//!     MountedApp::navigate(url)
//!     → history.rs (push / replace / back / forward)
//!     → Application::render(location)
//!     → Rendered { outcome, route, page, tree }
//!
//! Navigation (HTTP):
//!     GET path → Application::render(location) → HTML document
//! ```

pub mod history;
pub mod navigator;
pub mod root;

pub use history::History;
pub use navigator::MountedApp;
pub use root::{Application, LayoutShell, Outcome, Rendered, LAYOUT_INSTANCE_ATTR};
