//! UI composition subsystem.
//!
//! # Data Flow
//! ```text
//! ComponentRegistry (name → Arc<dyn Page>)
//!     → routing (route entries reference pages)
//!     → Layout::render(active_path, Some(page.render()))
//!     → Node tree
//!     → HTML document / JSON
//! ```
//!
//! # Design Decisions
//! - Pages take no parameters; anything they need comes from their own client
//! - The layout never inspects the slot contents
//! - Components are opaque behind traits; the crate ships minimal defaults

pub mod component;
pub mod layout;
pub mod node;
pub mod pages;
pub mod registry;

pub use component::{Layout, Page};
pub use layout::{BasicLayout, NavLink, CONTENT_SLOT};
pub use node::Node;
pub use pages::{NotFoundPage, SimulationPage};
pub use registry::ComponentRegistry;
