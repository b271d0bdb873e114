//! Application root.
//!
//! # Responsibilities
//! - Build exactly one router and one layout shell at startup
//! - Render a location: resolve the route, render the page, place it in the
//!   layout's content slot
//! - Apply the fallback policy for unmatched paths
//!
//! # Design Decisions
//! - The application is immutable and shared via Arc; renders are pure apart
//!   from counters
//! - The layout shell keeps one instance identity for the process lifetime
//! - Unmatched paths are not errors

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use uuid::Uuid;

use crate::config::{FallbackMode, ShellConfig};
use crate::error::ShellError;
use crate::observability::metrics;
use crate::routing::{Location, RouteMatch, Router};
use crate::ui::node::Node;
use crate::ui::{BasicLayout, ComponentRegistry, Layout, NotFoundPage, Page, CONTENT_SLOT};

/// Attribute carrying the layout instance identity on the layout root.
pub const LAYOUT_INSTANCE_ATTR: &str = "data-layout-instance";

/// How a render resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// A route matched; its page is in the slot.
    Matched,
    /// No route matched; the slot is empty.
    Empty,
    /// No route matched; the not-found page is in the slot.
    NotFound,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Matched => "matched",
            Outcome::Empty => "empty",
            Outcome::NotFound => "not_found",
        }
    }
}

/// The result of rendering one location.
#[derive(Debug, Clone, Serialize)]
pub struct Rendered {
    pub location: Location,
    pub route: Option<String>,
    pub page: Option<String>,
    pub outcome: Outcome,
    pub tree: Node,
}

impl Rendered {
    /// The subtree currently in the content slot, if any.
    pub fn slot_content(&self) -> Option<&Node> {
        self.tree
            .find_slot(CONTENT_SLOT)
            .and_then(|slot| slot.children().first())
    }
}

/// The single layout instance wrapping every page.
#[derive(Debug)]
pub struct LayoutShell {
    layout: Arc<dyn Layout>,
    instance: Uuid,
    renders: AtomicU64,
}

impl LayoutShell {
    pub fn new(layout: Arc<dyn Layout>) -> Self {
        Self {
            layout,
            instance: Uuid::new_v4(),
            renders: AtomicU64::new(0),
        }
    }

    pub fn instance_id(&self) -> Uuid {
        self.instance
    }

    pub fn render_count(&self) -> u64 {
        self.renders.load(Ordering::Relaxed)
    }

    fn render(&self, active_path: &str, slot: Option<Node>) -> Node {
        self.renders.fetch_add(1, Ordering::Relaxed);
        self.layout
            .render(active_path, slot)
            .attr(LAYOUT_INSTANCE_ATTR, self.instance.to_string())
    }
}

/// Route table plus layout shell, built once at startup.
#[derive(Debug)]
pub struct Application {
    router: Router,
    shell: LayoutShell,
    fallback: FallbackMode,
    not_found: Arc<dyn Page>,
    title: String,
}

impl Application {
    /// Build from configuration using the built-in pages.
    pub fn from_config(config: &ShellConfig) -> Result<Self, ShellError> {
        Self::with_registry(config, &ComponentRegistry::builtin())
    }

    /// Build from configuration, resolving page names in `registry`.
    pub fn with_registry(
        config: &ShellConfig,
        registry: &ComponentRegistry,
    ) -> Result<Self, ShellError> {
        let router = Router::from_config(
            &config.routes,
            config.routing.match_options(),
            registry,
        )?;
        let layout = BasicLayout::from_config(&config.layout);
        let not_found = registry
            .get("not-found")
            .unwrap_or_else(|| Arc::new(NotFoundPage) as Arc<dyn Page>);

        let app = Self {
            router,
            shell: LayoutShell::new(Arc::new(layout)),
            fallback: config.routing.fallback,
            not_found,
            title: config.layout.title.clone(),
        };

        tracing::info!(
            routes = app.router.len(),
            fallback = ?app.fallback,
            layout_instance = %app.shell.instance_id(),
            "Application initialized"
        );
        Ok(app)
    }

    /// Render `location` inside the layout shell.
    pub fn render(&self, location: &Location) -> Rendered {
        let start = Instant::now();

        let (route, page, outcome, slot) = match self.router.resolve(location.path()) {
            RouteMatch::Matched(entry) => (
                Some(entry.path().to_string()),
                Some(entry.page().name().to_string()),
                Outcome::Matched,
                Some(entry.page().render()),
            ),
            RouteMatch::NoMatch => {
                tracing::debug!(path = %location.path(), "No route matched");
                match self.fallback {
                    FallbackMode::Empty => (None, None, Outcome::Empty, None),
                    FallbackMode::NotFound => (
                        None,
                        Some(self.not_found.name().to_string()),
                        Outcome::NotFound,
                        Some(self.not_found.render()),
                    ),
                }
            }
        };

        let tree = self.shell.render(location.path(), slot);
        metrics::record_render(route.as_deref().unwrap_or("none"), outcome.as_str(), start);

        Rendered {
            location: location.clone(),
            route,
            page,
            outcome,
            tree,
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn layout_instance(&self) -> Uuid {
        self.shell.instance_id()
    }

    pub fn layout_render_count(&self) -> u64 {
        self.shell.render_count()
    }

    pub fn fallback(&self) -> FallbackMode {
        self.fallback
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: &Application, path: &str) -> Rendered {
        app.render(&Location::parse(path).unwrap())
    }

    #[test]
    fn test_root_and_alias_render_identically() {
        let app = Application::from_config(&ShellConfig::default()).unwrap();

        let root = render(&app, "/");
        let alias = render(&app, "/simulation");

        assert_eq!(root.outcome, Outcome::Matched);
        assert_eq!(root.page.as_deref(), Some("simulation"));
        assert_eq!(root.slot_content(), alias.slot_content());
        assert!(root
            .slot_content()
            .unwrap()
            .find_component("simulation-page")
            .is_some());
    }

    #[test]
    fn test_unmatched_leaves_slot_empty() {
        let app = Application::from_config(&ShellConfig::default()).unwrap();
        let rendered = render(&app, "/unknown");

        assert_eq!(rendered.outcome, Outcome::Empty);
        assert!(rendered.route.is_none());
        assert!(rendered.slot_content().is_none());
        assert!(rendered.tree.find_component("basic-layout").is_some());
    }

    #[test]
    fn test_not_found_fallback() {
        let mut config = ShellConfig::default();
        config.routing.fallback = FallbackMode::NotFound;
        let app = Application::from_config(&config).unwrap();
        let rendered = render(&app, "/unknown");

        assert_eq!(rendered.outcome, Outcome::NotFound);
        assert_eq!(rendered.page.as_deref(), Some("not-found"));
        assert!(rendered
            .slot_content()
            .unwrap()
            .find_component("not-found-page")
            .is_some());
    }

    #[test]
    fn test_layout_instance_stamped_on_tree() {
        let app = Application::from_config(&ShellConfig::default()).unwrap();
        let rendered = render(&app, "/");

        let id = app.layout_instance().to_string();
        assert_eq!(rendered.tree.get_attr(LAYOUT_INSTANCE_ATTR), Some(id.as_str()));
        assert_eq!(app.layout_render_count(), 1);
    }

    #[test]
    fn test_query_does_not_affect_matching() {
        let app = Application::from_config(&ShellConfig::default()).unwrap();
        let rendered = render(&app, "/simulation?step=12#agent-3");
        assert_eq!(rendered.route.as_deref(), Some("/simulation"));
    }
}
