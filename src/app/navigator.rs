//! Mounted application.
//!
//! A `MountedApp` is one navigable container: the layout shell is mounted
//! once, and every navigation re-renders only the content slot's child.

use std::sync::Arc;

use uuid::Uuid;

use crate::app::history::History;
use crate::app::root::{Application, Rendered};
use crate::observability::metrics;
use crate::routing::{Location, RouteError};
use crate::ui::node::Node;

#[derive(Debug)]
pub struct MountedApp {
    app: Arc<Application>,
    history: History,
    current: Rendered,
}

impl MountedApp {
    /// Mount the application at `initial`.
    pub fn mount(app: Arc<Application>, initial: &str) -> Result<Self, RouteError> {
        let location = Location::parse(initial)?;
        let current = app.render(&location);

        tracing::info!(
            location = %location,
            layout_instance = %app.layout_instance(),
            "Application mounted"
        );

        Ok(Self {
            app,
            history: History::new(location),
            current,
        })
    }

    /// Navigate to `to`, pushing a history entry.
    pub fn navigate(&mut self, to: &str) -> Result<&Rendered, RouteError> {
        let location = Location::parse(to)?;
        self.history.push(location.clone());
        Ok(self.show(location, "push"))
    }

    /// Navigate to `to`, replacing the current history entry.
    pub fn replace(&mut self, to: &str) -> Result<&Rendered, RouteError> {
        let location = Location::parse(to)?;
        self.history.replace(location.clone());
        Ok(self.show(location, "replace"))
    }

    /// Go back one entry. Returns `None` at the start of history.
    pub fn back(&mut self) -> Option<&Rendered> {
        let location = self.history.back()?.clone();
        Some(self.show(location, "back"))
    }

    /// Go forward one entry. Returns `None` at the end of history.
    pub fn forward(&mut self) -> Option<&Rendered> {
        let location = self.history.forward()?.clone();
        Some(self.show(location, "forward"))
    }

    fn show(&mut self, location: Location, kind: &'static str) -> &Rendered {
        tracing::debug!(location = %location, kind, "Navigating");
        metrics::record_navigation(kind);
        self.current = self.app.render(&location);
        &self.current
    }

    pub fn current(&self) -> &Rendered {
        &self.current
    }

    pub fn location(&self) -> &Location {
        self.history.current()
    }

    /// The page subtree in the content slot, if any.
    pub fn slot(&self) -> Option<&Node> {
        self.current.slot_content()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn layout_instance(&self) -> Uuid {
        self.app.layout_instance()
    }

    pub fn application(&self) -> &Arc<Application> {
        &self.app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::root::Outcome;
    use crate::config::ShellConfig;

    fn mounted(initial: &str) -> MountedApp {
        let app = Arc::new(Application::from_config(&ShellConfig::default()).unwrap());
        MountedApp::mount(app, initial).unwrap()
    }

    #[test]
    fn test_back_restores_previous_page() {
        let mut app = mounted("/");
        app.navigate("/unknown").unwrap();
        assert!(app.slot().is_none());

        let rendered = app.back().unwrap();
        assert_eq!(rendered.outcome, Outcome::Matched);
        assert_eq!(app.location().path(), "/");
        assert!(app.back().is_none());

        app.forward().unwrap();
        assert_eq!(app.location().path(), "/unknown");
    }

    #[test]
    fn test_replace_does_not_grow_history() {
        let mut app = mounted("/");
        app.replace("/simulation").unwrap();
        assert_eq!(app.history().len(), 1);
        assert_eq!(app.current().route.as_deref(), Some("/simulation"));
    }

    #[test]
    fn test_layout_persists_across_navigations() {
        let mut app = mounted("/");
        let instance = app.layout_instance();
        let renders_before = app.application().layout_render_count();

        app.navigate("/simulation").unwrap();
        app.navigate("/").unwrap();

        assert_eq!(app.layout_instance(), instance);
        assert_eq!(app.application().layout_render_count(), renders_before + 2);
        assert_eq!(
            app.current().tree.get_attr(crate::app::root::LAYOUT_INSTANCE_ATTR),
            Some(instance.to_string().as_str())
        );
    }
}
