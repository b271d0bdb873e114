//! Page registry.
//!
//! Route configuration refers to pages by name; the registry resolves those
//! names to shared page instances so that aliased paths point at the same
//! component reference.

use std::collections::HashMap;
use std::sync::Arc;

use crate::ui::component::Page;
use crate::ui::pages::{NotFoundPage, SimulationPage};

/// Named, shared page instances.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    pages: HashMap<&'static str, Arc<dyn Page>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the pages this crate ships.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(SimulationPage));
        registry.register(Arc::new(NotFoundPage));
        registry
    }

    /// Register a page under its own name, replacing any previous page.
    pub fn register(&mut self, page: Arc<dyn Page>) {
        self.pages.insert(page.name(), page);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Page>> {
        self.pages.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pages.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.pages.keys().copied().collect();
        names.sort_unstable();
        names
    }
}
