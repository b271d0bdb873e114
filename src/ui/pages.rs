//! Built-in pages.
//!
//! The simulation page only provides the mount point the simulation client
//! attaches to; the engine itself lives outside this crate.

use crate::ui::component::Page;
use crate::ui::node::{Node, COMPONENT_ATTR};

/// Mount point for the generative agents simulation.
#[derive(Debug, Clone, Default)]
pub struct SimulationPage;

impl Page for SimulationPage {
    fn name(&self) -> &'static str {
        "simulation"
    }

    fn render(&self) -> Node {
        Node::element("section")
            .attr(COMPONENT_ATTR, "simulation-page")
            .attr("id", "simulation")
            .child(Node::element("h1").child(Node::text("Simulation")))
            .child(Node::element("div").attr("id", "simulation-root"))
    }
}

/// Rendered into the slot for unmatched paths when the not-found fallback
/// is enabled.
#[derive(Debug, Clone, Default)]
pub struct NotFoundPage;

impl Page for NotFoundPage {
    fn name(&self) -> &'static str {
        "not-found"
    }

    fn render(&self) -> Node {
        Node::element("section")
            .attr(COMPONENT_ATTR, "not-found-page")
            .child(Node::element("h1").child(Node::text("Page not found")))
            .child(
                Node::element("p")
                    .child(Node::text("No page is registered at this address.")),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_page_is_stable() {
        assert_eq!(SimulationPage.render(), SimulationPage.render());
        assert!(SimulationPage.render().find_by_attr("id", "simulation-root").is_some());
    }
}
