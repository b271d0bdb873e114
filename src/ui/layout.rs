//! Basic layout shell: brand header, navigation, content slot.

use crate::config::LayoutConfig;
use crate::ui::component::Layout;
use crate::ui::node::{Node, COMPONENT_ATTR, SLOT_ATTR};

/// Name of the content slot the router renders into.
pub const CONTENT_SLOT: &str = "content";

/// A navigation link in the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// The persistent frame around every page.
#[derive(Debug, Clone)]
pub struct BasicLayout {
    title: String,
    nav: Vec<NavLink>,
}

impl BasicLayout {
    pub fn new(title: impl Into<String>, nav: Vec<NavLink>) -> Self {
        Self {
            title: title.into(),
            nav,
        }
    }

    pub fn from_config(config: &LayoutConfig) -> Self {
        let nav = config
            .nav
            .iter()
            .map(|l| NavLink {
                label: l.label.clone(),
                href: l.href.clone(),
            })
            .collect();
        Self::new(config.title.clone(), nav)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    fn render_nav(&self, active_path: &str) -> Node {
        self.nav.iter().fold(Node::element("nav"), |nav, link| {
            let mut a = Node::element("a")
                .attr("href", link.href.as_str())
                .child(Node::text(link.label.as_str()));
            if link.href == active_path {
                a = a.attr("aria-current", "page");
            }
            nav.child(a)
        })
    }
}

impl Layout for BasicLayout {
    fn name(&self) -> &'static str {
        "basic-layout"
    }

    fn render(&self, active_path: &str, slot: Option<Node>) -> Node {
        let header = Node::element("header")
            .child(
                Node::element("span")
                    .attr("class", "brand")
                    .child(Node::text(self.title.as_str())),
            )
            .child(self.render_nav(active_path));

        let main = Node::element("main")
            .attr(SLOT_ATTR, CONTENT_SLOT)
            .maybe_child(slot);

        Node::element("div")
            .attr(COMPONENT_ATTR, self.name())
            .attr("class", "layout")
            .child(header)
            .child(main)
    }
}
