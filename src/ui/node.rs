//! Render tree.
//!
//! # Responsibilities
//! - Represent the output of a layout or page render
//! - Serialize to escaped HTML for the rendering harness
//! - Serialize to JSON for introspection
//! - Provide lookups used by navigation and tests
//!
//! # Design Decisions
//! - Attributes keep insertion order (stable output)
//! - Components mark their root with `data-component`
//! - Slots mark their container with `data-slot`

use serde::Serialize;
use std::fmt::Write;

/// Attribute marking the root element of a component.
pub const COMPONENT_ATTR: &str = "data-component";

/// Attribute marking a slot container.
pub const SLOT_ATTR: &str = "data-slot";

/// A node in the render tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<Node>,
    },
    Text {
        text: String,
    },
}

impl Node {
    /// Create an empty element.
    pub fn element(tag: impl Into<String>) -> Self {
        Node::Element {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    /// Set an attribute, replacing any previous value. No-op on text nodes.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Node::Element { attrs, .. } = &mut self {
            let name = name.into();
            let value = value.into();
            match attrs.iter_mut().find(|(n, _)| *n == name) {
                Some(existing) => existing.1 = value,
                None => attrs.push((name, value)),
            }
        }
        self
    }

    /// Append a child. No-op on text nodes.
    pub fn child(mut self, node: Node) -> Self {
        if let Node::Element { children, .. } = &mut self {
            children.push(node);
        }
        self
    }

    /// Append an optional child.
    pub fn maybe_child(self, node: Option<Node>) -> Self {
        match node {
            Some(n) => self.child(n),
            None => self,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Element { tag, .. } => Some(tag),
            Node::Text { .. } => None,
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element { attrs, .. } => attrs
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            Node::Text { .. } => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            Node::Text { .. } => &[],
        }
    }

    /// Depth-first search for the first element carrying `name="value"`.
    pub fn find_by_attr(&self, name: &str, value: &str) -> Option<&Node> {
        if self.get_attr(name) == Some(value) {
            return Some(self);
        }
        self.children()
            .iter()
            .find_map(|c| c.find_by_attr(name, value))
    }

    /// Find the root element of a named component.
    pub fn find_component(&self, component: &str) -> Option<&Node> {
        self.find_by_attr(COMPONENT_ATTR, component)
    }

    /// Find a named slot container.
    pub fn find_slot(&self, slot: &str) -> Option<&Node> {
        self.find_by_attr(SLOT_ATTR, slot)
    }

    /// Render as HTML with text and attribute values escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text { text } => out.push_str(&escape(text)),
            Node::Element { tag, attrs, children } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    // Writing to a String cannot fail.
                    let _ = write!(out, " {}=\"{}\"", name, escape(value));
                }
                out.push('>');
                for child in children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", tag);
            }
        }
    }
}

fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escaping() {
        let node = Node::element("p")
            .attr("title", "a \"quoted\" <value>")
            .child(Node::text("Tom & Jerry"));

        assert_eq!(
            node.to_html(),
            "<p title=\"a &quot;quoted&quot; &lt;value&gt;\">Tom &amp; Jerry</p>"
        );
    }

    #[test]
    fn test_attr_replaces_existing() {
        let node = Node::element("a").attr("href", "/").attr("href", "/simulation");
        assert_eq!(node.get_attr("href"), Some("/simulation"));
        assert_eq!(node.to_html(), "<a href=\"/simulation\"></a>");
    }

    #[test]
    fn test_find_nested_component() {
        let tree = Node::element("div").child(
            Node::element("main")
                .attr(SLOT_ATTR, "content")
                .child(Node::element("section").attr(COMPONENT_ATTR, "simulation-page")),
        );

        let slot = tree.find_slot("content").unwrap();
        assert_eq!(slot.children().len(), 1);
        assert!(tree.find_component("simulation-page").is_some());
        assert!(tree.find_component("missing").is_none());
    }

    #[test]
    fn test_json_shape() {
        let node = Node::element("main").child(Node::text("hi"));
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["kind"], "element");
        assert_eq!(json["tag"], "main");
        assert_eq!(json["children"][0]["kind"], "text");
        assert_eq!(json["children"][0]["text"], "hi");
    }
}
