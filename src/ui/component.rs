//! Component capability traits.

use crate::ui::node::Node;

/// A renderable unit that accepts no parameters.
pub trait Page: Send + Sync + std::fmt::Debug {
    /// Registry name, also written to the root's `data-component`.
    fn name(&self) -> &'static str;

    /// Render the page subtree.
    fn render(&self) -> Node;
}

/// A renderable unit that accepts zero or one child subtree.
pub trait Layout: Send + Sync + std::fmt::Debug {
    fn name(&self) -> &'static str;

    /// Render the frame with `slot` placed in the content slot unmodified.
    /// `active_path` is the navigable path, used only for chrome state.
    fn render(&self, active_path: &str, slot: Option<Node>) -> Node;
}
