//! Document rendering.
//!
//! Wraps a rendered tree in a full HTML document.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::ui::Node;

/// Render `tree` as a complete HTML document titled `title`.
pub fn render_document(title: &str, tree: &Node) -> String {
    let title = Node::element("title").child(Node::text(title)).to_html();
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">{}</head><body>{}</body></html>",
        title,
        tree.to_html()
    )
}

/// HTML response with the given status.
pub fn html(status: StatusCode, body: String) -> Response {
    let mut response = (status, body).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_wraps_tree() {
        let doc = render_document("A & B", &Node::element("div"));
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>A &amp; B</title>"));
        assert!(doc.contains("<body><div></div></body>"));
    }
}
