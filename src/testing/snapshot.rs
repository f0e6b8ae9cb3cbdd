//! Snapshot rendering helpers.
//!
//! Each helper renders with a default [`RenderConfig`](crate::RenderConfig),
//! so the class list always lives under `class`.

use crate::config::RenderConfig;
use crate::render::{render_body, Dom, ElementId, HtmlRenderer};
use crate::tree::{Body, Node};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render `node` to HTML. Nodes that render nothing give an empty string.
pub fn render_to_html(node: &Node) -> String {
    node.render(&mut HtmlRenderer::new()).concat()
}

/// Render every node in `body` to HTML and concatenate the results.
pub fn body_to_html(body: &Body) -> String {
    render_body(body, &mut HtmlRenderer::new()).concat()
}

/// Classes `node` resolves to, in resolution order.
pub fn resolved_classes(node: &Node) -> Vec<String> {
    let config = RenderConfig::default();
    let props = node.apply_modifiers(&config);
    props
        .classes(&config.class_attribute)
        .into_iter()
        .map(ToOwned::to_owned)
        .collect()
}

/// Render `node` into a fresh [`Dom`], returning the top-level elements.
pub fn render_to_dom(node: &Node) -> (Dom, Vec<ElementId>) {
    let mut dom = Dom::new();
    let roots = node.render(&mut dom);
    (dom, roots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::text;
    use crate::tree::fragment::header;

    #[test]
    fn empty_output_for_invisible_nodes() {
        assert_eq!(render_to_html(&header(text("x"))), "");
        let (dom, roots) = render_to_dom(&Node::empty());
        assert!(dom.is_empty());
        assert!(roots.is_empty());
    }

    #[test]
    fn body_concatenates() {
        let body = Body::from(vec![text("a"), Node::empty(), text("b")]);
        assert_eq!(body_to_html(&body), "<span>a</span><span>b</span>");
    }

    #[test]
    fn classes_of_plain_node() {
        assert!(resolved_classes(&Node::new("div")).is_empty());
        assert_eq!(resolved_classes(&Node::new("div").m(3)), vec!["m-3"]);
    }
}
