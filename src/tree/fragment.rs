//! Fragments: named slots that stay invisible until a component handles them.

use super::body::Body;
use super::kind::NodeKind;
use super::node::{Node, DEFAULT_TAG};

/// Context prefix identifying fragment nodes.
pub const FRAGMENT_PREFIX: &str = "__FRAGMENT::";

pub const HEADER: &str = "header";
pub const FOOTER: &str = "footer";
pub const GROW: &str = "grow";

/// Context string carried by a fragment named `name`.
pub fn fragment_context(name: &str) -> String {
    format!("{FRAGMENT_PREFIX}{name}")
}

/// Create an unhandled fragment named `name` holding `body`.
pub fn fragment(name: impl Into<String>, body: impl Into<Body>) -> Node {
    let name = name.into();
    let context = fragment_context(&name);
    Node::with_kind(
        DEFAULT_TAG,
        NodeKind::Fragment {
            name,
            handled: false,
        },
    )
    .set_context(context)
    .body(body)
}

/// Predicate matching fragments named `name`.
pub fn is_fragment(name: &str) -> impl Fn(&Node) -> bool {
    let context = fragment_context(name);
    move |node| node.is_context(&context)
}

pub fn header(body: impl Into<Body>) -> Node {
    fragment(HEADER, body)
}

pub fn footer(body: impl Into<Body>) -> Node {
    fragment(FOOTER, body)
}

pub fn grow(body: impl Into<Body>) -> Node {
    fragment(GROW, body)
}

impl Node {
    /// The fragment name, if this node is a fragment.
    pub fn fragment_name(&self) -> Option<&str> {
        match self.kind() {
            NodeKind::Fragment { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn is_fragment(&self) -> bool {
        self.fragment_name().is_some()
    }

    /// Whether this fragment has been handled. Always `false` for other kinds.
    pub fn is_handled(&self) -> bool {
        matches!(self.kind(), NodeKind::Fragment { handled: true, .. })
    }

    /// Mark this fragment as handled. Idempotent; no-op on other kinds.
    pub fn handle(mut self) -> Self {
        if let NodeKind::Fragment { name, .. } = self.kind() {
            let name = name.clone();
            self.set_kind(NodeKind::Fragment {
                name,
                handled: true,
            });
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render_to_html;
    use crate::tree::Node;

    #[test]
    fn fragment_context_is_prefixed() {
        let f = header(Node::text("Title", "h1"));
        assert_eq!(f.context(), "__FRAGMENT::header");
        assert_eq!(f.fragment_name(), Some("header"));
        assert!(f.is_fragment());
        assert!(!f.is_handled());
    }

    #[test]
    fn unhandled_fragment_renders_nothing() {
        let f = footer(Node::text("bye", "span"));
        assert_eq!(render_to_html(&f), "");
    }

    #[test]
    fn handled_fragment_renders_normally() {
        let f = footer(Node::text("bye", "span")).p(2).handle();
        assert!(f.is_handled());
        assert_eq!(render_to_html(&f), r#"<div class="p-2"><span>bye</span></div>"#);
    }

    #[test]
    fn unnamed_fragment_never_renders() {
        let f = fragment("", Node::text("x", "b")).handle();
        assert_eq!(render_to_html(&f), "");
    }

    #[test]
    fn handle_is_idempotent() {
        let f = grow(Body::new()).handle().handle();
        assert!(f.is_handled());
        assert_eq!(f.fragment_name(), Some("grow"));
    }

    #[test]
    fn handle_on_plain_node_is_noop() {
        let n = Node::new("div").handle();
        assert!(!n.is_handled());
        assert!(!n.is_fragment());
    }

    #[test]
    fn predicate_matches_by_name() {
        let pred = is_fragment("grow");
        assert!(pred(&grow(Body::new())));
        assert!(!pred(&header(Body::new())));
        assert!(!pred(&Node::new("div")));
    }
}
