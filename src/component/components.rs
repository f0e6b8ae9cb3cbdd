//! Built-in components: Box, Text, Title, Container and stacks.

use crate::tailwind::Axis;
use crate::tree::fragment::GROW;
use crate::tree::{Body, Node, NodeKind};

use super::builder::build_component;

pub use crate::tree::fragment::{footer, grow, header};

/// Plain `div` tagged with the `Box` context.
pub fn boxed(body: impl Into<Body>) -> Node {
    Node::new("div").body(body).set_context("Box")
}

/// Inline text in a `span`.
pub fn text(text: impl Into<String>) -> Node {
    Node::text(text, "span")
}

/// Heading text in an `h3`, tagged with the `Title` context.
pub fn title(text: impl Into<String>) -> Node {
    Node::text(text, "h3").set_context("Title")
}

/// Tailwind `container`; call [`Node::center`] to center it.
pub fn container(body: impl Into<Body>) -> Node {
    Node::with_kind("div", NodeKind::Container).body(body)
}

/// Horizontal flex stack. `grow` fragments become growing boxes.
pub fn hstack(body: impl Into<Body>) -> Node {
    build_stack(Axis::X, body.into())
}

/// Vertical flex stack. `grow` fragments become growing boxes.
pub fn vstack(body: impl Into<Body>) -> Node {
    build_stack(Axis::Y, body.into())
}

fn build_stack(axis: Axis, body: Body) -> Node {
    build_component(body)
        .transform_fragment(GROW, |fragment| boxed(fragment.into_body()).grow())
        .render(|payload| Node::stack(axis).body(payload.body).set_context("Stack"))
}
