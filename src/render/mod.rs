//! Renderer boundary and the bundled renderers.
//!
//! The tree does not construct output nodes itself. For every node it hands
//! a tag, the resolved [`Props`] and the already-rendered children to a
//! [`Renderer`], and passes whatever comes back up the tree unchanged.

pub mod dom;
pub mod html;
pub mod query;

pub use dom::{Dom, ElementData, ElementId};
pub use html::HtmlRenderer;

use crate::config::RenderConfig;
use crate::modifier::Props;
use crate::tree::{Body, BodyItem};

/// Content of an element handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Children<N> {
    Text(String),
    Nodes(Vec<N>),
}

/// Output-tree constructor.
pub trait Renderer {
    /// Opaque output node.
    type Node: Clone + 'static;

    fn config(&self) -> &RenderConfig;

    /// Build one output node.
    fn element(&mut self, tag: &str, props: Props, children: Children<Self::Node>) -> Self::Node;
}

/// Render every node of `body`, in order. Modifier entries are ignored and
/// pre-rendered nodes are passed through.
pub fn render_body<R: Renderer>(body: &Body, renderer: &mut R) -> Vec<R::Node> {
    let mut out = Vec::new();
    for item in body.items().iter() {
        match item {
            BodyItem::Node(node) => out.extend(node.render(renderer)),
            BodyItem::Rendered(rendered) => out.extend(rendered.adopt::<R::Node>()),
            BodyItem::Modifier(_) | BodyItem::Empty => {}
        }
    }
    out
}

/// Capture `body` into a reusable render function.
pub fn nucleus<R: Renderer>(body: impl Into<Body>) -> impl Fn(&mut R) -> Vec<R::Node> {
    let body = body.into();
    move |renderer| render_body(&body, renderer)
}
