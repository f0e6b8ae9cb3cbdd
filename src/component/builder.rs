//! ComponentBuilder: fragment extraction and body transforms.
//!
//! A builder takes the body a caller passed to a component, pulls named
//! fragments out of it, rewrites selected entries, and finally hands the
//! remaining body plus the extracted fragments to a render callback:
//!
//! ```ignore
//! build_component(body)
//!     .fragment(HEADER, |h| h.set_tag("header").bold())
//!     .render(|payload| Node::new("article").body(vec![payload.fragment(HEADER), Node::new("div").body(payload.body)]))
//! ```

use std::collections::HashMap;

use tracing::debug;

use crate::tree::fragment::fragment_context;
use crate::tree::{is_fragment, Body, Node};

// ---------------------------------------------------------------------------
// ComponentPayload
// ---------------------------------------------------------------------------

/// What a render callback receives.
#[derive(Debug, Clone, Default)]
pub struct ComponentPayload {
    /// The body left after extraction and transforms.
    pub body: Body,
    fragments: HashMap<String, Node>,
}

impl ComponentPayload {
    /// The extracted, transformed fragment for `name`, or an empty node.
    pub fn fragment(&self, name: &str) -> Node {
        self.fragments.get(name).cloned().unwrap_or_else(Node::empty)
    }

    /// Like [`ComponentPayload::fragment`], without cloning.
    pub fn take_fragment(&mut self, name: &str) -> Node {
        self.fragments.remove(name).unwrap_or_else(Node::empty)
    }
}

// ---------------------------------------------------------------------------
// ComponentBuilder
// ---------------------------------------------------------------------------

/// Transient helper assembling a component from a caller's body.
#[derive(Debug, Clone, Default)]
pub struct ComponentBuilder {
    body: Body,
    fragments: HashMap<String, Node>,
}

impl ComponentBuilder {
    pub fn new(body: impl Into<Body>) -> Self {
        Self {
            body: body.into(),
            fragments: HashMap::new(),
        }
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// The registered node for `name`, if `fragment` was called for it.
    pub fn registered(&self, name: &str) -> Option<&Node> {
        self.fragments.get(name)
    }

    /// Extract the first fragment named `name` from the body, mark it
    /// handled, and register `transform(fragment)` under `name`.
    ///
    /// When no such fragment exists an empty node is registered instead.
    pub fn fragment(mut self, name: &str, transform: impl FnOnce(Node) -> Node) -> Self {
        let (body, extracted) = std::mem::take(&mut self.body).extract(is_fragment(name));
        self.body = body;

        let node = match extracted {
            Some(fragment) => transform(fragment.handle()),
            None => {
                debug!(fragment = name, "fragment not present in body, registering empty node");
                Node::empty()
            }
        };
        self.fragments.insert(name.to_owned(), node);
        self
    }

    /// Extract fragment `name` without transforming it.
    pub fn slot(self, name: &str) -> Self {
        self.fragment(name, |node| node)
    }

    /// Replace body entries matching `predicate` with `transform(node)`.
    /// Only immediate entries are visited.
    pub fn transform(
        mut self,
        predicate: impl Fn(&Node) -> bool,
        transform: impl FnMut(Node) -> Node,
    ) -> Self {
        self.body = std::mem::take(&mut self.body).map_nodes(predicate, transform);
        self
    }

    /// Transform entries whose context equals `context`.
    pub fn transform_context(self, context: &str, transform: impl FnMut(Node) -> Node) -> Self {
        let context = context.to_owned();
        self.transform(move |node| node.is_context(&context), transform)
    }

    /// Transform fragments named `name` that are still in the body.
    pub fn transform_fragment(self, name: &str, transform: impl FnMut(Node) -> Node) -> Self {
        self.transform_context(&fragment_context(name), transform)
    }

    /// Hand the remaining body and the registered fragments to `component`.
    pub fn render<T>(self, component: impl FnOnce(ComponentPayload) -> T) -> T {
        component(ComponentPayload {
            body: self.body,
            fragments: self.fragments,
        })
    }
}

/// Start building a component from `body`.
pub fn build_component(body: impl Into<Body>) -> ComponentBuilder {
    ComponentBuilder::new(body)
}
