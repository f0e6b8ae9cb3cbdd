//! Node: the composable tree unit.
//!
//! A node is built by value through chained calls and resolved at render
//! time. Rendering never mutates the node: each pass builds a fresh
//! [`ModifierContext`] and throws it away once the props are computed, so a
//! node may be rendered any number of times.

use std::rc::Rc;

use tracing::{debug, trace};

use crate::config::RenderConfig;
use crate::modifier::{resolve, ClassBag, Modifier, ModifierContext, Modify, Props};
use crate::render::{Children, Renderer};
use crate::tailwind::{Axis, Breakpoint, Edge};

use super::body::{Body, BodyItem};
use super::kind::{NodeBehavior, NodeKind};

/// Default element tag.
pub const DEFAULT_TAG: &str = "div";

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A virtual node with a body, chained modifiers and context metadata.
#[derive(Debug, Clone)]
pub struct Node {
    tag: String,
    kind: NodeKind,
    body: Body,
    modifiers: Vec<Modifier>,
    context: String,
}

impl Default for Node {
    fn default() -> Self {
        Self::new(DEFAULT_TAG)
    }
}

impl Node {
    /// Create a plain element node.
    pub fn new(tag: impl Into<String>) -> Self {
        Self::with_kind(tag, NodeKind::Base)
    }

    pub fn with_kind(tag: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            tag: tag.into(),
            kind,
            body: Body::default(),
            modifiers: Vec::new(),
            context: String::new(),
        }
    }

    /// A node that renders nothing.
    pub fn empty() -> Self {
        Self::with_kind(DEFAULT_TAG, NodeKind::Empty)
    }

    /// A flex stack along `axis`.
    pub fn stack(axis: Axis) -> Self {
        Self::with_kind(
            DEFAULT_TAG,
            NodeKind::Stack {
                axis,
                reversed: false,
                switch_at: None,
            },
        )
    }

    /// A leaf rendering `text` inside `tag`.
    pub fn text(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self::with_kind(tag, NodeKind::Text { text: text.into() })
    }

    /// A node driven by a caller-defined behaviour.
    pub fn custom(tag: impl Into<String>, behavior: impl NodeBehavior + 'static) -> Self {
        Self::with_kind(tag, NodeKind::Custom(Rc::new(behavior)))
    }

    // -- Accessors --------------------------------------------------------

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn body_ref(&self) -> &Body {
        &self.body
    }

    pub fn into_body(self) -> Body {
        self.body
    }

    /// Modifiers applied through chained calls, in call order.
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    pub fn into_modifiers(self) -> Vec<Modifier> {
        self.modifiers
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn is_context(&self, context: &str) -> bool {
        self.context == context
    }

    // -- Builder ----------------------------------------------------------

    /// Append a modifier.
    pub fn apply(mut self, modifier: impl Into<Modifier>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    /// Append several modifiers, in order.
    pub fn apply_all(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    /// Replace the body.
    pub fn body(mut self, body: impl Into<Body>) -> Self {
        self.body = body.into();
        self
    }

    pub fn set_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    pub fn set_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Set an attribute. Later calls for the same key win.
    pub fn attr(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.apply(Modifier::attr(key, value))
    }

    /// Set an inline style property. Later calls for the same property win.
    pub fn style(self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.apply(Modifier::style(property, value))
    }

    /// Run `then` when `condition` holds.
    pub fn when(self, condition: bool, then: impl FnOnce(Self) -> Self) -> Self {
        if condition {
            then(self)
        } else {
            self
        }
    }

    /// Run `then` or `otherwise` depending on `condition`.
    pub fn when_else(
        self,
        condition: bool,
        then: impl FnOnce(Self) -> Self,
        otherwise: impl FnOnce(Self) -> Self,
    ) -> Self {
        if condition {
            then(self)
        } else {
            otherwise(self)
        }
    }

    /// Run `then` with the contained value when `value` is `Some`.
    pub fn when_some<T>(self, value: Option<T>, then: impl FnOnce(Self, T) -> Self) -> Self {
        match value {
            Some(value) => then(self, value),
            None => self,
        }
    }

    /// Make this node the body of `outer`.
    pub fn surround(self, outer: Node) -> Node {
        outer.body(self)
    }

    /// Wrap this node with `outer`.
    pub fn surround_with(self, outer: impl FnOnce(Node) -> Node) -> Node {
        outer(self)
    }

    /// Flip a stack's axis from `breakpoint` up. No-op on other kinds.
    pub fn switch_axis_at(mut self, breakpoint: Breakpoint) -> Self {
        match &mut self.kind {
            NodeKind::Stack { switch_at, .. } => *switch_at = Some(breakpoint),
            _ => debug!(tag = %self.tag, "switch_axis_at ignored on a non-stack node"),
        }
        self
    }

    /// Reverse a stack's direction. No-op on other kinds.
    pub fn reversed(mut self) -> Self {
        match &mut self.kind {
            NodeKind::Stack { reversed, .. } => *reversed = true,
            _ => debug!(tag = %self.tag, "reversed ignored on a non-stack node"),
        }
        self
    }

    /// Center a container horizontally.
    pub fn center(self) -> Self {
        self.margin(Edge::Axis(Axis::X), "auto")
    }

    pub(crate) fn set_kind(&mut self, kind: NodeKind) {
        self.kind = kind;
    }

    // -- Resolution -------------------------------------------------------

    /// Modifiers contributed by this node's kind.
    pub fn node_modifiers(&self) -> Vec<Modifier> {
        self.kind.node_modifiers()
    }

    /// Kind modifiers, then chained modifiers, then modifiers found directly
    /// in the body, ordered and de-duplicated.
    pub fn resolved_modifiers(&self) -> Vec<Modifier> {
        let mut all = self.node_modifiers();
        all.extend(self.modifiers.iter().cloned());
        all.extend(self.body.modifiers());
        resolve(all)
    }

    /// Run the resolved modifiers against a fresh context and return the
    /// resulting props.
    pub fn apply_modifiers(&self, config: &RenderConfig) -> Props {
        let mut props = Props::new();
        let mut class_bag = ClassBag::new();
        let mut cx = ModifierContext {
            parent: self,
            props: &mut props,
            class_bag: &mut class_bag,
            config,
        };

        self.kind.before_apply(&mut cx);
        for modifier in self.resolved_modifiers() {
            modifier.handle(&mut cx);
        }

        if class_bag.is_not_empty() {
            props.set(config.class_attribute.as_str(), class_bag.to_class_string());
        }
        props
    }

    /// Child nodes of the body, each passed through the kind's
    /// `modify_child` hook. Modifier and empty entries are skipped.
    pub fn children(&self) -> Vec<Node> {
        self.body
            .items()
            .iter()
            .filter_map(BodyItem::as_node)
            .map(|child| self.kind.modify_child(child).into_owned())
            .collect()
    }

    /// Render the body in order. Children are borrowed unless the kind
    /// adjusts them; pre-rendered entries are passed through.
    fn render_children<R: Renderer>(&self, renderer: &mut R) -> Vec<R::Node> {
        let mut out = Vec::new();
        for item in self.body.items().iter() {
            match item {
                BodyItem::Node(child) => out.extend(self.kind.modify_child(child).render(renderer)),
                BodyItem::Rendered(rendered) => out.extend(rendered.adopt::<R::Node>()),
                BodyItem::Modifier(_) | BodyItem::Empty => {}
            }
        }
        out
    }

    // -- Rendering --------------------------------------------------------

    /// Render this node and its descendants.
    ///
    /// Returns no output for empty nodes and unhandled fragments, otherwise
    /// exactly one renderer node.
    pub fn render<R: Renderer>(&self, renderer: &mut R) -> Vec<R::Node> {
        if self.kind.renders_nothing() {
            trace!(tag = %self.tag, context = %self.context, "node renders nothing");
            return Vec::new();
        }

        let props = self.apply_modifiers(renderer.config());
        let children = match &self.kind {
            NodeKind::Text { text } => Children::Text(text.clone()),
            _ => Children::Nodes(self.render_children(renderer)),
        };

        trace!(tag = %self.tag, context = %self.context, "rendering node");
        vec![renderer.element(&self.tag, props, children)]
    }
}
