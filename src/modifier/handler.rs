//! The `Modify` capability, its render context, and the `Modifier` enum.
//!
//! A modifier mutates the per-render [`ModifierContext`] of the node it is
//! attached to. Two kinds exist: closure-backed [`Handler`]s and
//! [`Utility`] class declarations.

use std::fmt;
use std::rc::Rc;

use crate::config::RenderConfig;
use crate::modifier::class_bag::ClassBag;
use crate::modifier::props::Props;
use crate::tailwind::utility::Utility;
use crate::tree::Node;

/// Priority given to modifiers unless stated otherwise. Lower sorts first.
pub const DEFAULT_PRIORITY: i32 = 1;

// ---------------------------------------------------------------------------
// ModifierContext
// ---------------------------------------------------------------------------

/// Mutable state of a single resolution pass.
///
/// Created fresh for every render of a node and dropped once its props have
/// been computed.
pub struct ModifierContext<'a> {
    /// The node whose modifiers are being applied.
    pub parent: &'a Node,
    /// Props that will be handed to the renderer.
    pub props: &'a mut Props,
    /// Classes accumulated so far.
    pub class_bag: &'a mut ClassBag,
    /// Active render configuration.
    pub config: &'a RenderConfig,
}

// ---------------------------------------------------------------------------
// Modify trait
// ---------------------------------------------------------------------------

/// Capability shared by everything that can be applied to a node.
pub trait Modify {
    /// Mutate the render context.
    fn handle(&self, cx: &mut ModifierContext<'_>);

    /// Sort key during resolution; lower values are applied first.
    fn priority(&self) -> i32 {
        DEFAULT_PRIORITY
    }

    /// Key under which at most one modifier survives resolution.
    fn unique_identifier(&self) -> Option<String> {
        None
    }

    fn needs_to_be_unique(&self) -> bool {
        self.unique_identifier().is_some()
    }
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

type HandlerFn = dyn Fn(&mut ModifierContext<'_>);

/// Closure-backed modifier.
#[derive(Clone)]
pub struct Handler {
    handler: Rc<HandlerFn>,
    priority: i32,
    unique: Option<String>,
}

impl Handler {
    pub fn new(handler: impl Fn(&mut ModifierContext<'_>) + 'static) -> Self {
        Self {
            handler: Rc::new(handler),
            priority: DEFAULT_PRIORITY,
            unique: None,
        }
    }

    /// Set the priority (builder).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Set the uniqueness key (builder).
    pub fn with_unique(mut self, key: impl Into<String>) -> Self {
        self.unique = Some(key.into());
        self
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("priority", &self.priority)
            .field("unique", &self.unique)
            .finish_non_exhaustive()
    }
}

impl Modify for Handler {
    fn handle(&self, cx: &mut ModifierContext<'_>) {
        (self.handler)(cx);
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn unique_identifier(&self) -> Option<String> {
        self.unique.clone()
    }
}

// ---------------------------------------------------------------------------
// Modifier
// ---------------------------------------------------------------------------

/// A unit of mutation attached to a node, either directly or through its body.
#[derive(Debug, Clone)]
pub enum Modifier {
    Handler(Handler),
    Utility(Utility),
}

impl Modifier {
    /// Generic modifier running `handler` against the render context.
    ///
    /// Generic modifiers carry no unique id, so every one of them runs.
    /// Modifiers of equal priority run in reverse chain order, which means
    /// that when two of them write the same prop the earliest call applies
    /// last and wins. Give them a shared key with
    /// [`with_unique`](Self::with_unique) to keep only the last call instead.
    pub fn new(handler: impl Fn(&mut ModifierContext<'_>) + 'static) -> Self {
        Modifier::Handler(Handler::new(handler))
    }

    /// Modifier that only touches the props. Ordering follows
    /// [`Modifier::new`].
    pub fn props(handler: impl Fn(&mut Props) + 'static) -> Self {
        Self::new(move |cx| handler(cx.props))
    }

    /// Set an inline style property. Unique per property, so the last chained
    /// call wins.
    pub fn style(property: impl Into<String>, value: impl Into<String>) -> Self {
        let property = property.into();
        let value = value.into();
        let unique = format!("style:{property}");
        Modifier::Handler(
            Handler::new(move |cx| {
                cx.props.set_style(property.as_str(), value.as_str());
            })
            .with_unique(unique),
        )
    }

    /// Set an attribute. Unique per key, so the last chained call wins.
    pub fn attr(key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        let unique = format!("attr:{key}");
        Modifier::Handler(
            Handler::new(move |cx| {
                cx.props.set(key.as_str(), value.as_str());
            })
            .with_unique(unique),
        )
    }

    /// Override the priority (builder).
    pub fn with_priority(self, priority: i32) -> Self {
        match self {
            Modifier::Handler(h) => Modifier::Handler(h.with_priority(priority)),
            Modifier::Utility(u) => Modifier::Utility(u.with_priority(priority)),
        }
    }

    /// Override the uniqueness key (builder). Utilities derive theirs from
    /// their group, which this sets.
    pub fn with_unique(self, key: impl Into<String>) -> Self {
        match self {
            Modifier::Handler(h) => Modifier::Handler(h.with_unique(key)),
            Modifier::Utility(u) => Modifier::Utility(u.grouped(key)),
        }
    }

    pub fn as_utility(&self) -> Option<&Utility> {
        match self {
            Modifier::Utility(u) => Some(u),
            Modifier::Handler(_) => None,
        }
    }

    pub fn as_utility_mut(&mut self) -> Option<&mut Utility> {
        match self {
            Modifier::Utility(u) => Some(u),
            Modifier::Handler(_) => None,
        }
    }
}

impl Modify for Modifier {
    fn handle(&self, cx: &mut ModifierContext<'_>) {
        match self {
            Modifier::Handler(h) => h.handle(cx),
            Modifier::Utility(u) => u.handle(cx),
        }
    }

    fn priority(&self) -> i32 {
        match self {
            Modifier::Handler(h) => h.priority(),
            Modifier::Utility(u) => u.priority(),
        }
    }

    fn unique_identifier(&self) -> Option<String> {
        match self {
            Modifier::Handler(h) => h.unique_identifier(),
            Modifier::Utility(u) => u.unique_identifier(),
        }
    }
}

impl From<Handler> for Modifier {
    fn from(handler: Handler) -> Self {
        Modifier::Handler(handler)
    }
}

impl From<Utility> for Modifier {
    fn from(utility: Utility) -> Self {
        Modifier::Utility(utility)
    }
}
