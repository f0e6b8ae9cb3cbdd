//! Node bodies: static lists or producer closures of nodes and modifiers.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::modifier::Modifier;
use crate::tailwind::Utility;

use super::node::Node;

// ---------------------------------------------------------------------------
// RenderedNode
// ---------------------------------------------------------------------------

/// An output node built outside the tree, passed through to the renderer
/// unchanged.
///
/// It is only emitted by a renderer whose `Node` type matches the wrapped
/// value; other renderers skip it.
#[derive(Clone)]
pub struct RenderedNode(Rc<dyn Any>);

impl RenderedNode {
    pub fn new<N: Clone + 'static>(node: N) -> Self {
        Self(Rc::new(node))
    }

    /// A copy of the wrapped node if it is an `N`.
    pub fn adopt<N: Clone + 'static>(&self) -> Option<N> {
        let node = self.0.downcast_ref::<N>().cloned();
        if node.is_none() {
            debug!(
                expected = std::any::type_name::<N>(),
                "skipping rendered node built for another renderer"
            );
        }
        node
    }
}

impl fmt::Debug for RenderedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RenderedNode(..)")
    }
}

// ---------------------------------------------------------------------------
// BodyItem
// ---------------------------------------------------------------------------

/// A single body entry.
#[derive(Debug, Clone)]
pub enum BodyItem {
    Node(Node),
    Modifier(Modifier),
    Rendered(RenderedNode),
    Empty,
}

impl BodyItem {
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            BodyItem::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_modifier(&self) -> Option<&Modifier> {
        match self {
            BodyItem::Modifier(modifier) => Some(modifier),
            _ => None,
        }
    }
}

impl From<Node> for BodyItem {
    fn from(node: Node) -> Self {
        BodyItem::Node(node)
    }
}

impl From<Modifier> for BodyItem {
    fn from(modifier: Modifier) -> Self {
        BodyItem::Modifier(modifier)
    }
}

impl From<RenderedNode> for BodyItem {
    fn from(rendered: RenderedNode) -> Self {
        BodyItem::Rendered(rendered)
    }
}

impl From<Utility> for BodyItem {
    fn from(utility: Utility) -> Self {
        BodyItem::Modifier(utility.into())
    }
}

impl<T: Into<BodyItem>> From<Option<T>> for BodyItem {
    fn from(item: Option<T>) -> Self {
        item.map_or(BodyItem::Empty, Into::into)
    }
}

// ---------------------------------------------------------------------------
// Body
// ---------------------------------------------------------------------------

type Producer = dyn Fn() -> Body;

/// The content of a node.
///
/// A producer is re-evaluated every time the body is read, so a node whose
/// body is a producer may see different children on every render.
#[derive(Clone)]
pub enum Body {
    Items(Vec<BodyItem>),
    Producer(Rc<Producer>),
}

impl Default for Body {
    fn default() -> Self {
        Body::Items(Vec::new())
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::Items(items) => f.debug_tuple("Items").field(items).finish(),
            Body::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    /// A body computed on demand.
    pub fn producer<B: Into<Body>>(produce: impl Fn() -> B + 'static) -> Self {
        Body::Producer(Rc::new(move || produce().into()))
    }

    pub fn is_producer(&self) -> bool {
        matches!(self, Body::Producer(_))
    }

    /// The flattened entries, evaluating producers.
    pub fn items(&self) -> Cow<'_, [BodyItem]> {
        match self {
            Body::Items(items) => Cow::Borrowed(items),
            Body::Producer(produce) => Cow::Owned(produce().into_items()),
        }
    }

    /// Take the entries by value, evaluating producers.
    pub fn into_items(self) -> Vec<BodyItem> {
        match self {
            Body::Items(items) => items,
            Body::Producer(produce) => produce().into_items(),
        }
    }

    /// Node entries only, in order.
    pub fn nodes(&self) -> Vec<Node> {
        self.items()
            .iter()
            .filter_map(BodyItem::as_node)
            .cloned()
            .collect()
    }

    /// Modifier entries only, in order. Descendants are not visited.
    pub fn modifiers(&self) -> Vec<Modifier> {
        self.items()
            .iter()
            .filter_map(BodyItem::as_modifier)
            .cloned()
            .collect()
    }

    /// Remove the first node matching `predicate`.
    ///
    /// Returns the body unchanged when nothing matches. Otherwise the
    /// remaining entries are returned as a static list.
    pub fn extract(self, predicate: impl Fn(&Node) -> bool) -> (Body, Option<Node>) {
        let mut items = self.items().into_owned();
        let position = items
            .iter()
            .position(|item| item.as_node().is_some_and(&predicate));

        let Some(position) = position else {
            return (self, None);
        };

        match items.remove(position) {
            BodyItem::Node(node) => (Body::Items(items), Some(node)),
            other => {
                items.insert(position, other);
                (Body::Items(items), None)
            }
        }
    }

    /// Replace every node entry matching `predicate` with `transform(node)`.
    pub fn map_nodes(
        self,
        predicate: impl Fn(&Node) -> bool,
        mut transform: impl FnMut(Node) -> Node,
    ) -> Body {
        let items = self
            .into_items()
            .into_iter()
            .map(|item| match item {
                BodyItem::Node(node) if predicate(&node) => BodyItem::Node(transform(node)),
                other => other,
            })
            .collect();
        Body::Items(items)
    }
}

impl From<BodyItem> for Body {
    fn from(item: BodyItem) -> Self {
        Body::Items(vec![item])
    }
}

impl From<Node> for Body {
    fn from(node: Node) -> Self {
        BodyItem::from(node).into()
    }
}

impl From<Modifier> for Body {
    fn from(modifier: Modifier) -> Self {
        BodyItem::from(modifier).into()
    }
}

impl From<Option<Node>> for Body {
    fn from(node: Option<Node>) -> Self {
        BodyItem::from(node).into()
    }
}

impl From<Vec<BodyItem>> for Body {
    fn from(items: Vec<BodyItem>) -> Self {
        Body::Items(items)
    }
}

impl From<Vec<Node>> for Body {
    fn from(nodes: Vec<Node>) -> Self {
        Body::Items(nodes.into_iter().map(BodyItem::Node).collect())
    }
}

impl From<Vec<Modifier>> for Body {
    fn from(modifiers: Vec<Modifier>) -> Self {
        Body::Items(modifiers.into_iter().map(BodyItem::Modifier).collect())
    }
}

impl From<Vec<Vec<BodyItem>>> for Body {
    fn from(nested: Vec<Vec<BodyItem>>) -> Self {
        Body::Items(nested.into_iter().flatten().collect())
    }
}

impl From<Vec<Vec<Node>>> for Body {
    fn from(nested: Vec<Vec<Node>>) -> Self {
        nested.into_iter().flatten().collect::<Vec<_>>().into()
    }
}

impl<const N: usize> From<[Node; N]> for Body {
    fn from(nodes: [Node; N]) -> Self {
        Vec::from(nodes).into()
    }
}

impl<const N: usize> From<[BodyItem; N]> for Body {
    fn from(items: [BodyItem; N]) -> Self {
        Body::Items(Vec::from(items))
    }
}

impl FromIterator<Node> for Body {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Body::Items(iter.into_iter().map(BodyItem::Node).collect())
    }
}

/// Build a [`Body`] from a heterogeneous list of nodes, modifiers, utilities
/// and options.
///
/// ```ignore
/// let body = body![text("hi"), Modifier::attr("role", "note"), None::<Node>];
/// ```
#[macro_export]
macro_rules! body {
    () => {
        $crate::tree::Body::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::tree::Body::Items(vec![$($crate::tree::BodyItem::from($item)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn tags(body: &Body) -> Vec<String> {
        body.nodes().iter().map(|n| n.tag().to_owned()).collect()
    }

    #[test]
    fn single_node() {
        let body = Body::from(Node::new("p"));
        assert_eq!(tags(&body), vec!["p"]);
    }

    #[test]
    fn nested_vectors_flatten_one_level() {
        let body = Body::from(vec![
            vec![Node::new("a"), Node::new("b")],
            vec![Node::new("c")],
        ]);
        assert_eq!(tags(&body), vec!["a", "b", "c"]);
    }

    #[test]
    fn producer_is_evaluated_on_every_read() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let body = Body::producer(move || {
            counter.set(counter.get() + 1);
            vec![Node::new("li")]
        });
        assert!(body.is_producer());
        assert_eq!(body.nodes().len(), 1);
        assert_eq!(body.nodes().len(), 1);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn producer_of_nested_array() {
        let body = Body::producer(|| vec![vec![Node::new("a")], vec![Node::new("b"), Node::new("c")]]);
        assert_eq!(tags(&body), vec!["a", "b", "c"]);
    }

    #[test]
    fn mixed_entries() {
        let body = body![Node::new("p"), Modifier::attr("id", "x"), None::<Node>, Utility::bare("flex")];
        assert_eq!(body.items().len(), 4);
        assert_eq!(body.nodes().len(), 1);
        assert_eq!(body.modifiers().len(), 2);
    }

    #[test]
    fn empty_macro() {
        assert!(body![].items().is_empty());
    }

    #[test]
    fn extract_first_match_only() {
        let body = Body::from(vec![Node::new("a"), Node::new("b"), Node::new("b")]);
        let (rest, extracted) = body.extract(|n| n.tag() == "b");
        assert_eq!(extracted.map(|n| n.tag().to_owned()).as_deref(), Some("b"));
        assert_eq!(tags(&rest), vec!["a", "b"]);
    }

    #[test]
    fn extract_skips_non_node_entries() {
        let body = body![
            Modifier::attr("id", "x"),
            None::<Node>,
            RenderedNode::new(String::from("<b></b>")),
            Node::new("a"),
            Node::new("b"),
        ];
        let (rest, extracted) = body.extract(|n| n.tag() == "a");
        assert_eq!(extracted.map(|n| n.tag().to_owned()).as_deref(), Some("a"));
        let kinds: Vec<&str> = rest
            .items()
            .iter()
            .map(|item| match item {
                BodyItem::Node(_) => "node",
                BodyItem::Modifier(_) => "modifier",
                BodyItem::Rendered(_) => "rendered",
                BodyItem::Empty => "empty",
            })
            .collect();
        assert_eq!(kinds, vec!["modifier", "empty", "rendered", "node"]);
    }

    #[test]
    fn rendered_node_adopts_matching_type_only() {
        let rendered = RenderedNode::new(String::from("<hr>"));
        assert_eq!(rendered.adopt::<String>().as_deref(), Some("<hr>"));
        assert_eq!(rendered.adopt::<u32>(), None);
    }

    #[test]
    fn extract_no_match_keeps_body() {
        let body = Body::producer(|| vec![Node::new("a")]);
        let (rest, extracted) = body.extract(|n| n.tag() == "z");
        assert!(extracted.is_none());
        assert!(rest.is_producer());
    }

    #[test]
    fn extract_from_producer_yields_static_list() {
        let body = Body::producer(|| vec![Node::new("a"), Node::new("b")]);
        let (rest, extracted) = body.extract(|n| n.tag() == "a");
        assert!(extracted.is_some());
        assert!(!rest.is_producer());
        assert_eq!(tags(&rest), vec!["b"]);
    }

    #[test]
    fn map_nodes_is_not_recursive() {
        let inner = Node::new("span");
        let body = Body::from(vec![Node::new("span"), Node::new("div").body(inner)]);
        let mapped = body.map_nodes(|n| n.tag() == "span", |_| Node::new("em"));
        assert_eq!(tags(&mapped), vec!["em", "div"]);
        let div = &mapped.nodes()[1];
        assert_eq!(div.body_ref().nodes()[0].tag(), "span");
    }
}
