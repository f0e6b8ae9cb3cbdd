//! In-memory element tree built by rendering into a [`Dom`].
//!
//! Elements live in a single slotmap arena; parent/child links are kept in
//! secondary maps. Rendering builds bottom-up, so children are inserted
//! before their parent and attached when the parent element is created.

use slotmap::{new_key_type, SecondaryMap, SlotMap};

use crate::config::RenderConfig;
use crate::modifier::Props;

use super::{Children, Renderer};

new_key_type! {
    /// Handle to an element stored in a [`Dom`].
    pub struct ElementId;
}

const NO_CHILDREN: &[ElementId] = &[];

// ---------------------------------------------------------------------------
// ElementData
// ---------------------------------------------------------------------------

/// One rendered element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementData {
    pub tag: String,
    pub props: Props,
    /// Text content, for elements rendered from text nodes.
    pub text: Option<String>,
}

impl ElementData {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Dom
// ---------------------------------------------------------------------------

/// Arena-backed element tree; also a [`Renderer`].
#[derive(Debug, Default)]
pub struct Dom {
    pub(crate) nodes: SlotMap<ElementId, ElementData>,
    children: SecondaryMap<ElementId, Vec<ElementId>>,
    parent: SecondaryMap<ElementId, ElementId>,
    pub(crate) config: RenderConfig,
}

impl Dom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Insert a detached element.
    pub fn insert(&mut self, data: ElementData) -> ElementId {
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        id
    }

    /// Move `node` to the end of `new_parent`'s children, detaching it from
    /// any previous parent. Does nothing if either element is missing.
    pub fn reparent(&mut self, node: ElementId, new_parent: ElementId) {
        if !self.contains(node) || !self.contains(new_parent) {
            return;
        }
        self.detach(node);
        self.parent.insert(node, new_parent);
        if let Some(siblings) = self.children.get_mut(new_parent) {
            siblings.push(node);
        }
    }

    fn detach(&mut self, node: ElementId) {
        if let Some(old_parent) = self.parent.remove(node) {
            if let Some(siblings) = self.children.get_mut(old_parent) {
                siblings.retain(|&child| child != node);
            }
        }
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.parent.get(id).copied()
    }

    /// Children in render order; empty for unknown ids.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(NO_CHILDREN)
    }

    /// Elements without a parent, in insertion order.
    pub fn roots(&self) -> Vec<ElementId> {
        self.nodes
            .keys()
            .filter(|&id| !self.parent.contains_key(id))
            .collect()
    }

    pub fn get(&self, id: ElementId) -> Option<&ElementData> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pre-order traversal from `start`.
    pub fn walk_depth_first(&self, start: ElementId) -> Vec<ElementId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.contains(current) {
                continue;
            }
            result.push(current);
            stack.extend(self.children(current).iter().rev());
        }
        result
    }

    /// Concatenated text of `id` and its descendants, in document order.
    pub fn text_content(&self, id: ElementId) -> String {
        self.walk_depth_first(id)
            .into_iter()
            .filter_map(|node| self.get(node).and_then(|data| data.text.as_deref()))
            .collect()
    }

    /// Classes written on `id` under the configured class attribute.
    pub fn classes(&self, id: ElementId) -> Vec<&str> {
        self.get(id)
            .map(|data| data.props.classes(&self.config.class_attribute))
            .unwrap_or_default()
    }
}

impl Renderer for Dom {
    type Node = ElementId;

    fn config(&self) -> &RenderConfig {
        &self.config
    }

    fn element(&mut self, tag: &str, props: Props, children: Children<ElementId>) -> ElementId {
        match children {
            Children::Text(text) => self.insert(ElementData::new(tag).with_props(props).with_text(text)),
            Children::Nodes(kids) => {
                let id = self.insert(ElementData::new(tag).with_props(props));
                for kid in kids {
                    self.reparent(kid, id);
                }
                id
            }
        }
    }
}
