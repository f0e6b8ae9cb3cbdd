//! Node kinds and the hooks they contribute to rendering.
//!
//! Three hooks exist:
//!
//! - `node_modifiers`: modifiers injected ahead of the chained ones
//! - `before_apply`: runs on the render context before any modifier
//! - `modify_child`: adjusts each child before it is rendered
//!
//! Built-in kinds implement them with a `match`; [`NodeBehavior`] lets
//! callers plug in their own through [`NodeKind::Custom`].

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use crate::modifier::{Modifier, ModifierContext};
use crate::tailwind::{flex_direction, Axis, Breakpoint, Utility};

use super::node::Node;

/// Caller-defined node behaviour.
pub trait NodeBehavior: fmt::Debug {
    fn node_modifiers(&self) -> Vec<Modifier> {
        Vec::new()
    }

    fn before_apply(&self, _cx: &mut ModifierContext<'_>) {}

    fn modify_child(&self, child: Node) -> Node {
        child
    }
}

/// What a node is, beyond its tag.
#[derive(Debug, Clone, Default)]
pub enum NodeKind {
    /// Plain element.
    #[default]
    Base,
    /// Renders nothing.
    Empty,
    /// Named slot; renders only once handled.
    Fragment { name: String, handled: bool },
    /// Flex container along `axis`, optionally flipping axis at a breakpoint.
    Stack {
        axis: Axis,
        reversed: bool,
        switch_at: Option<Breakpoint>,
    },
    /// Leaf rendering a text string instead of its body.
    Text { text: String },
    /// Tailwind `container`.
    Container,
    Custom(Rc<dyn NodeBehavior>),
}

impl NodeKind {
    pub(crate) fn node_modifiers(&self) -> Vec<Modifier> {
        match self {
            NodeKind::Stack {
                axis,
                reversed,
                switch_at,
            } => {
                let mut modifiers = vec![
                    Utility::bare("flex").grouped("display").into(),
                    flex_direction(*axis, *reversed).into(),
                ];
                if let Some(breakpoint) = switch_at {
                    let switched = flex_direction(axis.flip(), *reversed).with_variant(breakpoint.variant());
                    modifiers.push(switched.into());
                }
                modifiers
            }
            NodeKind::Container => vec![Utility::bare("container").into()],
            NodeKind::Custom(behavior) => behavior.node_modifiers(),
            NodeKind::Base | NodeKind::Empty | NodeKind::Fragment { .. } | NodeKind::Text { .. } => {
                Vec::new()
            }
        }
    }

    pub(crate) fn before_apply(&self, cx: &mut ModifierContext<'_>) {
        if let NodeKind::Custom(behavior) = self {
            behavior.before_apply(cx);
        }
    }

    /// Built-in kinds leave children alone, so only custom kinds pay for a
    /// copy of the child.
    pub(crate) fn modify_child<'a>(&self, child: &'a Node) -> Cow<'a, Node> {
        match self {
            NodeKind::Custom(behavior) => Cow::Owned(behavior.modify_child(child.clone())),
            _ => Cow::Borrowed(child),
        }
    }

    /// Whether this kind renders to zero output nodes.
    pub fn renders_nothing(&self) -> bool {
        match self {
            NodeKind::Empty => true,
            NodeKind::Fragment { name, handled } => name.is_empty() || !handled,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::Modify;

    #[test]
    fn stack_injects_flex_and_direction() {
        let kind = NodeKind::Stack {
            axis: Axis::X,
            reversed: false,
            switch_at: None,
        };
        let classes: Vec<String> = kind
            .node_modifiers()
            .iter()
            .filter_map(Modifier::as_utility)
            .flat_map(|u| u.prefixed_classes(":"))
            .collect();
        assert_eq!(classes, vec!["flex", "flex-row"]);
    }

    #[test]
    fn stack_switch_uses_other_axis() {
        let kind = NodeKind::Stack {
            axis: Axis::Y,
            reversed: true,
            switch_at: Some(Breakpoint::Md),
        };
        let modifiers = kind.node_modifiers();
        assert_eq!(modifiers.len(), 3);
        let switched = modifiers[2].as_utility().unwrap();
        assert_eq!(switched.prefixed_classes(":"), vec!["md:flex-row-reverse"]);
        assert_eq!(switched.unique_identifier().as_deref(), Some("md:flex-direction"));
    }

    #[test]
    fn container_injects_container_class() {
        let modifiers = NodeKind::Container.node_modifiers();
        assert_eq!(modifiers[0].as_utility().unwrap().classes(), vec!["container"]);
    }

    #[test]
    fn renders_nothing() {
        assert!(NodeKind::Empty.renders_nothing());
        assert!(!NodeKind::Base.renders_nothing());
        let unhandled = NodeKind::Fragment {
            name: "header".into(),
            handled: false,
        };
        let unnamed = NodeKind::Fragment {
            name: String::new(),
            handled: true,
        };
        let handled = NodeKind::Fragment {
            name: "header".into(),
            handled: true,
        };
        assert!(unhandled.renders_nothing());
        assert!(unnamed.renders_nothing());
        assert!(!handled.renders_nothing());
    }

    #[derive(Debug)]
    struct FullWidthChildren;

    impl NodeBehavior for FullWidthChildren {
        fn modify_child(&self, child: Node) -> Node {
            child.width("full")
        }
    }

    #[test]
    fn custom_behavior_delegates() {
        let kind = NodeKind::Custom(Rc::new(FullWidthChildren));
        assert!(kind.node_modifiers().is_empty());
        let original = Node::new("span");
        let child = kind.modify_child(&original);
        assert!(matches!(child, Cow::Owned(_)));
        assert_eq!(child.modifiers().len(), 1);
        assert!(original.modifiers().is_empty());
    }

    #[test]
    fn built_in_kinds_borrow_children() {
        let child = Node::new("li").body(Node::new("span"));
        for kind in [NodeKind::Base, NodeKind::Container, NodeKind::Empty] {
            assert!(matches!(kind.modify_child(&child), Cow::Borrowed(_)));
        }
    }
}
