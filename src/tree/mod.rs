//! Node tree: nodes, bodies, kinds and fragments.

pub mod body;
pub mod fragment;
pub mod kind;
pub mod node;

pub use body::{Body, BodyItem, RenderedNode};
pub use fragment::{fragment, is_fragment, FRAGMENT_PREFIX};
pub use kind::{NodeBehavior, NodeKind};
pub use node::Node;
