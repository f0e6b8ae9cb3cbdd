//! Modifiers: the units of mutation applied to a node's render context.

pub mod class_bag;
pub mod handler;
pub mod props;
pub mod resolve;

pub use class_bag::ClassBag;
pub use handler::{Handler, Modifier, ModifierContext, Modify, DEFAULT_PRIORITY};
pub use props::Props;
pub use resolve::resolve;
