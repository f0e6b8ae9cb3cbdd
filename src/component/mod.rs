//! Component composition: the builder and the built-in components.

pub mod builder;
pub mod components;

pub use builder::{build_component, ComponentBuilder, ComponentPayload};
pub use components::{boxed, container, hstack, text, title, vstack};
