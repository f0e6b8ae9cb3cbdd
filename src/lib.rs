//! # nucleus
//!
//! A fluent builder DSL for virtual-node trees styled with utility classes.
//!
//! Nodes are built by value through chained calls, carry modifiers that
//! resolve into props at render time, and are handed to any [`Renderer`]
//! implementation. Utility modifiers follow the Tailwind class convention,
//! including variant prefixes such as `md:hover:p-4`.
//!
//! ```ignore
//! use nucleus::components::{hstack, grow, text};
//! use nucleus::testing::render_to_html;
//!
//! let bar = hstack(vec![text("left"), grow(text("middle")), text("right")]).p(2);
//! println!("{}", render_to_html(&bar));
//! ```
//!
//! ## Core Systems
//!
//! - **[`modifier`]**: class bag, props, modifiers and their resolution
//! - **[`tailwind`]**: utilities, variants, the utility catalogue and class parsing
//! - **[`tree`]**: nodes, node kinds, bodies and fragments
//! - **[`component`]**: the component builder and built-in components
//! - **[`render`]**: the renderer boundary, an HTML renderer and an in-memory DOM
//! - **[`config`]**: render configuration
//! - **[`testing`]**: render helpers for assertions and snapshots

// Foundation
pub mod config;
pub mod modifier;

// Tree and styling
pub mod tailwind;
pub mod tree;

// Composition
pub mod component;

// Rendering
pub mod render;

pub mod testing;

pub use component::components;
pub use config::RenderConfig;
pub use modifier::{ClassBag, Modifier, ModifierContext, Modify, Props};
pub use render::{nucleus, render_body, Children, Renderer};
pub use tailwind::{ParseError, Utility, UtilityValue, Variant};
pub use tree::{Body, BodyItem, Node, NodeBehavior, NodeKind, RenderedNode};

// Proc macros (feature-gated)
#[cfg(feature = "macros")]
pub use nucleus_macros::view;
