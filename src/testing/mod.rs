//! Test helpers: render nodes to strings, class lists, or an inspectable DOM.
//!
//! ```ignore
//! use nucleus::testing::render_to_html;
//! use nucleus::components::text;
//!
//! assert_eq!(render_to_html(&text("hi").p(2)), r#"<span class="p-2">hi</span>"#);
//! ```

pub mod snapshot;

pub use snapshot::{body_to_html, render_to_dom, render_to_html, resolved_classes};
