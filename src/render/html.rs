//! HTML string renderer.

use crate::config::RenderConfig;
use crate::modifier::Props;

use super::{Children, Renderer};

/// Elements written without a closing tag.
const VOID_TAGS: &[&str] = &["area", "br", "col", "hr", "img", "input", "link", "meta", "source", "wbr"];

/// Renders each element to an HTML fragment string.
///
/// Attributes are written in key order, followed by a `style` attribute when
/// any inline style is set. Text and attribute values are escaped.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    config: RenderConfig,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }
}

impl Renderer for HtmlRenderer {
    type Node = String;

    fn config(&self) -> &RenderConfig {
        &self.config
    }

    fn element(&mut self, tag: &str, props: Props, children: Children<String>) -> String {
        let mut out = String::new();
        out.push('<');
        out.push_str(tag);
        for (key, value) in props.attributes() {
            out.push_str(&format!(r#" {key}="{}""#, escape(value)));
        }
        if let Some(style) = props.style_string() {
            out.push_str(&format!(r#" style="{}""#, escape(&style)));
        }
        out.push('>');

        if VOID_TAGS.contains(&tag) {
            return out;
        }

        match children {
            Children::Text(text) => out.push_str(&escape(&text)),
            Children::Nodes(nodes) => nodes.iter().for_each(|node| out.push_str(node)),
        }
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
        out
    }
}

/// Escape text for use in element content or a double-quoted attribute.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
