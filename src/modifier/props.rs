//! Props: attributes and inline styles handed to the renderer.

use std::collections::BTreeMap;

/// Attribute and inline-style maps for a single element.
///
/// Both maps are key-ordered so that renderers produce stable output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Props {
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Set an inline style property, replacing any previous value.
    pub fn set_style(&mut self, property: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.style.insert(property.into(), value.into());
        self
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    /// Iterate over `(key, value)` attribute pairs in key order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over `(property, value)` style pairs in property order.
    pub fn styles(&self) -> impl Iterator<Item = (&str, &str)> {
        self.style.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Inline style as `prop: value; prop2: value2`, or `None` when empty.
    pub fn style_string(&self) -> Option<String> {
        if self.style.is_empty() {
            return None;
        }
        Some(
            self.styles()
                .map(|(k, v)| format!("{k}: {v}"))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }

    /// Whitespace-split class list stored under `key`.
    pub fn classes(&self, key: &str) -> Vec<&str> {
        self.get(key)
            .map(|value| value.split_whitespace().collect())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.style.is_empty()
    }
}
