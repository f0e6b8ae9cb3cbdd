//! Utility: a single style declaration that emits prefixed classes.

use std::fmt;

use crate::config::DEFAULT_SEPARATOR;
use crate::modifier::{ModifierContext, Modify, DEFAULT_PRIORITY};

use super::variant::Variant;

// ---------------------------------------------------------------------------
// UtilityValue
// ---------------------------------------------------------------------------

/// Value passed to a utility method before it is turned into a class suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UtilityValue {
    None,
    Number(i64),
    Text(String),
}

impl UtilityValue {
    /// Apply the negative-value convention to `name`.
    ///
    /// A negative number moves its sign onto the utility name, so `("m", -4)`
    /// becomes `("-m", Some("4"))`.
    pub fn signed(self, name: &str) -> (String, Option<String>) {
        match self {
            UtilityValue::None => (name.to_owned(), None),
            UtilityValue::Number(n) if n < 0 => (format!("-{name}"), Some(n.unsigned_abs().to_string())),
            UtilityValue::Number(n) => (name.to_owned(), Some(n.to_string())),
            UtilityValue::Text(text) => (name.to_owned(), Some(text)),
        }
    }
}

impl From<i64> for UtilityValue {
    fn from(n: i64) -> Self {
        UtilityValue::Number(n)
    }
}

impl From<i32> for UtilityValue {
    fn from(n: i32) -> Self {
        UtilityValue::Number(i64::from(n))
    }
}

impl From<u32> for UtilityValue {
    fn from(n: u32) -> Self {
        UtilityValue::Number(i64::from(n))
    }
}

impl From<&str> for UtilityValue {
    fn from(text: &str) -> Self {
        UtilityValue::Text(text.to_owned())
    }
}

impl From<String> for UtilityValue {
    fn from(text: String) -> Self {
        UtilityValue::Text(text)
    }
}

impl<T: Into<UtilityValue>> From<Option<T>> for UtilityValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(UtilityValue::None, Into::into)
    }
}

// ---------------------------------------------------------------------------
// Utility
// ---------------------------------------------------------------------------

/// A style declaration (`name` or `name-value`) plus attached variants.
///
/// Utilities with a `group` are unique per group and variant prefix: applying
/// `text-red` and then `text-blue` in the same group keeps only the latter,
/// while `hover:text-red` lives alongside `text-blue`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utility {
    name: String,
    value: Option<String>,
    group: Option<String>,
    variants: Vec<Variant>,
    priority: i32,
}

impl Utility {
    /// A utility emitting `name-value`.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::bare(name)
        }
    }

    /// A utility emitting just `name`.
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            group: None,
            variants: Vec::new(),
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Set the uniqueness group (builder).
    pub fn grouped(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Set the priority (builder).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Attach a variant (builder).
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.add_variant(variant);
        self
    }

    pub fn add_variant(&mut self, variant: Variant) -> &mut Self {
        self.variants.push(variant);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Variants ordered by ascending priority. Ties keep attachment order.
    pub fn variants(&self) -> Vec<&Variant> {
        let mut variants: Vec<&Variant> = self.variants.iter().collect();
        variants.sort_by_key(|v| v.priority());
        variants
    }

    /// Prefix using the default `:` separator.
    pub fn prefix(&self) -> String {
        self.prefix_with(DEFAULT_SEPARATOR)
    }

    pub fn prefix_with(&self, separator: &str) -> String {
        self.variants()
            .into_iter()
            .map(|variant| variant.prefix(separator))
            .collect()
    }

    /// Unprefixed class names.
    pub fn classes(&self) -> Vec<String> {
        match &self.value {
            Some(value) => vec![format!("{}-{}", self.name, value)],
            None => vec![self.name.clone()],
        }
    }

    /// Class names with the variant prefix applied.
    pub fn prefixed_classes(&self, separator: &str) -> Vec<String> {
        let prefix = self.prefix_with(separator);
        self.classes()
            .into_iter()
            .map(|class| format!("{prefix}{class}"))
            .collect()
    }
}

impl Modify for Utility {
    fn handle(&self, cx: &mut ModifierContext<'_>) {
        cx.class_bag
            .add_classes(self.prefixed_classes(&cx.config.separator));
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn unique_identifier(&self) -> Option<String> {
        self.group
            .as_ref()
            .map(|group| format!("{}{}", self.prefix(), group))
    }
}

impl fmt::Display for Utility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefixed_classes(DEFAULT_SEPARATOR).join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::modifier::{ClassBag, Props};
    use crate::tree::Node;

    #[test]
    fn classes_with_and_without_value() {
        assert_eq!(Utility::bare("flex").classes(), vec!["flex"]);
        assert_eq!(Utility::new("p", "4").classes(), vec!["p-4"]);
    }

    #[test]
    fn signed_value_moves_sign_to_name() {
        assert_eq!(
            UtilityValue::from(-4).signed("m"),
            ("-m".to_owned(), Some("4".to_owned()))
        );
        assert_eq!(
            UtilityValue::from(4).signed("m"),
            ("m".to_owned(), Some("4".to_owned()))
        );
        assert_eq!(UtilityValue::from("auto").signed("mx").1.as_deref(), Some("auto"));
        assert_eq!(UtilityValue::from(None::<i32>).signed("border"), ("border".to_owned(), None));
    }

    #[test]
    fn prefix_orders_by_priority() {
        let u = Utility::new("bg", "red")
            .with_variant(Variant::hover())
            .with_variant(Variant::md());
        assert_eq!(u.prefix(), "md:hover:");
        assert_eq!(u.prefixed_classes(":"), vec!["md:hover:bg-red"]);
    }

    #[test]
    fn prefix_ties_keep_attachment_order() {
        let u = Utility::bare("underline")
            .with_variant(Variant::focus())
            .with_variant(Variant::hover());
        assert_eq!(u.prefix(), "focus:hover:");
    }

    #[test]
    fn custom_separator() {
        let u = Utility::new("p", "2").with_variant(Variant::sm());
        assert_eq!(u.prefixed_classes("_"), vec!["sm_p-2"]);
    }

    #[test]
    fn unique_identifier_includes_prefix() {
        let plain = Utility::new("text", "red").grouped("text-color");
        let hovered = plain.clone().with_variant(Variant::hover());
        assert_eq!(plain.unique_identifier().as_deref(), Some("text-color"));
        assert_eq!(hovered.unique_identifier().as_deref(), Some("hover:text-color"));
        assert_eq!(Utility::bare("flex").unique_identifier(), None);
    }

    #[test]
    fn handle_adds_prefixed_classes() {
        let node = Node::new("div");
        let config = RenderConfig::default();
        let mut props = Props::new();
        let mut bag = ClassBag::new();
        let mut cx = ModifierContext {
            parent: &node,
            props: &mut props,
            class_bag: &mut bag,
            config: &config,
        };
        Utility::new("w", "full")
            .with_variant(Variant::lg())
            .handle(&mut cx);
        assert!(bag.has("lg:w-full"));
    }

    #[test]
    fn display_joins_classes() {
        let u = Utility::new("m", "2").with_variant(Variant::dark());
        assert_eq!(u.to_string(), "dark:m-2");
    }
}
