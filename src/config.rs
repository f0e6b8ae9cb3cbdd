//! Render configuration shared by every renderer.

/// Attribute key the flattened class list is written to.
pub const DEFAULT_CLASS_ATTRIBUTE: &str = "class";

/// Separator between variant tokens and the utility they qualify.
pub const DEFAULT_SEPARATOR: &str = ":";

// ---------------------------------------------------------------------------
// RenderConfig
// ---------------------------------------------------------------------------

/// Configuration consulted while resolving modifiers into props.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Props key that receives the flattened class list.
    pub class_attribute: String,
    /// Separator placed after every variant token (`md:hover:p-4`).
    pub separator: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            class_attribute: DEFAULT_CLASS_ATTRIBUTE.to_owned(),
            separator: DEFAULT_SEPARATOR.to_owned(),
        }
    }
}

impl RenderConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class attribute key (builder).
    pub fn with_class_attribute(mut self, key: impl Into<String>) -> Self {
        self.class_attribute = key.into();
        self
    }

    /// Set the variant separator (builder).
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}
