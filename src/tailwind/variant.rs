//! Variants: breakpoint and state qualifiers that prefix utility classes.
//!
//! Each variant carries a priority. When a utility has several variants the
//! prefix lists them by ascending priority, so responsive breakpoints always
//! come before `dark`/motion variants, which come before plain states:
//!
//! ```text
//! md:dark:hover:bg-white
//! ```

use crate::modifier::DEFAULT_PRIORITY;

/// Priority of responsive breakpoint variants.
pub const RESPONSIVE_PRIORITY: i32 = -100;

/// Priority of `dark` and motion-preference variants.
pub const EARLY_PRIORITY: i32 = -10;

// ---------------------------------------------------------------------------
// Variant
// ---------------------------------------------------------------------------

/// A named class-prefix qualifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variant {
    kind: String,
    priority: i32,
}

impl Variant {
    /// A state variant at the default priority.
    pub fn new(kind: impl Into<String>) -> Self {
        Self::with_priority(kind, DEFAULT_PRIORITY)
    }

    pub fn with_priority(kind: impl Into<String>, priority: i32) -> Self {
        Self {
            kind: kind.into(),
            priority,
        }
    }

    /// A responsive breakpoint variant.
    pub fn responsive(breakpoint: impl Into<String>) -> Self {
        Self::with_priority(breakpoint, RESPONSIVE_PRIORITY)
    }

    /// Look up a catalogued variant by its token, falling back to a plain
    /// state variant for unknown tokens.
    pub fn lookup(token: &str) -> Self {
        if let Some(bp) = Breakpoint::from_token(token) {
            return bp.variant();
        }
        match token {
            "dark" | "motion-safe" | "motion-reduced" => Self::with_priority(token, EARLY_PRIORITY),
            other => Self::new(other),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn is_responsive(&self) -> bool {
        self.priority == RESPONSIVE_PRIORITY
    }

    /// Tokens making up this variant's part of a prefix.
    pub fn prefix_tokens(&self) -> Vec<&str> {
        vec![self.kind.as_str()]
    }

    /// This variant's prefix, each token followed by `separator`.
    pub fn prefix(&self, separator: &str) -> String {
        self.prefix_tokens()
            .iter()
            .map(|token| format!("{token}{separator}"))
            .collect()
    }

    // -- Catalogue --------------------------------------------------------

    pub fn sm() -> Self {
        Breakpoint::Sm.variant()
    }
    pub fn md() -> Self {
        Breakpoint::Md.variant()
    }
    pub fn lg() -> Self {
        Breakpoint::Lg.variant()
    }
    pub fn xl() -> Self {
        Breakpoint::Xl.variant()
    }
    pub fn xxl() -> Self {
        Breakpoint::Xxl.variant()
    }
    pub fn dark() -> Self {
        Self::with_priority("dark", EARLY_PRIORITY)
    }
    pub fn motion_safe() -> Self {
        Self::with_priority("motion-safe", EARLY_PRIORITY)
    }
    pub fn motion_reduced() -> Self {
        Self::with_priority("motion-reduced", EARLY_PRIORITY)
    }
    pub fn hover() -> Self {
        Self::new("hover")
    }
    pub fn focus() -> Self {
        Self::new("focus")
    }
    pub fn active() -> Self {
        Self::new("active")
    }
    pub fn group_hover() -> Self {
        Self::new("group-hover")
    }
    pub fn group_focus() -> Self {
        Self::new("group-focus")
    }
    pub fn focus_within() -> Self {
        Self::new("focus-within")
    }
    pub fn focus_visible() -> Self {
        Self::new("focus-visible")
    }
    pub fn disabled() -> Self {
        Self::new("disabled")
    }
    pub fn visited() -> Self {
        Self::new("visited")
    }
    pub fn checked() -> Self {
        Self::new("checked")
    }
    pub fn first() -> Self {
        Self::new("first")
    }
    pub fn last() -> Self {
        Self::new("last")
    }
    pub fn odd() -> Self {
        Self::new("odd")
    }
    pub fn even() -> Self {
        Self::new("even")
    }
}

// ---------------------------------------------------------------------------
// Breakpoint
// ---------------------------------------------------------------------------

/// Responsive breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    pub fn token(self) -> &'static str {
        match self {
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "2xl",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "sm" => Some(Breakpoint::Sm),
            "md" => Some(Breakpoint::Md),
            "lg" => Some(Breakpoint::Lg),
            "xl" => Some(Breakpoint::Xl),
            "2xl" => Some(Breakpoint::Xxl),
            _ => None,
        }
    }

    pub fn variant(self) -> Variant {
        Variant::responsive(self.token())
    }
}
