//! Utility methods on [`Node`]: the generic primitive plus a catalogue of
//! named wrappers.
//!
//! Every wrapper forwards to [`Node::grouped_utility`] with a uniqueness
//! group naming the CSS concern it controls, so chaining two calls for the
//! same concern keeps only the last one.

use tracing::warn;

use crate::modifier::Modifier;
use crate::tree::Node;

use super::parse::{parse_utilities, ParseError};
use super::utility::{Utility, UtilityValue};
use super::variant::Variant;

// ---------------------------------------------------------------------------
// Direction types
// ---------------------------------------------------------------------------

/// Horizontal or vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn token(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }

    /// The other axis.
    pub fn flip(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// Box side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub fn token(self) -> &'static str {
        match self {
            Side::Top => "t",
            Side::Right => "r",
            Side::Bottom => "b",
            Side::Left => "l",
        }
    }
}

/// Side or corner, used by gradients and radii.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

impl Direction {
    pub fn token(self) -> &'static str {
        match self {
            Direction::Top => "t",
            Direction::TopRight => "tr",
            Direction::Right => "r",
            Direction::BottomRight => "br",
            Direction::Bottom => "b",
            Direction::BottomLeft => "bl",
            Direction::Left => "l",
            Direction::TopLeft => "tl",
        }
    }
}

/// Where a spacing utility applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    All,
    Axis(Axis),
    Side(Side),
}

impl Edge {
    fn suffix(self) -> &'static str {
        match self {
            Edge::All => "",
            Edge::Axis(axis) => axis.token(),
            Edge::Side(side) => side.token(),
        }
    }
}

impl From<Axis> for Edge {
    fn from(axis: Axis) -> Self {
        Edge::Axis(axis)
    }
}

impl From<Side> for Edge {
    fn from(side: Side) -> Self {
        Edge::Side(side)
    }
}

/// The `flex-row` / `flex-col` utility for `axis`.
pub fn flex_direction(axis: Axis, reversed: bool) -> Utility {
    let direction = match axis {
        Axis::X => "row",
        Axis::Y => "col",
    };
    let value = if reversed {
        format!("{direction}-reverse")
    } else {
        direction.to_owned()
    };
    Utility::new("flex", value).grouped("flex-direction")
}

// ---------------------------------------------------------------------------
// Generic primitives
// ---------------------------------------------------------------------------

impl Node {
    /// Apply utility `name` with `value`. Negative numbers move their sign to
    /// the name (`m`, `-4` gives `-m-4`). Not unique: repeated calls stack.
    pub fn utility(self, name: &str, value: impl Into<UtilityValue>) -> Self {
        let (name, value) = value.into().signed(name);
        self.apply(build(name, value))
    }

    /// Apply a value-less utility such as `flex` or `italic`.
    pub fn utility_bare(self, name: &str) -> Self {
        self.apply(Utility::bare(name))
    }

    /// Apply a utility that replaces any earlier one in `group`.
    pub fn grouped_utility(self, group: &str, name: &str, value: impl Into<UtilityValue>) -> Self {
        let (name, value) = value.into().signed(name);
        self.apply(build(name, value).grouped(group))
    }

    /// Apply the utilities produced by `utilities` with `variants` attached.
    ///
    /// The closure receives a scratch node; only the utility modifiers it
    /// applies are kept, other modifiers are carried over unchanged.
    pub fn variant(
        self,
        variants: impl IntoIterator<Item = Variant>,
        utilities: impl FnOnce(Node) -> Node,
    ) -> Self {
        let variants: Vec<Variant> = variants.into_iter().collect();
        let scratch = utilities(Node::default());
        let modifiers = scratch.into_modifiers().into_iter().map(|mut modifier| {
            if let Some(utility) = modifier.as_utility_mut() {
                for variant in &variants {
                    utility.add_variant(variant.clone());
                }
            }
            modifier
        });
        self.apply_all(modifiers)
    }

    /// Apply whitespace-separated raw classes such as `"sm:p-4 hover:underline"`.
    ///
    /// Invalid input is logged and leaves the node unchanged.
    pub fn classes(self, raw: &str) -> Self {
        match parse_utilities(raw) {
            Ok(utilities) => self.apply_all(utilities.into_iter().map(Modifier::from)),
            Err(error) => {
                warn!(%error, raw, "ignoring invalid utility classes");
                self
            }
        }
    }

    /// Like [`Node::classes`] but reports invalid input.
    pub fn try_classes(self, raw: &str) -> Result<Self, ParseError> {
        let utilities = parse_utilities(raw)?;
        Ok(self.apply_all(utilities.into_iter().map(Modifier::from)))
    }

    // -- Variant shortcuts ------------------------------------------------

    pub fn sm(self, utilities: impl FnOnce(Node) -> Node) -> Self {
        self.variant([Variant::sm()], utilities)
    }
    pub fn md(self, utilities: impl FnOnce(Node) -> Node) -> Self {
        self.variant([Variant::md()], utilities)
    }
    pub fn lg(self, utilities: impl FnOnce(Node) -> Node) -> Self {
        self.variant([Variant::lg()], utilities)
    }
    pub fn xl(self, utilities: impl FnOnce(Node) -> Node) -> Self {
        self.variant([Variant::xl()], utilities)
    }
    pub fn xxl(self, utilities: impl FnOnce(Node) -> Node) -> Self {
        self.variant([Variant::xxl()], utilities)
    }
    pub fn dark(self, utilities: impl FnOnce(Node) -> Node) -> Self {
        self.variant([Variant::dark()], utilities)
    }
    pub fn hover(self, utilities: impl FnOnce(Node) -> Node) -> Self {
        self.variant([Variant::hover()], utilities)
    }
    pub fn focus(self, utilities: impl FnOnce(Node) -> Node) -> Self {
        self.variant([Variant::focus()], utilities)
    }
    pub fn active(self, utilities: impl FnOnce(Node) -> Node) -> Self {
        self.variant([Variant::active()], utilities)
    }
    pub fn disabled(self, utilities: impl FnOnce(Node) -> Node) -> Self {
        self.variant([Variant::disabled()], utilities)
    }
}

fn build(name: String, value: Option<String>) -> Utility {
    match value {
        Some(value) => Utility::new(name, value),
        None => Utility::bare(name),
    }
}

// ---------------------------------------------------------------------------
// Catalogue
// ---------------------------------------------------------------------------

impl Node {
    // Layout

    /// `display` keyword: `flex`, `block`, `hidden`, `grid`, ...
    pub fn display(self, value: &str) -> Self {
        self.grouped_utility("display", value, UtilityValue::None)
    }
    pub fn position(self, value: &str) -> Self {
        self.grouped_utility("position", value, UtilityValue::None)
    }
    pub fn overflow(self, value: &str) -> Self {
        self.grouped_utility("overflow", "overflow", value)
    }
    pub fn overflow_axis(self, axis: Axis, value: &str) -> Self {
        let name = format!("overflow-{}", axis.token());
        self.grouped_utility(&name, &name, value)
    }
    pub fn block(self) -> Self {
        self.display("block")
    }
    pub fn inline(self) -> Self {
        self.display("inline")
    }
    pub fn hidden(self) -> Self {
        self.display("hidden")
    }
    pub fn grid(self) -> Self {
        self.display("grid")
    }
    pub fn absolute(self) -> Self {
        self.position("absolute")
    }
    pub fn relative(self) -> Self {
        self.position("relative")
    }

    // Flexbox

    pub fn flex_direction(self, axis: Axis, reversed: bool) -> Self {
        self.apply(flex_direction(axis, reversed))
    }
    pub fn flex_wrap(self, value: &str) -> Self {
        self.grouped_utility("flex-wrap", "flex", value)
    }
    pub fn flex(self, value: impl Into<UtilityValue>) -> Self {
        self.grouped_utility("flex", "flex", value)
    }
    pub fn grow(self) -> Self {
        self.grouped_utility("flex-grow", "flex", "grow")
    }
    pub fn no_grow(self) -> Self {
        self.grouped_utility("flex-grow", "flex", "grow-0")
    }
    pub fn shrink(self) -> Self {
        self.grouped_utility("flex-shrink", "flex", "shrink")
    }
    pub fn no_shrink(self) -> Self {
        self.grouped_utility("flex-shrink", "flex", "shrink-0")
    }
    pub fn order(self, value: impl Into<UtilityValue>) -> Self {
        self.grouped_utility("order", "order", value)
    }
    pub fn items(self, value: &str) -> Self {
        self.grouped_utility("align-items", "items", value)
    }
    pub fn justify(self, value: &str) -> Self {
        self.grouped_utility("justify-content", "justify", value)
    }
    pub fn gap(self, value: impl Into<UtilityValue>) -> Self {
        self.grouped_utility("gap", "gap", value)
    }

    // Spacing

    /// Margin on `edge`; negative numbers produce `-m*` classes.
    pub fn margin(self, edge: impl Into<Edge>, value: impl Into<UtilityValue>) -> Self {
        let name = format!("m{}", edge.into().suffix());
        self.grouped_utility(&format!("margin-{name}"), &name, value)
    }
    pub fn padding(self, edge: impl Into<Edge>, value: impl Into<UtilityValue>) -> Self {
        let name = format!("p{}", edge.into().suffix());
        self.grouped_utility(&format!("padding-{name}"), &name, value)
    }
    /// Margin on every side.
    pub fn m(self, value: impl Into<UtilityValue>) -> Self {
        self.margin(Edge::All, value)
    }
    /// Padding on every side.
    pub fn p(self, value: impl Into<UtilityValue>) -> Self {
        self.padding(Edge::All, value)
    }

    // Sizing

    pub fn width(self, value: impl Into<UtilityValue>) -> Self {
        self.grouped_utility("width", "w", value)
    }
    pub fn height(self, value: impl Into<UtilityValue>) -> Self {
        self.grouped_utility("height", "h", value)
    }

    // Typography

    pub fn font_family(self, value: &str) -> Self {
        self.grouped_utility("font-family", "font", value)
    }
    pub fn font_size(self, value: &str) -> Self {
        self.grouped_utility("font-size", "text", value)
    }
    pub fn font_weight(self, value: &str) -> Self {
        self.grouped_utility("font-weight", "font", value)
    }
    pub fn bold(self) -> Self {
        self.font_weight("bold")
    }
    pub fn semibold(self) -> Self {
        self.font_weight("semibold")
    }
    pub fn italic(self, enabled: bool) -> Self {
        let name = if enabled { "italic" } else { "not-italic" };
        self.grouped_utility("font-style", name, UtilityValue::None)
    }
    pub fn text_color(self, color: &str) -> Self {
        self.grouped_utility("text-color", "text", color)
    }
    /// Shorthand for [`Node::text_color`].
    pub fn color(self, color: &str) -> Self {
        self.text_color(color)
    }
    pub fn text_align(self, value: &str) -> Self {
        self.grouped_utility("text-align", "text", value)
    }
    pub fn tracking(self, value: &str) -> Self {
        self.grouped_utility("letter-spacing", "tracking", value)
    }
    pub fn leading(self, value: impl Into<UtilityValue>) -> Self {
        self.grouped_utility("line-height", "leading", value)
    }
    pub fn underline(self) -> Self {
        self.grouped_utility("text-decoration", "underline", UtilityValue::None)
    }
    pub fn line_through(self) -> Self {
        self.grouped_utility("text-decoration", "line-through", UtilityValue::None)
    }
    pub fn uppercase(self) -> Self {
        self.grouped_utility("text-transform", "uppercase", UtilityValue::None)
    }
    pub fn lowercase(self) -> Self {
        self.grouped_utility("text-transform", "lowercase", UtilityValue::None)
    }
    pub fn truncate(self) -> Self {
        self.utility_bare("truncate")
    }

    // Backgrounds

    pub fn bg_color(self, color: &str) -> Self {
        self.grouped_utility("background-color", "bg", color)
    }
    pub fn bg_size(self, value: &str) -> Self {
        self.grouped_utility("background-size", "bg", value)
    }
    pub fn bg_cover(self) -> Self {
        self.bg_size("cover")
    }
    /// Linear gradient from `from` to `to`, optionally through `via`.
    pub fn bg_gradient(self, direction: Direction, from: &str, via: Option<&str>, to: &str) -> Self {
        let node = self
            .grouped_utility(
                "background-image",
                &format!("bg-gradient-to-{}", direction.token()),
                UtilityValue::None,
            )
            .grouped_utility("gradient-from", "from", from);
        let node = match via {
            Some(via) => node.grouped_utility("gradient-via", "via", via),
            None => node,
        };
        node.grouped_utility("gradient-to", "to", to)
    }

    // Borders

    /// Border radius; `None` gives the default `rounded`.
    pub fn rounded(self, value: Option<&str>) -> Self {
        self.grouped_utility("border-radius", "rounded", value)
    }
    pub fn rounded_corner(self, direction: Direction, value: Option<&str>) -> Self {
        let name = format!("rounded-{}", direction.token());
        self.grouped_utility(&format!("border-radius-{}", direction.token()), &name, value)
    }
    pub fn pill(self) -> Self {
        self.rounded(Some("full"))
    }
    /// Border width on `side` (all sides when `None`).
    pub fn border(self, side: Option<Side>, width: Option<u32>) -> Self {
        let name = match side {
            Some(side) => format!("border-{}", side.token()),
            None => "border".to_owned(),
        };
        self.grouped_utility(&format!("{name}-width"), &name, width)
    }
    pub fn border_color(self, color: &str) -> Self {
        self.grouped_utility("border-color", "border", color)
    }
    pub fn border_style(self, value: &str) -> Self {
        self.grouped_utility("border-style", "border", value)
    }
    pub fn ring(self, width: Option<u32>) -> Self {
        self.grouped_utility("ring-width", "ring", width)
    }
    pub fn ring_color(self, color: &str) -> Self {
        self.grouped_utility("ring-color", "ring", color)
    }

    // Effects

    pub fn shadow(self, value: Option<&str>) -> Self {
        self.grouped_utility("box-shadow", "shadow", value)
    }
    pub fn no_shadow(self) -> Self {
        self.shadow(Some("none"))
    }
    pub fn opacity(self, value: u32) -> Self {
        self.grouped_utility("opacity", "opacity", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::resolved_classes;
    use pretty_assertions::assert_eq;

    #[test]
    fn negative_margin() {
        assert_eq!(resolved_classes(&Node::default().m(-4)), vec!["-m-4"]);
        assert_eq!(
            resolved_classes(&Node::default().margin(Side::Top, -2)),
            vec!["-mt-2"]
        );
    }

    #[test]
    fn raw_utility_negative() {
        assert_eq!(resolved_classes(&Node::default().utility("m", -4)), vec!["-m-4"]);
    }

    #[test]
    fn last_color_wins() {
        let node = Node::default().text_color("red").text_color("blue");
        assert_eq!(resolved_classes(&node), vec!["text-blue"]);
    }

    #[test]
    fn different_groups_coexist() {
        let node = Node::default().text_color("red").font_size("lg").text_align("center");
        let classes = resolved_classes(&node);
        assert_eq!(classes.len(), 3);
        assert!(classes.contains(&"text-red".to_owned()));
        assert!(classes.contains(&"text-lg".to_owned()));
        assert!(classes.contains(&"text-center".to_owned()));
    }

    #[test]
    fn raw_utilities_stack() {
        let node = Node::default().utility("text", "red").utility("text", "blue");
        assert_eq!(resolved_classes(&node).len(), 2);
    }

    #[test]
    fn variant_prefix_order_is_fixed() {
        let a = Node::default().variant([Variant::hover(), Variant::md()], |n| n.bg_color("red"));
        let b = Node::default().variant([Variant::md(), Variant::hover()], |n| n.bg_color("red"));
        assert_eq!(resolved_classes(&a), vec!["md:hover:bg-red"]);
        assert_eq!(resolved_classes(&b), vec!["md:hover:bg-red"]);
    }

    #[test]
    fn nested_variant_shortcuts() {
        let node = Node::default().hover(|n| n.md(|n| n.underline()));
        assert_eq!(resolved_classes(&node), vec!["md:hover:underline"]);
    }

    #[test]
    fn variant_does_not_collide_with_base() {
        let node = Node::default().bg_color("blue").hover(|n| n.bg_color("red"));
        let classes = resolved_classes(&node);
        assert!(classes.contains(&"bg-blue".to_owned()));
        assert!(classes.contains(&"hover:bg-red".to_owned()));
    }

    #[test]
    fn variant_keeps_handlers() {
        let node = Node::default().hover(|n| n.attr("data-x", "1").underline());
        let props = node.apply_modifiers(&crate::config::RenderConfig::default());
        assert_eq!(props.get("data-x"), Some("1"));
        assert_eq!(props.get("class"), Some("hover:underline"));
    }

    #[test]
    fn spacing_edges() {
        let node = Node::default().padding(Axis::X, 4).padding(Side::Bottom, "px");
        assert_eq!(resolved_classes(&node), vec!["pb-px", "px-4"]);
    }

    #[test]
    fn gradient_with_via() {
        let node = Node::default().bg_gradient(Direction::Right, "red", Some("white"), "blue");
        let classes = resolved_classes(&node);
        assert_eq!(classes.len(), 4);
        assert!(classes.contains(&"bg-gradient-to-r".to_owned()));
        assert!(classes.contains(&"via-white".to_owned()));
    }

    #[test]
    fn optional_values() {
        assert_eq!(resolved_classes(&Node::default().rounded(None)), vec!["rounded"]);
        assert_eq!(resolved_classes(&Node::default().border(Some(Side::Top), Some(2))), vec!["border-t-2"]);
        assert_eq!(resolved_classes(&Node::default().pill()), vec!["rounded-full"]);
    }

    #[test]
    fn raw_classes() {
        let node = Node::default().classes("sm:p-4 hover:underline");
        let classes = resolved_classes(&node);
        assert!(classes.contains(&"sm:p-4".to_owned()));
        assert!(classes.contains(&"hover:underline".to_owned()));
    }

    #[test]
    fn invalid_raw_classes_are_ignored() {
        let node = Node::default().p(2).classes("hover:");
        assert_eq!(resolved_classes(&node), vec!["p-2"]);
        assert!(Node::default().try_classes("::").is_err());
    }

    #[test]
    fn flex_direction_helper() {
        assert_eq!(flex_direction(Axis::Y, true).classes(), vec!["flex-col-reverse"]);
        assert_eq!(flex_direction(Axis::X, false).group(), Some("flex-direction"));
    }
}
