//! Tailwind layer: variants, utilities, raw class parsing and the utility
//! catalogue on [`Node`](crate::tree::Node).

pub mod parse;
pub mod utilities;
pub mod utility;
pub mod variant;

pub use parse::{parse_utilities, ParseError};
pub use utilities::{flex_direction, Axis, Direction, Edge, Side};
pub use utility::{Utility, UtilityValue};
pub use variant::{Breakpoint, Variant, EARLY_PRIORITY, RESPONSIVE_PRIORITY};
