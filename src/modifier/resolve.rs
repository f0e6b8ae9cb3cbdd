//! Modifier resolution: ordering and de-duplication.
//!
//! The combined list is reversed, stably sorted by ascending priority, then
//! filtered so that only the first modifier per unique identifier survives.
//! Reversing first means that among equal priorities the modifier added last
//! is placed first, and therefore wins de-duplication.

use std::collections::HashSet;

use tracing::trace;

use super::handler::{Modifier, Modify};

/// Order and de-duplicate `modifiers` into the sequence they are applied in.
pub fn resolve(mut modifiers: Vec<Modifier>) -> Vec<Modifier> {
    let total = modifiers.len();

    modifiers.reverse();
    modifiers.sort_by_key(Modify::priority);

    let mut seen = HashSet::new();
    modifiers.retain(|modifier| match modifier.unique_identifier() {
        Some(id) => seen.insert(id),
        None => true,
    });

    trace!(total, kept = modifiers.len(), "resolved modifiers");
    modifiers
}
