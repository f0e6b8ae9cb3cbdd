//! ClassBag: class-name to active-flag map accumulated during a render pass.

/// Ordered map from class name to an active flag.
///
/// Keys are unique. Writing an existing key overwrites its flag in place, so
/// the position of a class is the position of its first insertion. Order is
/// kept for deterministic output only; equality ignores it.
#[derive(Debug, Clone, Default)]
pub struct ClassBag {
    classes: Vec<(String, bool)>,
}

impl ClassBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an active class. Overwrites an existing flag.
    pub fn add_class(&mut self, name: impl Into<String>) -> &mut Self {
        self.set_class(name, true)
    }

    /// Set a class with an explicit activation flag.
    pub fn set_class(&mut self, name: impl Into<String>, active: bool) -> &mut Self {
        let name = name.into();
        match self.classes.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, flag)) => *flag = active,
            None => self.classes.push((name, active)),
        }
        self
    }

    /// Add several active classes, in sequence.
    pub fn add_classes<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.add_class(name);
        }
        self
    }

    /// Overwrite this bag's entries with `other`'s. `other` wins on conflicts.
    pub fn merge(&mut self, other: &ClassBag) -> &mut Self {
        for (name, active) in &other.classes {
            self.set_class(name.clone(), *active);
        }
        self
    }

    /// Flip a class's flag. Absent classes are added as active.
    pub fn toggle(&mut self, name: &str) -> &mut Self {
        let active = self.get(name).map_or(true, |active| !active);
        self.set_class(name, active)
    }

    /// Whether the bag has an entry for `name`, active or not.
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The activation flag for `name`, if present.
    pub fn get(&self, name: &str) -> Option<bool> {
        self.classes
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, active)| *active)
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Read-only view of every entry.
    pub fn classes(&self) -> &[(String, bool)] {
        &self.classes
    }

    /// Iterate over active class names.
    pub fn active(&self) -> impl Iterator<Item = &str> {
        self.classes
            .iter()
            .filter(|(_, active)| *active)
            .map(|(name, _)| name.as_str())
    }

    /// Active classes joined by a single space.
    pub fn to_class_string(&self) -> String {
        self.active().collect::<Vec<_>>().join(" ")
    }
}

impl PartialEq for ClassBag {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .classes
                .iter()
                .all(|(name, active)| other.get(name) == Some(*active))
    }
}

impl Eq for ClassBag {}

impl<S: Into<String>> FromIterator<S> for ClassBag {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut bag = ClassBag::new();
        bag.add_classes(iter);
        bag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_class_overwrites_flag() {
        let mut bag = ClassBag::new();
        bag.set_class("p-4", false);
        bag.add_class("p-4");
        assert_eq!(bag.len(), 1);
        assert_eq!(bag.get("p-4"), Some(true));
    }

    #[test]
    fn add_classes_preserves_order() {
        let mut bag = ClassBag::new();
        bag.add_classes(["flex", "p-4", "text-red"]);
        assert_eq!(bag.to_class_string(), "flex p-4 text-red");
    }

    #[test]
    fn overwrite_keeps_first_position() {
        let mut bag = ClassBag::new();
        bag.add_classes(["a", "b"]);
        bag.set_class("a", false);
        bag.add_class("a");
        assert_eq!(bag.to_class_string(), "a b");
    }

    #[test]
    fn merge_other_wins() {
        let mut a = ClassBag::new();
        a.add_class("x").set_class("y", true);
        let mut b = ClassBag::new();
        b.set_class("y", false).add_class("z");

        a.merge(&b);
        assert_eq!(a.get("x"), Some(true));
        assert_eq!(a.get("y"), Some(false));
        assert_eq!(a.get("z"), Some(true));
    }

    #[test]
    fn chained_merges_equal_add_classes() {
        let a: ClassBag = ["m-2", "p-4"].into_iter().collect();
        let b: ClassBag = ["p-4", "flex"].into_iter().collect();

        let mut merged = ClassBag::new();
        merged.merge(&a).merge(&b);

        let mut built = ClassBag::new();
        built.add_classes(["m-2", "p-4"]).add_classes(["p-4", "flex"]);
        assert_eq!(merged, built);
    }

    #[test]
    fn equality_ignores_order() {
        let a: ClassBag = ["a", "b"].into_iter().collect();
        let b: ClassBag = ["b", "a"].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn toggle_flips_and_adds() {
        let mut bag = ClassBag::new();
        bag.toggle("hidden");
        assert_eq!(bag.get("hidden"), Some(true));
        bag.toggle("hidden");
        assert_eq!(bag.get("hidden"), Some(false));
        assert!(bag.has("hidden"));
    }

    #[test]
    fn inactive_classes_are_not_flattened() {
        let mut bag = ClassBag::new();
        bag.add_class("shown").set_class("gone", false);
        assert_eq!(bag.active().collect::<Vec<_>>(), vec!["shown"]);
        assert_eq!(bag.to_class_string(), "shown");
    }

    #[test]
    fn empty_queries() {
        let mut bag = ClassBag::new();
        assert!(bag.is_empty());
        assert!(!bag.is_not_empty());
        bag.add_class("x");
        assert!(bag.is_not_empty());
        assert!(!bag.has("y"));
    }
}
