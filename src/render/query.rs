//! Queries over a rendered [`Dom`]: by tag, class, attribute, or predicate.
//!
//! Results are in arena insertion order, which for a rendered tree is
//! children before their parent.

use super::dom::{Dom, ElementData, ElementId};

impl Dom {
    /// All elements with the given tag.
    pub fn query_by_tag(&self, tag: &str) -> Vec<ElementId> {
        self.query_all(|data| data.tag == tag)
    }

    /// All elements carrying `class` under the configured class attribute.
    pub fn query_by_class(&self, class: &str) -> Vec<ElementId> {
        let key = self.config.class_attribute.as_str();
        self.query_all(|data| data.props.classes(key).contains(&class))
    }

    /// All elements whose attribute `key` equals `value`.
    pub fn query_by_attr(&self, key: &str, value: &str) -> Vec<ElementId> {
        self.query_all(|data| data.props.get(key) == Some(value))
    }

    /// First element whose `id` attribute equals `id`.
    pub fn query_by_id(&self, id: &str) -> Option<ElementId> {
        self.query_by_attr("id", id).into_iter().next()
    }

    /// All elements matching `predicate`.
    pub fn query_all(&self, predicate: impl Fn(&ElementData) -> bool) -> Vec<ElementId> {
        self.nodes
            .iter()
            .filter(|(_, data)| predicate(data))
            .map(|(id, _)| id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::component::{hstack, text, title};
    use crate::render::Dom;
    use crate::tree::Node;

    fn page() -> Dom {
        let node = Node::new("main").attr("id", "root").body(vec![
            title("Inbox").text_color("gray-900"),
            hstack(vec![
                text("one").attr("data-row", "1").bold(),
                text("two").attr("data-row", "2").bold(),
            ]),
        ]);
        let mut dom = Dom::new();
        node.render(&mut dom);
        dom
    }

    #[test]
    fn by_tag() {
        let dom = page();
        assert_eq!(dom.query_by_tag("span").len(), 2);
        assert_eq!(dom.query_by_tag("h3").len(), 1);
        assert!(dom.query_by_tag("table").is_empty());
    }

    #[test]
    fn by_class() {
        let dom = page();
        assert_eq!(dom.query_by_class("font-bold").len(), 2);
        assert_eq!(dom.query_by_class("flex").len(), 1);
        // Only whole class names match.
        assert!(dom.query_by_class("font").is_empty());
    }

    #[test]
    fn by_attr_and_id() {
        let dom = page();
        let row = dom.query_by_attr("data-row", "2");
        assert_eq!(row.len(), 1);
        assert_eq!(dom.text_content(row[0]), "two");

        let root = dom.query_by_id("root").unwrap();
        assert_eq!(dom.get(root).unwrap().tag, "main");
        assert_eq!(dom.text_content(root), "Inboxonetwo");
    }

    #[test]
    fn by_predicate() {
        let dom = page();
        let with_text = dom.query_all(|data| data.text.is_some());
        assert_eq!(with_text.len(), 3);
    }
}
