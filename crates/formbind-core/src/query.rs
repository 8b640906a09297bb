//! Element selection over a subtree.
//!
//! Conventions address widget families with one of three matcher shapes, so
//! the selector is an explicit enum rather than a parsed selector string:
//! tag name, normalized input type, or attribute presence.

use crate::dom::Element;

/// Matcher for one widget family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector {
    /// Matches by lowercased tag name (`textarea`, `select`).
    Tag(&'static str),
    /// Matches `input` elements by normalized input type; a missing or empty
    /// `type` attribute classifies as `text`.
    Input(&'static str),
    /// Matches any element carrying the named attribute.
    HasAttr(&'static str),
}

impl Selector {
    #[must_use]
    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Selector::Tag(tag) => element.tag() == *tag,
            Selector::Input(input_type) => {
                element.input_type().as_deref() == Some(*input_type)
            }
            Selector::HasAttr(name) => element.has_attr(name),
        }
    }
}

/// All descendants of `root` matching `selector`, in document (pre-)order.
/// The root itself is never returned.
#[must_use]
pub fn select_in(root: &Element, selector: &Selector) -> Vec<Element> {
    let mut matches = Vec::new();
    collect(root, selector, &mut matches);
    matches
}

fn collect(element: &Element, selector: &Selector, matches: &mut Vec<Element>) {
    for child in element.children() {
        if selector.matches(&child) {
            matches.push(child.clone());
        }
        collect(&child, selector, matches);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Element {
        Element::new("form")
            .child(Element::new("input").attr("id", "a"))
            .child(
                Element::new("fieldset")
                    .child(Element::new("input").attr("type", "radio").attr("id", "b"))
                    .child(Element::new("textarea").attr("id", "c")),
            )
            .child(Element::new("div").attr("data-bind", "text name").attr("id", "d"))
    }

    fn ids(elements: &[Element]) -> Vec<String> {
        elements
            .iter()
            .filter_map(|el| el.get_attr("id"))
            .collect()
    }

    #[test]
    fn input_selector_uses_normalized_type() {
        let root = fixture();
        assert_eq!(ids(&select_in(&root, &Selector::Input("text"))), ["a"]);
        assert_eq!(ids(&select_in(&root, &Selector::Input("radio"))), ["b"]);
    }

    #[test]
    fn tag_selector_descends_in_document_order() {
        let root = fixture();
        assert_eq!(ids(&select_in(&root, &Selector::Tag("textarea"))), ["c"]);
    }

    #[test]
    fn attribute_selector_matches_any_tag() {
        let root = fixture();
        assert_eq!(ids(&select_in(&root, &Selector::HasAttr("data-bind"))), ["d"]);
    }

    #[test]
    fn root_is_excluded() {
        let root = Element::new("form").child(Element::new("form"));
        assert_eq!(select_in(&root, &Selector::Tag("form")).len(), 1);
    }

    #[test]
    fn document_order_is_preorder() {
        let root = Element::new("div")
            .child(
                Element::new("div")
                    .child(Element::new("input").attr("id", "nested")),
            )
            .child(Element::new("input").attr("id", "later"));
        assert_eq!(
            ids(&select_in(&root, &Selector::Input("text"))),
            ["nested", "later"]
        );
    }
}
