//! Headless element wrapper with a DOM-like surface.
//!
//! [`Element`] is a cheap-clone handle to one node of an element tree:
//! attribute map, value, checked/disabled flags, text and inner-html content,
//! a CSS property map, ordered children, and a change-event hub. It carries
//! just enough DOM semantics for form binding:
//!
//! - A `select` element's value is its selected `option` child's value;
//!   assigning a value that matches no option is a no-op.
//! - An `option` without a `value` attribute falls back to its text.
//! - The `value`, `checked`, and `disabled` attributes seed their
//!   corresponding fields at construction, HTML-style.
//! - Programmatic mutation never fires the change event; only
//!   [`Element::trigger_change`] does, standing in for user interaction.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use ahash::AHashMap;

use crate::events::{EventHub, Subscription};

/// Event name fired when a user edit commits.
pub const CHANGE_EVENT: &str = "change";

struct ElementData {
    tag: String,
    attrs: AHashMap<String, String>,
    value: String,
    checked: bool,
    disabled: bool,
    text: String,
    html: String,
    css: AHashMap<String, String>,
    selected: Option<usize>,
    children: Vec<Element>,
}

/// Handle to one element node. Clones share the same node.
#[derive(Clone)]
pub struct Element {
    data: Rc<RefCell<ElementData>>,
    hub: EventHub<()>,
}

impl Element {
    /// Create an element with the given tag (stored lowercased).
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            data: Rc::new(RefCell::new(ElementData {
                tag: tag.to_ascii_lowercase(),
                attrs: AHashMap::new(),
                value: String::new(),
                checked: false,
                disabled: false,
                text: String::new(),
                html: String::new(),
                css: AHashMap::new(),
                selected: None,
                children: Vec::new(),
            })),
            hub: EventHub::new(),
        }
    }

    // ── Builder-style construction for fixtures ─────────────────────

    /// Set an attribute, consuming and returning the element.
    #[must_use]
    pub fn attr(self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Append a child, consuming and returning the element.
    #[must_use]
    pub fn child(self, child: Element) -> Self {
        self.data.borrow_mut().children.push(child);
        self
    }

    /// Set the text content, consuming and returning the element.
    #[must_use]
    pub fn text_content(self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    // ── Identity and structure ──────────────────────────────────────

    /// Lowercased tag name.
    #[must_use]
    pub fn tag(&self) -> String {
        self.data.borrow().tag.clone()
    }

    /// Handles to this element's children, in document order.
    #[must_use]
    pub fn children(&self) -> Vec<Element> {
        self.data.borrow().children.clone()
    }

    /// Whether two handles refer to the same node.
    #[must_use]
    pub fn ptr_eq(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    // ── Attributes ──────────────────────────────────────────────────

    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<String> {
        self.data.borrow().attrs.get(name).cloned()
    }

    #[must_use]
    pub fn has_attr(&self, name: &str) -> bool {
        self.data.borrow().attrs.contains_key(name)
    }

    /// Set an attribute. The `value`, `checked`, and `disabled` attributes
    /// mirror into their fields the way HTML markup seeds element state.
    pub fn set_attr(&self, name: &str, value: &str) {
        let mut data = self.data.borrow_mut();
        data.attrs.insert(name.to_string(), value.to_string());
        match name {
            "value" if data.tag != "select" => data.value = value.to_string(),
            "checked" => data.checked = true,
            "disabled" => data.disabled = true,
            _ => {}
        }
    }

    pub fn remove_attr(&self, name: &str) {
        let mut data = self.data.borrow_mut();
        data.attrs.remove(name);
        match name {
            "checked" => data.checked = false,
            "disabled" => data.disabled = false,
            _ => {}
        }
    }

    /// Normalized input type: `Some` for `input` elements (the `type`
    /// attribute, defaulting to `text` when absent or empty), `None` for
    /// everything else.
    #[must_use]
    pub fn input_type(&self) -> Option<String> {
        let data = self.data.borrow();
        if data.tag != "input" {
            return None;
        }
        Some(match data.attrs.get("type") {
            Some(t) if !t.is_empty() => t.clone(),
            _ => "text".to_string(),
        })
    }

    // ── Value ───────────────────────────────────────────────────────

    /// Current value. Selects report their selected option's value; options
    /// fall back to their text when they carry no `value` attribute.
    #[must_use]
    pub fn value(&self) -> String {
        match self.tag().as_str() {
            "select" => self
                .selected_option()
                .map_or_else(String::new, |opt| opt.value()),
            "option" => self
                .get_attr("value")
                .unwrap_or_else(|| self.text()),
            _ => self.data.borrow().value.clone(),
        }
    }

    /// Assign a value. On a select this picks the matching option and is a
    /// no-op when no option matches. Does not fire the change event.
    pub fn set_value(&self, value: &str) {
        if self.tag() == "select" {
            let position = self
                .options()
                .iter()
                .position(|opt| opt.value() == value);
            if let Some(index) = position {
                self.data.borrow_mut().selected = Some(index);
            }
        } else {
            self.data.borrow_mut().value = value.to_string();
        }
    }

    /// Visible text of the selected option (empty for optionless selects).
    #[must_use]
    pub fn selected_text(&self) -> String {
        self.selected_option()
            .map_or_else(String::new, |opt| opt.text())
    }

    fn options(&self) -> Vec<Element> {
        self.data
            .borrow()
            .children
            .iter()
            .filter(|child| child.tag() == "option")
            .cloned()
            .collect()
    }

    fn selected_option(&self) -> Option<Element> {
        let options = self.options();
        if options.is_empty() {
            return None;
        }
        let index = self
            .data
            .borrow()
            .selected
            .unwrap_or(0)
            .min(options.len() - 1);
        Some(options[index].clone())
    }

    // ── Flags, content, CSS ─────────────────────────────────────────

    #[must_use]
    pub fn checked(&self) -> bool {
        self.data.borrow().checked
    }

    pub fn set_checked(&self, checked: bool) {
        self.data.borrow_mut().checked = checked;
    }

    #[must_use]
    pub fn disabled(&self) -> bool {
        self.data.borrow().disabled
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.data.borrow_mut().disabled = disabled;
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.data.borrow().text.clone()
    }

    pub fn set_text(&self, text: &str) {
        self.data.borrow_mut().text = text.to_string();
    }

    #[must_use]
    pub fn html(&self) -> String {
        self.data.borrow().html.clone()
    }

    pub fn set_html(&self, html: &str) {
        self.data.borrow_mut().html = html.to_string();
    }

    #[must_use]
    pub fn css(&self, property: &str) -> Option<String> {
        self.data.borrow().css.get(property).cloned()
    }

    pub fn set_css(&self, property: &str, value: &str) {
        self.data
            .borrow_mut()
            .css
            .insert(property.to_string(), value.to_string());
    }

    // ── Events ──────────────────────────────────────────────────────

    /// Subscribe to a named element event.
    pub fn subscribe(&self, event: &str, callback: impl Fn() + 'static) -> Subscription {
        self.hub.subscribe(event, move |()| callback())
    }

    /// Subscribe to the change event.
    pub fn subscribe_change(&self, callback: impl Fn() + 'static) -> Subscription {
        self.subscribe(CHANGE_EVENT, callback)
    }

    /// Fire the change event, standing in for a user edit commit.
    pub fn trigger_change(&self) {
        self.hub.emit(CHANGE_EVENT, &());
    }

    /// Live registrations on the change event (teardown verification).
    #[must_use]
    pub fn change_subscriber_count(&self) -> usize {
        self.hub.subscriber_count(CHANGE_EVENT)
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data.borrow();
        f.debug_struct("Element")
            .field("tag", &data.tag)
            .field("id", &data.attrs.get("id"))
            .field("value", &data.value)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_is_lowercased() {
        assert_eq!(Element::new("INPUT").tag(), "input");
    }

    #[test]
    fn markup_attributes_seed_state() {
        let el = Element::new("input")
            .attr("type", "checkbox")
            .attr("value", "red")
            .attr("checked", "checked");
        assert_eq!(el.value(), "red");
        assert!(el.checked());

        el.remove_attr("checked");
        assert!(!el.checked());
    }

    #[test]
    fn input_type_defaults_to_text() {
        assert_eq!(Element::new("input").input_type().as_deref(), Some("text"));
        assert_eq!(
            Element::new("input").attr("type", "").input_type().as_deref(),
            Some("text")
        );
        assert_eq!(
            Element::new("input")
                .attr("type", "radio")
                .input_type()
                .as_deref(),
            Some("radio")
        );
        assert_eq!(Element::new("div").input_type(), None);
    }

    #[test]
    fn select_value_is_selected_option() {
        let select = Element::new("select")
            .child(Element::new("option").attr("value", "").text_content("choose"))
            .child(Element::new("option").attr("value", "a").text_content("Alpha"))
            .child(Element::new("option").attr("value", "b").text_content("Beta"));

        assert_eq!(select.value(), "", "defaults to the first option");
        assert_eq!(select.selected_text(), "choose");

        select.set_value("b");
        assert_eq!(select.value(), "b");
        assert_eq!(select.selected_text(), "Beta");

        select.set_value("missing");
        assert_eq!(select.value(), "b", "unmatched assignment is a no-op");
    }

    #[test]
    fn option_value_falls_back_to_text() {
        let select =
            Element::new("select").child(Element::new("option").text_content("Plain"));
        assert_eq!(select.value(), "Plain");
    }

    #[test]
    fn optionless_select_is_empty() {
        let select = Element::new("select");
        assert_eq!(select.value(), "");
        assert_eq!(select.selected_text(), "");
    }

    #[test]
    fn set_value_does_not_fire_change() {
        let el = Element::new("input");
        let fired = Rc::new(std::cell::Cell::new(false));
        let f = Rc::clone(&fired);
        let _sub = el.subscribe_change(move || f.set(true));

        el.set_value("quiet");
        assert!(!fired.get());

        el.trigger_change();
        assert!(fired.get());
    }

    #[test]
    fn css_and_content() {
        let el = Element::new("div");
        el.set_css("display", "none");
        assert_eq!(el.css("display").as_deref(), Some("none"));

        el.set_text("hello");
        el.set_html("<b>hello</b>");
        assert_eq!(el.text(), "hello");
        assert_eq!(el.html(), "<b>hello</b>");
    }

    #[test]
    fn ptr_eq_distinguishes_nodes() {
        let a = Element::new("div");
        let b = a.clone();
        let c = Element::new("div");
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&c));
    }
}
