//! A rendered subtree paired with its model.

use crate::dom::Element;
use crate::model::Model;
use crate::query::{Selector, select_in};

/// One UI view: a root element and the model it renders. The binder holds a
/// view for its whole lifetime; queries never escape the root's subtree.
#[derive(Clone, Debug)]
pub struct View {
    root: Element,
    model: Model,
}

impl View {
    #[must_use]
    pub fn new(root: Element, model: Model) -> Self {
        Self { root, model }
    }

    #[must_use]
    pub fn model(&self) -> &Model {
        &self.model
    }

    #[must_use]
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Matching descendants of the view's root, in document order.
    #[must_use]
    pub fn query(&self, selector: &Selector) -> Vec<Element> {
        select_in(&self.root, selector)
    }
}
