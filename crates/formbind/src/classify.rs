//! Element classification and bind eligibility.

use formbind_core::Element;

use crate::config::BindingConfig;

/// Opt-out marker: an element carrying this attribute is never bound.
pub const SKIP_ATTR: &str = "data-skip";

/// Logical element type: the lowercased tag name, except input elements,
/// which classify by their `type` attribute (defaulting to `text` when it is
/// absent or empty).
#[must_use]
pub fn element_type(element: &Element) -> String {
    element.input_type().unwrap_or_else(|| element.tag())
}

/// The single gate every strategy evaluates before creating subscriptions.
///
/// Binding is refused when the element's classified type has a configured
/// binding attribute the element lacks (there is nothing to bind to), or
/// when the element carries the [`SKIP_ATTR`] opt-out marker. Types outside
/// the configured set pass the first check, which is what lets arbitrary
/// tags participate in generic `data-bind` bindings.
#[must_use]
pub fn is_bind_allowed(element: &Element, config: &BindingConfig) -> bool {
    let type_name = element_type(element);
    if let Some(binding_attr) = config.binding_attr(&type_name)
        && !element.has_attr(binding_attr)
    {
        return false;
    }
    !element.has_attr(SKIP_ATTR)
}
