//! Select box binding.

use formbind_core::{Model, Selector, Value, View};

use super::BindingStrategy;
use crate::binder::SubscriptionSet;
use crate::classify::is_bind_allowed;
use crate::config::BindingConfig;

/// Two-way select binding with a display-label companion attribute.
///
/// Element→model writes both `<attr>` (the selected option's value) and
/// `<attr>_text` (its visible text). Initial sync: a defined model value is
/// pushed to the element first; if the element's resulting value still
/// differs (the model held no value, or a value matching no option), the
/// element's selection and text are pushed back into the model. Net effect:
/// the model wins iff its value matches an available option.
pub struct SelectBoxBinding;

impl BindingStrategy for SelectBoxBinding {
    fn bind(
        &self,
        selector: &Selector,
        view: &View,
        model: &Model,
        config: &BindingConfig,
        subscriptions: &mut SubscriptionSet,
    ) {
        for element in view.query(selector) {
            if !is_bind_allowed(&element, config) {
                tracing::debug!(element = ?element, "skipping select: binding not allowed");
                continue;
            }
            let Some(attribute_name) = config.binding_value(&element, "select") else {
                continue;
            };
            let text_attribute = format!("{attribute_name}_text");

            let el = element.clone();
            subscriptions.register_model_binding(model, &attribute_name, move |value| {
                el.set_value(&value.render());
            });

            let el = element.clone();
            let target = model.clone();
            let name = attribute_name.clone();
            let text_name = text_attribute.clone();
            subscriptions.register_element_binding(&element, move || {
                target.set([
                    (name.clone(), Value::from(el.value())),
                    (text_name.clone(), Value::from(el.selected_text())),
                ]);
            });

            let current = model.get(&attribute_name);
            if current.is_defined() {
                element.set_value(&current.render());
            }
            if !current.is_defined() || element.value() != current.render() {
                model.set([
                    (attribute_name, Value::from(element.value())),
                    (text_attribute, Value::from(element.selected_text())),
                ]);
            }
        }
    }
}
