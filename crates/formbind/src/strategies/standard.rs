//! Binding for text-like elements: text, hidden, textarea, password, and
//! the simple HTML5 typed inputs.

use formbind_core::{Model, Selector, View};

use super::BindingStrategy;
use crate::binder::SubscriptionSet;
use crate::classify::{element_type, is_bind_allowed};
use crate::config::BindingConfig;

/// Verbatim two-way value synchronization.
///
/// Model→element writes the new value as-is; element→model writes the
/// element's current value on change. Initial sync: a defined model value
/// wins; otherwise a non-empty element value is pushed into the model
/// (element-wins fallback when the model is unset).
pub struct StandardBinding;

impl BindingStrategy for StandardBinding {
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
                tracing::debug!(element = ?element, "skipping element: binding not allowed");
                continue;
            }
            let type_name = element_type(&element);
            let Some(attribute_name) = config.binding_value(&element, &type_name) else {
                continue;
            };

            let el = element.clone();
            subscriptions.register_model_binding(model, &attribute_name, move |value| {
                el.set_value(&value.render());
            });

            let el = element.clone();
            let target = model.clone();
            let name = attribute_name.clone();
            subscriptions.register_element_binding(&element, move || {
                target.set_attr(&name, el.value());
            });

            let current = model.get(&attribute_name);
            if current.is_defined() {
                element.set_value(&current.render());
            } else {
                let element_value = element.value();
                if !element_value.is_empty() {
                    model.set_attr(&attribute_name, element_value);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formbind_core::{Element, Value};

    fn bind_view(root: Element, model: &Model) -> SubscriptionSet {
        let view = View::new(root, model.clone());
        let config = BindingConfig::default();
        let mut subscriptions = SubscriptionSet::default();
        StandardBinding.bind(
            &Selector::Input("text"),
            &view,
            model,
            &config,
            &mut subscriptions,
        );
        subscriptions
    }

    #[test]
    fn model_value_pushes_to_element_on_bind() {
        let model = Model::with_attrs([("name", "Imogen")]);
        let input = Element::new("input").attr("id", "name");
        let _subs = bind_view(Element::new("form").child(input.clone()), &model);
        assert_eq!(input.value(), "Imogen");
    }

    #[test]
    fn element_value_pushes_to_unset_model_on_bind() {
        let model = Model::new();
        let input = Element::new("input").attr("id", "name").attr("value", "prefilled");
        let _subs = bind_view(Element::new("form").child(input.clone()), &model);
        assert_eq!(model.get("name"), Value::from("prefilled"));
    }

    #[test]
    fn empty_element_value_leaves_model_unset() {
        let model = Model::new();
        let input = Element::new("input").attr("id", "name");
        let _subs = bind_view(Element::new("form").child(input), &model);
        assert!(!model.has("name"));
    }

    #[test]
    fn change_event_updates_model() {
        let model = Model::new();
        let input = Element::new("input").attr("id", "name");
        let _subs = bind_view(Element::new("form").child(input.clone()), &model);

        input.set_value("typed");
        input.trigger_change();
        assert_eq!(model.get("name"), Value::from("typed"));
    }

    #[test]
    fn model_change_updates_element_verbatim() {
        let model = Model::new();
        let input = Element::new("input").attr("id", "name");
        let _subs = bind_view(Element::new("form").child(input.clone()), &model);

        model.set_attr("name", "driven");
        assert_eq!(input.value(), "driven");
    }

    #[test]
    fn skipped_element_gets_no_subscriptions() {
        let model = Model::new();
        let input = Element::new("input").attr("id", "name").attr("data-skip", "");
        let subs = bind_view(Element::new("form").child(input.clone()), &model);
        assert!(subs.is_empty());
        assert_eq!(input.change_subscriber_count(), 0);
    }
}
