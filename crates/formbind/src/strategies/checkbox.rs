//! Checkbox binding, scalar and array-valued.

use formbind_core::{Element, Model, Selector, Value, View};

use super::BindingStrategy;
use crate::binder::SubscriptionSet;
use crate::classify::is_bind_allowed;
use crate::config::BindingConfig;

/// Marker suffix declaring an array-valued binding.
const ARRAY_MARKER: &str = "[]";

/// Binds checkboxes to boolean or string-list model attributes.
///
/// A declared name ending in `[]` flags the binding as array-valued: several
/// checkboxes share one logical attribute that collects the values of every
/// checked box, in document order. Without the marker the binding is scalar
/// and the model attribute is the box's checked boolean.
///
/// Initial sync distinguishes presence from definedness: a model that HAS
/// the attribute with a defined value drives the element; one that has it
/// undefined/null does nothing; one that lacks it entirely receives the
/// element's current state.
pub struct CheckboxBinding;

impl BindingStrategy for CheckboxBinding {
    fn bind(
        &self,
        selector: &Selector,
        view: &View,
        model: &Model,
        config: &BindingConfig,
        subscriptions: &mut SubscriptionSet,
    ) {
        let Some(binding_attr) = config.binding_attr("checkbox").map(str::to_string) else {
            return;
        };

        for element in view.query(selector) {
            if !is_bind_allowed(&element, config) {
                tracing::debug!(element = ?element, "skipping checkbox: binding not allowed");
                continue;
            }
            let Some(declared_name) = config.binding_value(&element, "checkbox") else {
                continue;
            };
            let array_valued = declared_name.ends_with(ARRAY_MARKER);
            let attribute_name = declared_name
                .strip_suffix(ARRAY_MARKER)
                .unwrap_or(&declared_name)
                .to_string();

            let el = element.clone();
            subscriptions.register_model_binding(model, &attribute_name, move |value| {
                el.set_checked(model_checks(value, array_valued, &el.value()));
            });

            let el = element.clone();
            let target = model.clone();
            let scope = view.clone();
            let name = attribute_name.clone();
            let declared = declared_name.clone();
            let attr = binding_attr.clone();
            let cfg = config.clone();
            subscriptions.register_element_binding(&element, move || {
                push_to_model(&scope, &target, &el, &name, &declared, &attr, &cfg, array_valued);
            });

            if model.has(&attribute_name) {
                let current = model.get(&attribute_name);
                if current.is_defined() {
                    element.set_checked(model_checks(&current, array_valued, &element.value()));
                }
            } else {
                push_to_model(
                    view,
                    model,
                    &element,
                    &attribute_name,
                    &declared_name,
                    &binding_attr,
                    config,
                    array_valued,
                );
            }
        }
    }
}

/// Whether the model value checks this box: membership for array bindings,
/// truthiness for scalar ones.
fn model_checks(value: &Value, array_valued: bool, element_value: &str) -> bool {
    if array_valued && value.is_truthy() {
        value.contains_str(element_value)
    } else {
        value.is_truthy()
    }
}

/// Element→model push: the collected checked values for an array binding,
/// this box's checked boolean for a scalar one. Boxes carrying the opt-out
/// marker never contribute to the collected list.
#[allow(clippy::too_many_arguments)]
fn push_to_model(
    view: &View,
    model: &Model,
    element: &Element,
    attribute_name: &str,
    declared_name: &str,
    binding_attr: &str,
    config: &BindingConfig,
    array_valued: bool,
) {
    if array_valued {
        let values: Vec<String> = view
            .query(&Selector::Input("checkbox"))
            .into_iter()
            .filter(|el| el.get_attr(binding_attr).as_deref() == Some(declared_name))
            .filter(|el| is_bind_allowed(el, config))
            .filter(Element::checked)
            .map(|el| el.value())
            .collect();
        model.set_attr(attribute_name, Value::List(values));
    } else {
        model.set_attr(attribute_name, element.checked());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar_box(id: &str) -> Element {
        Element::new("input").attr("type", "checkbox").attr("id", id)
    }

    fn array_box(value: &str) -> Element {
        Element::new("input")
            .attr("type", "checkbox")
            .attr("id", "colors[]")
            .attr("value", value)
    }

    fn bind_boxes(members: &[Element], model: &Model) -> SubscriptionSet {
        let mut root = Element::new("form");
        for member in members {
            root = root.child(member.clone());
        }
        let view = View::new(root, model.clone());
        let mut subscriptions = SubscriptionSet::default();
        CheckboxBinding.bind(
            &Selector::Input("checkbox"),
            &view,
            model,
            &BindingConfig::default(),
            &mut subscriptions,
        );
        subscriptions
    }

    #[test]
    fn scalar_model_truthiness_drives_checked_state() {
        let model = Model::with_attrs([("agree", true)]);
        let boxes = [scalar_box("agree")];
        let _subs = bind_boxes(&boxes, &model);
        assert!(boxes[0].checked());

        model.set_attr("agree", false);
        assert!(!boxes[0].checked());
    }

    #[test]
    fn scalar_change_writes_checked_boolean() {
        let model = Model::new();
        let boxes = [scalar_box("agree")];
        let _subs = bind_boxes(&boxes, &model);
        assert_eq!(model.get("agree"), Value::Bool(false), "initial element-wins push");

        boxes[0].set_checked(true);
        boxes[0].trigger_change();
        assert_eq!(model.get("agree"), Value::Bool(true));
    }

    #[test]
    fn model_defined_but_null_does_nothing_initially() {
        let model = Model::new();
        model.set_attr("agree", Value::Null);
        let checked = scalar_box("agree").attr("checked", "checked");
        let boxes = [checked];
        let _subs = bind_boxes(&boxes, &model);

        assert!(boxes[0].checked(), "element untouched");
        assert_eq!(model.get("agree"), Value::Null, "model untouched");
    }

    #[test]
    fn array_model_list_checks_members_by_value() {
        let model =
            Model::with_attrs([("colors", vec!["red".to_string(), "blue".to_string()])]);
        let boxes = [array_box("red"), array_box("green"), array_box("blue")];
        let _subs = bind_boxes(&boxes, &model);

        assert!(boxes[0].checked());
        assert!(!boxes[1].checked());
        assert!(boxes[2].checked());
    }

    #[test]
    fn array_change_collects_checked_values_in_document_order() {
        let model = Model::new();
        let boxes = [array_box("red"), array_box("green"), array_box("blue")];
        let _subs = bind_boxes(&boxes, &model);

        boxes[2].set_checked(true);
        boxes[0].set_checked(true);
        boxes[0].trigger_change();
        assert_eq!(
            model.get("colors"),
            Value::List(vec!["red".into(), "blue".into()])
        );
    }

    #[test]
    fn array_unset_model_receives_initial_subset() {
        let model = Model::new();
        let boxes = [
            array_box("red").attr("checked", "checked"),
            array_box("green"),
        ];
        let _subs = bind_boxes(&boxes, &model);
        assert_eq!(model.get("colors"), Value::List(vec!["red".into()]));
    }

    #[test]
    fn array_model_update_after_bind_rechecks_members() {
        let model = Model::with_attrs([("colors", Vec::<String>::new())]);
        let boxes = [array_box("red"), array_box("green")];
        let _subs = bind_boxes(&boxes, &model);

        model.set_attr("colors", vec!["green".to_string()]);
        assert!(!boxes[0].checked());
        assert!(boxes[1].checked());
    }

    #[test]
    fn opted_out_box_never_joins_the_collected_list() {
        let model = Model::new();
        let skipped = array_box("red")
            .attr("checked", "checked")
            .attr("data-skip", "");
        let boxes = [skipped.clone(), array_box("green")];
        let subs = bind_boxes(&boxes, &model);

        assert_eq!(subs.len(), 2, "only the remaining box is subscribed");
        assert_eq!(skipped.change_subscriber_count(), 0);
        assert_eq!(model.get("colors"), Value::List(vec![]));

        boxes[1].set_checked(true);
        boxes[1].trigger_change();
        assert_eq!(model.get("colors"), Value::List(vec!["green".into()]));
    }

    #[test]
    fn array_marker_is_stripped_from_the_attribute_name() {
        let model = Model::new();
        let boxes = [array_box("red")];
        let _subs = bind_boxes(&boxes, &model);
        assert!(model.has("colors"));
        assert!(!model.has("colors[]"));
    }
}
