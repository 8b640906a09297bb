//! Radio group binding.

use ahash::AHashSet;
use formbind_core::{Element, Model, Selector, Value, View};

use super::BindingStrategy;
use crate::binder::SubscriptionSet;
use crate::classify::is_bind_allowed;
use crate::config::BindingConfig;

/// Binds an entire named group of radio elements to one model attribute.
///
/// The selector matches every radio individually, but grouping is a
/// group-level concept: the first eligible member establishes the group's
/// bindings and later members are skipped through a seen-groups set. Every
/// member gets an element→model subscription; the group shares one model
/// subscription.
///
/// Invariant: after any model-driven update, at most one member of the group
/// is checked. Exclusivity is enforced here by recomputing every member's
/// checked state, not assumed as a DOM side effect; a model value matching
/// no member leaves the whole group unchecked.
pub struct RadioGroupBinding;

impl BindingStrategy for RadioGroupBinding {
    fn bind(
        &self,
        selector: &Selector,
        view: &View,
        model: &Model,
        config: &BindingConfig,
        subscriptions: &mut SubscriptionSet,
    ) {
        let Some(binding_attr) = config.binding_attr("radio").map(str::to_string) else {
            return;
        };
        let mut seen_groups: AHashSet<String> = AHashSet::new();

        for element in view.query(selector) {
            if !is_bind_allowed(&element, config) {
                tracing::debug!(element = ?element, "skipping radio: binding not allowed");
                continue;
            }
            let Some(group_name) = element.get_attr(&binding_attr) else {
                continue;
            };
            if !seen_groups.insert(group_name.clone()) {
                continue;
            }

            let members = group_members(view, &binding_attr, &group_name, config);

            let group = members.clone();
            subscriptions.register_model_binding(model, &group_name, move |value| {
                check_exactly(&group, &value.render());
            });

            for member in &members {
                let el = member.clone();
                let target = model.clone();
                let name = group_name.clone();
                subscriptions.register_element_binding(member, move || {
                    if el.checked() {
                        target.set_attr(&name, el.value());
                    }
                });
            }

            let current = model.get(&group_name);
            if current.is_defined() {
                check_exactly(&members, &current.render());
            } else {
                let checked_value = members
                    .iter()
                    .find(|member| member.checked())
                    .map_or(Value::Undefined, |member| Value::from(member.value()));
                model.set_attr(&group_name, checked_value);
            }
        }
    }
}

/// Every eligible radio in the view whose binding attribute names this
/// group, in document order. Members carrying the opt-out marker are not
/// part of the group: they get no subscription and no checked-state writes.
fn group_members(
    view: &View,
    binding_attr: &str,
    group_name: &str,
    config: &BindingConfig,
) -> Vec<Element> {
    view.query(&Selector::Input("radio"))
        .into_iter()
        .filter(|el| el.get_attr(binding_attr).as_deref() == Some(group_name))
        .filter(|el| is_bind_allowed(el, config))
        .collect()
}

/// Check the member whose value matches, uncheck every other member.
fn check_exactly(members: &[Element], value: &str) {
    for member in members {
        member.set_checked(member.value() == value);
    }
}
