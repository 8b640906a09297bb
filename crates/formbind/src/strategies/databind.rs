//! Generic declarative binding: element attributes, content, and visibility
//! driven by model attributes or named model events.

use formbind_core::{Element, Model, Selector, Value, View};

use super::BindingStrategy;
use crate::binder::SubscriptionSet;
use crate::classify::is_bind_allowed;
use crate::config::BindingConfig;
use crate::conventions::DATA_BIND_ATTR;

/// Model-attribute token prefix selecting the named-event binding mode.
const EVENT_PREFIX: &str = "event:";

/// One parsed `<elementAttr> <modelAttr>` pair.
struct Declaration {
    element_attr: String,
    model_attr: String,
}

/// Binds elements carrying a `data-bind` declaration list.
///
/// The declaration grammar is a semicolon-separated list of
/// `<elementAttr> <modelAttr>` pairs; a bare `<modelAttr>` defaults the
/// element attribute to `text`. A model token starting with `event:`
/// subscribes to that named model event and renders the event payload;
/// any other token subscribes to the attribute's change event and renders
/// the new value. This binding is one-way (model to element).
pub struct DataBindBinding;

impl BindingStrategy for DataBindBinding {
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
                tracing::debug!(element = ?element, "skipping data-bind: binding not allowed");
                continue;
            }
            for declaration in parse_declarations(&element) {
                let event_name = match declaration.model_attr.strip_prefix(EVENT_PREFIX) {
                    Some(event) => event.to_string(),
                    None => format!("change:{}", declaration.model_attr),
                };

                let el = element.clone();
                let cfg = config.clone();
                let element_attr = declaration.element_attr.clone();
                subscriptions.register_data_binding(model, &event_name, move |value| {
                    set_on_element(&el, &element_attr, value.clone(), &cfg);
                });

                // Initial render. The raw model token is looked up even in
                // event mode, where it resolves to the substitution default.
                set_on_element(
                    &element,
                    &declaration.element_attr,
                    model.get(&declaration.model_attr),
                    config,
                );
            }
        }
    }
}

/// Parse an element's `data-bind` attribute. Blank segments are dropped;
/// tokens beyond the second in a segment are ignored with a diagnostic.
fn parse_declarations(element: &Element) -> Vec<Declaration> {
    let Some(raw) = element.get_attr(DATA_BIND_ATTR) else {
        return Vec::new();
    };
    let mut declarations = Vec::new();
    for segment in raw.split(';') {
        let mut tokens = segment.split_whitespace();
        let Some(first) = tokens.next() else {
            continue;
        };
        let (element_attr, model_attr) = match tokens.next() {
            Some(second) => (first.to_string(), second.to_string()),
            None => ("text".to_string(), first.to_string()),
        };
        if tokens.next().is_some() {
            tracing::warn!(
                declaration = segment.trim(),
                "ignoring extra tokens in data-bind declaration"
            );
        }
        declarations.push(Declaration {
            element_attr,
            model_attr,
        });
    }
    declarations
}

/// Render a value onto an element according to the element-attribute token.
///
/// `html`/`text` replace content; `enabled`/`disabled` drive the disabled
/// flag; `displayed`/`hidden` toggle CSS display between block and none.
/// Any other token is written as a literal DOM attribute, except on checkbox
/// and radio elements, whose state is owned by their dedicated strategies.
/// Undefined values are substituted from the configuration table first, so
/// missing model state never renders as literal placeholder text.
fn set_on_element(element: &Element, element_attr: &str, value: Value, config: &BindingConfig) {
    let value = config.substitute(element_attr, value);
    match element_attr {
        "html" => element.set_html(&value.render()),
        "text" => element.set_text(&value.render()),
        "enabled" => element.set_disabled(!value.is_truthy()),
        "disabled" => element.set_disabled(value.is_truthy()),
        "displayed" => {
            element.set_css("display", if value.is_truthy() { "block" } else { "none" });
        }
        "hidden" => {
            element.set_css("display", if value.is_truthy() { "none" } else { "block" });
        }
        _ => {
            let input_type = element.input_type();
            if input_type.as_deref() != Some("checkbox") && input_type.as_deref() != Some("radio")
            {
                element.set_attr(element_attr, &value.render());
            }
        }
    }
}
