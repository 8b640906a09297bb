//! Property-style guarantees over the binding semantics.

use formbind::{BindOptions, Element, Model, Value, View, bind};
use proptest::prelude::*;

fn checkbox_group(values: &[&str]) -> (Element, Vec<Element>) {
    let mut form = Element::new("form");
    let mut boxes = Vec::new();
    for value in values {
        let checkbox = Element::new("input")
            .attr("type", "checkbox")
            .attr("id", "picks[]")
            .attr("value", value);
        boxes.push(checkbox.clone());
        form = form.child(checkbox);
    }
    (form, boxes)
}

proptest! {
    /// Any committed element value lands in the model verbatim, and any
    /// model write lands in the element verbatim.
    #[test]
    fn text_round_trip_identity(text in "\\PC*") {
        let model = Model::new();
        let input = Element::new("input").attr("type", "text").attr("id", "field");
        let view = View::new(Element::new("form").child(input.clone()), model.clone());
        let _binder = bind(&view, BindOptions::new());

        input.set_value(&text);
        input.trigger_change();
        prop_assert_eq!(model.get("field"), Value::from(text.clone()));

        let reversed: String = text.chars().rev().collect();
        model.set_attr("field", reversed.clone());
        prop_assert_eq!(input.value(), reversed);
    }

    /// Checking exactly the subset S of an array-valued checkbox group
    /// yields the model list of exactly S's values, in document order.
    #[test]
    fn checkbox_subset_collects_in_document_order(subset in proptest::collection::vec(any::<bool>(), 6)) {
        let values = ["a", "b", "c", "d", "e", "f"];
        let (form, boxes) = checkbox_group(&values);
        let model = Model::new();
        let view = View::new(form, model.clone());
        let _binder = bind(&view, BindOptions::new());

        for (checkbox, include) in boxes.iter().zip(&subset) {
            checkbox.set_checked(*include);
        }
        boxes[0].trigger_change();

        let expected: Vec<String> = values
            .iter()
            .zip(&subset)
            .filter(|(_, include)| **include)
            .map(|(value, _)| (*value).to_string())
            .collect();
        prop_assert_eq!(model.get("picks"), Value::List(expected));
    }

    /// After any sequence of model-driven radio updates, at most one member
    /// of the group is checked.
    #[test]
    fn radio_group_never_multi_checks(updates in proptest::collection::vec(0usize..5, 1..10)) {
        let options = ["a", "b", "c"];
        let mut form = Element::new("form");
        let mut radios = Vec::new();
        for value in options {
            let radio = Element::new("input")
                .attr("type", "radio")
                .attr("name", "pick")
                .attr("value", value);
            radios.push(radio.clone());
            form = form.child(radio);
        }
        let model = Model::new();
        let view = View::new(form, model.clone());
        let _binder = bind(&view, BindOptions::new());

        for index in updates {
            // Indexes past the option list simulate stale model values.
            let value = options.get(index).copied().unwrap_or("stale");
            model.set_attr("pick", value);
            let checked = radios.iter().filter(|r| r.checked()).count();
            prop_assert!(checked <= 1, "{checked} radios checked after setting {value}");
        }
    }
}
