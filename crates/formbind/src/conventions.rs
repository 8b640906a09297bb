//! The fixed convention registry.
//!
//! A [`Convention`] pairs one widget family's selector with its binding
//! strategy. The registry is ordered, but order does not affect correctness:
//! each element is claimed by exactly one convention, since the selectors
//! are disjoint by element type (radio groups additionally deduplicate
//! themselves within their own strategy).

use std::fmt;

use formbind_core::Selector;

use crate::strategies::{
    BindingStrategy, CheckboxBinding, DataBindBinding, RadioGroupBinding, SelectBoxBinding,
    StandardBinding,
};

/// Attribute carrying a generic-binding declaration list.
pub const DATA_BIND_ATTR: &str = "data-bind";

/// One registry entry: a widget family's selector and strategy.
pub struct Convention {
    pub name: &'static str,
    pub selector: Selector,
    pub strategy: &'static dyn BindingStrategy,
}

impl fmt::Debug for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Convention")
            .field("name", &self.name)
            .field("selector", &self.selector)
            .finish()
    }
}

static STANDARD: StandardBinding = StandardBinding;
static RADIO: RadioGroupBinding = RadioGroupBinding;
static CHECKBOX: CheckboxBinding = CheckboxBinding;
static SELECT: SelectBoxBinding = SelectBoxBinding;
static DATABIND: DataBindBinding = DataBindBinding;

static CONVENTIONS: [Convention; 20] = [
    Convention {
        name: "text",
        selector: Selector::Input("text"),
        strategy: &STANDARD,
    },
    Convention {
        name: "hidden",
        selector: Selector::Input("hidden"),
        strategy: &STANDARD,
    },
    Convention {
        name: "textarea",
        selector: Selector::Tag("textarea"),
        strategy: &STANDARD,
    },
    Convention {
        name: "password",
        selector: Selector::Input("password"),
        strategy: &STANDARD,
    },
    Convention {
        name: "radio",
        selector: Selector::Input("radio"),
        strategy: &RADIO,
    },
    Convention {
        name: "checkbox",
        selector: Selector::Input("checkbox"),
        strategy: &CHECKBOX,
    },
    Convention {
        name: "select",
        selector: Selector::Tag("select"),
        strategy: &SELECT,
    },
    Convention {
        name: "databind",
        selector: Selector::HasAttr(DATA_BIND_ATTR),
        strategy: &DATABIND,
    },
    Convention {
        name: "date",
        selector: Selector::Input("date"),
        strategy: &STANDARD,
    },
    Convention {
        name: "datetime",
        selector: Selector::Input("datetime"),
        strategy: &STANDARD,
    },
    Convention {
        name: "datetime_local",
        selector: Selector::Input("datetime-local"),
        strategy: &STANDARD,
    },
    Convention {
        name: "email",
        selector: Selector::Input("email"),
        strategy: &STANDARD,
    },
    Convention {
        name: "month",
        selector: Selector::Input("month"),
        strategy: &STANDARD,
    },
    Convention {
        name: "number",
        selector: Selector::Input("number"),
        strategy: &STANDARD,
    },
    Convention {
        name: "range",
        selector: Selector::Input("range"),
        strategy: &STANDARD,
    },
    Convention {
        name: "search",
        selector: Selector::Input("search"),
        strategy: &STANDARD,
    },
    Convention {
        name: "tel",
        selector: Selector::Input("tel"),
        strategy: &STANDARD,
    },
    Convention {
        name: "time",
        selector: Selector::Input("time"),
        strategy: &STANDARD,
    },
    Convention {
        name: "url",
        selector: Selector::Input("url"),
        strategy: &STANDARD,
    },
    Convention {
        name: "week",
        selector: Selector::Input("week"),
        strategy: &STANDARD,
    },
];

/// The registry, in processing order.
#[must_use]
pub fn conventions() -> &'static [Convention] {
    &CONVENTIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_every_widget_family() {
        let names: Vec<_> = conventions().iter().map(|c| c.name).collect();
        for expected in ["text", "hidden", "radio", "checkbox", "select", "databind"] {
            assert!(names.contains(&expected), "missing convention {expected}");
        }
        assert_eq!(conventions().len(), 20);
    }

    #[test]
    fn selectors_are_disjoint_per_input_type() {
        let mut input_selectors = Vec::new();
        for convention in conventions() {
            if let Selector::Input(ty) = convention.selector {
                assert!(
                    !input_selectors.contains(&ty),
                    "duplicate input selector {ty}"
                );
                input_selectors.push(ty);
            }
        }
    }
}
