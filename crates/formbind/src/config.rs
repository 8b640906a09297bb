//! Per-binder configuration: which DOM attribute names the bound model
//! attribute for each element type, and the substitution table used by
//! generic bindings when a model value is undefined.
//!
//! Configuration is a plain value owned by its [`Binder`](crate::Binder);
//! there is no process-wide default table to mutate. Saving and restoring a
//! configuration is an ordinary [`Clone`].

use ahash::AHashMap;
use formbind_core::{Element, Value};

/// The fixed set of bindable element types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputType {
    Text,
    Hidden,
    Textarea,
    Password,
    Radio,
    Checkbox,
    Select,
    Number,
    Range,
    Tel,
    Search,
    Url,
    Email,
    Date,
    Datetime,
    DatetimeLocal,
    Month,
    Time,
    Week,
}

impl InputType {
    pub const ALL: [InputType; 19] = [
        InputType::Text,
        InputType::Hidden,
        InputType::Textarea,
        InputType::Password,
        InputType::Radio,
        InputType::Checkbox,
        InputType::Select,
        InputType::Number,
        InputType::Range,
        InputType::Tel,
        InputType::Search,
        InputType::Url,
        InputType::Email,
        InputType::Date,
        InputType::Datetime,
        InputType::DatetimeLocal,
        InputType::Month,
        InputType::Time,
        InputType::Week,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Hidden => "hidden",
            InputType::Textarea => "textarea",
            InputType::Password => "password",
            InputType::Radio => "radio",
            InputType::Checkbox => "checkbox",
            InputType::Select => "select",
            InputType::Number => "number",
            InputType::Range => "range",
            InputType::Tel => "tel",
            InputType::Search => "search",
            InputType::Url => "url",
            InputType::Email => "email",
            InputType::Date => "date",
            InputType::Datetime => "datetime",
            InputType::DatetimeLocal => "datetime_local",
            InputType::Month => "month",
            InputType::Time => "time",
            InputType::Week => "week",
        }
    }

    /// Parse a classified element type. Accepts the markup spelling of
    /// `datetime-local` as well as the underscore form.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "text" => InputType::Text,
            "hidden" => InputType::Hidden,
            "textarea" => InputType::Textarea,
            "password" => InputType::Password,
            "radio" => InputType::Radio,
            "checkbox" => InputType::Checkbox,
            "select" => InputType::Select,
            "number" => InputType::Number,
            "range" => InputType::Range,
            "tel" => InputType::Tel,
            "search" => InputType::Search,
            "url" => InputType::Url,
            "email" => InputType::Email,
            "date" => InputType::Date,
            "datetime" => InputType::Datetime,
            "datetime_local" | "datetime-local" => InputType::DatetimeLocal,
            "month" => InputType::Month,
            "time" => InputType::Time,
            "week" => InputType::Week,
            _ => return None,
        })
    }

    /// Convention default: radio groups bind through `name`, everything else
    /// through `id`.
    #[must_use]
    pub fn default_binding_attr(self) -> &'static str {
        match self {
            InputType::Radio => "name",
            _ => "id",
        }
    }
}

/// Options for one [`bind`](crate::bind) call.
///
/// `all` collapses the whole binding-attribute table to one DOM attribute;
/// per-type overrides are merged afterwards, so they win over `all`.
#[derive(Clone, Debug, Default)]
pub struct BindOptions {
    all: Option<String>,
    attributes: Vec<(InputType, String)>,
    substitutions: Vec<(String, String)>,
    default_substitution: Option<String>,
}

impl BindOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind every element type through the one given DOM attribute.
    #[must_use]
    pub fn all(mut self, attr: impl Into<String>) -> Self {
        self.all = Some(attr.into());
        self
    }

    /// Override the binding attribute for one element type.
    #[must_use]
    pub fn attribute(mut self, input_type: InputType, attr: impl Into<String>) -> Self {
        self.attributes.push((input_type, attr.into()));
        self
    }

    /// Text rendered by a generic binding when the model value is undefined,
    /// keyed by the element-attribute token (`text`, `html`, ...).
    #[must_use]
    pub fn substitution(
        mut self,
        element_attr: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.substitutions.push((element_attr.into(), text.into()));
        self
    }

    /// Fallback substitution for element-attribute tokens without their own
    /// entry. Defaults to the empty string.
    #[must_use]
    pub fn default_substitution(mut self, text: impl Into<String>) -> Self {
        self.default_substitution = Some(text.into());
        self
    }
}

/// Resolved configuration, owned by exactly one binder.
#[derive(Clone, Debug)]
pub struct BindingConfig {
    binding_attrs: AHashMap<InputType, String>,
    substitutions: AHashMap<String, String>,
    default_substitution: String,
}

impl Default for BindingConfig {
    fn default() -> Self {
        let binding_attrs = InputType::ALL
            .iter()
            .map(|&ty| (ty, ty.default_binding_attr().to_string()))
            .collect();
        Self {
            binding_attrs,
            substitutions: AHashMap::new(),
            default_substitution: String::new(),
        }
    }
}

impl BindingConfig {
    /// Merge the convention defaults with caller overrides.
    #[must_use]
    pub fn resolve(options: &BindOptions) -> Self {
        let mut config = Self::default();
        if let Some(attr) = &options.all {
            config.set_all_binding_attributes(attr);
        }
        for (input_type, attr) in &options.attributes {
            config.set_binding_attribute(*input_type, attr);
        }
        for (element_attr, text) in &options.substitutions {
            config.set_substitution(element_attr, text);
        }
        if let Some(text) = &options.default_substitution {
            config.set_default_substitution(text);
        }
        config
    }

    /// The DOM attribute configured for a classified element type, or `None`
    /// for type names outside the fixed set.
    #[must_use]
    pub fn binding_attr(&self, type_name: &str) -> Option<&str> {
        InputType::from_name(type_name)
            .and_then(|ty| self.binding_attrs.get(&ty))
            .map(String::as_str)
    }

    /// The element's value for its type's binding attribute: the bound model
    /// attribute name, when discoverable.
    #[must_use]
    pub fn binding_value(&self, element: &Element, type_name: &str) -> Option<String> {
        self.binding_attr(type_name)
            .and_then(|attr| element.get_attr(attr))
    }

    /// Force every element type to bind through one DOM attribute.
    pub fn set_all_binding_attributes(&mut self, attr: &str) {
        for input_type in InputType::ALL {
            self.binding_attrs.insert(input_type, attr.to_string());
        }
    }

    pub fn set_binding_attribute(&mut self, input_type: InputType, attr: &str) {
        self.binding_attrs.insert(input_type, attr.to_string());
    }

    pub fn set_substitution(&mut self, element_attr: &str, text: &str) {
        self.substitutions
            .insert(element_attr.to_string(), text.to_string());
    }

    pub fn set_default_substitution(&mut self, text: &str) {
        self.default_substitution = text.to_string();
    }

    /// Replace an undefined value with the substitution configured for the
    /// element-attribute token, so missing model state never renders as
    /// literal placeholder text. Defined values (and explicit nulls) pass
    /// through untouched.
    #[must_use]
    pub fn substitute(&self, element_attr: &str, value: Value) -> Value {
        if matches!(value, Value::Undefined) {
            let text = self
                .substitutions
                .get(element_attr)
                .map_or(self.default_substitution.as_str(), String::as_str);
            Value::Str(text.to_string())
        } else {
            value
        }
    }
}
