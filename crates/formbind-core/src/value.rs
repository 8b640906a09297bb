//! Dynamic attribute values exchanged between models and elements.
//!
//! Model attributes are loosely typed: a text input produces strings, a
//! checkbox produces booleans, an array-valued checkbox group produces string
//! lists, and an attribute can be absent (`Undefined`) or explicitly cleared
//! (`Null`). [`Value`] covers exactly that domain.
//!
//! Truthiness follows the host-language conventions the binding semantics
//! were specified against: empty strings are falsy, lists are truthy even
//! when empty, `Undefined` and `Null` are falsy.

/// A loosely typed model attribute value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Value {
    /// The attribute is not defined.
    #[default]
    Undefined,
    /// The attribute is defined but holds no value.
    Null,
    Bool(bool),
    Str(String),
    List(Vec<String>),
}

impl Value {
    /// Whether the value is neither [`Undefined`](Value::Undefined) nor
    /// [`Null`](Value::Null).
    #[must_use]
    pub fn is_defined(&self) -> bool {
        !matches!(self, Value::Undefined | Value::Null)
    }

    /// Loose truthiness: undefined/null are falsy, booleans are themselves,
    /// strings are truthy when non-empty, lists are always truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Str(s) => !s.is_empty(),
            Value::List(_) => true,
        }
    }

    /// String form written into the DOM.
    ///
    /// Undefined and null render as the empty string so that missing model
    /// state never shows up as literal text in markup.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Value::Undefined | Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Str(s) => s.clone(),
            Value::List(items) => items.join(","),
        }
    }

    /// Membership test used by array-valued checkbox bindings: a list
    /// contains the needle, a string equals it, anything else is false.
    #[must_use]
    pub fn contains_str(&self, needle: &str) -> bool {
        match self {
            Value::List(items) => items.iter().any(|item| item == needle),
            Value::Str(s) => s == needle,
            _ => false,
        }
    }

    /// Borrow the string payload, if this is a `Str`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}
