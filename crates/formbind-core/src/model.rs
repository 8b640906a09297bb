//! Observable attribute map.
//!
//! [`Model`] holds loosely typed named attributes and notifies subscribers
//! through named events: setting attribute `name` to a new value fires
//! `change:<name>` with the new value, and arbitrary events can be raised
//! with [`Model::trigger`] for bindings that listen to something other than
//! attribute changes.
//!
//! # Invariants
//!
//! 1. `change:<name>` fires only when the stored value actually changed.
//! 2. In a multi-attribute [`Model::set`], all writes land before the first
//!    change event fires, so callbacks observe the complete batch.
//! 3. [`Model::has`] reports map presence: an attribute explicitly set to
//!    [`Value::Undefined`] is present but not defined.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use ahash::AHashMap;

use crate::events::{EventHub, Subscription};
use crate::value::Value;

/// Handle to one observable attribute map. Clones share the same state.
#[derive(Clone)]
pub struct Model {
    attrs: Rc<RefCell<AHashMap<String, Value>>>,
    hub: EventHub<Value>,
}

impl Model {
    #[must_use]
    pub fn new() -> Self {
        Self {
            attrs: Rc::new(RefCell::new(AHashMap::new())),
            hub: EventHub::new(),
        }
    }

    /// Build a model pre-seeded with attributes, without firing events.
    #[must_use]
    pub fn with_attrs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let model = Self::new();
        model.attrs.borrow_mut().extend(
            pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value.into())),
        );
        model
    }

    /// Current value of an attribute; [`Value::Undefined`] when absent.
    #[must_use]
    pub fn get(&self, name: &str) -> Value {
        self.attrs
            .borrow()
            .get(name)
            .cloned()
            .unwrap_or(Value::Undefined)
    }

    /// Whether the attribute is present in the map at all.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.attrs.borrow().contains_key(name)
    }

    /// Write a batch of attributes, then fire `change:<name>` for each one
    /// whose value changed.
    pub fn set<I, K, V>(&self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut changed = Vec::new();
        {
            let mut attrs = self.attrs.borrow_mut();
            for (name, value) in pairs {
                let name = name.into();
                let value = value.into();
                let previous = attrs.get(&name).cloned().unwrap_or(Value::Undefined);
                if previous != value {
                    changed.push((name.clone(), value.clone()));
                }
                attrs.insert(name, value);
            }
        }
        for (name, value) in changed {
            self.hub.emit(&format!("change:{name}"), &value);
        }
    }

    /// Write a single attribute.
    pub fn set_attr(&self, name: &str, value: impl Into<Value>) {
        self.set([(name.to_string(), value.into())]);
    }

    /// Raise an arbitrary named event (not tied to any attribute).
    pub fn trigger(&self, event: &str, payload: &Value) {
        self.hub.emit(event, payload);
    }

    /// Subscribe to a named event (`change:<attr>` or any custom name).
    pub fn subscribe(&self, event: &str, callback: impl Fn(&Value) + 'static) -> Subscription {
        self.hub.subscribe(event, callback)
    }

    /// Live registrations on one event channel (teardown verification).
    #[must_use]
    pub fn subscriber_count(&self, event: &str) -> usize {
        self.hub.subscriber_count(event)
    }

    /// Live registrations across all channels (teardown verification).
    #[must_use]
    pub fn total_subscribers(&self) -> usize {
        self.hub.total_subscribers()
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("attrs", &*self.attrs.borrow())
            .finish()
    }
}
