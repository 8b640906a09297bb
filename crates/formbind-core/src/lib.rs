#![forbid(unsafe_code)]

//! Collaborator layer for the formbind binding engine.
//!
//! This crate provides the three capabilities the binding engine depends on
//! but does not own: an observable attribute [`Model`], a headless [`Element`]
//! tree with a DOM-like surface, and a [`View`] that scopes element queries to
//! one rendered subtree.
//!
//! # Architecture
//!
//! Everything here is single-threaded and event-driven. Shared ownership uses
//! `Rc<RefCell<..>>` handles; change notification flows through named-channel
//! [`EventHub`]s whose registrations are RAII [`Subscription`] guards.
//! Dropping a guard removes its callback before the next notification cycle,
//! so subscription cleanup can never leak or double-remove.
//!
//! # Invariants
//!
//! 1. Callbacks on one event channel fire in registration order.
//! 2. Programmatic element mutation (`set_value`, `set_checked`) never fires
//!    the element's change event; only [`Element::trigger_change`] does.
//! 3. `Model::set` fires `change:<attr>` only for attributes whose value
//!    actually changed, and only after all writes in the batch have landed.

pub mod dom;
pub mod events;
pub mod model;
pub mod query;
pub mod value;
pub mod view;

pub use dom::Element;
pub use events::{EventHub, Subscription};
pub use model::Model;
pub use query::Selector;
pub use value::Value;
pub use view::View;
