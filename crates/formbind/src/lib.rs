#![forbid(unsafe_code)]

//! Convention-based two-way binding between an observable model and the
//! form-like elements of one view.
//!
//! Instead of per-field binding declarations, elements are wired to model
//! attributes by naming convention: an element's `id` (or `name`, for radio
//! groups) names the model attribute it synchronizes with. [`bind`] walks a
//! fixed registry of [`Convention`]s, each pairing a selector with a binding
//! strategy for one widget family, and returns a [`Binder`] that owns every
//! subscription created. [`Binder::unbind`] tears all of them down.
//!
//! ```
//! use formbind::{bind, BindOptions, Element, Model, View};
//!
//! let model = Model::with_attrs([("name", "Imogen Quist")]);
//! let form = Element::new("form")
//!     .child(Element::new("input").attr("type", "text").attr("id", "name"));
//! let view = View::new(form.clone(), model.clone());
//!
//! let mut binder = bind(&view, BindOptions::new());
//!
//! // Model drives element...
//! let input = form.children().remove(0);
//! assert_eq!(input.value(), "Imogen Quist");
//!
//! // ...and committed element edits drive the model.
//! input.set_value("Imogen Heap");
//! input.trigger_change();
//! assert_eq!(model.get("name").render(), "Imogen Heap");
//!
//! binder.unbind();
//! ```
//!
//! # Leniency
//!
//! Binding setup never fails: an element with no resolvable bound attribute
//! name is skipped, an unknown element type matches no convention, and a
//! malformed `data-bind` declaration binds leniently. Skips are surfaced as
//! `tracing` diagnostics rather than errors, so one odd element can never
//! abort the rest of a view's wiring.

pub mod binder;
pub mod classify;
pub mod config;
pub mod conventions;
pub mod strategies;

pub use binder::{Binder, SubscriptionSet};
pub use classify::{SKIP_ATTR, element_type, is_bind_allowed};
pub use config::{BindOptions, BindingConfig, InputType};
pub use conventions::{Convention, DATA_BIND_ATTR, conventions};
pub use formbind_core::{Element, Model, Selector, Subscription, Value, View};

/// Bind every eligible element in `view` to the view's model.
///
/// The returned [`Binder`] owns all subscriptions; drop it or call
/// [`Binder::unbind`] to disconnect both directions.
#[must_use]
pub fn bind(view: &View, options: BindOptions) -> Binder {
    Binder::bind(view, options)
}

/// Tear down every subscription `binder` installed.
pub fn unbind(binder: &mut Binder) {
    binder.unbind();
}
