//! The per-widget-family binding strategies.
//!
//! Each strategy implements the same contract: query the view with the
//! convention's selector in document order, gate every element through
//! [`is_bind_allowed`](crate::is_bind_allowed), wire the model→element and
//! element→model callbacks into the binder's [`SubscriptionSet`], and finish
//! each element's initial value synchronization before moving to the next
//! element. Strategies are stateless unit structs shared by all binders.

mod checkbox;
mod databind;
mod radio;
mod select;
mod standard;

pub use checkbox::CheckboxBinding;
pub use databind::DataBindBinding;
pub use radio::RadioGroupBinding;
pub use select::SelectBoxBinding;
pub use standard::StandardBinding;

use formbind_core::{Model, Selector, View};

use crate::binder::SubscriptionSet;
use crate::config::BindingConfig;

/// Uniform bind step for one widget family.
pub trait BindingStrategy: Sync {
    /// Wire every eligible element matching `selector` within the view's
    /// scope, recording all created subscriptions in `subscriptions`.
    fn bind(
        &self,
        selector: &Selector,
        view: &View,
        model: &Model,
        config: &BindingConfig,
        subscriptions: &mut SubscriptionSet,
    );
}
