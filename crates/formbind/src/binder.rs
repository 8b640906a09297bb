//! The binding orchestrator.
//!
//! [`Binder::bind`] walks the convention registry in order, hands each
//! strategy its selector, and records every subscription the strategies
//! create in one of two ordered lists: model-side and element-side. The
//! lists hold RAII [`Subscription`] guards, so [`Binder::unbind`] is a
//! single-pass drop of the guards: every subscription is removed exactly
//! once and none can leak.

use formbind_core::{Element, Model, Subscription, Value, View};

use crate::config::{BindOptions, BindingConfig};
use crate::conventions::conventions;

/// The two ordered subscription lists a bind pass fills in.
///
/// Strategies call back into this sink instead of subscribing directly, so
/// the binder knows about every registration it must undo later.
#[derive(Debug, Default)]
pub struct SubscriptionSet {
    model_subscriptions: Vec<Subscription>,
    element_subscriptions: Vec<Subscription>,
}

impl SubscriptionSet {
    /// Subscribe `callback` to the model's change event for one attribute.
    pub fn register_model_binding(
        &mut self,
        model: &Model,
        attr_name: &str,
        callback: impl Fn(&Value) + 'static,
    ) {
        let subscription = model.subscribe(&format!("change:{attr_name}"), callback);
        self.model_subscriptions.push(subscription);
    }

    /// Subscribe `callback` to an arbitrary named model event.
    pub fn register_data_binding(
        &mut self,
        model: &Model,
        event_name: &str,
        callback: impl Fn(&Value) + 'static,
    ) {
        let subscription = model.subscribe(event_name, callback);
        self.model_subscriptions.push(subscription);
    }

    /// Subscribe `callback` to an element's change event.
    pub fn register_element_binding(&mut self, element: &Element, callback: impl Fn() + 'static) {
        self.element_subscriptions.push(element.subscribe_change(callback));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.model_subscriptions.len() + self.element_subscriptions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.model_subscriptions.is_empty() && self.element_subscriptions.is_empty()
    }

    fn clear(&mut self) {
        self.element_subscriptions.clear();
        self.model_subscriptions.clear();
    }
}

/// Owns all subscriptions created by one [`bind`](crate::bind) call for one
/// view/model pair.
#[derive(Debug)]
pub struct Binder {
    view: View,
    config: BindingConfig,
    subscriptions: SubscriptionSet,
}

impl Binder {
    /// Run the bind pass: resolve configuration, then invoke each registered
    /// convention's strategy against the view, in registry order.
    #[must_use]
    pub fn bind(view: &View, options: BindOptions) -> Self {
        let config = BindingConfig::resolve(&options);
        let model = view.model().clone();
        let mut subscriptions = SubscriptionSet::default();

        for convention in conventions() {
            let before = subscriptions.len();
            convention
                .strategy
                .bind(&convention.selector, view, &model, &config, &mut subscriptions);
            tracing::debug!(
                convention = convention.name,
                subscriptions = subscriptions.len() - before,
                "processed binding convention"
            );
        }

        Self {
            view: view.clone(),
            config,
            subscriptions,
        }
    }

    /// Remove every recorded subscription. Idempotent; after the first call,
    /// no model or element event produces any further synchronization.
    pub fn unbind(&mut self) {
        self.subscriptions.clear();
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    /// Total recorded subscriptions, both directions.
    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    #[must_use]
    pub fn view(&self) -> &View {
        &self.view
    }

    #[must_use]
    pub fn config(&self) -> &BindingConfig {
        &self.config
    }
}
