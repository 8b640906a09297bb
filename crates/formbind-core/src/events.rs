//! Named-channel event hub with RAII subscription guards.
//!
//! [`EventHub`] backs both the model's attribute-change events and the
//! element wrapper's change event. Callbacks are registered under a string
//! event name and fire in registration order. Each registration is returned
//! as a [`Subscription`]: dropping it removes the callback before the next
//! notification cycle, which is what makes binder teardown a plain
//! "drop the guards" operation with no leak or double-removal cases.
//!
//! # Re-entrancy
//!
//! `emit` snapshots the channel's callback list before invoking anything, so
//! a callback may subscribe, drop subscriptions, or re-enter `emit` (e.g. an
//! element change handler writing to the model, which dispatches the model's
//! change event synchronously) without aborting the in-flight dispatch.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use ahash::AHashMap;

type Callback<T> = Rc<dyn Fn(&T)>;

struct HubInner<T> {
    next_id: u64,
    channels: AHashMap<String, Vec<(u64, Callback<T>)>>,
}

/// RAII guard for one event registration.
///
/// Dropping the guard removes the callback from its hub. The guard is
/// type-erased so subscriptions against differently typed hubs (model events
/// carry a [`Value`](crate::Value), element events carry nothing) can live in
/// one collection.
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub(crate) fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish()
    }
}

/// Single-threaded, named-channel event dispatcher.
pub struct EventHub<T> {
    inner: Rc<RefCell<HubInner<T>>>,
}

impl<T> Clone for EventHub<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static> EventHub<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(HubInner {
                next_id: 0,
                channels: AHashMap::new(),
            })),
        }
    }

    /// Register `callback` on the named event channel.
    ///
    /// The registration lives until the returned [`Subscription`] is dropped.
    pub fn subscribe(&self, event: &str, callback: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner
                .channels
                .entry(event.to_string())
                .or_default()
                .push((id, Rc::new(callback)));
            id
        };

        let weak: Weak<RefCell<HubInner<T>>> = Rc::downgrade(&self.inner);
        let event = event.to_string();
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                let mut inner = inner.borrow_mut();
                if let Some(channel) = inner.channels.get_mut(&event) {
                    channel.retain(|(sub_id, _)| *sub_id != id);
                }
            }
        })
    }

    /// Invoke every callback registered on `event`, in registration order.
    pub fn emit(&self, event: &str, payload: &T) {
        let callbacks: Vec<Callback<T>> = self
            .inner
            .borrow()
            .channels
            .get(event)
            .map(|channel| channel.iter().map(|(_, cb)| Rc::clone(cb)).collect())
            .unwrap_or_default();
        for callback in callbacks {
            callback(payload);
        }
    }

    /// Number of live registrations on one channel.
    #[must_use]
    pub fn subscriber_count(&self, event: &str) -> usize {
        self.inner
            .borrow()
            .channels
            .get(event)
            .map_or(0, Vec::len)
    }

    /// Number of live registrations across all channels.
    #[must_use]
    pub fn total_subscribers(&self) -> usize {
        self.inner.borrow().channels.values().map(Vec::len).sum()
    }
}

impl<T: 'static> Default for EventHub<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EventHub<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHub")
            .field(
                "channels",
                &self.inner.borrow().channels.keys().collect::<Vec<_>>(),
            )
            .finish()
    }
}
