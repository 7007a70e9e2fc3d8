//! Tick source abstraction and a manually pumped implementation.

use std::cell::RefCell;

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle for one live tick subscription.
    pub struct SubscriptionId;
}

/// Per-frame callback receiving the elapsed time in seconds.
pub type TickHandler = Box<dyn FnMut(f64)>;

/// Host-provided frame signal.
///
/// Handlers may unsubscribe themselves, or subscribe new handlers, while
/// being dispatched; implementations must not hold internal borrows across a
/// handler call.
pub trait TickSource {
    fn subscribe(&self, handler: TickHandler) -> SubscriptionId;

    /// Remove a subscription. Returns `false` if `id` was not subscribed.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

/// A [`TickSource`] driven explicitly by calling [`ManualTicker::advance`].
///
/// Suitable for hosts with their own frame loop and for deterministic tests.
#[derive(Default)]
pub struct ManualTicker {
    // `None` while the handler is out being dispatched
    handlers: RefCell<SlotMap<SubscriptionId, Option<TickHandler>>>,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Deliver one tick of `dt` seconds to every current subscriber.
    ///
    /// Handlers subscribed during dispatch first run on the next call.
    /// Returns the number of handlers invoked.
    pub fn advance(&self, dt: f64) -> usize {
        let ids: Vec<SubscriptionId> = self.handlers.borrow().keys().collect();
        let mut invoked = 0;
        for id in ids {
            let handler = self
                .handlers
                .borrow_mut()
                .get_mut(id)
                .and_then(Option::take);
            let Some(mut handler) = handler else {
                continue;
            };
            handler(dt);
            invoked += 1;
            // Put it back unless it was unsubscribed during the call
            if let Some(slot) = self.handlers.borrow_mut().get_mut(id) {
                *slot = Some(handler);
            }
        }
        invoked
    }
}

impl TickSource for ManualTicker {
    fn subscribe(&self, handler: TickHandler) -> SubscriptionId {
        self.handlers.borrow_mut().insert(Some(handler))
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.handlers.borrow_mut().remove(id).is_some()
    }
}
