//! Strategy change broadcast bus.
//!
//! The bus provides a push-based subscription model for strategy changes.
//! Any consumer may publish; every currently-registered subscriber is
//! notified synchronously, in registration order. Subscribers registered
//! after a dispatch do not see it; they converge by reading the persisted
//! strategy at creation instead.

use std::sync::{Arc, Mutex};

use starforce_domain::Strategy;

type Subscriber = Box<dyn FnMut(Strategy) + Send + 'static>;

/// Broadcast bus for strategy changes.
///
/// Cloning shares the subscriber list, so one bus instance can be handed to
/// any number of independent consumers. The bus holds strong references to
/// subscribers; they persist until the bus is dropped or cleared.
#[derive(Clone)]
pub struct StrategyBus {
    subscribers: Arc<Mutex<Vec<Subscriber>>>,
}

impl StrategyBus {
    /// Create a new bus with no subscribers.
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Subscribe to strategy changes.
    ///
    /// The callback is invoked synchronously for every dispatch that happens
    /// after this call.
    pub fn subscribe(&self, callback: impl FnMut(Strategy) + Send + 'static) {
        match self.subscribers.lock() {
            Ok(mut guard) => guard.push(Box::new(callback)),
            Err(e) => {
                tracing::error!("Failed to acquire subscriber lock for subscribe: {}", e);
            }
        }
    }

    /// Dispatch a strategy change to all subscribers, in registration order.
    ///
    /// Fire-and-forget: there is no delivery acknowledgement and no queueing.
    pub fn dispatch(&self, strategy: Strategy) {
        match self.subscribers.lock() {
            Ok(mut guard) => {
                for subscriber in guard.iter_mut() {
                    subscriber(strategy);
                }
            }
            Err(e) => {
                tracing::error!("Failed to acquire subscriber lock for dispatch: {}", e);
            }
        }
    }

    /// Get the number of subscribers.
    pub fn subscriber_count(&self) -> usize {
        match self.subscribers.lock() {
            Ok(guard) => guard.len(),
            Err(_) => 0,
        }
    }

    /// Clear all subscribers.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.subscribers.lock() {
            guard.clear();
        }
    }
}

impl Default for StrategyBus {
    fn default() -> Self {
        Self::new()
    }
}
