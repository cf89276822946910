//! Per-consumer strategy state.
//!
//! Each mounted UI surface owns one handle. The handle caches the strategy
//! locally, so reads never touch storage after creation; convergence across
//! surfaces happens through the broadcast bus.

use std::sync::{Arc, Mutex};

use starforce_domain::Strategy;

use crate::application::StrategyService;
use crate::ports::outbound::StorageProvider;

/// A consumer's view of the active strategy.
///
/// Seeded from persisted storage at creation, then kept current by a bus
/// subscription: when a broadcast carries a strategy that differs from the
/// local cache, the cache is updated. A handle created after a broadcast
/// still converges because it seeds from the already-persisted value.
#[derive(Clone)]
pub struct StrategyHandle<S: StorageProvider> {
    cache: Arc<Mutex<Strategy>>,
    service: StrategyService<S>,
}

impl<S: StorageProvider> StrategyHandle<S> {
    /// Mount a new consumer: read the persisted strategy and subscribe to
    /// changes.
    pub fn new(service: StrategyService<S>) -> Self {
        let cache = Arc::new(Mutex::new(service.current()));

        let cache_for_bus = Arc::clone(&cache);
        service.bus().subscribe(move |strategy| {
            match cache_for_bus.lock() {
                Ok(mut guard) => {
                    if *guard != strategy {
                        *guard = strategy;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to acquire strategy cache lock: {}", e);
                }
            }
        });

        Self { cache, service }
    }

    /// The locally cached strategy. Does not read storage.
    pub fn current(&self) -> Strategy {
        match self.cache.lock() {
            Ok(guard) => *guard,
            Err(e) => {
                tracing::error!("Failed to acquire strategy cache lock: {}", e);
                Strategy::default()
            }
        }
    }

    /// Change the strategy: persists, then broadcasts to every consumer.
    ///
    /// This handle's own cache updates through its subscription like any
    /// other listener.
    pub fn set(&self, strategy: Strategy) {
        self.service.set(strategy);
    }
}
