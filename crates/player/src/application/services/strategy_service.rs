//! Strategy Service
//!
//! Owns the persisted strategy selection and the change broadcast. Reads
//! fall back to the legacy ruleset when the stored tag is missing or
//! unrecognized, so data persisted by older builds keeps loading.

use starforce_domain::Strategy;

use crate::infrastructure::messaging::StrategyBus;
use crate::ports::outbound::{storage_keys, StorageProvider};

/// Strategy selection service
#[derive(Clone)]
pub struct StrategyService<S: StorageProvider> {
    storage: S,
    bus: StrategyBus,
}

impl<S: StorageProvider> StrategyService<S> {
    pub fn new(storage: S, bus: StrategyBus) -> Self {
        Self { storage, bus }
    }

    /// The currently persisted strategy.
    ///
    /// Missing values default to `Classic`; unrecognized tags also fall back
    /// to `Classic` with a log line rather than an error, for backward
    /// compatibility with previously persisted data.
    pub fn current(&self) -> Strategy {
        let Some(tag) = self.storage.load(storage_keys::GLOBAL_SYSTEM) else {
            return Strategy::default();
        };
        match tag.parse::<Strategy>() {
            Ok(strategy) => strategy,
            Err(_) => {
                tracing::warn!(
                    "Unrecognized strategy tag {:?} in storage; falling back to {}",
                    tag,
                    Strategy::default()
                );
                Strategy::default()
            }
        }
    }

    /// Persist `strategy` and broadcast the change to every registered
    /// listener.
    ///
    /// The broadcast happens even when the write failed inside the storage
    /// adapter, so mounted consumers still converge for the session; the
    /// choice just won't survive a reload.
    pub fn set(&self, strategy: Strategy) {
        self.storage.save(storage_keys::GLOBAL_SYSTEM, strategy.as_str());
        self.bus.dispatch(strategy);
    }

    /// The broadcast bus consumers subscribe to.
    pub fn bus(&self) -> &StrategyBus {
        &self.bus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::{FailingStorageProvider, MemoryStorageProvider};
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::{Arc, Mutex};

    fn service_with_memory() -> (StrategyService<MemoryStorageProvider>, MemoryStorageProvider) {
        let storage = MemoryStorageProvider::new();
        let service = StrategyService::new(storage.clone(), StrategyBus::new());
        (service, storage)
    }

    #[test]
    fn defaults_to_classic_when_nothing_persisted() {
        let (service, _storage) = service_with_memory();
        assert_eq!(service.current(), Strategy::Classic);
    }

    #[test]
    fn reads_persisted_tag() {
        let (service, storage) = service_with_memory();
        storage.save(storage_keys::GLOBAL_SYSTEM, "renewal");
        assert_eq!(service.current(), Strategy::Renewal);
    }

    #[test]
    fn unrecognized_tag_falls_back_to_classic() {
        let (service, storage) = service_with_memory();
        storage.save(storage_keys::GLOBAL_SYSTEM, "foo");
        assert_eq!(service.current(), Strategy::Classic);
    }

    #[test]
    fn set_persists_and_broadcasts() {
        let (service, storage) = service_with_memory();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        service.bus().subscribe(move |strategy| {
            if let Ok(mut guard) = seen_clone.lock() {
                guard.push(strategy);
            }
        });

        service.set(Strategy::Renewal);

        assert_eq!(
            storage.load(storage_keys::GLOBAL_SYSTEM).as_deref(),
            Some("renewal")
        );
        assert_eq!(*seen.lock().expect("seen lock"), vec![Strategy::Renewal]);
    }

    #[test]
    fn set_broadcasts_even_when_storage_fails() {
        let service = StrategyService::new(FailingStorageProvider, StrategyBus::new());

        let count = Arc::new(AtomicU32::new(0));
        let count_clone = Arc::clone(&count);
        service.bus().subscribe(move |_strategy| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        service.set(Strategy::Renewal);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
