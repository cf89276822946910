//! Platform DI Container
//!
//! The `Platform` struct aggregates the platform-specific storage adapter
//! and the process-wide strategy bus behind a single injectable type, so
//! consumers never reference ambient globals.
//!
//! Usage:
//! - Created by `create_platform()` in infrastructure/platform/desktop.rs
//! - Handed to each UI surface at mount time
//! - Services are built from it via `settings_service()` / `strategy_handle()`

use std::sync::Arc;

use crate::application::{SettingsService, StrategyService};
use crate::infrastructure::messaging::StrategyBus;
use crate::ports::outbound::StorageProvider;
use crate::state::StrategyHandle;

/// Unified platform services container
#[derive(Clone)]
pub struct Platform {
    storage: Arc<dyn StorageProviderDyn>,
    bus: StrategyBus,
}

// Dynamic trait version for Arc storage (needs Send + Sync so the container
// can cross thread boundaries)
trait StorageProviderDyn: Send + Sync {
    fn save(&self, key: &str, value: &str);
    fn load(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

// Blanket implementation - converts the port trait to a dyn-safe wrapper
impl<T: StorageProvider + Send + Sync> StorageProviderDyn for T {
    fn save(&self, key: &str, value: &str) {
        StorageProvider::save(self, key, value)
    }
    fn load(&self, key: &str) -> Option<String> {
        StorageProvider::load(self, key)
    }
    fn remove(&self, key: &str) {
        StorageProvider::remove(self, key)
    }
}

impl Platform {
    /// Create a new Platform with the given storage provider and bus
    pub fn new<S>(storage: S, bus: StrategyBus) -> Self
    where
        S: StorageProvider + Send + Sync,
    {
        Self {
            storage: Arc::new(storage),
            bus,
        }
    }

    // -------------------------------------------------------------------------
    // Storage operations
    // -------------------------------------------------------------------------

    /// Save a string value with the given key
    pub fn storage_save(&self, key: &str, value: &str) {
        self.storage.save(key, value)
    }

    /// Load a string value by key, returns None if not found
    pub fn storage_load(&self, key: &str) -> Option<String> {
        self.storage.load(key)
    }

    /// Remove a value by key
    pub fn storage_remove(&self, key: &str) {
        self.storage.remove(key)
    }

    /// Get a StorageProvider adapter for use with application services
    pub fn storage_adapter(&self) -> PlatformStorageAdapter {
        PlatformStorageAdapter {
            platform: self.clone(),
        }
    }

    // -------------------------------------------------------------------------
    // Broadcast operations
    // -------------------------------------------------------------------------

    /// The process-wide strategy bus
    pub fn strategy_bus(&self) -> StrategyBus {
        self.bus.clone()
    }

    // -------------------------------------------------------------------------
    // Service factories
    // -------------------------------------------------------------------------

    /// Settings persistence service over this platform's storage
    pub fn settings_service(&self) -> SettingsService<PlatformStorageAdapter> {
        SettingsService::new(self.storage_adapter())
    }

    /// Strategy service over this platform's storage and bus
    pub fn strategy_service(&self) -> StrategyService<PlatformStorageAdapter> {
        StrategyService::new(self.storage_adapter(), self.bus.clone())
    }

    /// A freshly mounted strategy consumer: seeded from storage, subscribed
    /// to the bus
    pub fn strategy_handle(&self) -> StrategyHandle<PlatformStorageAdapter> {
        StrategyHandle::new(self.strategy_service())
    }
}

/// Adapter that allows application services to use Platform's storage
///
/// Implements the StorageProvider port trait, delegating to Platform's
/// internal storage, so services stay generic over the port rather than
/// depending on the container.
#[derive(Clone)]
pub struct PlatformStorageAdapter {
    platform: Platform,
}

impl StorageProvider for PlatformStorageAdapter {
    fn save(&self, key: &str, value: &str) {
        self.platform.storage_save(key, value)
    }

    fn load(&self, key: &str) -> Option<String> {
        self.platform.storage_load(key)
    }

    fn remove(&self, key: &str) {
        self.platform.storage_remove(key)
    }
}
