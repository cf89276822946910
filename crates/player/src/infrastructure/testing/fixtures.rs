//! Simple test fixtures used across unit and integration tests.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::ports::outbound::StorageProvider;

/// In-memory storage provider.
///
/// Clones share the underlying map, so two consumers can be wired to the
/// same store the way two browser tabs share localStorage.
#[derive(Clone, Default)]
pub struct MemoryStorageProvider {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorageProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageProvider for MemoryStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut guard) = self.entries.write() {
            guard.insert(key.to_string(), value.to_string());
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .ok()
            .and_then(|guard| guard.get(key).cloned())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut guard) = self.entries.write() {
            guard.remove(key);
        }
    }
}

/// Storage provider where every operation fails.
///
/// Exercises the fallback paths: loads find nothing, saves go nowhere.
#[derive(Clone, Copy, Default)]
pub struct FailingStorageProvider;

impl StorageProvider for FailingStorageProvider {
    fn save(&self, key: &str, _value: &str) {
        tracing::error!("Storage unavailable; dropping write for key {}", key);
    }

    fn load(&self, _key: &str) -> Option<String> {
        None
    }

    fn remove(&self, _key: &str) {}
}
