//! Settings Service
//!
//! JSON read/write wrapper over the injected storage port. Keys are derived
//! from a logical setting name plus an optional character scope, so each
//! character in the equipment table keeps its own settings.
//!
//! Persistence is best-effort by design: a missing key, a malformed payload
//! or a storage failure resolves to the caller-supplied default, and write
//! failures are logged and swallowed. The caller's in-memory state stays
//! authoritative for the session.

use serde::de::DeserializeOwned;
use serde::Serialize;

use starforce_domain::SettingsScope;

use crate::ports::outbound::StorageProvider;

/// Settings persistence service
#[derive(Clone)]
pub struct SettingsService<S: StorageProvider> {
    storage: S,
}

impl<S: StorageProvider> SettingsService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Load a setting under the derived key, falling back to `default` on
    /// any failure.
    pub fn load<T: DeserializeOwned>(
        &self,
        logical_name: &str,
        scope: &SettingsScope,
        default: T,
    ) -> T {
        let key = scope.storage_key(logical_name);
        let Some(raw) = self.storage.load(&key) else {
            return default;
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Malformed payload under key {}: {}; using defaults", key, e);
                default
            }
        }
    }

    /// Serialize `value` and write it under the derived key.
    ///
    /// Failures are logged, never returned; the caller keeps its in-memory
    /// copy either way.
    pub fn save<T: Serialize>(&self, logical_name: &str, scope: &SettingsScope, value: &T) {
        let key = scope.storage_key(logical_name);
        match serde_json::to_string(value) {
            Ok(raw) => self.storage.save(&key, &raw),
            Err(e) => {
                tracing::error!("Failed to serialize settings for key {}: {}", key, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::{FailingStorageProvider, MemoryStorageProvider};
    use crate::ports::outbound::storage_keys;
    use starforce_domain::EnhancedSettings;

    #[test]
    fn load_returns_default_when_key_missing() {
        let service = SettingsService::new(MemoryStorageProvider::new());
        let settings: EnhancedSettings = service.load(
            storage_keys::SETTINGS,
            &SettingsScope::shared(),
            EnhancedSettings::default(),
        );
        assert_eq!(settings, EnhancedSettings::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let service = SettingsService::new(MemoryStorageProvider::new());
        let scope = SettingsScope::shared();

        let settings = EnhancedSettings {
            thirty_percent_off: true,
            spare_count: 7,
            spare_price: 350_000_000.0,
            ..EnhancedSettings::default()
        };

        service.save(storage_keys::SETTINGS, &scope, &settings);
        let loaded: EnhancedSettings =
            service.load(storage_keys::SETTINGS, &scope, EnhancedSettings::default());
        assert_eq!(loaded, settings);
    }

    #[test]
    fn malformed_payload_falls_back_to_default() {
        let storage = MemoryStorageProvider::new();
        storage.save(storage_keys::SETTINGS, "{not json");

        let service = SettingsService::new(storage);
        let settings: EnhancedSettings = service.load(
            storage_keys::SETTINGS,
            &SettingsScope::shared(),
            EnhancedSettings::default(),
        );
        assert_eq!(settings, EnhancedSettings::default());
    }

    #[test]
    fn storage_failure_falls_back_to_default() {
        let service = SettingsService::new(FailingStorageProvider);
        let settings: EnhancedSettings = service.load(
            storage_keys::SETTINGS,
            &SettingsScope::shared(),
            EnhancedSettings::default(),
        );
        assert_eq!(settings, EnhancedSettings::default());

        // Writing must not panic either
        service.save(
            storage_keys::SETTINGS,
            &SettingsScope::shared(),
            &EnhancedSettings::default(),
        );
    }

    #[test]
    fn character_scopes_are_isolated() {
        let storage = MemoryStorageProvider::new();
        let service = SettingsService::new(storage);

        let scope_a = SettingsScope::equipment_table(Some("a".into()), None);
        let scope_b = SettingsScope::equipment_table(Some("b".into()), None);

        let settings_a = EnhancedSettings {
            spare_count: 1,
            ..EnhancedSettings::default()
        };
        let settings_b = EnhancedSettings {
            spare_count: 2,
            ..EnhancedSettings::default()
        };

        service.save(storage_keys::SETTINGS, &scope_a, &settings_a);
        service.save(storage_keys::SETTINGS, &scope_b, &settings_b);

        let loaded_a: EnhancedSettings =
            service.load(storage_keys::SETTINGS, &scope_a, EnhancedSettings::default());
        let loaded_b: EnhancedSettings =
            service.load(storage_keys::SETTINGS, &scope_b, EnhancedSettings::default());
        assert_eq!(loaded_a.spare_count, 1);
        assert_eq!(loaded_b.spare_count, 2);
    }
}
