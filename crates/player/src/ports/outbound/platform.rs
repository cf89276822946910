//! Platform abstraction ports
//!
//! These traits abstract platform-specific operations so that:
//! 1. Application code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with in-memory implementations

/// Persistent key-value storage abstraction (browser localStorage or a
/// file-backed store on desktop).
///
/// All operations are best-effort: implementations log failures and recover
/// locally rather than surfacing errors. Writes are whole-value overwrites,
/// last write wins.
pub trait StorageProvider: Clone + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Storage key constants
///
/// These are kept in the ports layer as they define the contract for
/// what keys are used across the application.
pub mod storage_keys {
    /// Persisted strategy tag (`classic` / `renewal`).
    pub const GLOBAL_SYSTEM: &str = "starforce-global-system";
    /// Logical root for enhancement settings; character-scoped variants are
    /// derived from it (`starforce-settings-<id>`).
    pub const SETTINGS: &str = "starforce-settings";
}
