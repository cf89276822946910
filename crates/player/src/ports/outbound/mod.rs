//! Outbound ports - interfaces the application layer depends on.

mod platform;

pub use platform::{storage_keys, StorageProvider};
