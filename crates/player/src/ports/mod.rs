//! Player port definitions.

pub mod outbound;

pub use outbound::{storage_keys, StorageProvider};
