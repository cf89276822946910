//! Test support adapters.

mod fixtures;

pub use fixtures::{FailingStorageProvider, MemoryStorageProvider};
