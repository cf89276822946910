//! State containers for player-side dependency injection
//!
//! This module contains the DI container that aggregates the storage adapter
//! and the strategy bus, plus the per-consumer strategy handle. These are
//! concrete implementations that belong in the adapters layer, not the
//! ports layer.

mod platform;
mod strategy_handle;

pub use platform::{Platform, PlatformStorageAdapter};
pub use strategy_handle::StrategyHandle;
