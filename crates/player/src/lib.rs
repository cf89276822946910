//! Starforce Calculator player crate.
//!
//! The client-side configuration core: persistent per-character settings,
//! the active enhancement strategy, and cross-consumer synchronization.
//! Storage and the strategy broadcast bus are injected through ports so the
//! application layer stays platform-agnostic and testable.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod state;

// Re-export commonly used entrypoints
pub use application::{SettingsService, StrategyService};
pub use infrastructure::create_platform;
pub use infrastructure::messaging::StrategyBus;
pub use state::{Platform, PlatformStorageAdapter, StrategyHandle};
