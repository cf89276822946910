//! Messaging infrastructure for cross-consumer synchronization.

mod strategy_bus;

pub use strategy_bus::StrategyBus;
