//! Application services - platform-agnostic logic over injected ports.

mod settings_service;
mod strategy_service;

pub use settings_service::SettingsService;
pub use strategy_service::StrategyService;
