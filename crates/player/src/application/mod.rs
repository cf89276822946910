pub mod services;

pub use services::{SettingsService, StrategyService};
