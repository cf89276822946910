//! Value objects - Immutable objects defined by their attributes

mod character_scope;
mod settings;

pub use character_scope::{ScopeMode, SettingsScope};
pub use settings::EnhancedSettings;
