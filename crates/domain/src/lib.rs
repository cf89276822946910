//! Starforce Calculator domain crate.
//!
//! Pure domain rules for the enhancement calculator: which rate-modifying
//! events are legal under the selected enhancement strategy, default event
//! states, strategy-compliant projection of raw event states, and the
//! character-scoped settings value objects. No I/O lives here.

pub mod error;
pub mod events;
pub mod strategy;
pub mod value_objects;

pub use error::DomainError;
pub use strategy::Strategy;

// Re-export the event catalog surface
pub use events::{
    api_event_flags, available_events, default_event_state, is_event_available,
    project_event_state, ApiEventFlags, EventCatalogEntry, EventId, EventState,
};

pub use value_objects::{EnhancedSettings, ScopeMode, SettingsScope};
