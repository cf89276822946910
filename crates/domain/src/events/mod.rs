//! Rate-modifying enhancement events.
//!
//! An event is a named boolean modifier (discount, success-rate bonus,
//! destruction protection) that may or may not be legal under the active
//! strategy. The catalog decides legality and defaults; the projection step
//! reconciles raw user selections against the catalog before they reach the
//! enhancement engine.

mod catalog;
mod projection;
mod state;

pub use catalog::{
    api_event_flags, available_events, default_event_state, is_event_available,
    EventCatalogEntry,
};
pub use projection::project_event_state;
pub use state::{ApiEventFlags, EventId, EventState};
