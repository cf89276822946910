//! The strategy-scoped event catalog.
//!
//! Pure lookup tables: which events a strategy exposes, in which order, and
//! with which defaults. Star catching defaults to enabled; everything else
//! defaults to disabled.

use crate::strategy::Strategy;

use super::state::{ApiEventFlags, EventId, EventState};

/// One toggle in the event catalog.
///
/// Read-only and derived; never persisted. `is_special` marks the
/// strategy-exclusive entries so the UI can badge them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventCatalogEntry {
    pub id: EventId,
    pub display_name: &'static str,
    pub icon: Option<&'static str>,
    pub is_special: bool,
}

const STAR_CATCHING: EventCatalogEntry = EventCatalogEntry {
    id: EventId::StarCatching,
    display_name: "Star Catching",
    icon: Some("star-catching.png"),
    is_special: false,
};

const THIRTY_OFF: EventCatalogEntry = EventCatalogEntry {
    id: EventId::ThirtyOff,
    display_name: "30% Off Event",
    icon: Some("thirty-off.png"),
    is_special: false,
};

const FIVE_TEN_FIFTEEN: EventCatalogEntry = EventCatalogEntry {
    id: EventId::FiveTenFifteen,
    display_name: "5/10/15 Success Event",
    icon: None,
    is_special: true,
};

const BOOM_REDUCTION: EventCatalogEntry = EventCatalogEntry {
    id: EventId::BoomReduction,
    display_name: "Boom Reduction Event",
    icon: None,
    is_special: true,
};

// Base entries come first for every strategy; the strategy-exclusive entry
// is appended last.
static CLASSIC_EVENTS: [EventCatalogEntry; 3] = [STAR_CATCHING, THIRTY_OFF, FIVE_TEN_FIFTEEN];
static RENEWAL_EVENTS: [EventCatalogEntry; 3] = [STAR_CATCHING, THIRTY_OFF, BOOM_REDUCTION];

/// The ordered set of legal event toggles for `strategy`.
///
/// Deterministic and pure; the same strategy always yields the same slice.
pub fn available_events(strategy: Strategy) -> &'static [EventCatalogEntry] {
    match strategy {
        Strategy::Classic => &CLASSIC_EVENTS,
        Strategy::Renewal => &RENEWAL_EVENTS,
    }
}

/// Whether `id` is a legal event under `strategy`.
pub fn is_event_available(strategy: Strategy, id: EventId) -> bool {
    available_events(strategy).iter().any(|entry| entry.id == id)
}

/// The default selection state for `strategy`.
///
/// Star catching starts enabled, every other catalog entry starts disabled,
/// and events outside the catalog stay absent.
pub fn default_event_state(strategy: Strategy) -> EventState {
    let mut state = EventState::default();
    for entry in available_events(strategy) {
        state.set(entry.id, entry.id == EventId::StarCatching);
    }
    state
}

/// Project an arbitrary selection state into the engine's fixed four-flag
/// shape.
///
/// This is the authoritative sanitization boundary: flags illegal under
/// `strategy` come out `false` no matter what the input says. Star catching
/// defaults open when unset but an explicit `false` is honored.
pub fn api_event_flags(strategy: Strategy, state: &EventState) -> ApiEventFlags {
    let flag = |id: EventId| {
        if !is_event_available(strategy, id) {
            return false;
        }
        let default = id == EventId::StarCatching;
        state.get(id).unwrap_or(default)
    };

    ApiEventFlags {
        thirty_off: flag(EventId::ThirtyOff),
        five_ten_fifteen: flag(EventId::FiveTenFifteen),
        star_catching: flag(EventId::StarCatching),
        boom_reduction: flag(EventId::BoomReduction),
    }
}
