//! Event identifiers and selection state.

use serde::{Deserialize, Serialize};

/// Identifier for a rate-modifying event.
///
/// Closed set: the calculator knows exactly four events across both
/// strategies. The wire names match the persisted/UI payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventId {
    /// 30% enhancement cost discount.
    #[serde(rename = "thirtyOff")]
    ThirtyOff,
    /// Guaranteed success at stars 5, 10 and 15 (legacy ruleset only).
    #[serde(rename = "fiveTenFifteen")]
    FiveTenFifteen,
    /// Star catching success-rate bonus.
    #[serde(rename = "starCatching")]
    StarCatching,
    /// Reduced destruction chance (renewal ruleset only).
    #[serde(rename = "boomReduction")]
    BoomReduction,
}

impl EventId {
    /// Stable wire name, as it appears in persisted payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventId::ThirtyOff => "thirtyOff",
            EventId::FiveTenFifteen => "fiveTenFifteen",
            EventId::StarCatching => "starCatching",
            EventId::BoomReduction => "boomReduction",
        }
    }
}

/// Partial record of event selections.
///
/// A field is `None` when the user never touched the toggle (or the event is
/// absent from the active catalog) and `Some` when an explicit choice exists.
/// The state may carry stale entries after a strategy change; run it through
/// [`project_event_state`](super::project_event_state) before trusting it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thirty_off: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub five_ten_fifteen: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star_catching: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boom_reduction: Option<bool>,
}

impl EventState {
    /// The explicit selection for `id`, if any.
    pub fn get(&self, id: EventId) -> Option<bool> {
        match id {
            EventId::ThirtyOff => self.thirty_off,
            EventId::FiveTenFifteen => self.five_ten_fifteen,
            EventId::StarCatching => self.star_catching,
            EventId::BoomReduction => self.boom_reduction,
        }
    }

    /// Record an explicit selection for `id`.
    pub fn set(&mut self, id: EventId, value: bool) {
        *self.slot(id) = Some(value);
    }

    /// Drop the selection for `id`, returning the field to "never touched".
    pub fn clear(&mut self, id: EventId) {
        *self.slot(id) = None;
    }

    /// Whether `id` is explicitly enabled. Unset counts as disabled.
    pub fn is_enabled(&self, id: EventId) -> bool {
        self.get(id).unwrap_or(false)
    }

    fn slot(&mut self, id: EventId) -> &mut Option<bool> {
        match id {
            EventId::ThirtyOff => &mut self.thirty_off,
            EventId::FiveTenFifteen => &mut self.five_ten_fifteen,
            EventId::StarCatching => &mut self.star_catching,
            EventId::BoomReduction => &mut self.boom_reduction,
        }
    }
}

/// The fixed four-flag event object consumed by the enhancement engine.
///
/// Always fully populated; produced only by the sanitization boundary in
/// [`api_event_flags`](super::api_event_flags), so the engine can never see
/// an event flag the active strategy does not support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEventFlags {
    pub thirty_off: bool,
    pub five_ten_fifteen: bool,
    pub star_catching: bool,
    pub boom_reduction: bool,
}
