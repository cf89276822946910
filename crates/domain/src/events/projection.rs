//! Strategy-compliant projection of raw event states.

use crate::strategy::Strategy;

use super::catalog::available_events;
use super::state::EventState;

/// Reconcile a raw event state against the catalog for `strategy`.
///
/// Entries legal under the strategy keep their explicit value; entries the
/// strategy does not support are cleared to absent. Typically needed right
/// after a strategy change invalidated part of a persisted state, both when
/// rendering toggles and before handing state to the enhancement engine.
///
/// Idempotent: projecting an already-compliant state returns an equal state.
pub fn project_event_state(strategy: Strategy, state: &EventState) -> EventState {
    let mut projected = EventState::default();
    for entry in available_events(strategy) {
        if let Some(value) = state.get(entry.id) {
            projected.set(entry.id, value);
        }
    }
    projected
}
