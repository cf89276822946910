//! Per-character enhancement settings value object
//!
//! EnhancedSettings intentionally includes serde derives because:
//! 1. Settings are stored in key-value storage as JSON payloads
//! 2. The JSON field names are the persisted contract and must stay stable
//!
//! Every field carries a serde default so payloads written by older builds
//! (with fewer fields) keep deserializing.

use serde::{Deserialize, Serialize};

/// Character-scoped calculator settings.
///
/// Constructed with defaults on first access per storage key; every mutation
/// is persisted immediately by the settings service. Entries are abandoned
/// rather than deleted when a character disappears.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedSettings {
    /// 30% enhancement cost discount event.
    #[serde(default)]
    pub thirty_percent_off: bool,

    /// 5/10/15 guaranteed-success event (legacy ruleset).
    #[serde(default)]
    pub five_ten_fifteen_event: bool,

    /// Star catching minigame bonus. Defaults to enabled.
    #[serde(default = "default_star_catching")]
    pub star_catching: bool,

    /// Whether the calculator runs in interactive (per-click) mode.
    #[serde(default)]
    pub is_interactive: bool,

    /// Number of spare copies of the equipment on hand.
    #[serde(default)]
    pub spare_count: u32,

    /// Market price of one spare copy.
    #[serde(default)]
    pub spare_price: f64,
}

fn default_star_catching() -> bool {
    true
}

impl Default for EnhancedSettings {
    fn default() -> Self {
        Self {
            thirty_percent_off: false,
            five_ten_fifteen_event: false,
            star_catching: true,
            is_interactive: false,
            spare_count: 0,
            spare_price: 0.0,
        }
    }
}
