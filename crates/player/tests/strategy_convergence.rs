//! Cross-consumer strategy synchronization scenarios.
//!
//! Two independently mounted consumers share only the storage provider and
//! the broadcast bus, the way two UI surfaces share localStorage and a
//! change notification in one session.

use starforce_domain::{EnhancedSettings, SettingsScope, Strategy};
use starforce_player::infrastructure::testing::MemoryStorageProvider;
use starforce_player::ports::outbound::storage_keys;
use starforce_player::{Platform, StrategyBus};

fn shared_session() -> (Platform, Platform) {
    let storage = MemoryStorageProvider::new();
    let bus = StrategyBus::new();
    let a = Platform::new(storage.clone(), bus.clone());
    let b = Platform::new(storage, bus);
    (a, b)
}

#[test]
fn mounted_consumer_converges_without_rereading_storage() {
    let (platform_a, platform_b) = shared_session();

    let handle_a = platform_a.strategy_handle();
    let handle_b = platform_b.strategy_handle();
    assert_eq!(handle_a.current(), Strategy::Classic);
    assert_eq!(handle_b.current(), Strategy::Classic);

    // A changes the strategy; B observes it through the broadcast alone.
    handle_a.set(Strategy::Renewal);
    assert_eq!(handle_b.current(), Strategy::Renewal);
    assert_eq!(handle_a.current(), Strategy::Renewal);
}

#[test]
fn late_consumer_converges_by_reading_persisted_state() {
    let (platform_a, platform_b) = shared_session();

    platform_a.strategy_handle().set(Strategy::Renewal);

    // Mounted after the broadcast was sent, so it never saw it.
    let late_handle = platform_b.strategy_handle();
    assert_eq!(late_handle.current(), Strategy::Renewal);
}

#[test]
fn last_write_wins_across_consumers() {
    let (platform_a, platform_b) = shared_session();

    let handle_a = platform_a.strategy_handle();
    let handle_b = platform_b.strategy_handle();

    handle_a.set(Strategy::Renewal);
    handle_b.set(Strategy::Classic);

    assert_eq!(handle_a.current(), Strategy::Classic);
    assert_eq!(handle_b.current(), Strategy::Classic);
    assert_eq!(
        platform_a.storage_load(storage_keys::GLOBAL_SYSTEM).as_deref(),
        Some("classic")
    );
}

#[test]
fn settings_round_trip_through_a_shared_session() {
    let (platform_a, platform_b) = shared_session();

    let scope = SettingsScope::equipment_table(Some("ocid42".into()), None);
    let settings = EnhancedSettings {
        is_interactive: true,
        spare_count: 2,
        ..EnhancedSettings::default()
    };

    platform_a
        .settings_service()
        .save(storage_keys::SETTINGS, &scope, &settings);

    let loaded: EnhancedSettings = platform_b.settings_service().load(
        storage_keys::SETTINGS,
        &scope,
        EnhancedSettings::default(),
    );
    assert_eq!(loaded, settings);
}
