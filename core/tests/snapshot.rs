//! Snapshot bundle tests.

use kuliner_core::{engine::ReportEngine, snapshot::DashboardSnapshot};

#[test]
fn snapshot_bundles_every_page() {
    let snapshot = ReportEngine::build_test().snapshot().unwrap();

    assert_eq!(snapshot.series.len(), 30);
    assert_eq!(snapshot.entities.len(), 98);
    assert_eq!(snapshot.dashboard.map.len(), 98);
    assert_eq!(snapshot.cac_monitor.filtered_count, 98);
    assert_eq!(snapshot.cvr_optimizer.entity_id, 1);
    assert_eq!(snapshot.attribution.channels.len(), 6);
    assert_eq!(snapshot.seeds.series, 42);
    assert_eq!(snapshot.seeds.entities, 123);
}

#[test]
fn snapshot_json_parses_back() {
    let snapshot = ReportEngine::build_test().snapshot().unwrap();
    let json = snapshot.to_json().unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["series"][0]["date"], "2025-01-01");
    assert_eq!(value["entities"][0]["status"], "active");
    assert_eq!(value["entities"][97]["tier"], "tier4");

    let restored = DashboardSnapshot::from_json(&json).unwrap();
    assert_eq!(restored.entities.len(), 98);
    assert_eq!(restored.entities[0].name, snapshot.entities[0].name);
}

#[test]
fn malformed_snapshot_is_a_serialization_error() {
    let err = DashboardSnapshot::from_json("{not json").unwrap_err();
    assert!(err.to_string().starts_with("Serialization error"), "unexpected error: {err}");
}
