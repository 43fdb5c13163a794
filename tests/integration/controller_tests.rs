//! Controller scenarios: concurrent refresh, partial failure, snapshots

use crate::common;
use alertmap_rs::{AggregationController, FeedStatus, MarkerIcon};
use serde_json::json;
use wiremock::MockServer;

#[tokio::test]
async fn test_single_sos_alert_scenario() {
    // SOS feed returns one record, emergency feed is empty: one row, one
    // marker at (12.9, 77.5), bounds exactly that point.
    let server = MockServer::start().await;
    common::mock_feed(
        &server,
        "/alerts",
        json!([common::sos_record("SOS", "12.9", "77.5")]),
    )
    .await;
    common::mock_feed(&server, "/getAlerts", json!([])).await;

    let config = common::config_for(&server);
    let mut controller = AggregationController::new(&config).unwrap();
    controller.refresh().await;

    assert!(controller.sos_status().is_ready());
    assert!(controller.emergency_status().is_ready());

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.sos.rows.len(), 1);
    assert_eq!(snapshot.emergency.rows.len(), 0);
    assert!(snapshot.emergency_banner);

    assert_eq!(snapshot.markers.len(), 1);
    assert_eq!(snapshot.markers[0].position.latitude, 12.9);
    assert_eq!(snapshot.markers[0].position.longitude, 77.5);
    assert_eq!(snapshot.markers[0].icon, MarkerIcon::Blinking);

    let region = snapshot.fit_bounds.unwrap();
    assert_eq!((region.south, region.north), (12.9, 12.9));
    assert_eq!((region.west, region.east), (77.5, 77.5));
}

#[tokio::test]
async fn test_partial_failure_shows_the_healthy_feed() {
    // SOS feed fails with a server error while the emergency feed succeeds:
    // the failure is per-feed and the healthy feed still renders.
    let server = MockServer::start().await;
    common::mock_feed_status(&server, "/alerts", 502).await;
    common::mock_feed(
        &server,
        "/getAlerts",
        json!([common::emergency_record("ravi", "flooding", 12.97, 77.59)]),
    )
    .await;

    let config = common::config_for(&server);
    let mut controller = AggregationController::new(&config).unwrap();
    controller.refresh().await;

    let sos_error = controller.sos_status().error().unwrap().to_string();
    assert!(sos_error.contains("502"));
    assert!(controller.emergency_status().is_ready());

    let snapshot = controller.snapshot();
    assert!(matches!(snapshot.sos.status, FeedStatus::Failed { .. }));
    assert_eq!(snapshot.emergency.rows.len(), 1);
    assert_eq!(snapshot.markers.len(), 1);
    assert!(snapshot.fit_bounds.is_some());
}

#[tokio::test]
async fn test_unlocated_alerts_fill_tables_but_not_map() {
    let server = MockServer::start().await;
    common::mock_feed(
        &server,
        "/alerts",
        json!([{"message": "no location", "timestamp": "t2"}]),
    )
    .await;
    common::mock_feed(&server, "/getAlerts", json!([])).await;

    let config = common::config_for(&server);
    let mut controller = AggregationController::new(&config).unwrap();
    controller.refresh().await;

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.sos.rows.len(), 1);
    assert!(snapshot.markers.is_empty());
    // No valid coordinate anywhere: viewport left alone.
    assert_eq!(snapshot.fit_bounds, None);
}

#[tokio::test]
async fn test_repeated_snapshot_does_not_refit_viewport() {
    let server = MockServer::start().await;
    common::mock_feed(
        &server,
        "/alerts",
        json!([common::sos_record("SOS", "12.9", "77.5")]),
    )
    .await;
    common::mock_feed(&server, "/getAlerts", json!([])).await;

    let config = common::config_for(&server);
    let mut controller = AggregationController::new(&config).unwrap();
    controller.refresh().await;

    assert!(controller.snapshot().fit_bounds.is_some());
    assert_eq!(controller.snapshot().fit_bounds, None);
    assert_eq!(controller.snapshot().fit_bounds, None);
}

#[tokio::test]
async fn test_selection_drives_detail_view() {
    let server = MockServer::start().await;
    common::mock_feed(
        &server,
        "/alerts",
        json!([{
            "message": "SOS",
            "location": {"latitude": "12.9", "longitude": "77.5", "address": "MG Road"},
            "severity": "high",
            "person": "asha"
        }]),
    )
    .await;
    common::mock_feed(&server, "/getAlerts", json!([])).await;

    let config = common::config_for(&server);
    let mut controller = AggregationController::new(&config).unwrap();
    controller.refresh().await;

    // Nothing selected yet: no detail view.
    assert!(controller.snapshot().detail.is_none());

    let id = controller.sos_alerts()[0].id;
    assert!(controller.select(id));

    let detail = controller.snapshot().detail.unwrap();
    assert_eq!(detail.center.latitude, 12.9);
    assert_eq!(detail.markers[0].icon, MarkerIcon::Blinking);
    assert!(detail.markers[0].popup.contains("Severity: HIGH"));
}

#[tokio::test]
async fn test_both_feeds_feed_one_bounds_computation() {
    let server = MockServer::start().await;
    common::mock_feed(
        &server,
        "/alerts",
        json!([common::sos_record("SOS", "12.9", "77.5")]),
    )
    .await;
    common::mock_feed(
        &server,
        "/getAlerts",
        json!([common::emergency_record("ravi", "flooding", 13.1, 77.2)]),
    )
    .await;

    let config = common::config_for(&server);
    let mut controller = AggregationController::new(&config).unwrap();
    controller.refresh().await;

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.markers.len(), 2);

    let region = snapshot.fit_bounds.unwrap();
    assert_eq!((region.south, region.north), (12.9, 13.1));
    assert_eq!((region.west, region.east), (77.2, 77.5));
}
