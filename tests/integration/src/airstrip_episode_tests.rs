//! Airstrip episodes end to end: configuration file, coordinator, report

use crate::test_utils::{airstrip, init_test_logging, write_config};
use futures_util::future::join_all;
use patterns_core::{logging, Config, EpisodeMode};
use patterns_mediator::{
    run_episode, AirstripControlTower, AirstripCoordinator, CoordinatorError, LandingOutcome,
    TowerError,
};
use std::collections::BTreeMap;

#[tokio::test(start_paused = true)]
async fn test_episode_from_config_file() {
    init_test_logging();

    let path = write_config(
        r#"
[airstrip]
runways = ["09L", "27R"]
flights = ["AC101", "AC102", "AC103", "AC104"]
landing_duration_ms = 250
mode = "concurrent"

[logging]
level = "debug"
"#,
    );

    let config = Config::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let report = run_episode(&config.airstrip).await.unwrap();

    assert_eq!(report.landed_flags(), vec![true, true, false, false]);
    assert_eq!(
        report.landings,
        BTreeMap::from([("09L".to_string(), 1), ("27R".to_string(), 1)])
    );
    assert_eq!(report.flights[1].runway.as_deref(), Some("27R"));
}

#[tokio::test(start_paused = true)]
async fn test_sequential_episode_uses_first_runway_only() {
    init_test_logging();

    let config = airstrip(&["09L", "27R"], &["AC101", "AC102", "AC103"], EpisodeMode::Sequential);
    let report = run_episode(&config).await.unwrap();

    assert_eq!(report.landed_count(), 3);
    assert_eq!(report.landings, BTreeMap::from([("09L".to_string(), 3)]));
}

#[test]
fn test_invalid_config_file_is_rejected() {
    let path = write_config(
        r#"
[airstrip]
runways = []
"#,
    );

    let result = Config::from_file(&path);
    std::fs::remove_file(&path).ok();

    assert!(result.is_err());
}

#[test]
fn test_missing_config_file_is_an_error() {
    let path = std::env::temp_dir().join("patterns-integration-does-not-exist.toml");
    assert!(Config::from_file(path).is_err());
}

#[test]
fn test_second_logging_init_reports_failure() {
    init_test_logging();

    let config = Config::default_config();
    assert!(logging::try_init_with(&config.logging).is_err());

    // Must not panic when a subscriber is already installed.
    logging::init_with(&config.logging);
}

#[tokio::test(start_paused = true)]
async fn test_report_serializes_to_json() {
    let config = airstrip(&["09L"], &["AC101", "AC102"], EpisodeMode::Concurrent);
    let report = run_episode(&config).await.unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["mode"], "concurrent");
    assert_eq!(json["landings"]["09L"], 1);
    assert_eq!(json["flights"].as_array().map(Vec::len), Some(2));
}

#[tokio::test(start_paused = true)]
async fn test_handles_share_one_tower() {
    init_test_logging();

    let mut tower = AirstripControlTower::new();
    let runway = tower.add_runway("09L");
    let flights: Vec<_> = (0..6).map(|i| tower.add_flight(format!("AC{}", 200 + i))).collect();

    let (handle, task) = AirstripCoordinator::spawn(tower, &airstrip(&["09L"], &[], EpisodeMode::Concurrent));

    // Every flight goes through its own handle clone.
    let handles: Vec<_> = flights.iter().map(|_| handle.clone()).collect();
    let outcomes = join_all(
        handles
            .iter()
            .zip(&flights)
            .map(|(h, flight)| async move { h.request_landing(*flight).await }),
    )
    .await;

    let cleared = outcomes
        .iter()
        .filter(|ticket| ticket.as_ref().map(|t| t.is_cleared()).unwrap_or(false))
        .count();
    assert_eq!(cleared, 1);

    for ticket in outcomes {
        ticket.unwrap().wait().await.unwrap();
    }

    drop(handles);
    drop(handle);
    let snapshot = task.await.unwrap();
    assert_eq!(snapshot.successful_landings.get(&runway), Some(&1));
}

#[tokio::test(start_paused = true)]
async fn test_landed_flight_cannot_land_again() {
    let mut tower = AirstripControlTower::new();
    let runway = tower.add_runway("09L");
    let flight = tower.add_flight("AC101");

    let (handle, task) = AirstripCoordinator::spawn(tower, &airstrip(&["09L"], &[], EpisodeMode::Sequential));

    assert_eq!(handle.land(flight).await.unwrap(), LandingOutcome::Landed { runway });
    let again = handle.request_landing(flight).await;
    assert!(matches!(
        again,
        Err(CoordinatorError::Rejected(TowerError::AlreadyLanded(f))) if f == flight
    ));

    drop(handle);
    let snapshot = task.await.unwrap();
    assert_eq!(snapshot.total_landings(), 1);
}
