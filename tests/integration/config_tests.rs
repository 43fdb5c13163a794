//! Configuration loading tests

use alertmap_rs::Config;
use std::io::Write;
use tempfile::NamedTempFile;

#[tokio::test]
async fn test_config_from_file() {
    let config_content = r#"
feeds:
  sos_url: "http://127.0.0.1:5000/alerts"
  emergency_url: "http://127.0.0.1:5000/getAlerts"

video:
  stream_url: "http://192.168.102.71:5000/video_feed"
  title: "Gender Detection Live Stream"

map:
  center:
    latitude: 12.963829
    longitude: 77.505777
  zoom: 13

safe_zones:
  - id: 1
    name: "Town Hall"
    coordinates:
      latitude: 12.95
      longitude: 77.55
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(config_content.as_bytes()).unwrap();

    let config = Config::from_file(temp_file.path()).await.unwrap();

    assert_eq!(config.feeds().sos_url, "http://127.0.0.1:5000/alerts");
    assert_eq!(config.feeds().emergency_url, "http://127.0.0.1:5000/getAlerts");
    assert_eq!(config.video().title, "Gender Detection Live Stream");
    assert_eq!(config.map().zoom, 13);
    assert_eq!(config.dashboard.safe_zones.len(), 1);
    assert_eq!(config.dashboard.safe_zones[0].name, "Town Hall");
}

#[tokio::test]
async fn test_config_defaults_for_optional_sections() {
    let config_content = r#"
feeds:
  sos_url: "http://127.0.0.1:5000/alerts"
  emergency_url: "http://127.0.0.1:5000/getAlerts"

video:
  stream_url: "http://127.0.0.1:5000/video_feed"
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(config_content.as_bytes()).unwrap();

    let config = Config::from_file(temp_file.path()).await.unwrap();

    assert_eq!(config.video().title, "Live Stream");
    assert_eq!(config.map().center.latitude, 12.963829);
    assert_eq!(config.map().zoom, 13);
    assert!(config.dashboard.safe_zones.is_empty());
}

#[tokio::test]
async fn test_config_rejects_invalid_feed_url() {
    let config_content = r#"
feeds:
  sos_url: "not a url"
  emergency_url: "http://127.0.0.1:5000/getAlerts"

video:
  stream_url: "http://127.0.0.1:5000/video_feed"
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(config_content.as_bytes()).unwrap();

    assert!(Config::from_file(temp_file.path()).await.is_err());
}

#[tokio::test]
async fn test_config_missing_file() {
    assert!(Config::from_file("/nonexistent/dashboard.yaml").await.is_err());
}

fn set_env(key: &str, value: &str) {
    unsafe { std::env::set_var(key, value) }
}

fn clear_env(key: &str) {
    unsafe { std::env::remove_var(key) }
}

const ENV_VARS: [&str; 4] = [
    "ALERTMAP_SOS_URL",
    "ALERTMAP_EMERGENCY_URL",
    "ALERTMAP_VIDEO_URL",
    "ALERTMAP_VIDEO_TITLE",
];

// All ALERTMAP_* mutation lives in this single test so parallel tests never
// race on the process environment. No other test reads these variables:
// `from_file` stays pure and overrides apply only via `with_env_overrides`.
#[tokio::test]
async fn test_config_from_env_and_overrides() {
    for key in ENV_VARS {
        clear_env(key);
    }

    // Nothing set: from_env reports the first missing variable.
    let err = Config::from_env().unwrap_err().to_string();
    assert!(err.contains("ALERTMAP_SOS_URL"));

    // The environment alone is enough to run without a file.
    set_env("ALERTMAP_SOS_URL", "http://10.0.0.1:5000/alerts");
    set_env("ALERTMAP_EMERGENCY_URL", "http://10.0.0.1:5000/getAlerts");
    set_env("ALERTMAP_VIDEO_URL", "http://10.0.0.1:5000/video_feed");

    let config = Config::from_env().unwrap();
    assert_eq!(config.feeds().sos_url, "http://10.0.0.1:5000/alerts");
    assert_eq!(config.feeds().emergency_url, "http://10.0.0.1:5000/getAlerts");
    assert_eq!(config.video().stream_url, "http://10.0.0.1:5000/video_feed");
    assert_eq!(config.video().title, "Live Stream");

    // Overrides on top of a file: set variables win field by field, unset
    // variables leave the file's values alone.
    let config_content = r#"
feeds:
  sos_url: "http://127.0.0.1:5000/alerts"
  emergency_url: "http://127.0.0.1:5000/getAlerts"

video:
  stream_url: "http://127.0.0.1:5000/video_feed"
  title: "From File"
"#;
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(config_content.as_bytes()).unwrap();

    clear_env("ALERTMAP_EMERGENCY_URL");
    let config = Config::from_file(temp_file.path())
        .await
        .unwrap()
        .with_env_overrides()
        .unwrap();
    assert_eq!(config.feeds().sos_url, "http://10.0.0.1:5000/alerts");
    assert_eq!(config.feeds().emergency_url, "http://127.0.0.1:5000/getAlerts");
    assert_eq!(config.video().stream_url, "http://10.0.0.1:5000/video_feed");
    assert_eq!(config.video().title, "From File");

    // An override that is not a valid URL fails validation.
    set_env("ALERTMAP_SOS_URL", "not a url");
    assert!(
        Config::from_file(temp_file.path())
            .await
            .unwrap()
            .with_env_overrides()
            .is_err()
    );

    for key in ENV_VARS {
        clear_env(key);
    }
}
