//! Configuration management
//!
//! Endpoints are never hardcoded: the feed URLs, video resource and map
//! defaults come from a YAML file, with `ALERTMAP_*` environment variables
//! overriding individual fields, validated on load. The environment alone
//! is also enough to run without a file.

pub mod models;

pub use models::*;

use crate::utils::error::{DashboardError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Dashboard configuration
    pub dashboard: DashboardConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DashboardError::Config(format!("Failed to read config file: {}", e)))?;

        let dashboard: DashboardConfig = serde_yaml::from_str(&content)
            .map_err(|e| DashboardError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { dashboard };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    ///
    /// Requires `ALERTMAP_SOS_URL`, `ALERTMAP_EMERGENCY_URL` and
    /// `ALERTMAP_VIDEO_URL`; map defaults and safe zones take their
    /// built-in defaults.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let dashboard = DashboardConfig {
            feeds: FeedsConfig {
                sos_url: require_env("ALERTMAP_SOS_URL")?,
                emergency_url: require_env("ALERTMAP_EMERGENCY_URL")?,
            },
            video: VideoConfig {
                stream_url: require_env("ALERTMAP_VIDEO_URL")?,
                title: std::env::var("ALERTMAP_VIDEO_TITLE")
                    .unwrap_or_else(|_| "Live Stream".to_string()),
            },
            map: MapConfig::default(),
            safe_zones: Vec::new(),
        };

        let config = Self { dashboard };
        config.validate()?;
        Ok(config)
    }

    /// Override individual fields from `ALERTMAP_*` environment variables
    ///
    /// Recognized: `ALERTMAP_SOS_URL`, `ALERTMAP_EMERGENCY_URL`,
    /// `ALERTMAP_VIDEO_URL`, `ALERTMAP_VIDEO_TITLE`. Unset variables leave
    /// the loaded values alone. Re-validates after applying.
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(value) = std::env::var("ALERTMAP_SOS_URL") {
            self.dashboard.feeds.sos_url = value;
        }
        if let Ok(value) = std::env::var("ALERTMAP_EMERGENCY_URL") {
            self.dashboard.feeds.emergency_url = value;
        }
        if let Ok(value) = std::env::var("ALERTMAP_VIDEO_URL") {
            self.dashboard.video.stream_url = value;
        }
        if let Ok(value) = std::env::var("ALERTMAP_VIDEO_TITLE") {
            self.dashboard.video.title = value;
        }

        self.validate()?;
        Ok(self)
    }

    /// Get the feed endpoints
    pub fn feeds(&self) -> &FeedsConfig {
        &self.dashboard.feeds
    }

    /// Get the video settings
    pub fn video(&self) -> &VideoConfig {
        &self.dashboard.video
    }

    /// Get the map defaults
    pub fn map(&self) -> &MapConfig {
        &self.dashboard.map
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        validate_url("feeds.sos_url", &self.dashboard.feeds.sos_url)?;
        validate_url("feeds.emergency_url", &self.dashboard.feeds.emergency_url)?;
        validate_url("video.stream_url", &self.dashboard.video.stream_url)?;

        for zone in &self.dashboard.safe_zones {
            if zone.name.is_empty() {
                return Err(DashboardError::Config(format!(
                    "Safe zone {} has an empty name",
                    zone.id
                )));
            }
        }

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.dashboard)?)
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| DashboardError::Config(format!("Missing environment variable: {}", key)))
}

fn validate_url(field: &str, value: &str) -> Result<()> {
    url::Url::parse(value)
        .map_err(|e| DashboardError::Config(format!("Invalid URL in {}: {}", field, e)))?;
    Ok(())
}
