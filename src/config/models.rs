//! Typed configuration sections

use crate::core::alert::Coordinates;
use crate::core::view::SafeZone;
use serde::{Deserialize, Serialize};

/// Top-level dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// The two alert feed endpoints
    pub feeds: FeedsConfig,
    /// Live video overlay resource
    pub video: VideoConfig,
    /// Map viewport defaults
    #[serde(default)]
    pub map: MapConfig,
    /// Safe zones shown on the detail map
    #[serde(default)]
    pub safe_zones: Vec<SafeZone>,
}

/// Feed endpoint URLs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedsConfig {
    /// SOS feed endpoint
    pub sos_url: String,
    /// Emergency feed endpoint
    pub emergency_url: String,
}

/// Live video stream settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoConfig {
    /// Stream resource URL
    pub stream_url: String,
    /// Overlay heading
    #[serde(default = "default_video_title")]
    pub title: String,
}

/// Map viewport defaults used before any alert arrives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Initial center
    #[serde(default = "default_center")]
    pub center: Coordinates,
    /// Initial zoom level
    #[serde(default = "default_zoom")]
    pub zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: default_center(),
            zoom: default_zoom(),
        }
    }
}

fn default_video_title() -> String {
    "Live Stream".to_string()
}

fn default_center() -> Coordinates {
    // Bengaluru
    Coordinates {
        latitude: 12.963829,
        longitude: 77.505777,
    }
}

fn default_zoom() -> u8 {
    13
}
