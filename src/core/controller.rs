//! Aggregation controller
//!
//! Owns the two alert collections, their per-feed load status, the viewport
//! tracker and the selection/toggle state machines. The render layer only
//! ever sees read-only snapshots; all mutation goes through the controller.
//!
//! The two feeds are refreshed concurrently and unordered. Each result
//! lands in its own slot: one feed failing never blocks or invalidates the
//! other, so partial data (one feed ready, one failed) is first-class.

use crate::config::{Config, MapConfig};
use crate::core::alert::{Alert, AlertId};
use crate::core::bounds::{BoundingRegion, ViewportTracker};
use crate::core::feeds::{AlertFeed, EmergencyFeed, FeedError, FeedKind, SosFeed};
use crate::core::normalize::IdAllocator;
use crate::core::selection::SelectionState;
use crate::core::toggles::{VideoOverlay, ViewToggles};
use crate::core::view::{self, DetailView, MarkerDraw, SafeZone};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Load status of one feed, tracked independently of the other
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FeedStatus {
    /// Fetch not yet resolved
    #[default]
    Loading,
    /// Fetch succeeded
    Ready {
        /// Number of alerts received
        count: usize,
        /// When the fetch resolved
        fetched_at: DateTime<Utc>,
    },
    /// Fetch failed; shown inline without touching the other feed
    Failed {
        /// Error text for inline display
        error: String,
    },
}

impl FeedStatus {
    /// Whether the feed resolved successfully
    pub fn is_ready(&self) -> bool {
        matches!(self, FeedStatus::Ready { .. })
    }

    /// Inline error text, if the fetch failed
    pub fn error(&self) -> Option<&str> {
        match self {
            FeedStatus::Failed { error } => Some(error),
            _ => None,
        }
    }
}

/// One feed's collection and status
#[derive(Debug, Clone, Default)]
struct FeedSlot {
    status: FeedStatus,
    alerts: Vec<Alert>,
}

impl FeedSlot {
    fn apply(&mut self, kind: FeedKind, result: std::result::Result<Vec<Alert>, FeedError>) {
        match result {
            Ok(alerts) => {
                info!("{} feed ready with {} alerts", kind, alerts.len());
                self.status = FeedStatus::Ready {
                    count: alerts.len(),
                    fetched_at: Utc::now(),
                };
                self.alerts = alerts;
            }
            Err(e) => {
                warn!("{} feed failed: {}", kind, e);
                self.status = FeedStatus::Failed {
                    error: e.to_string(),
                };
                // Alerts from an earlier successful fetch stay visible.
            }
        }
    }
}

/// One table panel: feed status plus rows, newest first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedView {
    /// Per-feed load status
    pub status: FeedStatus,
    /// Alerts in display order (reverse of feed order)
    pub rows: Vec<Alert>,
}

/// Read-only view of the whole dashboard handed to the render layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    /// SOS table panel
    pub sos: FeedView,
    /// Emergency table panel
    pub emergency: FeedView,
    /// Overview-map markers for every located alert from both feeds
    pub markers: Vec<MarkerDraw>,
    /// Viewport fit request, present only when the coordinate set changed
    pub fit_bounds: Option<BoundingRegion>,
    /// Whether the flashing EMERGENCY banner is shown
    pub emergency_banner: bool,
    /// Current panel toggles
    pub toggles: ViewToggles,
    /// Detail view for the current selection
    pub detail: Option<DetailView>,
    /// Video overlay, present only while toggled visible
    pub video: Option<VideoOverlay>,
    /// Map defaults used before any fit request
    pub map: MapConfig,
}

/// Orchestrates the feed clients and owns all view state
#[derive(Debug)]
pub struct AggregationController {
    sos_feed: SosFeed,
    emergency_feed: EmergencyFeed,
    sos: FeedSlot,
    emergency: FeedSlot,
    viewport: ViewportTracker,
    selection: SelectionState,
    toggles: ViewToggles,
    video: VideoOverlay,
    safe_zones: Vec<SafeZone>,
    map: MapConfig,
}

impl AggregationController {
    /// Build a controller from configuration
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        let ids = Arc::new(IdAllocator::default());

        Ok(Self {
            sos_feed: SosFeed::new(client.clone(), &config.feeds().sos_url, ids.clone()),
            emergency_feed: EmergencyFeed::new(client, &config.feeds().emergency_url, ids),
            sos: FeedSlot::default(),
            emergency: FeedSlot::default(),
            viewport: ViewportTracker::new(),
            selection: SelectionState::default(),
            toggles: ViewToggles::new(),
            video: VideoOverlay::new(&config.video().stream_url, &config.video().title),
            safe_zones: config.dashboard.safe_zones.clone(),
            map: config.map().clone(),
        })
    }

    /// Fetch both feeds concurrently, each into its own slot
    pub async fn refresh(&mut self) {
        info!("Refreshing alert feeds");
        let (sos, emergency) = tokio::join!(self.sos_feed.fetch(), self.emergency_feed.fetch());
        self.sos.apply(FeedKind::Sos, sos);
        self.emergency.apply(FeedKind::Emergency, emergency);
    }

    /// SOS feed status
    pub fn sos_status(&self) -> &FeedStatus {
        &self.sos.status
    }

    /// Emergency feed status
    pub fn emergency_status(&self) -> &FeedStatus {
        &self.emergency.status
    }

    /// SOS alerts in feed order
    pub fn sos_alerts(&self) -> &[Alert] {
        &self.sos.alerts
    }

    /// Emergency alerts in feed order
    pub fn emergency_alerts(&self) -> &[Alert] {
        &self.emergency.alerts
    }

    /// Handle a click on a table row or marker
    ///
    /// Returns false when no alert with that id exists in either collection.
    pub fn select(&mut self, id: AlertId) -> bool {
        let found = self
            .sos
            .alerts
            .iter()
            .chain(&self.emergency.alerts)
            .find(|a| a.id == id)
            .cloned();
        match found {
            Some(alert) => {
                self.selection.select(alert);
                true
            }
            None => false,
        }
    }

    /// Current selection
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Show the SOS table panel
    pub fn show_sos_table(&mut self) {
        self.toggles.show_sos_table();
    }

    /// Show the emergency table panel
    pub fn show_emergency_table(&mut self) {
        self.toggles.show_emergency_table();
    }

    /// Flip the video overlay
    pub fn toggle_video(&mut self) {
        self.toggles.toggle_video();
    }

    /// Set the video overlay visibility
    pub fn set_video_visible(&mut self, visible: bool) {
        self.toggles.set_video_visible(visible);
    }

    /// Record a video load failure signalled by the render layer
    pub fn report_video_failure(&mut self, reason: impl Into<String>) {
        self.video.report_failure(reason);
    }

    /// Current panel toggles
    pub fn toggles(&self) -> &ViewToggles {
        &self.toggles
    }

    /// Viewport fit request covering the union of both collections
    ///
    /// Keyed by the coordinate-set fingerprint: an unchanged set yields
    /// `None` so the map never re-fits redundantly.
    pub fn fit_viewport(&mut self) -> Option<BoundingRegion> {
        self.viewport
            .fit_target(self.sos.alerts.iter().chain(&self.emergency.alerts))
    }

    /// Produce the read-only view handed to the render layer
    pub fn snapshot(&mut self) -> DashboardSnapshot {
        let fit_bounds = self.fit_viewport();

        let markers: Vec<MarkerDraw> = self
            .sos
            .alerts
            .iter()
            .rev()
            .chain(self.emergency.alerts.iter().rev())
            .filter_map(view::alert_marker)
            .collect();

        DashboardSnapshot {
            sos: FeedView {
                status: self.sos.status.clone(),
                rows: self.sos.alerts.iter().rev().cloned().collect(),
            },
            emergency: FeedView {
                status: self.emergency.status.clone(),
                rows: self.emergency.alerts.iter().rev().cloned().collect(),
            },
            markers,
            fit_bounds,
            emergency_banner: !self.sos.alerts.is_empty(),
            toggles: self.toggles.clone(),
            detail: view::detail_view(&self.selection, &self.safe_zones),
            video: self
                .toggles
                .video_visible()
                .then(|| self.video.clone()),
            map: self.map.clone(),
        }
    }
}
