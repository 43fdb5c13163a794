//! # alertmap-rs
//!
//! Emergency-alert aggregation and geospatial view-state engine.
//!
//! Polls two heterogeneous alert feeds, normalizes their differing record
//! shapes into a unified coordinate/severity model, derives map viewport
//! bounds, and tracks selection and panel-toggle state for the render layer.
//!
//! ## Features
//!
//! - **Two independent feeds**: each fetch lands in its own slot with its
//!   own status — one feed failing never blocks the other's display
//! - **Tolerant normalization**: malformed records degrade to alerts with
//!   absent fields instead of aborting the batch; a non-numeric coordinate
//!   is absent, never `0.0`
//! - **Stable viewport**: re-fit requests are keyed by a fingerprint of the
//!   coordinate set, so an unchanged snapshot never jitters the map
//! - **Explicit state machines**: selection and panel toggles are owned by
//!   the controller and threaded down, not global mutable state
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use alertmap_rs::{AggregationController, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/dashboard.yaml").await?;
//!     let mut controller = AggregationController::new(&config)?;
//!     controller.refresh().await;
//!
//!     let snapshot = controller.snapshot();
//!     println!("{} markers on the map", snapshot.markers.len());
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{DashboardError, Result};

pub use core::alert::{Alert, AlertId, Coordinates};
pub use core::bounds::{BoundingRegion, ViewportTracker, compute_bounds};
pub use core::controller::{AggregationController, DashboardSnapshot, FeedStatus, FeedView};
pub use core::feeds::{AlertFeed, EmergencyFeed, FeedError, FeedKind, SosFeed};
pub use core::normalize::{IdAllocator, normalize, normalize_batch};
pub use core::selection::SelectionState;
pub use core::toggles::{ActiveTable, VideoOverlay, VideoStatus, ViewToggles};
pub use core::view::{DetailView, MarkerDraw, MarkerIcon, SafeZone};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
