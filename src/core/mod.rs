//! Core aggregation and view-state engine
//!
//! Everything with behavior lives here: the two feed clients, record
//! normalization, bounds derivation, selection and toggle state machines,
//! and the controller that ties them together.

pub mod alert;
pub mod bounds;
pub mod controller;
pub mod feeds;
pub mod normalize;
pub mod selection;
pub mod toggles;
pub mod view;

pub use alert::{Alert, AlertId, Coordinates};
pub use bounds::{BoundingRegion, ViewportTracker, compute_bounds};
pub use controller::{AggregationController, DashboardSnapshot, FeedStatus};
pub use feeds::{AlertFeed, FeedError, FeedKind};
pub use selection::SelectionState;
pub use toggles::{ActiveTable, VideoOverlay, VideoStatus, ViewToggles};
pub use view::{DetailView, MarkerDraw, MarkerIcon, SafeZone};
