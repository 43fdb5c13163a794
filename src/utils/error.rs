//! Error handling for the dashboard
//!
//! This module defines the top-level error type used throughout the crate.
//! Per-feed fetch failures are deliberately NOT fatal — they are carried as
//! `FeedStatus::Failed` inside the aggregation controller so that one feed
//! failing never blocks the other. `DashboardError` covers everything else.

use crate::core::feeds::FeedError;
use thiserror::Error;

/// Result type alias for the dashboard
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Main error type for the dashboard
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Feed errors that escape the per-feed status tracking
    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    /// HTTP client construction errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}
