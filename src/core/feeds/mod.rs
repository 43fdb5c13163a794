//! Alert feed clients
//!
//! Each feed is an independent HTTP source with its own record shape. A
//! fetch is exactly one network round trip — no retry, no backoff, no
//! timeout enforcement. The aggregation controller owns the results; a
//! client never mutates shared state itself.

mod client;
pub mod emergency;
pub mod sos;

pub use emergency::EmergencyFeed;
pub use sos::SosFeed;

use crate::core::alert::Alert;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which alert feed a record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedKind {
    /// SOS feed: `{message, location: {latitude, longitude, address}, timestamp, image?}`
    Sos,
    /// Emergency feed: `{name, alert_message, latitude, longitude}`
    Emergency,
}

impl FeedKind {
    /// Stable name used in logs and error messages
    pub fn name(&self) -> &'static str {
        match self {
            FeedKind::Sos => "sos",
            FeedKind::Emergency => "emergency",
        }
    }
}

impl std::fmt::Display for FeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-feed fetch errors
///
/// Always non-fatal: the controller records them as that feed's status and
/// the other feed keeps rendering.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeedError {
    /// Transport failure before a response arrived
    #[error("Error fetching {kind} alerts: {message}")]
    Network {
        /// Feed that failed
        kind: FeedKind,
        /// Transport error description
        message: String,
    },

    /// Non-success HTTP status
    #[error("Error fetching {kind} alerts: server returned status {status}")]
    Status {
        /// Feed that failed
        kind: FeedKind,
        /// HTTP status code
        status: u16,
    },

    /// Response body was not a JSON array
    #[error("Error parsing {kind} alerts: {message}")]
    Parse {
        /// Feed that failed
        kind: FeedKind,
        /// Parse error description
        message: String,
    },
}

impl FeedError {
    /// The feed this error belongs to
    pub fn kind(&self) -> FeedKind {
        match self {
            FeedError::Network { kind, .. }
            | FeedError::Status { kind, .. }
            | FeedError::Parse { kind, .. } => *kind,
        }
    }

    /// Whether a hardened client should retry this error
    ///
    /// Only transport failures are transient; a parse error indicates a
    /// persistent contract mismatch with the server.
    pub fn is_retryable(&self) -> bool {
        matches!(self, FeedError::Network { .. })
    }
}

/// A pollable alert source
///
/// Implementations fetch their endpoint once and return fully normalized
/// alerts. Malformed individual records degrade to alerts with absent
/// fields rather than failing the batch.
#[async_trait]
pub trait AlertFeed: Send + Sync {
    /// Which feed this client polls
    fn kind(&self) -> FeedKind;

    /// Fetch and normalize the feed once
    async fn fetch(&self) -> Result<Vec<Alert>, FeedError>;
}
