//! Normalized alert model
//!
//! Both feeds deliver records in their own shape; normalization maps them
//! into the single `Alert` representation defined here. Every field except
//! identity is optional — a feed omitting a field produces an absent value,
//! never a default like `0.0`.

use crate::core::feeds::FeedKind;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

/// Stable alert identity within a session
///
/// Assigned by a monotonic allocator at normalization time, so re-fetching
/// or reordering a feed never silently reassigns identity the way a
/// per-render list index would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlertId(pub u64);

impl std::fmt::Display for AlertId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "alert-{}", self.0)
    }
}

/// A latitude/longitude pair
///
/// Always finite when present; normalization rejects anything that does not
/// parse to a finite float.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinates {
    /// Create a coordinate pair, rejecting non-finite components
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        if latitude.is_finite() && longitude.is_finite() {
            Some(Self {
                latitude,
                longitude,
            })
        } else {
            None
        }
    }
}

/// A normalized emergency alert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Session-stable identity
    pub id: AlertId,
    /// Which feed produced this alert
    pub feed: FeedKind,
    /// Free-text alert message
    pub message: Option<String>,
    /// Location, absent when the record omits it or it fails to parse
    pub coordinates: Option<Coordinates>,
    /// Human-readable address (SOS feed only)
    pub address: Option<String>,
    /// Source-provided timestamp, no guaranteed format
    pub timestamp: Option<String>,
    /// Base64-encoded JPEG snapshot (SOS feed only)
    pub image: Option<String>,
    /// Person associated with the alert
    pub person: Option<String>,
    /// Severity classification, compared case-insensitively against "HIGH"
    pub severity: Option<String>,
}

impl Alert {
    /// An alert with nothing but identity, used when a record is malformed
    ///
    /// Malformed records degrade to this instead of aborting the batch.
    pub fn empty(id: AlertId, feed: FeedKind) -> Self {
        Self {
            id,
            feed,
            message: None,
            coordinates: None,
            address: None,
            timestamp: None,
            image: None,
            person: None,
            severity: None,
        }
    }

    /// Whether this alert selects the distinguished (blinking) marker style
    pub fn is_high_severity(&self) -> bool {
        self.severity
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("HIGH"))
    }

    /// Uppercased severity for display, `UNKNOWN` when absent
    pub fn severity_label(&self) -> String {
        self.severity
            .as_deref()
            .map(str::to_uppercase)
            .unwrap_or_else(|| "UNKNOWN".to_string())
    }

    /// The image blob as a `data:` URI suitable for an `<img>` source
    pub fn image_data_uri(&self) -> Option<String> {
        self.image
            .as_deref()
            .map(|blob| format!("data:image/jpeg;base64,{blob}"))
    }

    /// Decode the image blob, `None` when absent or not valid base64
    pub fn decoded_image(&self) -> Option<Vec<u8>> {
        self.image
            .as_deref()
            .and_then(|blob| BASE64.decode(blob).ok())
    }
}
