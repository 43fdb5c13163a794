//! Shared HTTP plumbing for feed clients
//!
//! One GET, one status check, one JSON-array parse. Retry and backoff are
//! deliberately absent; the feeds are polled once per mount.

use super::{FeedError, FeedKind};
use serde_json::Value;
use tracing::debug;

/// Fetch a feed endpoint and parse the body as a JSON array
pub(crate) async fn fetch_json_array(
    client: &reqwest::Client,
    kind: FeedKind,
    url: &str,
) -> Result<Vec<Value>, FeedError> {
    debug!("Fetching {} feed from {}", kind, url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FeedError::Network {
            kind,
            message: e.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FeedError::Status {
            kind,
            status: status.as_u16(),
        });
    }

    let bytes = response.bytes().await.map_err(|e| FeedError::Network {
        kind,
        message: e.to_string(),
    })?;

    let records: Vec<Value> =
        serde_json::from_slice(&bytes).map_err(|e| FeedError::Parse {
            kind,
            message: e.to_string(),
        })?;

    debug!("{} feed returned {} records", kind, records.len());
    Ok(records)
}
