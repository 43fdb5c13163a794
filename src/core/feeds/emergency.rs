//! Emergency feed client
//!
//! Polls the secondary endpoint, whose records are flat: `name`,
//! `alert_message` and top-level numeric `latitude`/`longitude`.

use super::client::fetch_json_array;
use super::{AlertFeed, FeedError, FeedKind};
use crate::core::alert::Alert;
use crate::core::normalize::{IdAllocator, normalize_batch};
use async_trait::async_trait;
use std::sync::Arc;

/// Client for the emergency alert feed
#[derive(Debug, Clone)]
pub struct EmergencyFeed {
    client: reqwest::Client,
    url: String,
    ids: Arc<IdAllocator>,
}

impl EmergencyFeed {
    /// Create a client polling `url`
    pub fn new(client: reqwest::Client, url: impl Into<String>, ids: Arc<IdAllocator>) -> Self {
        Self {
            client,
            url: url.into(),
            ids,
        }
    }

    /// Endpoint this client polls
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl AlertFeed for EmergencyFeed {
    fn kind(&self) -> FeedKind {
        FeedKind::Emergency
    }

    async fn fetch(&self) -> Result<Vec<Alert>, FeedError> {
        let records = fetch_json_array(&self.client, FeedKind::Emergency, &self.url).await?;
        Ok(normalize_batch(FeedKind::Emergency, &records, &self.ids))
    }
}
