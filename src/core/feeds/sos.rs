//! SOS feed client
//!
//! Polls the SOS endpoint, which returns records carrying a nested
//! `location` object, a timestamp and an optional base64 image snapshot.
//! Coordinates arrive as numeric strings.

use super::client::fetch_json_array;
use super::{AlertFeed, FeedError, FeedKind};
use crate::core::alert::Alert;
use crate::core::normalize::{IdAllocator, normalize_batch};
use async_trait::async_trait;
use std::sync::Arc;

/// Client for the SOS alert feed
#[derive(Debug, Clone)]
pub struct SosFeed {
    client: reqwest::Client,
    url: String,
    ids: Arc<IdAllocator>,
}

impl SosFeed {
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
impl AlertFeed for SosFeed {
    fn kind(&self) -> FeedKind {
        FeedKind::Sos
    }

    async fn fetch(&self) -> Result<Vec<Alert>, FeedError> {
        let records = fetch_json_array(&self.client, FeedKind::Sos, &self.url).await?;
        Ok(normalize_batch(FeedKind::Sos, &records, &self.ids))
    }
}
