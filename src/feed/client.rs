//! HTTP feed client

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

use super::ResultFeed;
use crate::error::FeedError;

/// Source of the result feed
#[async_trait]
pub trait LinkFeed: Send + Sync {
    /// Fetch and validate the feed once. Never retries.
    async fn fetch(&self) -> Result<ResultFeed, FeedError>;
}

/// Fetches the feed with a single GET to the configured URL
#[derive(Debug, Clone)]
pub struct HttpFeedClient {
    url: String,
    http_client: Client,
}

impl HttpFeedClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http_client: Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl LinkFeed for HttpFeedClient {
    async fn fetch(&self) -> Result<ResultFeed, FeedError> {
        debug!("Fetching result feed from {}", self.url);

        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FeedError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Result feed returned status {}", status);
            return Err(FeedError::status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let feed = ResultFeed::from_json(&body)?;

        info!("Result feed loaded with {} links", feed.links.len());
        Ok(feed)
    }
}
