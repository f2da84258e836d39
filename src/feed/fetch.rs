//! Feed retrieval over HTTP or from disk

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use super::{FeedError, Source};

const USER_AGENT: &str = concat!("quakemap/", env!("CARGO_PKG_VERSION"));

/// Fetches JSON documents; one client shared by both feed pipelines
#[derive(Clone)]
pub(crate) struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Build a fetcher whose requests give up after `timeout`
    pub(crate) fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    pub(crate) async fn fetch_json(&self, source: &Source) -> Result<Value, FeedError> {
        tracing::debug!(source = %source, "fetching feed");
        let origin = source.to_string();

        let body = match source {
            Source::Url(url) => {
                let response = self
                    .client
                    .get(url.clone())
                    .send()
                    .await
                    .and_then(|r| r.error_for_status())
                    .map_err(|e| FeedError::Request {
                        origin: origin.clone(),
                        source: e,
                    })?;
                response
                    .bytes()
                    .await
                    .map_err(|e| FeedError::Request {
                        origin: origin.clone(),
                        source: e,
                    })?
                    .to_vec()
            }
            Source::File(path) => {
                tokio::fs::read(path)
                    .await
                    .map_err(|e| FeedError::Read {
                        path: path.clone(),
                        source: e,
                    })?
            }
        };

        serde_json::from_slice(&body).map_err(|e| FeedError::NotJson { origin, source: e })
    }
}
