use std::path::PathBuf;

use thiserror::Error;

/// Failure of one feed pipeline
#[derive(Debug, Error)]
pub(crate) enum FeedError {
    #[error("request to {origin} failed: {source}")]
    Request {
        origin: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{origin} did not return JSON: {source}")]
    NotJson {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed GeoJSON from {origin}: {message}")]
    Parse { origin: String, message: String },
}

impl FeedError {
    /// True for transport failures and non-JSON bodies, false for bad GeoJSON
    pub(crate) fn is_fetch(&self) -> bool {
        !matches!(self, FeedError::Parse { .. })
    }

    pub(crate) fn parse(origin: &str, message: impl Into<String>) -> Self {
        FeedError::Parse {
            origin: origin.to_string(),
            message: message.into(),
        }
    }
}
