use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

use crate::model::Resource;

/// Everything that can go wrong while assembling a dashboard.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Request to {url} failed: {source}")]
    Network {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error! Status: {status} from {url}: {body}")]
    Status { url: Url, status: StatusCode, body: String },

    #[error("Failed to parse JSON from {url}: {source}")]
    Decode {
        url: Url,
        #[source]
        source: serde_json::Error,
    },

    #[error("Incomplete data from the APIs: no {missing} returned")]
    IncompleteData { missing: Resource },
}

impl DashboardError {
    /// True for transport and HTTP status failures.
    pub fn is_network(&self) -> bool {
        matches!(self, DashboardError::Network { .. } | DashboardError::Status { .. })
    }
}
