//! Search API probing.
//!
//! A probe asks the discovery search API whether a candidate search string
//! matches anything. It never fetches the records themselves.

mod vufind;

pub use vufind::{VufindProbe, SEARCH_API_URL};

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while probing the search API.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Search API connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Search API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("HTTP request failed: {0}")]
    Http(String),
}

impl From<reqwest::Error> for ProbeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProbeError::Timeout
        } else if e.is_connect() {
            ProbeError::ConnectionFailed(e.to_string())
        } else {
            ProbeError::Http(e.to_string())
        }
    }
}

/// Trait for search API probes.
#[async_trait]
pub trait SearchProbe: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &str;

    /// Whether the encoded search string returns at least one record.
    async fn has_results(&self, query: &str) -> Result<bool, ProbeError>;
}
