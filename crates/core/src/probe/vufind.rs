//! VuFind search API probe.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::config::ProbeConfig;

use super::{ProbeError, SearchProbe};

/// ReShare VuFind search API. Candidate strings are appended directly.
pub const SEARCH_API_URL: &str = "https://borrowdirect.reshare.indexdata.com/api/v1/search?";

/// Probe backed by the VuFind REST search API.
pub struct VufindProbe {
    client: Client,
    base_url: String,
}

impl VufindProbe {
    /// Create a probe against the ReShare search API.
    pub fn new(config: &ProbeConfig) -> Result<Self, ProbeError> {
        Self::with_base_url(config, SEARCH_API_URL)
    }

    /// Create a probe against another base URL. The base must end where the
    /// query component starts (usually with `?`).
    pub fn with_base_url(
        config: &ProbeConfig,
        base_url: impl Into<String>,
    ) -> Result<Self, ProbeError> {
        let client = Client::builder()
            .user_agent(format!("wcd2reshare/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProbeError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl SearchProbe for VufindProbe {
    fn name(&self) -> &str {
        "vufind"
    }

    async fn has_results(&self, query: &str) -> Result<bool, ProbeError> {
        let url = format!("{}{}", self.base_url, query);
        debug!(url = %url, "Probing search API");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProbeError::ApiError {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)
            .map_err(|e| ProbeError::ParseError(format!("Failed to parse search response: {}", e)))?;

        let has_results = parsed.result_count.as_ref().is_some_and(is_truthy);
        debug!(
            result_count = ?parsed.result_count,
            has_results,
            "Search API probe complete"
        );

        Ok(has_results)
    }
}

// ============================================================================
// VuFind API Response Types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "resultCount", default)]
    result_count: Option<Value>,
}

/// JSON truthiness: zero, false, null and empty values are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
