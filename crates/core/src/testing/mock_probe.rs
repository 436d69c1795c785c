//! Mock search probe for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::probe::{ProbeError, SearchProbe};

/// A recorded probe for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedProbe {
    /// The encoded search string that was probed.
    pub query: String,
}

/// Mock implementation of the SearchProbe trait.
///
/// Scripted responses are consumed in order, one per call. Once the script
/// runs out every call returns the fallback answer (`false` by default).
pub struct MockSearchProbe {
    /// Scripted responses, consumed front to back.
    responses: Arc<RwLock<VecDeque<Result<bool, ProbeError>>>>,
    /// Answer once the script is exhausted.
    fallback: Arc<RwLock<bool>>,
    /// Recorded probes.
    probes: Arc<RwLock<Vec<RecordedProbe>>>,
}

impl std::fmt::Debug for MockSearchProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockSearchProbe")
            .field("responses", &"<responses>")
            .field("fallback", &"<fallback>")
            .field("probes", &"<probes>")
            .finish()
    }
}

impl Default for MockSearchProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSearchProbe {
    /// Create a mock that reports no results for everything.
    pub fn new() -> Self {
        Self::with_responses(Vec::new())
    }

    /// Create a mock with scripted responses.
    pub fn with_responses(responses: Vec<Result<bool, ProbeError>>) -> Self {
        Self {
            responses: Arc::new(RwLock::new(responses.into())),
            fallback: Arc::new(RwLock::new(false)),
            probes: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a mock that always gives the same answer.
    pub fn always(has_results: bool) -> Self {
        let mut probe = Self::new();
        probe.fallback = Arc::new(RwLock::new(has_results));
        probe
    }

    /// Append a scripted response.
    pub async fn push_response(&self, response: Result<bool, ProbeError>) {
        self.responses.write().await.push_back(response);
    }

    /// Set the answer used once the script is exhausted.
    pub async fn set_fallback(&self, has_results: bool) {
        *self.fallback.write().await = has_results;
    }

    /// Get recorded probes.
    pub async fn recorded_probes(&self) -> Vec<RecordedProbe> {
        self.probes.read().await.clone()
    }

    /// Get the probed search strings, in call order.
    pub async fn recorded_queries(&self) -> Vec<String> {
        self.probes
            .read()
            .await
            .iter()
            .map(|p| p.query.clone())
            .collect()
    }

    /// Get the number of probes performed.
    pub async fn call_count(&self) -> usize {
        self.probes.read().await.len()
    }

    /// Clear recorded probes.
    pub async fn clear_recorded(&self) {
        self.probes.write().await.clear();
    }
}

#[async_trait]
impl SearchProbe for MockSearchProbe {
    fn name(&self) -> &str {
        "mock"
    }

    async fn has_results(&self, query: &str) -> Result<bool, ProbeError> {
        self.probes.write().await.push(RecordedProbe {
            query: query.to_string(),
        });

        let scripted = self.responses.write().await.pop_front();
        match scripted {
            Some(response) => response,
            None => Ok(*self.fallback.read().await),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_responses_then_fallback() {
        let probe = MockSearchProbe::with_responses(vec![Ok(true), Err(ProbeError::Timeout)]);

        assert!(probe.has_results("a").await.unwrap());
        assert!(matches!(probe.has_results("b").await, Err(ProbeError::Timeout)));
        assert!(!probe.has_results("c").await.unwrap());

        probe.set_fallback(true).await;
        assert!(probe.has_results("d").await.unwrap());

        assert_eq!(probe.recorded_queries().await, vec!["a", "b", "c", "d"]);
    }

    #[tokio::test]
    async fn test_always_and_clear() {
        let probe = MockSearchProbe::always(true);
        assert!(probe.has_results("x").await.unwrap());
        assert!(probe.has_results("y").await.unwrap());
        assert_eq!(probe.call_count().await, 2);

        probe.clear_recorded().await;
        assert_eq!(probe.call_count().await, 0);

        probe.push_response(Ok(false)).await;
        assert!(!probe.has_results("z").await.unwrap());
        assert_eq!(probe.recorded_probes().await[0].query, "z");
    }
}
