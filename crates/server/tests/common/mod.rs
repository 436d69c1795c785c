//! Common test utilities for E2E testing with mocks.
//!
//! This module provides a test fixture that creates an in-process router
//! with a mock search probe injected, so no request leaves the process.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use reshare_core::{testing::MockSearchProbe, Config, RedirectHandler};
use reshare_server::{api::create_router, state::AppState};

/// Re-export fixtures for test convenience
pub use reshare_core::testing::fixtures;

/// Test fixture for E2E testing with a mock search probe.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_isbn_redirect() {
///     let fixture = TestFixture::new();
///     fixture.probe.set_fallback(true).await;
///
///     let response = fixture.get("/?rft.isbn=123").await;
///     assert_eq!(response.status, 307);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock probe - script search API answers
    pub probe: Arc<MockSearchProbe>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl TestResponse {
    /// Parse the body as JSON.
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("Response body is not JSON")
    }
}

impl TestFixture {
    /// Create a fixture with `WORKSPACE` configured.
    pub fn new() -> Self {
        Self::with_workspace(Some("test"))
    }

    /// Create a fixture with the given workspace (or none).
    pub fn with_workspace(workspace: Option<&str>) -> Self {
        let probe = Arc::new(MockSearchProbe::new());

        let config = Config {
            workspace: workspace.map(String::from),
            ..Default::default()
        };
        let handler = RedirectHandler::new(config, probe.clone());
        let router = create_router(Arc::new(AppState::new(handler)));

        Self { router, probe }
    }

    /// Send a GET request to the test router.
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        TestResponse {
            status,
            location,
            body: String::from_utf8_lossy(&bytes).to_string(),
        }
    }
}
