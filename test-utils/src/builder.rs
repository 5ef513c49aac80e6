use axum::http::Method;
use std::collections::HashMap;

use crate::{context::TestContext, error::TestError, upstream::MockResponse};

/// Builder for creating test contexts with a configurable mock upstream.
///
/// Provides a fluent interface for registering canned upstream responses, then call `build()`
/// to start the mock server and create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, upstream::MockResponse};
///
/// let test = TestBuilder::new()
///     .with_response("GET", "/stats", MockResponse::json("{}"))
///     .with_response("POST", "/flights", MockResponse::status(201, "{}"))
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Canned responses keyed by method and path.
    ///
    /// Requests that match no entry are still recorded and answered with `404 Not Found`.
    routes: HashMap<(Method, String), MockResponse>,
}

impl TestBuilder {
    /// Creates a new test builder with no upstream routes configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty route configuration
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Registers a canned response for `method` + `path` on the mock upstream.
    ///
    /// Registering the same method and path twice keeps the last response.
    ///
    /// # Arguments
    /// - `method` - HTTP method such as `"GET"` or `"POST"`
    /// - `path` - Request path without query string, e.g. `"/charts/uploads"`
    /// - `response` - Response to answer with
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_response(mut self, method: &str, path: &str, response: MockResponse) -> Self {
        let method = Method::from_bytes(method.as_bytes()).unwrap_or(Method::GET);
        self.routes.insert((method, path.to_string()), response);
        self
    }

    /// Registers healthy responses for every endpoint the proxy consumes.
    ///
    /// This convenience method adds:
    /// - `POST /flights` answering `{"id":1}`
    /// - `GET /stats` answering `fixture::upstream::STATS_BODY`
    /// - `GET /flights/recent` answering `fixture::upstream::RECENT_FLIGHTS_BODY`
    /// - `GET /charts/uploads` answering `fixture::upstream::CHARTS_BODY`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_healthy_upstream(self) -> Self {
        use crate::fixture::upstream;

        self.with_response("POST", "/flights", MockResponse::json(upstream::CREATED_BODY))
            .with_response("GET", "/stats", MockResponse::json(upstream::STATS_BODY))
            .with_response(
                "GET",
                "/flights/recent",
                MockResponse::json(upstream::RECENT_FLIGHTS_BODY),
            )
            .with_response(
                "GET",
                "/charts/uploads",
                MockResponse::json(upstream::CHARTS_BODY),
            )
    }

    /// Starts the mock upstream and builds the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with a running mock upstream
    /// - `Err(TestError::Io)` - Failed to bind the mock upstream listener
    pub async fn build(self) -> Result<TestContext, TestError> {
        TestContext::start(self.routes).await
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
