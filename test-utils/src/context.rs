use axum::http::Method;
use std::{collections::HashMap, sync::Arc};
use time::Duration;
use tokio::net::TcpListener;
use tower_sessions::{Expiry, MemoryStore, Session};

use crate::{
    error::TestError,
    upstream::{MockResponse, MockUpstream, RecordedRequest},
};

/// Test context containing the mock upstream, a session, and test environment setup.
///
/// The mock upstream is started by `TestBuilder::build()` and stopped when the context is
/// dropped. The session is created lazily on first access and persists for the lifetime of
/// the test context.
pub struct TestContext {
    /// Running mock upstream aviation API.
    pub upstream: MockUpstream,

    /// Shared in-memory session store.
    ///
    /// Tests that build a full router pass a clone of this store so sessions created by
    /// `session()` and sessions created through HTTP live in the same place.
    pub store: MemoryStore,

    /// Optional session instance for session handling.
    ///
    /// Initialized lazily when `session()` is first called.
    pub session: Option<Session>,
}

impl TestContext {
    /// Starts the mock upstream with the given routes.
    ///
    /// Typically called internally by `TestBuilder::build()` rather than directly.
    pub(crate) async fn start(
        routes: HashMap<(Method, String), MockResponse>,
    ) -> Result<Self, TestError> {
        let upstream = MockUpstream::start(routes).await?;

        Ok(Self {
            upstream,
            store: MemoryStore::default(),
            session: None,
        })
    }

    /// Base URL of the mock upstream.
    pub fn upstream_url(&self) -> String {
        self.upstream.url()
    }

    /// Every request the mock upstream has received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.upstream.requests()
    }

    /// Returns a URL on which nothing is listening.
    ///
    /// Binds an ephemeral port, records it, and releases the listener so connections to the
    /// returned URL are refused.
    ///
    /// # Returns
    /// - `Ok(String)` - URL such as `http://127.0.0.1:49152`
    /// - `Err(TestError::Io)` - Failed to bind the temporary listener
    pub async fn unreachable_url(&self) -> Result<String, TestError> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        drop(listener);

        Ok(format!("http://{}", addr))
    }

    /// Gets or creates the test session instance.
    ///
    /// Returns a reference to the existing session if one exists, otherwise creates a new
    /// session backed by the context's in-memory store.
    ///
    /// # Example
    /// ```rust,ignore
    /// let mut test = TestBuilder::new().build().await?;
    /// let session = test.session();
    ///
    /// session.insert("auth:csrf_token", "abc").await?;
    /// ```
    pub fn session(&mut self) -> &Session {
        let store = self.store.clone();

        self.session.get_or_insert_with(|| {
            Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(7))),
            )
        })
    }
}
