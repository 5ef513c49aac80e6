//! Mock upstream aviation API.
//!
//! `MockUpstream` runs a real axum server on `127.0.0.1` with an ephemeral port. Every request
//! it receives is recorded so tests can assert on exactly what the proxy forwarded, including
//! the `Authorization` header and the raw body. Responses are looked up by method and path;
//! anything not configured answers `404 Not Found`.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::{net::TcpListener, task::JoinHandle};

use crate::error::TestError;

/// Canned response returned by the mock upstream for a configured route.
#[derive(Clone, Debug)]
pub struct MockResponse {
    /// HTTP status code to answer with.
    pub status: StatusCode,
    /// Raw response body, sent as `application/json`.
    pub body: String,
    /// Optional delay before answering, used to trigger client timeouts.
    pub delay: Option<Duration>,
}

impl MockResponse {
    /// Creates a `200 OK` response with the given JSON body.
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.into(),
            delay: None,
        }
    }

    /// Creates a response with an arbitrary status and body.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body: body.into(),
            delay: None,
        }
    }

    /// Delays the response by `delay`.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// A request captured by the mock upstream.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl RecordedRequest {
    /// Parses the recorded body as JSON, returning `Value::Null` when it is empty or invalid.
    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap_or(serde_json::Value::Null)
    }
}

#[derive(Clone, Default)]
struct MockState {
    routes: Arc<HashMap<(Method, String), MockResponse>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Running mock upstream server.
///
/// The server task is aborted when this value is dropped.
pub struct MockUpstream {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: JoinHandle<()>,
}

impl MockUpstream {
    /// Binds an ephemeral port and starts serving the given routes.
    ///
    /// # Arguments
    /// - `routes` - Canned responses keyed by `(method, path)`
    ///
    /// # Returns
    /// - `Ok(MockUpstream)` - Server is accepting connections
    /// - `Err(TestError::Io)` - Failed to bind the listener
    pub async fn start(routes: HashMap<(Method, String), MockResponse>) -> Result<Self, TestError> {
        let state = MockState {
            routes: Arc::new(routes),
            requests: Arc::new(Mutex::new(Vec::new())),
        };
        let requests = state.requests.clone();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let app = Router::new().fallback(record_and_respond).with_state(state);
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            addr,
            requests,
            handle,
        })
    }

    /// Base URL of the mock server, without a trailing slash.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Snapshot of every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn record_and_respond(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    let recorded = RecordedRequest {
        method: method.clone(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body,
    };
    if let Ok(mut requests) = state.requests.lock() {
        requests.push(recorded);
    }

    let Some(response) = state.routes.get(&(method, uri.path().to_string())).cloned() else {
        return StatusCode::NOT_FOUND.into_response();
    };

    if let Some(delay) = response.delay {
        tokio::time::sleep(delay).await;
    }

    (
        response.status,
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
        .into_response()
}
