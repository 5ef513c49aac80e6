//! Upstream aviation API domain models.
//!
//! Describes the logical endpoints the proxy consumes, the bearer credential attached to
//! every call, and the normalized `ProxyResult` each call resolves to.

use axum::{
    body::Bytes,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
};
use std::{fmt, sync::Arc};

use crate::server::error::upstream::UpstreamError;

/// Outcome of one upstream call: the relayed payload or an "upstream unavailable" failure.
pub type ProxyResult = Result<UpstreamPayload, UpstreamError>;

/// Logical upstream endpoint.
///
/// Each endpoint fixes its HTTP method and path below the configured base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamEndpoint {
    /// Create a flight log entry.
    SubmitFlightLog,
    /// Aggregate statistics.
    Statistics,
    /// Most recent flight log entries.
    RecentFlights,
    /// Chart uploads filtered by airport code.
    Charts,
}

impl UpstreamEndpoint {
    pub fn method(self) -> Method {
        match self {
            Self::SubmitFlightLog => Method::POST,
            Self::Statistics | Self::RecentFlights | Self::Charts => Method::GET,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::SubmitFlightLog => "/flights",
            Self::Statistics => "/stats",
            Self::RecentFlights => "/flights/recent",
            Self::Charts => "/charts/uploads",
        }
    }

    /// Static message shown to the client when this endpoint is unavailable.
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::SubmitFlightLog => "Failed to log flight",
            Self::Statistics => "Failed to fetch stats",
            Self::RecentFlights => "Failed to fetch flights",
            Self::Charts => "Failed to fetch charts",
        }
    }
}

impl fmt::Display for UpstreamEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

/// Successful upstream response body, relayed byte for byte.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamPayload {
    pub body: Bytes,
}

/// Relays the upstream body unmodified as `200 OK` JSON.
impl IntoResponse for UpstreamPayload {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            self.body,
        )
            .into_response()
    }
}

/// Static bearer token for the upstream API.
///
/// Loaded once at startup and shared read-only by every call. `Debug` never prints the
/// token itself.
#[derive(Clone)]
pub struct UpstreamCredential(Arc<str>);

impl UpstreamCredential {
    pub fn new(token: impl Into<Arc<str>>) -> Self {
        Self(token.into())
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for UpstreamCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UpstreamCredential(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the credential is never printed.
    ///
    /// Expected: Debug output omits the token
    #[test]
    fn credential_debug_is_redacted() {
        let credential = UpstreamCredential::new("pfc_live_secret");

        assert!(!format!("{:?}", credential).contains("pfc_live_secret"));
        assert_eq!(credential.bearer(), "Bearer pfc_live_secret");
    }

    /// Tests the payload is relayed without modification.
    ///
    /// Expected: 200 with the exact body bytes and a JSON content type
    #[tokio::test]
    async fn payload_relays_body_verbatim() {
        let body = Bytes::from_static(br#"{ "a" :1 }"#);
        let response = UpstreamPayload { body: body.clone() }.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        let relayed = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(relayed, body);
    }
}
