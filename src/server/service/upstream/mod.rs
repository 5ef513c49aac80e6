//! Client for the upstream aviation API.
//!
//! `UpstreamClient` is the only component that talks to the upstream service. Each call
//! attaches the static bearer credential, applies the configured timeout, and resolves to a
//! `ProxyResult`: the raw body on 2xx, an `UpstreamError` for anything else. Calls are never
//! retried.

use serde::Serialize;
use std::time::Duration;

use crate::server::{
    error::upstream::UpstreamError,
    model::{
        flight_log::FlightLogSubmission,
        upstream::{ProxyResult, UpstreamCredential, UpstreamEndpoint, UpstreamPayload},
    },
};

#[cfg(test)]
mod test;

/// Upstream API client shared by every request handler.
///
/// Cheap to clone: `reqwest::Client` and `UpstreamCredential` are reference counted.
#[derive(Clone, Debug)]
pub struct UpstreamClient {
    http_client: reqwest::Client,
    base_url: String,
    credential: UpstreamCredential,
    timeout: Duration,
}

impl UpstreamClient {
    /// Creates a new upstream client.
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client
    /// - `base_url` - Upstream base URL without a trailing slash, e.g.
    ///   `https://api.pfconnect.online/api/v1`
    /// - `credential` - Bearer token attached to every call
    /// - `timeout` - Per-call timeout; expiry is reported as `UpstreamError::Timeout`
    pub fn new(
        http_client: reqwest::Client,
        base_url: impl Into<String>,
        credential: UpstreamCredential,
        timeout: Duration,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credential,
            timeout,
        }
    }

    /// Calls a logical upstream endpoint.
    ///
    /// Sends `body` as JSON when given and `query` as URL-encoded query parameters. A 2xx
    /// response yields its body unmodified. Network failures, timeouts and non-2xx statuses
    /// yield an `UpstreamError`; a non-2xx body is kept in the error for logging only.
    ///
    /// # Arguments
    /// - `endpoint` - Logical endpoint, which fixes method and path
    /// - `query` - Query parameters, empty for none
    /// - `body` - Optional body, serialized as JSON
    ///
    /// # Returns
    /// - `Ok(UpstreamPayload)` - Upstream answered 2xx
    /// - `Err(UpstreamError)` - Upstream unavailable
    pub async fn call<B>(
        &self,
        endpoint: UpstreamEndpoint,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> ProxyResult
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, endpoint.path());

        let mut request = self
            .http_client
            .request(endpoint.method(), url)
            .header(reqwest::header::AUTHORIZATION, self.credential.bearer())
            .timeout(self.timeout);

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| UpstreamError::from_reqwest(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                endpoint,
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::from_reqwest(endpoint, e))?;

        tracing::debug!(
            "Upstream {} answered {} ({} bytes)",
            endpoint,
            status,
            body.len()
        );

        Ok(UpstreamPayload { body })
    }

    /// Creates a flight log entry upstream.
    pub async fn submit_flight_log(&self, submission: &FlightLogSubmission) -> ProxyResult {
        self.call(UpstreamEndpoint::SubmitFlightLog, &[], Some(submission))
            .await
    }

    /// Fetches aggregate statistics.
    pub async fn statistics(&self) -> ProxyResult {
        self.call::<()>(UpstreamEndpoint::Statistics, &[], None).await
    }

    /// Fetches the most recent flight log entries.
    pub async fn recent_flights(&self) -> ProxyResult {
        self.call::<()>(UpstreamEndpoint::RecentFlights, &[], None).await
    }

    /// Fetches chart uploads for an airport.
    ///
    /// # Arguments
    /// - `icao` - Airport code, sent URL-encoded as the `icao` query parameter
    pub async fn charts(&self, icao: &str) -> ProxyResult {
        self.call::<()>(UpstreamEndpoint::Charts, &[("icao", icao)], None)
            .await
    }
}
