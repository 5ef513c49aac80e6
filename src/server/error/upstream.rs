use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, FlightLogResponseDto},
    server::model::upstream::UpstreamEndpoint,
};

/// Failure classification for a call to the upstream aviation API.
///
/// Every variant means "upstream unavailable" to the client. The variants only exist so the
/// server log says what actually happened; the upstream body is never relayed.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The upstream did not answer within the configured timeout.
    #[error("Upstream {endpoint} timed out")]
    Timeout { endpoint: UpstreamEndpoint },

    /// The request could not be sent or the response body could not be read.
    #[error("Upstream {endpoint} request failed: {source}")]
    Request {
        endpoint: UpstreamEndpoint,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream answered with a non-2xx status.
    #[error("Upstream {endpoint} responded {status}: {body}")]
    Status {
        endpoint: UpstreamEndpoint,
        status: u16,
        /// Upstream response body, kept for logging only
        body: String,
    },
}

impl UpstreamError {
    /// Classifies a `reqwest` error raised while calling `endpoint`.
    pub fn from_reqwest(endpoint: UpstreamEndpoint, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout { endpoint }
        } else {
            Self::Request { endpoint, source }
        }
    }

    /// The logical endpoint whose call failed.
    pub fn endpoint(&self) -> UpstreamEndpoint {
        match self {
            Self::Timeout { endpoint }
            | Self::Request { endpoint, .. }
            | Self::Status { endpoint, .. } => *endpoint,
        }
    }
}

/// Converts upstream failures into HTTP responses.
///
/// Logs the full error and returns 500 Internal Server Error with the endpoint's static
/// message. Flight log submissions answer with the `{success, message}` envelope the
/// dashboard form expects; every other endpoint answers with `ErrorDto`.
impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        let endpoint = self.endpoint();
        let message = endpoint.failure_message().to_string();

        match endpoint {
            UpstreamEndpoint::SubmitFlightLog => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FlightLogResponseDto {
                    success: false,
                    message,
                }),
            )
                .into_response(),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDto { error: message }),
            )
                .into_response(),
        }
    }
}
