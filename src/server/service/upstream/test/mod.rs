use std::time::Duration;

use axum::http::Method;
use test_utils::{builder::TestBuilder, fixture, upstream::MockResponse};

use crate::server::{
    error::upstream::UpstreamError,
    model::upstream::{UpstreamCredential, UpstreamEndpoint},
    service::upstream::UpstreamClient,
};

mod endpoints;

const TEST_TOKEN: &str = "pfc_test_token";

/// Builds a client pointed at `base_url` with a short timeout.
fn client(base_url: &str) -> UpstreamClient {
    UpstreamClient::new(
        reqwest::Client::new(),
        base_url,
        UpstreamCredential::new(TEST_TOKEN),
        Duration::from_millis(500),
    )
}
