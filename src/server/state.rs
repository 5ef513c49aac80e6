//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Upstream API client carrying the bearer credential
//! - OAuth2 client for building the Discord login URL
//! - The code-for-profile exchange used by the login callback
//! - Attachment handling policy for flight log screenshots
//! - Location of the static assets and pages

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use std::{path::PathBuf, sync::Arc};

use crate::server::{
    config::Config,
    model::upstream::UpstreamCredential,
    service::{
        attachment::AttachmentPolicy,
        oauth::exchange::{DiscordProfileExchange, ProfileExchange},
        upstream::UpstreamClient,
    },
};

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the HTTP client, credential, exchange, sink and static
/// path are reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Client for the upstream aviation API.
    pub upstream: UpstreamClient,

    /// OAuth2 client for building the Discord authorize URL.
    pub oauth_client: OAuth2Client,

    /// Redeems the callback's authorization code for a Discord profile.
    ///
    /// Injected so tests can replace Discord with a canned identity.
    pub profile_exchange: Arc<dyn ProfileExchange>,

    /// Whether screenshot parts are read, and where accepted ones go.
    pub attachments: AttachmentPolicy,

    /// Directory of public static assets.
    pub static_dir: Arc<PathBuf>,

    /// Directory holding `login.html` and `dashboard.html`.
    pub pages_dir: Arc<PathBuf>,

    /// Body limit for `POST /api/log`.
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Creates the production state from configuration.
    ///
    /// # Arguments
    /// - `config` - Loaded application configuration
    /// - `http_client` - Shared HTTP client, used for upstream and Discord calls
    /// - `oauth_client` - OAuth2 client for Discord
    ///
    /// # Returns
    /// - `AppState` - State using `DiscordProfileExchange` and the discarding attachment sink
    pub fn from_config(
        config: &Config,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
    ) -> Self {
        let upstream = UpstreamClient::new(
            http_client.clone(),
            config.upstream_api_url.clone(),
            UpstreamCredential::new(config.upstream_api_key.as_str()),
            config.upstream_timeout,
        );

        let profile_exchange = Arc::new(DiscordProfileExchange::new(
            http_client,
            oauth_client.clone(),
            config.discord_user_url.clone(),
        ));

        Self {
            upstream,
            oauth_client,
            profile_exchange,
            attachments: AttachmentPolicy::discard(config.attachments_enabled),
            static_dir: Arc::new(config.static_dir.clone()),
            pages_dir: Arc::new(config.pages_dir.clone()),
            max_upload_bytes: config.max_upload_bytes,
        }
    }
}
