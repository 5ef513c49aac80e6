//! Authorization code to profile exchange.
//!
//! The callback handler never talks to Discord directly. It holds an
//! `Arc<dyn ProfileExchange>` from `AppState`, so the production exchange can be swapped for
//! a canned one in tests without touching the handshake logic.

use async_trait::async_trait;
use oauth2::{AuthorizationCode, TokenResponse};

use crate::server::{error::auth::AuthError, state::OAuth2Client};

/// Exchanges an OAuth2 authorization code for the user's profile.
#[async_trait]
pub trait ProfileExchange: Send + Sync {
    /// Redeems `code` and returns the provider's profile as an opaque JSON value.
    ///
    /// # Returns
    /// - `Ok(Value)` - Profile of the user who approved the login
    /// - `Err(AuthError::TokenExchange)` - The provider rejected the code
    /// - `Err(AuthError::ProfileFetch)` - The profile could not be retrieved
    async fn exchange(&self, code: String) -> Result<serde_json::Value, AuthError>;
}

/// Discord implementation of `ProfileExchange`.
///
/// Redeems the code at Discord's token endpoint, then fetches `/users/@me` with the
/// resulting access token.
pub struct DiscordProfileExchange {
    /// HTTP client for the token and profile requests.
    ///
    /// Must not follow redirects, as recommended for OAuth2 token requests.
    http_client: reqwest::Client,
    oauth_client: OAuth2Client,
    user_url: String,
}

impl DiscordProfileExchange {
    pub fn new(http_client: reqwest::Client, oauth_client: OAuth2Client, user_url: String) -> Self {
        Self {
            http_client,
            oauth_client,
            user_url,
        }
    }
}

#[async_trait]
impl ProfileExchange for DiscordProfileExchange {
    async fn exchange(&self, code: String) -> Result<serde_json::Value, AuthError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(code))
            .request_async(&self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let access_token = token.access_token().secret();

        let profile = self
            .http_client
            .get(&self.user_url)
            .bearer_auth(access_token)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| AuthError::ProfileFetch(e.to_string()))?
            .json::<serde_json::Value>()
            .await
            .map_err(|e| AuthError::ProfileFetch(e.to_string()))?;

        Ok(profile)
    }
}
