use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use tower_sessions::cookie::Key;

use crate::server::{
    config::{Config, MIN_SESSION_SECRET_BYTES},
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Cookie settings for the session layer.
pub struct CookieSettings {
    /// Key signing the session cookie.
    pub key: Key,
    /// Whether the cookie carries the `Secure` attribute.
    pub secure: bool,
}

/// Builds the HTTP client shared by upstream and Discord requests.
///
/// Redirects are never followed: OAuth2 token requests must not be redirected, and an
/// upstream redirect is treated as a non-2xx answer.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr(_))` - TLS backend failed to initialize
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client for Discord login.
///
/// # Arguments
/// - `config` - Application configuration holding client credentials and endpoint URLs
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with authorize, token and redirect URLs set
/// - `Err(AppError::ConfigErr(_))` - One of the URLs failed to parse
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let auth_url = AuthUrl::new(config.discord_auth_url.clone())
        .map_err(|source| invalid_url("DISCORD_AUTH_URL", source))?;
    let token_url = TokenUrl::new(config.discord_token_url.clone())
        .map_err(|source| invalid_url("DISCORD_TOKEN_URL", source))?;
    let redirect_url = RedirectUrl::new(config.discord_redirect_url.clone())
        .map_err(|source| invalid_url("DISCORD_REDIRECT_URL", source))?;

    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}

/// Derives the session cookie settings from the session secret.
///
/// # Returns
/// - `Ok(CookieSettings)` - Signing key and secure flag
/// - `Err(AppError::ConfigErr(_))` - Secret shorter than `MIN_SESSION_SECRET_BYTES`
pub fn setup_cookie_settings(config: &Config) -> Result<CookieSettings, AppError> {
    let key = Key::try_from(config.session_secret.as_bytes()).map_err(|_| {
        ConfigError::SessionSecretTooShort {
            min: MIN_SESSION_SECRET_BYTES,
            actual: config.session_secret.len(),
        }
    })?;

    Ok(CookieSettings {
        key,
        secure: config.secure_cookies,
    })
}

/// Resolves once Ctrl-C is received.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received");
}

fn invalid_url(name: &str, source: url::ParseError) -> ConfigError {
    ConfigError::InvalidUrl {
        name: name.to_string(),
        source,
    }
}
