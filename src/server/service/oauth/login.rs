use oauth2::{CsrfToken, Scope};
use url::Url;

use crate::server::service::oauth::DiscordAuthService;

impl DiscordAuthService<'_> {
    /// Generates a Discord OAuth2 login URL with CSRF protection.
    ///
    /// Requests only the `identify` scope. Returns both the URL and the CSRF token, which the
    /// caller stores in the session for validation in the callback.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Tuple containing the authorization URL and CSRF state token
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .url();

        (authorize_url, csrf_state)
    }
}

#[cfg(test)]
mod tests {
    use crate::server::{service::oauth::DiscordAuthService, startup, test_support};

    /// Tests the login URL carries client id, callback, scope and state.
    ///
    /// Expected: authorize URL with the configured query parameters
    #[test]
    fn login_url_carries_client_and_callback() {
        let config = test_support::config("http://127.0.0.1:1");
        let oauth_client = startup::setup_oauth_client(&config).unwrap();

        let (url, csrf) = DiscordAuthService::new(&oauth_client).login_url();

        let query: std::collections::HashMap<_, _> = url.query_pairs().into_owned().collect();
        assert_eq!(url.host_str(), Some("discord.com"));
        assert_eq!(url.path(), "/oauth2/authorize");
        assert_eq!(query["client_id"], test_support::CLIENT_ID);
        assert_eq!(query["redirect_uri"], test_support::REDIRECT_URL);
        assert_eq!(query["response_type"], "code");
        assert_eq!(query["scope"], "identify");
        assert_eq!(query["state"], *csrf.secret());
    }

    /// Tests every login URL gets a fresh CSRF token.
    ///
    /// Expected: two calls yield different state values
    #[test]
    fn login_url_uses_fresh_state() {
        let config = test_support::config("http://127.0.0.1:1");
        let oauth_client = startup::setup_oauth_client(&config).unwrap();
        let service = DiscordAuthService::new(&oauth_client);

        let (_, first) = service.login_url();
        let (_, second) = service.login_url();

        assert_ne!(first.secret(), second.secret());
    }
}
