use axum::response::{IntoResponse, Redirect, Response};
use thiserror::Error;

use crate::server::router::PUBLIC_PAGE_PATH;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request has no session or the session holds no identity.
    ///
    /// Not an error from the user's perspective: protected routes send anonymous visitors
    /// to the public login page.
    #[error("Request is not authenticated")]
    NotAuthenticated,

    /// Discord redirected back with an `error` parameter, e.g. the user cancelled consent.
    #[error("Identity provider returned an error: {0}")]
    ProviderDenied(String),

    /// Callback arrived without an authorization code.
    #[error("OAuth callback is missing the authorization code")]
    MissingCode,

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Exchanging the authorization code for an access token failed.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),

    /// Fetching the user's profile with the access token failed.
    #[error("Failed to fetch user profile: {0}")]
    ProfileFetch(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant redirects to the public login page. Anonymous access is logged at debug
/// level, handshake failures at warn level; nothing about the failure reaches the client.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotAuthenticated => tracing::debug!("{}", self),
            err => tracing::warn!("Login failed: {}", err),
        }

        Redirect::to(PUBLIC_PAGE_PATH).into_response()
    }
}
