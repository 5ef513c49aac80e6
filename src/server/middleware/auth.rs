use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::SessionUser,
};

/// Guard for routes that need a logged-in user.
///
/// A rejected request resolves to `AuthError::NotAuthenticated`, which responds with a
/// redirect to the public page rather than an error status.
pub struct AuthGuard<'a> {
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns the session identity or rejects the request.
    ///
    /// # Returns
    /// - `Ok(SessionUser)` - Session holds an identity
    /// - `Err(AppError::AuthErr(AuthError::NotAuthenticated))` - No identity in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn require(&self) -> Result<SessionUser, AppError> {
        let Some(user) = AuthSession::new(self.session).user().await? else {
            return Err(AuthError::NotAuthenticated.into());
        };

        Ok(user)
    }
}
