//! Type-safe session management wrappers.
//!
//! This module provides type-safe interfaces for managing different aspects of user sessions,
//! organized by concern. Each struct handles a specific domain of session data, preventing
//! typos, ensuring type consistency, and centralizing session-related logic.
//!
//! # Architecture
//!
//! Session management is split into focused concerns:
//! - `AuthSession` - Authenticated identity and session lifecycle
//! - `CsrfSession` - CSRF token management for the OAuth flow
//!
//! Each struct wraps the same underlying `Session` but exposes only the methods
//! relevant to its concern.

use tower_sessions::Session;

use crate::server::{error::AppError, model::user::SessionUser};

// Session key constants
const SESSION_AUTH_USER: &str = "auth:user";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Where a session stands in the Discord login handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// No identity and no login in progress.
    Anonymous,
    /// Login started: a CSRF token awaits the callback.
    Pending,
    /// Identity stored.
    Authenticated,
}

/// Authentication session management.
///
/// Handles the authenticated identity and session lifecycle operations.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the authenticated identity in the session.
    ///
    /// # Returns
    /// - `Ok(())` - Identity stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user(&self, user: &SessionUser) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER, user).await?;
        Ok(())
    }

    /// Retrieves the authenticated identity.
    ///
    /// # Returns
    /// - `Ok(Some(user))` - Session holds an identity
    /// - `Ok(None)` - No identity in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn user(&self) -> Result<Option<SessionUser>, AppError> {
        let user = self.session.get::<SessionUser>(SESSION_AUTH_USER).await?;
        Ok(user)
    }

    /// Checks if the session holds an identity.
    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.user().await?.is_some())
    }

    /// Reports the session's handshake state.
    pub async fn state(&self) -> Result<GateState, AppError> {
        if self.is_authenticated().await? {
            return Ok(GateState::Authenticated);
        }

        let pending = self
            .session
            .get::<String>(SESSION_AUTH_CSRF_TOKEN)
            .await?
            .is_some();

        Ok(if pending {
            GateState::Pending
        } else {
            GateState::Anonymous
        })
    }

    /// Issues a new session id, keeping the data.
    ///
    /// Called right before storing a fresh identity so a pre-login session id cannot be
    /// reused to ride the authenticated session.
    pub async fn cycle_id(&self) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        Ok(())
    }

    /// Deletes the session from the store and expires its cookie.
    pub async fn destroy(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

/// CSRF protection session management.
///
/// Handles CSRF token storage and validation for the OAuth flow. Tokens are stored
/// during login initiation and validated during the OAuth callback.
pub struct CsrfSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a CSRF token in the session, replacing any earlier one.
    ///
    /// # Returns
    /// - `Ok(())` - Token successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    ///
    /// The token is removed so each one validates at most one callback.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - CSRF token was found and removed
    /// - `Ok(None)` - No CSRF token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}
