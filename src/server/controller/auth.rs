use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::{AuthSession, CsrfSession, GateState},
    model::user::SessionUser,
    router::{DASHBOARD_PATH, PUBLIC_PAGE_PATH},
    service::oauth::DiscordAuthService,
    state::AppState,
};

/// Query parameters Discord appends when redirecting back to the callback.
///
/// # Fields
/// - `code` - Authorization code, absent when the user denied access
/// - `state` - CSRF token that must match the one stored in the session
/// - `error` - Provider error code, e.g. `access_denied`
#[derive(Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// GET /auth/discord - Begin the Discord login handshake
///
/// Stores a fresh CSRF token in the session and redirects to Discord's authorize page.
/// Sessions that are already logged in go straight to the dashboard.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    if AuthSession::new(&session).state().await? == GateState::Authenticated {
        return Ok(Redirect::to(DASHBOARD_PATH));
    }

    let (url, csrf_token) = DiscordAuthService::new(&state.oauth_client).login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// GET /auth/discord/callback - Complete the Discord login handshake
///
/// Redeems the code for the user's profile, stores it in a freshly cycled session and
/// redirects to the dashboard. Every failure redirects to the public page with no identity
/// stored.
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    // Consumed up front so a failed callback cannot be replayed with the same token.
    let stored_state = CsrfSession::new(&session).take_token().await?;

    if let Some(error) = params.error {
        return Err(AuthError::ProviderDenied(error).into());
    }

    let code = params.code.ok_or(AuthError::MissingCode)?;

    validate_csrf(stored_state.as_deref(), params.state.as_deref())?;

    let profile = state.profile_exchange.exchange(code).await?;
    let user = SessionUser::new(profile);

    let auth_session = AuthSession::new(&session);
    auth_session.cycle_id().await?;
    auth_session.set_user(&user).await?;

    tracing::info!(
        "User {} logged in",
        user.name().or(user.id()).unwrap_or("<unknown>")
    );

    Ok(Redirect::to(DASHBOARD_PATH))
}

/// GET|POST /auth/logout - Destroy the session
///
/// Always redirects to the public page, whether or not a session existed.
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).destroy().await?;

    Ok(Redirect::to(PUBLIC_PAGE_PATH))
}

fn validate_csrf(stored: Option<&str>, received: Option<&str>) -> Result<(), AppError> {
    match (stored, received) {
        (Some(stored), Some(received)) if stored == received => Ok(()),
        _ => Err(AuthError::CsrfValidationFailed.into()),
    }
}
