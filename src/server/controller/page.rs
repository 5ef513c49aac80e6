use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::server::{
    error::AppError, middleware::auth::AuthGuard, middleware::session::AuthSession,
    router::DASHBOARD_PATH, state::AppState,
};

const LOGIN_PAGE: &str = "login.html";
const DASHBOARD_PAGE: &str = "dashboard.html";

/// GET / - Public landing page
///
/// Logged-in users go straight to the dashboard; everyone else gets the login page.
pub async fn index(State(state): State<AppState>, session: Session) -> Result<Response, AppError> {
    if AuthSession::new(&session).is_authenticated().await? {
        return Ok(Redirect::to(DASHBOARD_PATH).into_response());
    }

    Ok(read_page(&state, LOGIN_PAGE).await?.into_response())
}

/// GET /dashboard - Dashboard page
///
/// # Authentication
/// Requires user to be logged in; anonymous requests are redirected to `/`
pub async fn dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require().await?;

    read_page(&state, DASHBOARD_PAGE).await
}

async fn read_page(state: &AppState, name: &str) -> Result<Html<String>, AppError> {
    let html = tokio::fs::read_to_string(state.pages_dir.join(name)).await?;
    Ok(Html(html))
}
