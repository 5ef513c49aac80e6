use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer};

use crate::server::{
    controller::{auth, flight, page, user},
    startup::CookieSettings,
    state::AppState,
};

/// Where unauthenticated requests and finished logouts land.
pub const PUBLIC_PAGE_PATH: &str = "/";
/// Where a successful login lands.
pub const DASHBOARD_PATH: &str = "/dashboard";
/// Name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "flightlog.sid";

const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Builds the application router.
///
/// # Arguments
/// - `state` - Shared application state
/// - `store` - Session store; every session lives here until logout or inactivity expiry
/// - `cookies` - Signing key and secure flag for the session cookie
pub fn router(state: AppState, store: MemoryStore, cookies: CookieSettings) -> Router {
    let session_layer = SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_secure(cookies.secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            SESSION_INACTIVITY_DAYS,
        )))
        .with_signed(cookies.key);

    let static_files = ServeDir::new(state.static_dir.as_path());
    let upload_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .route(PUBLIC_PAGE_PATH, get(page::index))
        .route(DASHBOARD_PATH, get(page::dashboard))
        .route("/login.html", get(page::index))
        .route("/dashboard.html", get(page::dashboard))
        .route("/auth/discord", get(auth::login))
        .route("/auth/discord/callback", get(auth::callback))
        .route("/auth/logout", get(auth::logout).post(auth::logout))
        .route("/api/log", post(flight::log_flight).layer(upload_limit))
        .route("/api/stats", get(flight::get_stats))
        .route("/api/flights", get(flight::get_recent_flights))
        .route("/api/charts", get(flight::get_charts))
        .route("/api/user", get(user::get_user))
        .fallback_service(static_files)
        .with_state(state)
        .layer(session_layer)
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}
