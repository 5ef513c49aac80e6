use axum::{http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::server::{error::AppError, middleware::auth::AuthGuard};

/// GET /api/user - Get the logged-in identity
///
/// # Authentication
/// Requires user to be logged in
///
/// # Returns
/// - `200 OK`: UserDto with id, display name and avatar hash
/// - `303 See Other`: Redirect to `/` when not logged in
pub async fn get_user(session: Session) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&session).require().await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
