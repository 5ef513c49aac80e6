use test_utils::{builder::TestBuilder, fixture};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, session::AuthSession},
    model::user::SessionUser,
};

/// Tests a session without identity is rejected.
///
/// Expected: Err(AuthError::NotAuthenticated)
#[tokio::test]
async fn rejects_anonymous_session() {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session();

    let result = AuthGuard::new(session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotAuthenticated))
    ));
}

/// Tests the stored identity is returned once logged in.
///
/// Expected: Ok(SessionUser) equal to the stored one
#[tokio::test]
async fn returns_stored_identity() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session();

    let user = SessionUser::new(fixture::profile::discord_user());
    AuthSession::new(session).set_user(&user).await?;

    let guarded = AuthGuard::new(session).require().await?;

    assert_eq!(guarded, user);
    assert_eq!(guarded.id(), Some(fixture::profile::DEFAULT_USER_ID));
    Ok(())
}

/// Tests a destroyed session no longer passes the guard.
///
/// Expected: Err(AuthError::NotAuthenticated) after destroy
#[tokio::test]
async fn rejects_destroyed_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session();

    let auth_session = AuthSession::new(session);
    auth_session
        .set_user(&SessionUser::new(fixture::profile::discord_user()))
        .await?;
    auth_session.destroy().await?;

    let result = AuthGuard::new(session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotAuthenticated))
    ));
    Ok(())
}
