use entity::prelude::*;
use test_utils::{builder::TestBuilder, error::TestError, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
};

/// A session without a stored account id fails the guard.
///
/// Expected: Err(UserNotInSession), mapped to 401.
#[tokio::test]
async fn missing_identity_is_rejected() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_table(Account).build().await?;
    let (db, session) = test.db_and_session().await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// A session pointing at a deleted account fails the guard.
///
/// Expected: Err(UserNotInDatabase) carrying the stale id.
#[tokio::test]
async fn stale_identity_is_rejected() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_table(Account).build().await?;
    let (db, session) = test.db_and_session().await?;

    AuthSession::new(session).set_account_id(4242).await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4242)))
    ));

    Ok(())
}

/// A regular account cannot pass the admin permission check.
///
/// Expected: Err(AccessDenied), mapped to 403.
#[tokio::test]
async fn non_admin_is_denied_admin_permission() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_table(Employee)
        .with_table(Account)
        .build()
        .await?;
    let (db, session) = test.db_and_session().await?;

    let account = factory::account::create_account(db).await?;
    AuthSession::new(session)
        .set_account_id(account.id)
        .await
        .unwrap();

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// An admin account passes and the guard hands back the loaded model.
///
/// Expected: Ok with the matching account.
#[tokio::test]
async fn admin_passes_and_returns_account() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_table(Employee)
        .with_table(Account)
        .build()
        .await?;
    let (db, session) = test.db_and_session().await?;

    let admin = factory::account::create_admin(db).await?;
    AuthSession::new(session)
        .set_account_id(admin.id)
        .await
        .unwrap();

    let loaded = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await
        .unwrap();

    assert_eq!(loaded.id, admin.id);
    assert!(loaded.admin);

    Ok(())
}
