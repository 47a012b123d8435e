use super::*;

/// Tests an admin passes the admin permission check.
///
/// Expected: Ok(AuthUser) carrying the admin role
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = signed_in_user(db, "admin-token", &[Role::Admin]).await?;

    let headers = bearer("admin-token");
    let auth_user = AuthGuard::new(db, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(auth_user.user_id, user.user_id);
    assert!(auth_user.is_admin());

    Ok(())
}

/// Tests a teacher is denied the admin permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_admin_access_to_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = signed_in_user(db, "teacher-token", &[Role::Teacher]).await?;

    let headers = bearer("teacher-token");
    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, user.user_id);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests teachers and admins both hold the staff permission.
///
/// Expected: Ok(AuthUser) for both
#[tokio::test]
async fn grants_staff_access_to_teacher_and_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    signed_in_user(db, "teacher-token", &[Role::Teacher]).await?;
    signed_in_user(db, "admin-token", &[Role::Admin]).await?;

    for token in ["teacher-token", "admin-token"] {
        let headers = bearer(token);
        let result = AuthGuard::new(db, &headers)
            .require(&[Permission::Staff])
            .await;
        assert!(result.is_ok(), "{token} should pass the staff check");
    }

    Ok(())
}

/// Tests a user without roles is denied the staff permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_staff_access_without_roles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    signed_in_user(db, "plain-token", &[]).await?;

    let headers = bearer("plain-token");
    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::Staff])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests an empty permission list only requires a valid token.
///
/// Expected: Ok(AuthUser)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = signed_in_user(db, "plain-token", &[]).await?;

    let headers = bearer("plain-token");
    let auth_user = AuthGuard::new(db, &headers).require(&[]).await?;

    assert_eq!(auth_user.user_id, user.user_id);
    assert!(auth_user.roles.is_empty());

    Ok(())
}

/// Tests a request without an Authorization header is rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn denies_access_without_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests an unknown token is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn denies_access_with_unknown_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    signed_in_user(db, "real-token", &[Role::Admin]).await?;

    let headers = bearer("forged-token");
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests an expired session no longer authenticates.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn denies_access_with_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::credentials::CredentialsFactory::new(db, user.user_id)
        .build()
        .await?;
    factory::create_session(
        db,
        user.user_id,
        hash_token("old-token"),
        Duration::hours(-1),
    )
    .await?;

    let headers = bearer("old-token");
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}
