use super::*;

/// Tests loading a user with credentials and roles.
///
/// Expected: Ok(Some(AuthUser)) with roles ordered admin first
#[tokio::test]
async fn loads_user_with_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::credentials::CredentialsFactory::new(db, user.user_id)
        .login("admin")
        .build()
        .await?;
    factory::credentials::create_user_role(db, user.user_id, Role::Teacher).await?;
    factory::credentials::create_user_role(db, user.user_id, Role::Admin).await?;

    let auth_user = UserRepository::new(db)
        .find_auth_user(user.user_id)
        .await?
        .unwrap();

    assert_eq!(auth_user.login, "admin");
    assert_eq!(auth_user.roles, vec![Role::Admin, Role::Teacher]);
    assert!(auth_user.is_admin());
    assert!(auth_user.is_staff());

    Ok(())
}

/// Tests a user without credentials cannot be loaded as an auth user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = UserRepository::new(db).find_auth_user(user.user_id).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests detecting whether an admin exists.
///
/// Expected: false before the admin role is granted, true after
#[tokio::test]
async fn detects_admin_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = factory::create_user(db).await?;
    factory::credentials::create_user_role(db, user.user_id, Role::Teacher).await?;

    assert!(!repo.admin_exists().await?);

    factory::credentials::create_user_role(db, user.user_id, Role::Admin).await?;

    assert!(repo.admin_exists().await?);

    Ok(())
}
