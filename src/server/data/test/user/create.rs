use super::*;

/// Tests creating a user without credentials.
///
/// Expected: Ok with only the user row written
#[tokio::test]
async fn creates_user_without_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(user_params("Ivanov", "Ivan")).await?;

    assert_eq!(user.surname, "Ivanov");
    assert_eq!(user.name, "Ivan");
    assert_eq!(entity::prelude::Credentials::find().count(db).await?, 0);
    assert_eq!(entity::prelude::UserRole::find().count(db).await?, 0);

    Ok(())
}

/// Tests creating a user with credentials and a role.
///
/// Expected: Ok with credentials and role rows linked to the user
#[tokio::test]
async fn creates_user_with_credentials_and_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            credentials: Some(("ivanov".to_string(), "aa$bb".to_string())),
            role: Some(Role::Teacher),
            ..user_params("Ivanov", "Ivan")
        })
        .await?;

    let credentials = repo.find_credentials_by_login("ivanov").await?.unwrap();
    assert_eq!(credentials.user_id, user.user_id);
    assert_eq!(credentials.password_hash, "aa$bb");
    assert!(repo.login_exists("ivanov").await?);
    assert!(!repo.login_exists("petrov").await?);

    Ok(())
}

/// Tests a duplicate login rolls back the whole user.
///
/// Expected: Err(DbErr) and no second user row
#[tokio::test]
async fn rolls_back_on_duplicate_login() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(CreateUserParams {
        credentials: Some(("taken".to_string(), "aa$bb".to_string())),
        ..user_params("First", "User")
    })
    .await?;

    let result = repo
        .create(CreateUserParams {
            credentials: Some(("taken".to_string(), "cc$dd".to_string())),
            ..user_params("Second", "User")
        })
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}
