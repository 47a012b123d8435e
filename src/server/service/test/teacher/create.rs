use super::*;

/// Tests creating a teacher with sign-in credentials.
///
/// Expected: Ok(Teacher) whose account holds the teacher role
#[tokio::test]
async fn creates_teacher_with_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = TeacherService::new(db)
        .create(CreateTeacherParams {
            login: Some("petrov".to_string()),
            password: Some("chalk".to_string()),
            ..teacher_params(" Petrov ", "Pavel")
        })
        .await?;

    assert_eq!(teacher.surname, "Petrov");

    let user = crate::server::data::user::UserRepository::new(db)
        .find_auth_user(teacher.teacher_id)
        .await?
        .unwrap();
    assert_eq!(user.login, "petrov");
    assert!(user.is_staff());
    assert!(!user.is_admin());

    Ok(())
}

/// Tests creating a teacher whose full name is already used.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_full_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TeacherService::new(db);
    service.create(teacher_params("Petrov", "Pavel")).await?;

    let result = service.create(teacher_params("Petrov", "Pavel")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests creating a teacher with a login that is already taken.
///
/// Expected: Err(AppError::Conflict) and no teacher created
#[tokio::test]
async fn rejects_taken_login() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::credentials::CredentialsFactory::new(db, user.user_id)
        .login("petrov")
        .build()
        .await?;

    let service = TeacherService::new(db);
    let result = service
        .create(CreateTeacherParams {
            login: Some("petrov".to_string()),
            password: Some("chalk".to_string()),
            ..teacher_params("Petrov", "Pavel")
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(service.get_all(None).await?.is_empty());

    Ok(())
}

/// Tests supplying a login without a password.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_login_without_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TeacherService::new(db)
        .create(CreateTeacherParams {
            login: Some("petrov".to_string()),
            ..teacher_params("Petrov", "Pavel")
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests creating a teacher with a blank name.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_blank_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TeacherService::new(db)
        .create(teacher_params("Petrov", "  "))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
