use super::*;

/// Tests creating a teacher with credentials.
///
/// Expected: Ok(Teacher) with user, teacher, credentials and role rows
#[tokio::test]
async fn creates_teacher_with_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = TeacherRepository::new(db)
        .create(CreateUserParams {
            surname: "Smirnova".to_string(),
            name: "Anna".to_string(),
            patronymic: "Petrovna".to_string(),
            credentials: Some(("smirnova".to_string(), "aa$bb".to_string())),
            role: Some(Role::Teacher),
        })
        .await?;

    assert_eq!(teacher.full_name(), "Smirnova Anna Petrovna");
    assert!(
        entity::prelude::Teacher::find_by_id(teacher.teacher_id)
            .one(db)
            .await?
            .is_some()
    );
    assert_eq!(entity::prelude::Credentials::find().count(db).await?, 1);
    assert_eq!(entity::prelude::UserRole::find().count(db).await?, 1);

    Ok(())
}

/// Tests a plain user is not reported as a teacher.
///
/// Expected: exists is false and find_by_id is None
#[tokio::test]
async fn plain_user_is_not_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = TeacherRepository::new(db);

    assert!(!repo.exists(user.user_id).await?);
    assert!(repo.find_by_id(user.user_id).await?.is_none());

    Ok(())
}
