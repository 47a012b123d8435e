use super::*;

/// Tests enrolling a student in an existing group.
///
/// Expected: Ok(Student) carrying the group code
#[tokio::test]
async fn enrolls_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::group::GroupFactory::new(db)
        .group_code("FM-11")
        .build()
        .await?;

    let student = StudentService::new(db)
        .create(student_params("Lebedeva", group.group_id))
        .await?;

    assert_eq!(student.group_code, "FM-11");
    assert_eq!(student.full_name(), "Lebedeva Olga");

    Ok(())
}

/// Tests enrolling a student in an unknown group.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StudentService::new(db)
        .create(student_params("Lebedeva", 99))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests a student sharing a teacher's full name.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_name_used_by_any_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    factory::teacher::TeacherFactory::new(db)
        .surname("Lebedeva")
        .name("Olga")
        .patronymic("")
        .build()
        .await?;

    let result = StudentService::new(db)
        .create(student_params("Lebedeva", group.group_id))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
