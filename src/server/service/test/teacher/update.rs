use super::*;

/// Tests renaming a teacher while keeping other name parts.
///
/// Expected: Ok(Some) with the new surname and the old name
#[tokio::test]
async fn updates_given_name_parts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TeacherService::new(db);
    let teacher = service.create(teacher_params("Petrov", "Pavel")).await?;

    let updated = service
        .update(UpdateTeacherParams {
            teacher_id: teacher.teacher_id,
            surname: Some("Petrova".to_string()),
            name: None,
            patronymic: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.surname, "Petrova");
    assert_eq!(updated.name, "Pavel");

    Ok(())
}

/// Tests a rename that collides with another user's full name.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_rename_to_existing_full_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TeacherService::new(db);
    service.create(teacher_params("Sidorov", "Pavel")).await?;
    let teacher = service.create(teacher_params("Petrov", "Pavel")).await?;

    let result = service
        .update(UpdateTeacherParams {
            teacher_id: teacher.teacher_id,
            surname: Some("Sidorov".to_string()),
            name: None,
            patronymic: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests updating and deleting an unknown teacher.
///
/// Expected: Ok(None) for update, Ok(false) for delete
#[tokio::test]
async fn reports_unknown_teacher() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TeacherService::new(db);

    let updated = service
        .update(UpdateTeacherParams {
            teacher_id: 42,
            surname: Some("Petrov".to_string()),
            name: None,
            patronymic: None,
        })
        .await?;

    assert!(updated.is_none());
    assert!(!service.delete(42).await?);

    Ok(())
}
