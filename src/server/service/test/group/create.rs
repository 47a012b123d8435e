use super::*;

/// Tests creating a group with a used code.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GroupService::new(db);
    let group = service.create(group_params("IVT-21")).await?;

    assert!(group.students.is_empty());

    let result = service.create(group_params("IVT-21")).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests creating a group with out-of-range values.
///
/// Expected: Err(AppError::BadRequest) for course, year and blank code
#[tokio::test]
async fn rejects_invalid_values() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GroupService::new(db);

    let course = service
        .create(CreateGroupParams {
            course: 7,
            ..group_params("IVT-21")
        })
        .await;
    assert!(matches!(course, Err(AppError::BadRequest(_))));

    let year = service
        .create(CreateGroupParams {
            year_of_entry: 1999,
            ..group_params("IVT-21")
        })
        .await;
    assert!(matches!(year, Err(AppError::BadRequest(_))));

    let code = service.create(group_params("")).await;
    assert!(matches!(code, Err(AppError::BadRequest(_))));

    assert!(service.get_all().await?.is_empty());

    Ok(())
}

/// Tests a group may keep its own code when updated.
///
/// Expected: Ok(Some) for its own code, Err(AppError::Conflict) for another group's
#[tokio::test]
async fn update_checks_code_against_other_groups() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GroupService::new(db);
    service.create(group_params("IVT-21")).await?;
    let group = service.create(group_params("IVT-22")).await?;

    let params = |code: &str| UpdateGroupParams {
        group_id: group.group_id,
        group_code: Some(code.to_string()),
        name: None,
        specialty: None,
        course: Some(2),
        year_of_entry: None,
    };

    let kept = service.update(params("IVT-22")).await?.unwrap();
    assert_eq!(kept.course, 2);

    let taken = service.update(params("IVT-21")).await;
    assert!(matches!(taken, Err(AppError::Conflict(_))));

    Ok(())
}
