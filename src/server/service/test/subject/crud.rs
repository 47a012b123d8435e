use super::*;

/// Tests creating and renaming a subject with trimmed names.
///
/// Expected: Ok with the trimmed name after each step
#[tokio::test]
async fn creates_and_renames_subject() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SubjectService::new(db);
    let subject = service
        .create(CreateSubjectParams {
            name: " Geometry ".to_string(),
        })
        .await?;
    assert_eq!(subject.name, "Geometry");

    let renamed = service
        .update(UpdateSubjectParams {
            subject_id: subject.subject_id,
            name: Some("Analytic Geometry".to_string()),
        })
        .await?
        .unwrap();
    assert_eq!(renamed.name, "Analytic Geometry");

    Ok(())
}

/// Tests blank subject names.
///
/// Expected: Err(AppError::BadRequest) on create and update
#[tokio::test]
async fn rejects_blank_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let subject = factory::create_subject(db).await?;
    let service = SubjectService::new(db);

    let created = service
        .create(CreateSubjectParams {
            name: "  ".to_string(),
        })
        .await;
    assert!(matches!(created, Err(AppError::BadRequest(_))));

    let updated = service
        .update(UpdateSubjectParams {
            subject_id: subject.subject_id,
            name: Some(String::new()),
        })
        .await;
    assert!(matches!(updated, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests deleting a subject drops the assignments teaching it.
///
/// Expected: Ok(true), then no assignments and Ok(false) on repeat
#[tokio::test]
async fn deletes_subject_with_assignments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_assignment_with_dependencies(db).await?;
    let service = SubjectService::new(db);

    assert!(service.delete(deps.subject.subject_id).await?);
    assert!(!service.delete(deps.subject.subject_id).await?);
    assert!(service.get_by_id(deps.subject.subject_id).await?.is_none());

    let assignments = crate::server::service::teaching_assignment::TeachingAssignmentService::new(db)
        .get_all(Default::default())
        .await?;
    assert!(assignments.is_empty());

    Ok(())
}
