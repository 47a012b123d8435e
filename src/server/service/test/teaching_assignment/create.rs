use super::*;

/// Tests assigning a teacher to a group and subject.
///
/// Expected: Ok(TeachingAssignment) resolved with names and code
#[tokio::test]
async fn creates_assignment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher) = factory::create_teacher(db).await?;
    let group = factory::create_group(db).await?;
    let subject = factory::subject::create_subject_named(db, "Algebra").await?;

    let assignment = TeachingAssignmentService::new(db)
        .create(CreateTeachingAssignmentParams {
            teacher_id: teacher.teacher_id,
            group_id: group.group_id,
            subject_id: subject.subject_id,
            semester: 3,
        })
        .await?;

    assert_eq!(assignment.semester, 3);
    assert_eq!(assignment.teacher.teacher_id, teacher.teacher_id);
    assert_eq!(assignment.group_code, group.group_code);
    assert_eq!(assignment.subject_name, "Algebra");

    Ok(())
}

/// Tests invalid ids and semesters are rejected before lookups.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_invalid_values() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TeachingAssignmentService::new(db);

    let zero_id = service
        .create(CreateTeachingAssignmentParams {
            teacher_id: 0,
            group_id: 1,
            subject_id: 1,
            semester: 1,
        })
        .await;
    assert!(matches!(zero_id, Err(AppError::BadRequest(_))));

    let semester = service
        .create(CreateTeachingAssignmentParams {
            teacher_id: 1,
            group_id: 1,
            subject_id: 1,
            semester: 13,
        })
        .await;
    assert!(matches!(semester, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests unknown references.
///
/// Expected: Err(AppError::NotFound) for each missing entity
#[tokio::test]
async fn rejects_unknown_references() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher) = factory::create_teacher(db).await?;
    let group = factory::create_group(db).await?;
    let subject = factory::create_subject(db).await?;
    let params = CreateTeachingAssignmentParams {
        teacher_id: teacher.teacher_id,
        group_id: group.group_id,
        subject_id: subject.subject_id,
        semester: 1,
    };

    let service = TeachingAssignmentService::new(db);

    for missing in [
        CreateTeachingAssignmentParams {
            teacher_id: 900,
            ..params
        },
        CreateTeachingAssignmentParams {
            group_id: 900,
            ..params
        },
        CreateTeachingAssignmentParams {
            subject_id: 900,
            ..params
        },
    ] {
        let result = service.create(missing).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    Ok(())
}

/// Tests creating the same assignment twice.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_assignment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_assignment_with_dependencies(db).await?;

    let result = TeachingAssignmentService::new(db)
        .create(CreateTeachingAssignmentParams {
            teacher_id: deps.teacher.teacher_id,
            group_id: deps.group.group_id,
            subject_id: deps.subject.subject_id,
            semester: deps.assignment.semester,
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
