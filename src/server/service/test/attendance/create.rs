use super::*;

/// Tests marking attendance for a lesson.
///
/// Expected: Ok(Vec) with a record per student
#[tokio::test]
async fn marks_students() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_assignment_with_dependencies(db).await?;
    let (_, anna) = factory::create_student(db, deps.group.group_id).await?;
    let (_, boris) = factory::create_student(db, deps.group.group_id).await?;
    let lesson = factory::create_schedule(
        db,
        deps.assignment.teaching_assignment_id,
        date(9, 2),
        1,
    )
    .await?;

    let records = AttendanceService::new(db)
        .create(MarkAttendanceParams {
            schedule_id: lesson.schedule_id,
            students: vec![
                mark(anna.student_id, AttendanceStatus::Present),
                mark(boris.student_id, AttendanceStatus::Absent),
            ],
        })
        .await?;

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].student_id, boris.student_id);
    assert_eq!(records[1].status, AttendanceStatus::Absent);

    Ok(())
}

/// Tests marking a student who already has a record for the lesson.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_existing_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_assignment_with_dependencies(db).await?;
    let (_, anna) = factory::create_student(db, deps.group.group_id).await?;
    let lesson = factory::create_schedule(
        db,
        deps.assignment.teaching_assignment_id,
        date(9, 2),
        1,
    )
    .await?;
    factory::create_attendance(db, lesson.schedule_id, anna.student_id, AttendanceStatus::Late)
        .await?;

    let result = AttendanceService::new(db)
        .create(MarkAttendanceParams {
            schedule_id: lesson.schedule_id,
            students: vec![mark(anna.student_id, AttendanceStatus::Present)],
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests malformed student lists.
///
/// Expected: Err(AppError::BadRequest) for an empty and a repeated list
#[tokio::test]
async fn rejects_empty_and_repeated_lists() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_assignment_with_dependencies(db).await?;
    let (_, anna) = factory::create_student(db, deps.group.group_id).await?;
    let lesson = factory::create_schedule(
        db,
        deps.assignment.teaching_assignment_id,
        date(9, 2),
        1,
    )
    .await?;

    let service = AttendanceService::new(db);

    let empty = service
        .create(MarkAttendanceParams {
            schedule_id: lesson.schedule_id,
            students: Vec::new(),
        })
        .await;
    assert!(matches!(empty, Err(AppError::BadRequest(_))));

    let repeated = service
        .create(MarkAttendanceParams {
            schedule_id: lesson.schedule_id,
            students: vec![
                mark(anna.student_id, AttendanceStatus::Present),
                mark(anna.student_id, AttendanceStatus::Absent),
            ],
        })
        .await;
    assert!(matches!(repeated, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests unknown lessons, unknown students and students of another group.
///
/// Expected: NotFound, NotFound, then BadRequest
#[tokio::test]
async fn rejects_invalid_references() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_assignment_with_dependencies(db).await?;
    let other_group = factory::create_group(db).await?;
    let (_, outsider) = factory::create_student(db, other_group.group_id).await?;
    let lesson = factory::create_schedule(
        db,
        deps.assignment.teaching_assignment_id,
        date(9, 2),
        1,
    )
    .await?;

    let service = AttendanceService::new(db);

    let unknown_lesson = service
        .create(MarkAttendanceParams {
            schedule_id: lesson.schedule_id + 10,
            students: vec![mark(outsider.student_id, AttendanceStatus::Present)],
        })
        .await;
    assert!(matches!(unknown_lesson, Err(AppError::NotFound(_))));

    let unknown_student = service
        .create(MarkAttendanceParams {
            schedule_id: lesson.schedule_id,
            students: vec![mark(9_999, AttendanceStatus::Present)],
        })
        .await;
    assert!(matches!(unknown_student, Err(AppError::NotFound(_))));

    let wrong_group = service
        .create(MarkAttendanceParams {
            schedule_id: lesson.schedule_id,
            students: vec![mark(outsider.student_id, AttendanceStatus::Present)],
        })
        .await;
    assert!(matches!(wrong_group, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a record insert that slips past the existing-record check, as when two
/// requests mark the same lesson at once.
///
/// Expected: the unique violation surfaces as Err(AppError::Conflict)
#[tokio::test]
async fn reports_racing_duplicate_as_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_assignment_with_dependencies(db).await?;
    let (_, student) = factory::create_student(db, deps.group.group_id).await?;
    let lesson = factory::create_schedule(
        db,
        deps.assignment.teaching_assignment_id,
        date(9, 2),
        1,
    )
    .await?;
    factory::create_attendance(db, lesson.schedule_id, student.student_id, AttendanceStatus::Present)
        .await?;

    let err = AttendanceRepository::new(db)
        .create_many(
            lesson.schedule_id,
            vec![mark(student.student_id, AttendanceStatus::Absent)],
        )
        .await
        .unwrap_err();

    let mapped = AppError::conflict_on_unique(err, || "duplicate".to_string());
    assert!(matches!(mapped, AppError::Conflict(_)));

    Ok(())
}
