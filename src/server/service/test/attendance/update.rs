use super::*;

/// Tests correcting statuses of a lesson.
///
/// Expected: existing records change, missing ones are created
#[tokio::test]
async fn upserts_statuses() -> Result<(), AppError> {
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
    let existing = factory::create_attendance(
        db,
        lesson.schedule_id,
        anna.student_id,
        AttendanceStatus::Absent,
    )
    .await?;

    let records = AttendanceService::new(db)
        .update(MarkAttendanceParams {
            schedule_id: lesson.schedule_id,
            students: vec![
                mark(anna.student_id, AttendanceStatus::Late),
                mark(boris.student_id, AttendanceStatus::Present),
            ],
        })
        .await?;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].attendance_id, existing.attendance_id);
    assert_eq!(records[0].status, AttendanceStatus::Late);
    assert_eq!(records[1].status, AttendanceStatus::Present);

    Ok(())
}

/// Tests correcting a lesson with a student from another group.
///
/// Expected: Err(AppError::BadRequest) and nothing written
#[tokio::test]
async fn rejects_student_of_other_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_assignment_with_dependencies(db).await?;
    let other_group = factory::create_group(db).await?;
    let (_, anna) = factory::create_student(db, deps.group.group_id).await?;
    let (_, outsider) = factory::create_student(db, other_group.group_id).await?;
    let lesson = factory::create_schedule(
        db,
        deps.assignment.teaching_assignment_id,
        date(9, 2),
        1,
    )
    .await?;

    let service = AttendanceService::new(db);
    let result = service
        .update(MarkAttendanceParams {
            schedule_id: lesson.schedule_id,
            students: vec![
                mark(anna.student_id, AttendanceStatus::Present),
                mark(outsider.student_id, AttendanceStatus::Present),
            ],
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(service
        .get_journals(JournalFilter::default())
        .await?
        .is_empty());

    Ok(())
}
