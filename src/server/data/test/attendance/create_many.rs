use super::*;

/// Tests recording statuses for several students of a lesson.
///
/// Expected: Ok(Vec) with one record per student in request order
#[tokio::test]
async fn records_each_student() -> Result<(), DbErr> {
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
        date(2024, 9, 2),
        1,
    )
    .await?;

    let created = AttendanceRepository::new(db)
        .create_many(
            lesson.schedule_id,
            vec![
                StudentStatus {
                    student_id: anna.student_id,
                    status: AttendanceStatus::Present,
                },
                StudentStatus {
                    student_id: boris.student_id,
                    status: AttendanceStatus::Late,
                },
            ],
        )
        .await?;

    assert_eq!(created.len(), 2);
    assert_eq!(created[0].student_id, anna.student_id);
    assert_eq!(created[0].status, AttendanceStatus::Present);
    assert_eq!(created[1].status, AttendanceStatus::Late);
    assert!(created.iter().all(|r| r.schedule_id == lesson.schedule_id));

    Ok(())
}

/// Tests a second record for the same lesson and student is rejected.
///
/// Expected: Err and no partial insert
#[tokio::test]
async fn rejects_duplicate_record() -> Result<(), DbErr> {
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
        date(2024, 9, 2),
        1,
    )
    .await?;
    factory::create_attendance(db, lesson.schedule_id, anna.student_id, AttendanceStatus::Absent)
        .await?;

    let repo = AttendanceRepository::new(db);
    let result = repo
        .create_many(
            lesson.schedule_id,
            vec![
                StudentStatus {
                    student_id: boris.student_id,
                    status: AttendanceStatus::Present,
                },
                StudentStatus {
                    student_id: anna.student_id,
                    status: AttendanceStatus::Present,
                },
            ],
        )
        .await;

    assert!(result.is_err());
    let stored = repo
        .find_for_students(lesson.schedule_id, vec![anna.student_id, boris.student_id])
        .await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].status, AttendanceStatus::Absent);

    Ok(())
}
