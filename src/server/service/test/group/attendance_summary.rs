use super::*;

/// Tests the summary covers the whole roster with totals.
///
/// Expected: a row per student, mean percentage and status counts
#[tokio::test]
async fn summarizes_roster() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_assignment_with_dependencies(db).await?;
    let id = deps.assignment.teaching_assignment_id;
    let (_, anna) = factory::student::StudentFactory::new(db, deps.group.group_id)
        .surname("Antonova")
        .build()
        .await?;
    let (_, boris) = factory::student::StudentFactory::new(db, deps.group.group_id)
        .surname("Borisov")
        .build()
        .await?;
    let (_, idle) = factory::student::StudentFactory::new(db, deps.group.group_id)
        .surname("Vasiliev")
        .build()
        .await?;

    let monday = factory::create_schedule(db, id, date(9, 2), 1).await?;
    let tuesday = factory::create_schedule(db, id, date(9, 3), 2).await?;
    factory::create_attendance(db, monday.schedule_id, anna.student_id, AttendanceStatus::Present)
        .await?;
    factory::create_attendance(db, tuesday.schedule_id, anna.student_id, AttendanceStatus::Present)
        .await?;
    factory::create_attendance(db, monday.schedule_id, boris.student_id, AttendanceStatus::Absent)
        .await?;
    factory::create_attendance(db, tuesday.schedule_id, boris.student_id, AttendanceStatus::Late)
        .await?;

    let summary = GroupService::new(db)
        .attendance_summary(deps.group.group_id)
        .await?
        .unwrap();

    let ids: Vec<i32> = summary.students.iter().map(|s| s.student_id).collect();
    assert_eq!(ids, vec![anna.student_id, boris.student_id, idle.student_id]);

    let percentages: Vec<i32> = summary.students.iter().map(|s| s.percentage).collect();
    assert_eq!(percentages, vec![100, 0, 0]);
    assert_eq!(summary.average_attendance, 33);

    assert_eq!(summary.students[1].attendance.get(&date(9, 3)), Some(&AttendanceStatus::Late));
    assert!(summary.students[2].attendance.is_empty());

    assert_eq!(summary.totals.lessons, 2);
    assert_eq!(summary.totals.present, 2);
    assert_eq!(summary.totals.absent, 1);
    assert_eq!(summary.totals.late, 1);

    Ok(())
}

/// Tests records of students who left the group are not counted.
///
/// Expected: the transferred student's records are excluded
#[tokio::test]
async fn ignores_students_outside_roster() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_assignment_with_dependencies(db).await?;
    let other_group = factory::create_group(db).await?;
    let (_, stays) = factory::create_student(db, deps.group.group_id).await?;
    let (_, leaves) = factory::create_student(db, deps.group.group_id).await?;

    let lesson = factory::create_schedule(
        db,
        deps.assignment.teaching_assignment_id,
        date(9, 2),
        1,
    )
    .await?;
    factory::create_attendance(db, lesson.schedule_id, stays.student_id, AttendanceStatus::Present)
        .await?;
    factory::create_attendance(db, lesson.schedule_id, leaves.student_id, AttendanceStatus::Absent)
        .await?;

    crate::server::data::student::StudentRepository::new(db)
        .update(
            leaves.student_id,
            Default::default(),
            Some(other_group.group_id),
        )
        .await?;

    let service = GroupService::new(db);
    let summary = service
        .attendance_summary(deps.group.group_id)
        .await?
        .unwrap();

    assert_eq!(summary.students.len(), 1);
    assert_eq!(summary.average_attendance, 100);
    assert_eq!(summary.totals.absent, 0);

    let students = service
        .students_with_attendance(deps.group.group_id)
        .await?
        .unwrap();
    assert_eq!(students[0].student_id, stays.student_id);

    Ok(())
}
