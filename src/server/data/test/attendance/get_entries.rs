use super::*;

/// Tests filtering records by group and by teaching assignment.
///
/// Expected: entries joined with their lesson date and assignment
#[tokio::test]
async fn filters_by_group_and_assignment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_assignment_with_dependencies(db).await?;
    let other = factory::helpers::create_assignment_with_dependencies(db).await?;
    let (_, student) = factory::create_student(db, deps.group.group_id).await?;
    let (_, outsider) = factory::create_student(db, other.group.group_id).await?;

    let lesson = factory::create_schedule(
        db,
        deps.assignment.teaching_assignment_id,
        date(2024, 9, 2),
        3,
    )
    .await?;
    let other_lesson = factory::create_schedule(
        db,
        other.assignment.teaching_assignment_id,
        date(2024, 9, 2),
        1,
    )
    .await?;
    factory::create_attendance(db, lesson.schedule_id, student.student_id, AttendanceStatus::Late)
        .await?;
    factory::create_attendance(
        db,
        other_lesson.schedule_id,
        outsider.student_id,
        AttendanceStatus::Present,
    )
    .await?;

    let repo = AttendanceRepository::new(db);

    let by_group = repo
        .get_entries(JournalFilter {
            group_id: Some(deps.group.group_id),
            teaching_assignment_id: None,
        })
        .await?;
    assert_eq!(by_group.len(), 1);
    assert_eq!(by_group[0].student_id, student.student_id);
    assert_eq!(by_group[0].date, date(2024, 9, 2));
    assert_eq!(by_group[0].lesson_number, 3);
    assert_eq!(
        by_group[0].teaching_assignment_id,
        deps.assignment.teaching_assignment_id
    );

    let by_assignment = repo
        .get_entries(JournalFilter {
            group_id: None,
            teaching_assignment_id: Some(other.assignment.teaching_assignment_id),
        })
        .await?;
    assert_eq!(by_assignment.len(), 1);
    assert_eq!(by_assignment[0].student_id, outsider.student_id);

    assert_eq!(repo.get_entries(JournalFilter::default()).await?.len(), 2);

    Ok(())
}

/// Tests reading a journal for an assignment with more lessons than SQLite
/// accepts as bound parameters in one statement.
///
/// Expected: Ok with the records of the assignment's lessons
#[tokio::test]
async fn reads_assignment_with_many_lessons() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_assignment_with_dependencies(db).await?;
    let (_, student) = factory::create_student(db, deps.group.group_id).await?;
    let id = deps.assignment.teaching_assignment_id;

    let first_day = date(2000, 1, 1);
    let lessons: Vec<entity::schedule::ActiveModel> = (0..33_000i64)
        .map(|n| entity::schedule::ActiveModel {
            teaching_assignment_id: ActiveValue::Set(id),
            date: ActiveValue::Set(first_day + chrono::Days::new((n / 8) as u64)),
            lesson_number: ActiveValue::Set((n % 8) as i32 + 1),
            ..Default::default()
        })
        .collect();
    for chunk in lessons.chunks(2_000) {
        entity::prelude::Schedule::insert_many(chunk.to_vec())
            .exec(db)
            .await?;
    }

    let first = factory::create_schedule(db, id, date(2024, 9, 2), 1).await?;
    let second = factory::create_schedule(db, id, date(2024, 9, 3), 1).await?;
    factory::create_attendance(db, first.schedule_id, student.student_id, AttendanceStatus::Present)
        .await?;
    factory::create_attendance(db, second.schedule_id, student.student_id, AttendanceStatus::Absent)
        .await?;

    let entries = AttendanceRepository::new(db)
        .get_entries(JournalFilter {
            group_id: Some(deps.group.group_id),
            teaching_assignment_id: Some(id),
        })
        .await?;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].schedule_id, first.schedule_id);
    assert_eq!(entries[1].status, AttendanceStatus::Absent);

    Ok(())
}

/// Tests detecting records per lesson and per assignment.
///
/// Expected: true only where a record exists
#[tokio::test]
async fn detects_existing_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_assignment_with_dependencies(db).await?;
    let other = factory::helpers::create_assignment_with_dependencies(db).await?;
    let (_, student) = factory::create_student(db, deps.group.group_id).await?;
    let id = deps.assignment.teaching_assignment_id;

    let marked = factory::create_schedule(db, id, date(2024, 9, 2), 1).await?;
    let empty = factory::create_schedule(db, id, date(2024, 9, 3), 1).await?;
    factory::create_attendance(db, marked.schedule_id, student.student_id, AttendanceStatus::Late)
        .await?;

    let repo = AttendanceRepository::new(db);

    assert!(repo.exists_for_schedule(marked.schedule_id).await?);
    assert!(!repo.exists_for_schedule(empty.schedule_id).await?);
    assert!(repo.exists_for_assignment(id).await?);
    assert!(
        !repo
            .exists_for_assignment(other.assignment.teaching_assignment_id)
            .await?
    );

    Ok(())
}
