use super::*;

/// Tests lessons are ordered by date, then lesson number.
///
/// Expected: Ok(Vec) in chronological order, filtered by assignment
#[tokio::test]
async fn orders_by_date_and_lesson_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_assignment_with_dependencies(db).await?;
    let other = factory::helpers::create_assignment_with_dependencies(db).await?;
    let id = deps.assignment.teaching_assignment_id;

    let late = factory::create_schedule(db, id, date(2024, 9, 3), 1).await?;
    let second = factory::create_schedule(db, id, date(2024, 9, 2), 3).await?;
    let first = factory::create_schedule(db, id, date(2024, 9, 2), 1).await?;
    factory::create_schedule(db, other.assignment.teaching_assignment_id, date(2024, 9, 1), 1)
        .await?;

    let repo = ScheduleRepository::new(db);

    let lessons = repo.get_all(Some(id)).await?;
    let ids: Vec<i32> = lessons.iter().map(|s| s.schedule_id).collect();
    assert_eq!(
        ids,
        vec![first.schedule_id, second.schedule_id, late.schedule_id]
    );
    assert!(lessons
        .iter()
        .all(|s| s.assignment.subject_name == deps.subject.name));

    assert_eq!(repo.get_all(None).await?.len(), 4);

    Ok(())
}

/// Tests restricting a group's lessons to a date range.
///
/// Expected: only lessons of the group inside the inclusive range
#[tokio::test]
async fn restricts_group_lessons_to_period() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_assignment_with_dependencies(db).await?;
    let other = factory::helpers::create_assignment_with_dependencies(db).await?;
    let id = deps.assignment.teaching_assignment_id;

    factory::create_schedule(db, id, date(2024, 8, 31), 1).await?;
    let start = factory::create_schedule(db, id, date(2024, 9, 1), 1).await?;
    let end = factory::create_schedule(db, id, date(2024, 9, 30), 4).await?;
    factory::create_schedule(db, id, date(2024, 10, 1), 1).await?;
    factory::create_schedule(db, other.assignment.teaching_assignment_id, date(2024, 9, 10), 1)
        .await?;

    let repo = ScheduleRepository::new(db);

    let september = repo
        .get_by_group(
            deps.group.group_id,
            Some(SchedulePeriod {
                from: date(2024, 9, 1),
                to: date(2024, 9, 30),
            }),
        )
        .await?;
    let ids: Vec<i32> = september.iter().map(|s| s.schedule_id).collect();
    assert_eq!(ids, vec![start.schedule_id, end.schedule_id]);

    assert_eq!(repo.get_by_group(deps.group.group_id, None).await?.len(), 4);

    Ok(())
}
