use super::*;

/// Tests updating a lesson without moving it.
///
/// Expected: Ok(Some), the lesson does not conflict with itself
#[tokio::test]
async fn keeps_own_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_assignment_with_dependencies(db).await?;
    let lesson = factory::create_schedule(
        db,
        deps.assignment.teaching_assignment_id,
        date(9, 2),
        1,
    )
    .await?;

    let updated = ScheduleService::new(db)
        .update(UpdateScheduleParams {
            schedule_id: lesson.schedule_id,
            teaching_assignment_id: None,
            date: Some(date(9, 2)),
            lesson_number: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.schedule_id, lesson.schedule_id);

    Ok(())
}

/// Tests moving a lesson onto an occupied slot of its group.
///
/// Expected: Err(AppError::Conflict) and the lesson stays put
#[tokio::test]
async fn rejects_move_onto_occupied_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_assignment_with_dependencies(db).await?;
    let id = deps.assignment.teaching_assignment_id;
    factory::create_schedule(db, id, date(9, 2), 1).await?;
    let lesson = factory::create_schedule(db, id, date(9, 2), 2).await?;

    let service = ScheduleService::new(db);
    let result = service
        .update(UpdateScheduleParams {
            schedule_id: lesson.schedule_id,
            teaching_assignment_id: None,
            date: None,
            lesson_number: Some(1),
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    let unchanged = service.get_by_id(lesson.schedule_id).await?.unwrap();
    assert_eq!(unchanged.lesson_number, 2);

    Ok(())
}

/// Tests reassigning a lesson with attendance to another group's assignment,
/// and to another assignment of the same group.
///
/// Expected: Err(AppError::Conflict) across groups, Ok(Some) within the group
#[tokio::test]
async fn keeps_marked_lesson_within_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_assignment_with_dependencies(db).await?;
    let other = factory::helpers::create_assignment_with_dependencies(db).await?;
    let subject = factory::create_subject(db).await?;
    let sibling = factory::create_teaching_assignment(
        db,
        deps.teacher.teacher_id,
        deps.group.group_id,
        subject.subject_id,
    )
    .await?;
    let (_, student) = factory::create_student(db, deps.group.group_id).await?;
    let lesson = factory::create_schedule(
        db,
        deps.assignment.teaching_assignment_id,
        date(9, 2),
        1,
    )
    .await?;
    factory::create_attendance(db, lesson.schedule_id, student.student_id, AttendanceStatus::Absent)
        .await?;

    let service = ScheduleService::new(db);

    let across = service
        .update(UpdateScheduleParams {
            schedule_id: lesson.schedule_id,
            teaching_assignment_id: Some(other.assignment.teaching_assignment_id),
            date: None,
            lesson_number: None,
        })
        .await;
    assert!(matches!(across, Err(AppError::Conflict(_))));

    let within = service
        .update(UpdateScheduleParams {
            schedule_id: lesson.schedule_id,
            teaching_assignment_id: Some(sibling.teaching_assignment_id),
            date: None,
            lesson_number: None,
        })
        .await?
        .unwrap();
    assert_eq!(
        within.assignment.teaching_assignment_id,
        sibling.teaching_assignment_id
    );

    Ok(())
}

/// Tests updating an unknown lesson.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_lesson() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = ScheduleService::new(db)
        .update(UpdateScheduleParams {
            schedule_id: 12,
            teaching_assignment_id: None,
            date: None,
            lesson_number: Some(3),
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
