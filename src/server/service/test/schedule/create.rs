use super::*;

/// Tests scheduling a lesson in a free slot.
///
/// Expected: Ok(ScheduleEntry) resolved with its assignment
#[tokio::test]
async fn schedules_lesson() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_assignment_with_dependencies(db).await?;

    let entry = ScheduleService::new(db)
        .create(CreateScheduleParams {
            teaching_assignment_id: deps.assignment.teaching_assignment_id,
            date: date(9, 2),
            lesson_number: 2,
        })
        .await?;

    assert_eq!(entry.date, date(9, 2));
    assert_eq!(entry.lesson_number, 2);
    assert_eq!(entry.assignment.group_id, deps.group.group_id);
    assert_eq!(entry.assignment.subject_name, deps.subject.name);

    Ok(())
}

/// Tests two assignments of one group competing for a slot.
///
/// Expected: Err(AppError::Conflict) for the second lesson
#[tokio::test]
async fn rejects_occupied_group_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_assignment_with_dependencies(db).await?;
    let other_subject = factory::create_subject(db).await?;
    let other = factory::create_teaching_assignment(
        db,
        deps.teacher.teacher_id,
        deps.group.group_id,
        other_subject.subject_id,
    )
    .await?;

    let service = ScheduleService::new(db);
    service
        .create(CreateScheduleParams {
            teaching_assignment_id: deps.assignment.teaching_assignment_id,
            date: date(9, 2),
            lesson_number: 1,
        })
        .await?;

    let result = service
        .create(CreateScheduleParams {
            teaching_assignment_id: other.teaching_assignment_id,
            date: date(9, 2),
            lesson_number: 1,
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests another group may use the same slot.
///
/// Expected: Ok for both lessons
#[tokio::test]
async fn allows_same_slot_for_other_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::helpers::create_assignment_with_dependencies(db).await?;
    let second = factory::helpers::create_assignment_with_dependencies(db).await?;

    let service = ScheduleService::new(db);
    for assignment in [&first.assignment, &second.assignment] {
        service
            .create(CreateScheduleParams {
                teaching_assignment_id: assignment.teaching_assignment_id,
                date: date(9, 2),
                lesson_number: 1,
            })
            .await?;
    }

    assert_eq!(service.get_all(None).await?.len(), 2);

    Ok(())
}

/// Tests an out-of-range lesson number and an unknown assignment.
///
/// Expected: Err(AppError::BadRequest) then Err(AppError::NotFound)
#[tokio::test]
async fn rejects_invalid_lesson() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_assignment_with_dependencies(db).await?;
    let service = ScheduleService::new(db);

    let lesson = service
        .create(CreateScheduleParams {
            teaching_assignment_id: deps.assignment.teaching_assignment_id,
            date: date(9, 2),
            lesson_number: 13,
        })
        .await;
    assert!(matches!(lesson, Err(AppError::BadRequest(_))));

    let assignment = service
        .create(CreateScheduleParams {
            teaching_assignment_id: 404,
            date: date(9, 2),
            lesson_number: 1,
        })
        .await;
    assert!(matches!(assignment, Err(AppError::NotFound(_))));

    Ok(())
}
