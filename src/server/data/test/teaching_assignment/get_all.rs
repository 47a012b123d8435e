use super::*;

/// Tests filtering assignments by teacher and by group.
///
/// Expected: Ok(Vec) with only matching assignments, resolved with names
#[tokio::test]
async fn filters_by_teacher_and_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::helpers::create_assignment_with_dependencies(db).await?;
    let second = factory::helpers::create_assignment_with_dependencies(db).await?;
    let shared_group = factory::create_teaching_assignment(
        db,
        second.teacher.teacher_id,
        first.group.group_id,
        second.subject.subject_id,
    )
    .await?;

    let repo = TeachingAssignmentRepository::new(db);

    let all = repo.get_all(TeachingAssignmentFilter::default()).await?;
    assert_eq!(all.len(), 3);

    let by_group = repo
        .get_all(TeachingAssignmentFilter {
            teacher_id: None,
            group_id: Some(first.group.group_id),
        })
        .await?;
    let ids: Vec<i32> = by_group.iter().map(|a| a.teaching_assignment_id).collect();
    assert_eq!(
        ids,
        vec![
            first.assignment.teaching_assignment_id,
            shared_group.teaching_assignment_id
        ]
    );
    assert!(by_group.iter().all(|a| a.group_code == first.group.group_code));

    let by_both = repo
        .get_all(TeachingAssignmentFilter {
            teacher_id: Some(second.teacher.teacher_id),
            group_id: Some(first.group.group_id),
        })
        .await?;
    assert_eq!(by_both.len(), 1);
    assert_eq!(by_both[0].subject_name, second.subject.name);
    assert_eq!(by_both[0].teacher.teacher_id, second.teacher.teacher_id);

    Ok(())
}

/// Tests resolving assignments by id.
///
/// Expected: map keyed by id, unknown ids skipped
#[tokio::test]
async fn resolves_assignments_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deps = factory::helpers::create_assignment_with_dependencies(db).await?;
    let id = deps.assignment.teaching_assignment_id;

    let resolved = TeachingAssignmentRepository::new(db)
        .get_by_ids(vec![id, id + 100])
        .await?;

    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[&id].group_id, deps.group.group_id);

    Ok(())
}
