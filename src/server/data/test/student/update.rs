use super::*;

/// Tests renaming a student and moving them to another group.
///
/// Expected: Ok(Some) with the new group id and surname stored
#[tokio::test]
async fn renames_and_moves_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_group(db).await?;
    let second = factory::create_group(db).await?;
    let (_, student) = factory::create_student(db, first.group_id).await?;

    let repo = StudentRepository::new(db);
    let moved = repo
        .update(
            student.student_id,
            NameChange {
                surname: Some("Volkova".to_string()),
                ..Default::default()
            },
            Some(second.group_id),
        )
        .await?
        .unwrap();
    assert_eq!(moved.group_id, second.group_id);

    let resolved = repo.find_by_id(student.student_id).await?.unwrap();
    assert_eq!(resolved.surname, "Volkova");

    Ok(())
}

/// Tests a move to a group that does not exist.
///
/// Expected: Err(DbErr) and the rename is rolled back with it
#[tokio::test]
async fn rolls_back_rename_when_move_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let (user, student) = factory::create_student(db, group.group_id).await?;

    let repo = StudentRepository::new(db);
    let result = repo
        .update(
            student.student_id,
            NameChange {
                surname: Some("Volkova".to_string()),
                ..Default::default()
            },
            Some(9_999),
        )
        .await;
    assert!(result.is_err());

    let unchanged = repo.find_by_id(student.student_id).await?.unwrap();
    assert_eq!(unchanged.surname, user.surname);
    assert_eq!(unchanged.group_id, group.group_id);

    Ok(())
}

/// Tests updating an unknown student.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_academic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = StudentRepository::new(db)
        .update(404, NameChange::default(), None)
        .await?;
    assert!(updated.is_none());

    Ok(())
}
