use super::*;

/// Tests a partial update.
///
/// Only the provided fields change; everything else keeps its stored value.
///
/// Expected: Ok(Some) with belt and degrees updated, name unchanged
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_student_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::StudentFactory::new(db)
        .name("Carlos")
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let updated = repo
        .update(
            &student.uid,
            UpdateStudentParam {
                belt: Some(Belt::Azul),
                degrees: Some(2),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Carlos");
    assert_eq!(updated.belt, Belt::Azul);
    assert_eq!(updated.degrees, 2);

    Ok(())
}

/// Tests updating an unknown uid.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_uid() -> Result<(), AppError> {
    let test = TestBuilder::new().with_student_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let updated = repo
        .update(
            "missing",
            UpdateStudentParam {
                name: Some("Nobody".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}

/// Tests updating degrees to a value past the i32 column range.
///
/// Expected: Err(BadRequest) with the stored row untouched
#[tokio::test]
async fn rejects_degrees_beyond_column_range() -> Result<(), AppError> {
    let test = TestBuilder::new().with_student_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let result = repo
        .update(
            &student.uid,
            UpdateStudentParam {
                degrees: Some(u32::MAX),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let unchanged = repo.find_by_uid(&student.uid).await?.unwrap();
    assert_eq!(unchanged.degrees, 0);

    Ok(())
}
