use super::*;

/// Tests creating a new student.
///
/// Expected: Ok with the student stored, zero presences, and empty history
#[tokio::test]
async fn creates_new_student() -> Result<(), AppError> {
    let test = TestBuilder::new().with_student_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo.create(create_param("student-1")).await?;

    assert_eq!(student.uid, "student-1");
    assert_eq!(student.name, "Maria Silva");
    assert_eq!(student.belt, Belt::Branca);
    assert_eq!(student.total_presences, 0);
    assert!(student.history_presences.is_empty());

    Ok(())
}

/// Tests re-creating an existing uid.
///
/// Verifies the upsert replaces profile fields while leaving the presence
/// counter untouched, so re-registration cannot erase progression.
///
/// Expected: Ok with the name updated and presences preserved
#[tokio::test]
async fn recreating_existing_uid_preserves_presences() -> Result<(), AppError> {
    let test = TestBuilder::new().with_student_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::student::StudentFactory::new(db)
        .uid("student-1")
        .total_presences(10)
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let student = repo.create(create_param("student-1")).await?;

    assert_eq!(student.name, "Maria Silva");
    assert_eq!(student.total_presences, 10);

    Ok(())
}

/// Tests creating a student with an age past the i32 column range.
///
/// Expected: Err(BadRequest) instead of a wrapped negative value in storage
#[tokio::test]
async fn rejects_age_beyond_column_range() {
    let test = TestBuilder::new().with_student_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut param = create_param("student-1");
    param.age = u32::MAX;

    let repo = StudentRepository::new(db);
    let result = repo.create(param).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}
