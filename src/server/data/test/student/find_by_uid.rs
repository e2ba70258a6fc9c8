use super::*;

/// Tests finding a student with their presence history.
///
/// Presences are inserted out of order; the repository must return them
/// oldest first.
///
/// Expected: Ok(Some) with history sorted ascending by date
#[tokio::test]
async fn finds_student_with_ordered_history() -> Result<(), AppError> {
    let test = TestBuilder::new().with_student_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let later = Utc.with_ymd_and_hms(2026, 3, 4, 19, 0, 0).unwrap();
    let earlier = Utc.with_ymd_and_hms(2026, 3, 2, 19, 0, 0).unwrap();
    factory::create_presence(db, &student.uid, later).await?;
    factory::create_presence(db, &student.uid, earlier).await?;

    let repo = StudentRepository::new(db);
    let found = repo.find_by_uid(&student.uid).await?.unwrap();

    assert_eq!(found.history_presences, vec![earlier, later]);

    Ok(())
}

/// Tests looking up an unknown uid.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_uid() -> Result<(), AppError> {
    let test = TestBuilder::new().with_student_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let found = repo.find_by_uid("missing").await?;

    assert!(found.is_none());

    Ok(())
}
