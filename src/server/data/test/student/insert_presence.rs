use super::*;

/// Tests appending presence rows.
///
/// Two presences for the same student must both appear in the loaded history,
/// oldest first.
///
/// Expected: Ok with both rows in chronological order
#[tokio::test]
async fn appends_presence_rows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_student_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let first = Utc.with_ymd_and_hms(2026, 3, 2, 19, 0, 0).unwrap();
    let second = Utc.with_ymd_and_hms(2026, 3, 4, 19, 0, 0).unwrap();
    repo.insert_presence(&student.uid, first).await?;
    repo.insert_presence(&student.uid, second).await?;

    let found = repo.find_by_uid(&student.uid).await?.unwrap();
    assert_eq!(found.history_presences, vec![first, second]);

    Ok(())
}
