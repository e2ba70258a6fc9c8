use super::*;

/// Tests persisting progression counters.
///
/// Records a presence on the domain model and verifies the counters survive a
/// round trip while profile fields stay untouched.
///
/// Expected: Ok with counters persisted and name unchanged
#[tokio::test]
async fn persists_progression_counters() -> Result<(), AppError> {
    let test = TestBuilder::new().with_student_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::student::StudentFactory::new(db)
        .name("Paula")
        .total_presences(49)
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let mut student = repo.find_by_uid(&entity.uid).await?.unwrap();
    let date = Utc.with_ymd_and_hms(2026, 3, 2, 19, 0, 0).unwrap();
    let advanced = student.record_presence(date);
    repo.save_progress(&student).await?;

    assert!(advanced);
    let stored = repo.find_by_uid(&entity.uid).await?.unwrap();
    assert_eq!(stored.total_presences, 50);
    assert_eq!(stored.degrees, 1);
    assert_eq!(stored.last_presence_date, Some(date));
    assert_eq!(stored.name, "Paula");

    Ok(())
}
