use super::*;

/// Tests finding a session created through the factory.
///
/// Expected: Ok(Some) with the attendee roster loaded
#[tokio::test]
async fn finds_session_with_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_attendance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let session = factory::class_session::ClassSessionFactory::new(db, "teacher-1")
        .attendee(&student.uid)
        .build()
        .await?;

    let repo = ClassSessionRepository::new(db);
    let found = repo.get_by_id(&session.class_id).await?.unwrap();

    assert_eq!(found.class_id, session.class_id);
    assert_eq!(found.attendee_uids, vec![student.uid]);

    Ok(())
}

/// Tests looking up an unknown class id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_class() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_attendance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClassSessionRepository::new(db);
    let found = repo.get_by_id("class_19700101_000000").await?;

    assert!(found.is_none());

    Ok(())
}
