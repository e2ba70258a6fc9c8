use super::*;

/// Tests recording a session with a duplicated attendee.
///
/// A uid listed twice means a double marking; both rows must be stored.
///
/// Expected: Ok with three attendee rows including the duplicate
#[tokio::test]
async fn stores_session_with_duplicate_attendees() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_attendance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let date = Utc.with_ymd_and_hms(2026, 3, 2, 19, 0, 0).unwrap();
    let session = ClassSession {
        class_id: ClassSession::id_for(date),
        date,
        instructor_uid: "teacher-1".to_string(),
        attendee_uids: vec![
            "student-1".to_string(),
            "student-1".to_string(),
            "student-2".to_string(),
        ],
    };

    let repo = ClassSessionRepository::new(db);
    repo.create(&session).await?;

    let stored = repo.get_by_id(&session.class_id).await?.unwrap();
    assert_eq!(stored.attendee_uids.len(), 3);
    assert_eq!(stored.instructor_uid, "teacher-1");

    Ok(())
}

/// Tests recording the same class id twice.
///
/// A second marking within the same second reuses the session row and extends
/// its roster.
///
/// Expected: Ok with attendees from both markings
#[tokio::test]
async fn second_marking_extends_existing_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_attendance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let date = Utc.with_ymd_and_hms(2026, 3, 2, 19, 0, 0).unwrap();
    let repo = ClassSessionRepository::new(db);

    let mut session = ClassSession {
        class_id: ClassSession::id_for(date),
        date,
        instructor_uid: "teacher-1".to_string(),
        attendee_uids: vec!["student-1".to_string()],
    };
    repo.create(&session).await?;

    session.attendee_uids = vec!["student-2".to_string()];
    repo.create(&session).await?;

    let stored = repo.get_by_id(&session.class_id).await?.unwrap();
    assert_eq!(stored.attendee_uids.len(), 2);

    Ok(())
}
