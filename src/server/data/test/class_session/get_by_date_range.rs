use super::*;

/// Tests the date range query.
///
/// Three sessions on different days; the range covers the first two
/// inclusively and must return them oldest first.
///
/// Expected: Ok with two sessions in chronological order
#[tokio::test]
async fn filters_inclusive_range_ordered() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_attendance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let day1 = Utc.with_ymd_and_hms(2026, 3, 1, 19, 0, 0).unwrap();
    let day2 = Utc.with_ymd_and_hms(2026, 3, 2, 19, 0, 0).unwrap();
    let day3 = Utc.with_ymd_and_hms(2026, 3, 3, 19, 0, 0).unwrap();

    for date in [day2, day1, day3] {
        factory::class_session::ClassSessionFactory::new(db, "teacher-1")
            .class_id(ClassSession::id_for(date))
            .date(date)
            .build()
            .await?;
    }

    let repo = ClassSessionRepository::new(db);
    let sessions = repo.get_by_date_range(day1, day2).await?;

    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].date, day1);
    assert_eq!(sessions[1].date, day2);

    Ok(())
}

/// Tests a range with no sessions.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_uncovered_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_attendance_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClassSessionRepository::new(db);
    let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2020, 12, 31, 23, 59, 59).unwrap();
    let sessions = repo.get_by_date_range(start, end).await?;

    assert!(sessions.is_empty());

    Ok(())
}
