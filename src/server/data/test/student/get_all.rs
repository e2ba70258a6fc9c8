use super::*;

/// Tests listing all students.
///
/// Verifies alphabetical ordering by name and that each student's history is
/// grouped onto the right record.
///
/// Expected: Ok with students ordered by name and correct history per student
#[tokio::test]
async fn lists_students_with_histories() -> Result<(), AppError> {
    let test = TestBuilder::new().with_student_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let bruno = factory::student::StudentFactory::new(db)
        .name("Bruno")
        .build()
        .await?;
    let ana = factory::student::StudentFactory::new(db)
        .name("Ana")
        .build()
        .await?;
    let date = Utc.with_ymd_and_hms(2026, 3, 2, 19, 0, 0).unwrap();
    factory::create_presence(db, &ana.uid, date).await?;

    let repo = StudentRepository::new(db);
    let students = repo.get_all().await?;

    assert_eq!(students.len(), 2);
    assert_eq!(students[0].uid, ana.uid);
    assert_eq!(students[1].uid, bruno.uid);
    assert_eq!(students[0].history_presences, vec![date]);
    assert!(students[1].history_presences.is_empty());

    Ok(())
}

/// Tests listing when no students exist.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_no_students() -> Result<(), AppError> {
    let test = TestBuilder::new().with_student_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let students = repo.get_all().await?;

    assert!(students.is_empty());

    Ok(())
}
