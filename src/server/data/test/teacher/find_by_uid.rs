use super::*;

/// Tests finding a teacher by uid.
///
/// Expected: Ok(Some) for an existing teacher, Ok(None) for an unknown uid
#[tokio::test]
async fn finds_existing_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Teacher)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_teacher(db).await?;

    let repo = TeacherRepository::new(db);
    let found = repo.find_by_uid(&existing.uid).await?;
    assert_eq!(found.unwrap().uid, existing.uid);

    let missing = repo.find_by_uid("missing").await?;
    assert!(missing.is_none());

    Ok(())
}
