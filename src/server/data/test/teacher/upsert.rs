use super::*;

/// Tests creating a new teacher.
///
/// Expected: Ok with the teacher stored
#[tokio::test]
async fn creates_new_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Teacher)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeacherRepository::new(db);
    let teacher = repo
        .upsert(CreateTeacherParam {
            uid: "teacher-1".to_string(),
            name: "Professor Souza".to_string(),
            email: "souza@example.com".to_string(),
        })
        .await?;

    assert_eq!(teacher.uid, "teacher-1");
    assert_eq!(teacher.name, "Professor Souza");

    Ok(())
}

/// Tests re-registering an existing teacher.
///
/// Expected: Ok with name and email refreshed instead of a conflict error
#[tokio::test]
async fn updates_existing_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Teacher)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_teacher(db).await?;

    let repo = TeacherRepository::new(db);
    let teacher = repo
        .upsert(CreateTeacherParam {
            uid: existing.uid.clone(),
            name: "New Name".to_string(),
            email: "new@example.com".to_string(),
        })
        .await?;

    assert_eq!(teacher.uid, existing.uid);
    assert_eq!(teacher.name, "New Name");
    assert_eq!(teacher.email, "new@example.com");

    Ok(())
}
