use super::*;

/// Tests resolving a factory-created token.
///
/// Expected: Ok(Some) with the owning uid
#[tokio::test]
async fn resolves_existing_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AuthToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let token = factory::create_auth_token(db, "teacher-1").await?;

    let repo = AuthTokenRepository::new(db);
    let uid = repo.find_user_uid(&token.token).await?;
    assert_eq!(uid.as_deref(), Some("teacher-1"));

    Ok(())
}

/// Tests resolving a token that was never issued.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AuthToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthTokenRepository::new(db);
    let uid = repo.find_user_uid("never-issued").await?;

    assert!(uid.is_none());

    Ok(())
}
