use super::*;

/// Tests storing an issued token.
///
/// Expected: Ok with the token resolvable back to its uid
#[tokio::test]
async fn stores_issued_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AuthToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthTokenRepository::new(db);
    repo.create("abc123", "student-1").await?;

    let uid = repo.find_user_uid("abc123").await?;
    assert_eq!(uid.as_deref(), Some("student-1"));

    Ok(())
}
