//! Bearer token data repository.
//!
//! Tokens are opaque random strings issued at registration and looked up on
//! every authenticated request.

use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Repository providing database operations for issued bearer tokens.
pub struct AuthTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthTokenRepository<'a> {
    /// Creates a new AuthTokenRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a newly issued token for a user.
    ///
    /// # Returns
    /// - `Ok(())` - Token stored
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, token: &str, user_uid: &str) -> Result<(), DbErr> {
        entity::prelude::AuthToken::insert(entity::auth_token::ActiveModel {
            token: ActiveValue::Set(token.to_string()),
            user_uid: ActiveValue::Set(user_uid.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .exec(self.db)
        .await?;
        Ok(())
    }

    /// Resolves a token to the uid it was issued for.
    ///
    /// # Returns
    /// - `Ok(Some(String))` - The uid the token belongs to
    /// - `Ok(None)` - Token was never issued
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_user_uid(&self, token: &str) -> Result<Option<String>, DbErr> {
        let entity = entity::prelude::AuthToken::find_by_id(token)
            .one(self.db)
            .await?;

        Ok(entity.map(|t| t.user_uid))
    }
}
