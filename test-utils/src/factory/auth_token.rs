//! Auth token factory for creating issued bearer tokens in tests.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates an issued bearer token for a user.
///
/// The token value is `"token_{id}"` where id is auto-incremented.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_uid` - Uid of the student or teacher the token belongs to
///
/// # Returns
/// - `Ok(Model)` - The created token entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_auth_token(
    db: &DatabaseConnection,
    user_uid: &str,
) -> Result<entity::auth_token::Model, DbErr> {
    entity::auth_token::ActiveModel {
        token: ActiveValue::Set(format!("token_{}", next_id())),
        user_uid: ActiveValue::Set(user_uid.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
