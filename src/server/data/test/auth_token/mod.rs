use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::auth_token::AuthTokenRepository;

mod create;
mod find_user_uid;
