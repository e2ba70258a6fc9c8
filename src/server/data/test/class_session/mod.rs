use chrono::{TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::class_session::ClassSessionRepository, model::class_session::ClassSession,
};

mod create;
mod get_by_date_range;
mod get_by_id;
