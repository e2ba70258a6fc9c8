use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::teacher::TeacherRepository, model::teacher::CreateTeacherParam};

mod find_by_uid;
mod upsert;
