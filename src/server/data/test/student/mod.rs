use chrono::{NaiveDate, TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::student::Belt,
    server::{
        data::student::StudentRepository,
        error::AppError,
        model::student::{CreateStudentParam, UpdateStudentParam},
    },
};

mod create;
mod find_by_uid;
mod get_all;
mod insert_presence;
mod save_progress;
mod update;

fn create_param(uid: &str) -> CreateStudentParam {
    CreateStudentParam {
        uid: uid.to_string(),
        name: "Maria Silva".to_string(),
        email: "maria@example.com".to_string(),
        belt: Belt::Branca,
        age: 24,
        address: String::new(),
        education: String::new(),
        degrees: 0,
        start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        photo_url: String::new(),
        extra_activities: 0,
    }
}
