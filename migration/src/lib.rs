pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_student_table;
mod m20260801_000002_create_teacher_table;
mod m20260801_000003_create_presence_table;
mod m20260802_000004_create_class_session_table;
mod m20260802_000005_create_class_attendee_table;
mod m20260803_000006_create_auth_token_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_student_table::Migration),
            Box::new(m20260801_000002_create_teacher_table::Migration),
            Box::new(m20260801_000003_create_presence_table::Migration),
            Box::new(m20260802_000004_create_class_session_table::Migration),
            Box::new(m20260802_000005_create_class_attendee_table::Migration),
            Box::new(m20260803_000006_create_auth_token_table::Migration),
        ]
    }
}
