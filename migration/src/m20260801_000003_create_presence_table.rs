use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000001_create_student_table::Student;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Presence::Table)
                    .if_not_exists()
                    .col(pk_auto(Presence::Id))
                    .col(string(Presence::StudentUid))
                    .col(timestamp_with_time_zone(Presence::Date))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_presence_student_uid")
                            .from(Presence::Table, Presence::StudentUid)
                            .to(Student::Table, Student::Uid)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Presence::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Presence {
    Table,
    Id,
    StudentUid,
    Date,
}
