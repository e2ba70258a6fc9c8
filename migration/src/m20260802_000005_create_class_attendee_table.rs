use sea_orm_migration::{prelude::*, schema::*};

use super::m20260802_000004_create_class_session_table::ClassSession;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClassAttendee::Table)
                    .if_not_exists()
                    .col(pk_auto(ClassAttendee::Id))
                    .col(string(ClassAttendee::ClassId))
                    // Weak reference to the student table: sessions survive
                    // student deletion and unknown uids are tolerated.
                    .col(string(ClassAttendee::StudentUid))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_class_attendee_class_id")
                            .from(ClassAttendee::Table, ClassAttendee::ClassId)
                            .to(ClassSession::Table, ClassSession::ClassId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClassAttendee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClassAttendee {
    Table,
    Id,
    ClassId,
    StudentUid,
}
