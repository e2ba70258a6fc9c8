use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(string(Student::Uid).primary_key())
                    .col(string(Student::Name))
                    .col(string(Student::Email))
                    .col(string(Student::Belt))
                    .col(integer(Student::Age))
                    .col(string(Student::Address))
                    .col(string(Student::Education))
                    .col(integer(Student::Degrees))
                    .col(date(Student::StartDate))
                    .col(string(Student::PhotoUrl))
                    .col(integer(Student::ExtraActivities))
                    .col(integer(Student::TotalPresences))
                    .col(timestamp_with_time_zone_null(Student::LastPresenceDate))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Uid,
    Name,
    Email,
    Belt,
    Age,
    Address,
    Education,
    Degrees,
    StartDate,
    PhotoUrl,
    ExtraActivities,
    TotalPresences,
    LastPresenceDate,
}
