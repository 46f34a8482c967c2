use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Announcement::Table)
                    .if_not_exists()
                    .col(pk_auto(Announcement::Id))
                    .col(text(Announcement::Body))
                    .col(integer_null(Announcement::CreatorId))
                    .col(timestamp(Announcement::EndDate))
                    .col(string(Announcement::ImageUrl))
                    .col(boolean(Announcement::IsDebug).default(false))
                    .col(string(Announcement::Link))
                    .col(timestamp(Announcement::StartDate))
                    .col(string(Announcement::Title))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_announcement_creator_id")
                            .from(Announcement::Table, Announcement::CreatorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Announcement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Announcement {
    Table,
    Id,
    Body,
    CreatorId,
    EndDate,
    ImageUrl,
    IsDebug,
    Link,
    StartDate,
    Title,
}
