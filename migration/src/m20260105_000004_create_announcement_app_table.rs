use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000003_create_announcement_table::Announcement;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AnnouncementApp::Table)
                    .if_not_exists()
                    .col(integer(AnnouncementApp::AnnouncementId))
                    .col(string(AnnouncementApp::Slug))
                    .primary_key(
                        Index::create()
                            .col(AnnouncementApp::AnnouncementId)
                            .col(AnnouncementApp::Slug),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_announcement_app_announcement_id")
                            .from(AnnouncementApp::Table, AnnouncementApp::AnnouncementId)
                            .to(Announcement::Table, Announcement::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AnnouncementApp::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AnnouncementApp {
    Table,
    AnnouncementId,
    Slug,
}
