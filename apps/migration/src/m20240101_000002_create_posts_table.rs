use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_users_table::Users;

const FK_POSTS_AUTHOR: &str = "fk_posts_author_id";
const IDX_POSTS_SLUG_PUBLISH_DATE: &str = "idx_posts_slug_publish_date";
const IDX_POSTS_PUBLISH: &str = "idx_posts_publish";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(create_posts_table()).await?;

        // Slugs only need to be unique within one publish day.
        manager
            .create_index(
                Index::create()
                    .name(IDX_POSTS_SLUG_PUBLISH_DATE)
                    .table(Posts::Table)
                    .col(Posts::Slug)
                    .col(Posts::PublishDate)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Default ordering is `publish DESC`.
        manager
            .create_index(
                Index::create()
                    .name(IDX_POSTS_PUBLISH)
                    .table(Posts::Table)
                    .col(Posts::Publish)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await
    }
}

fn create_posts_table() -> TableCreateStatement {
    Table::create()
        .table(Posts::Table)
        .if_not_exists()
        .col(ColumnDef::new(Posts::Id).uuid().not_null().primary_key())
        .col(ColumnDef::new(Posts::Title).string_len(259).not_null())
        .col(ColumnDef::new(Posts::Slug).string_len(250).not_null())
        .col(ColumnDef::new(Posts::AuthorId).uuid().not_null())
        .col(ColumnDef::new(Posts::Body).text().not_null())
        .col(
            ColumnDef::new(Posts::Publish)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(ColumnDef::new(Posts::PublishDate).date().not_null())
        .col(
            ColumnDef::new(Posts::Created)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(Posts::Updated)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(Posts::Status)
                .string_len(10)
                .not_null()
                .default("draft"),
        )
        .foreign_key(
            ForeignKey::create()
                .name(FK_POSTS_AUTHOR)
                .from(Posts::Table, Posts::AuthorId)
                .to(Users::Table, Users::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .on_update(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[derive(Iden)]
enum Posts {
    Table,
    Id,
    Title,
    Slug,
    AuthorId,
    Body,
    Publish,
    PublishDate,
    Created,
    Updated,
    Status,
}
