use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string(User::Name))
                    .col(string_uniq(User::Email))
                    .col(string(User::PasswordHash))
                    .col(string_null(User::Phone))
                    .col(string_null(User::Avatar))
                    .col(string(User::Role).default("user"))
                    .col(string_null(User::Company))
                    .col(text_null(User::Bio))
                    .col(json_null(User::Address))
                    .col(json_null(User::SocialLinks))
                    .col(boolean(User::IsVerified).default(false))
                    .col(boolean(User::IsActive).default(true))
                    .col(timestamp_with_time_zone(User::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(User::UpdatedAt).default(Expr::current_timestamp()))
                    .col(string(User::NameLower))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_role")
                    .table(User::Table)
                    .col(User::Role)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Phone,
    Avatar,
    Role,
    Company,
    Bio,
    Address,
    SocialLinks,
    IsVerified,
    IsActive,
    CreatedAt,
    UpdatedAt,
    NameLower,
}
