use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_user_table::User, m20250301_000002_create_property_table::Property,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(integer(Favorite::UserId))
                    .col(integer(Favorite::PropertyId))
                    .col(timestamp_with_time_zone(Favorite::CreatedAt).default(Expr::current_timestamp()))
                    .primary_key(
                        Index::create()
                            .col(Favorite::UserId)
                            .col(Favorite::PropertyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_user_id")
                            .from(Favorite::Table, Favorite::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_property_id")
                            .from(Favorite::Table, Favorite::PropertyId)
                            .to(Property::Table, Property::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Favorite {
    Table,
    UserId,
    PropertyId,
    CreatedAt,
}
