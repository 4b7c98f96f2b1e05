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
                    .table(Inquiry::Table)
                    .if_not_exists()
                    .col(pk_auto(Inquiry::Id))
                    .col(integer(Inquiry::PropertyId))
                    .col(integer_null(Inquiry::UserId))
                    .col(string(Inquiry::Name))
                    .col(string(Inquiry::Email))
                    .col(string(Inquiry::Phone))
                    .col(text(Inquiry::Message))
                    .col(string(Inquiry::InquiryType).default("general"))
                    .col(string(Inquiry::PreferredContactMethod).default("email"))
                    .col(string(Inquiry::PreferredContactTime).default("anytime"))
                    .col(string(Inquiry::Status).default("new"))
                    .col(text_null(Inquiry::ResponseMessage))
                    .col(timestamp_with_time_zone_null(Inquiry::RespondedAt))
                    .col(integer_null(Inquiry::RespondedBy))
                    .col(text_null(Inquiry::Notes))
                    .col(timestamp_with_time_zone(Inquiry::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Inquiry::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inquiry_property_id")
                            .from(Inquiry::Table, Inquiry::PropertyId)
                            .to(Property::Table, Property::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inquiry_user_id")
                            .from(Inquiry::Table, Inquiry::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_inquiry_property_id")
                    .table(Inquiry::Table)
                    .col(Inquiry::PropertyId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Inquiry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Inquiry {
    Table,
    Id,
    PropertyId,
    UserId,
    Name,
    Email,
    Phone,
    Message,
    InquiryType,
    PreferredContactMethod,
    PreferredContactTime,
    Status,
    ResponseMessage,
    RespondedAt,
    RespondedBy,
    Notes,
    CreatedAt,
    UpdatedAt,
}
